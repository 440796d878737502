use std::time::Duration;

use guide_ui::prelude::*;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

/// Fixed length of the simulated processing run.
pub(crate) const PROCESSING_DURATION: Duration = Duration::from_secs(3);
/// Cadence of the presence-dot pulse demo.
pub(crate) const PULSE_INTERVAL: Duration = Duration::from_secs(2);

#[component]
fn IndicatorRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <Cluster gap=LayoutGap::Sm>
            {children()}
            <Text role=TextRole::Caption>{label}</Text>
        </Cluster>
    }
}

#[component]
fn ConnectionRow(
    label: &'static str,
    badge: &'static str,
    tone: StatusTone,
    children: Children,
) -> impl IntoView {
    view! {
        <Cluster justify=LayoutJustify::Between>
            <Cluster gap=LayoutGap::Sm>
                {children()}
                <Text role=TextRole::Caption>{label}</Text>
            </Cluster>
            <Badge tone=tone>{badge}</Badge>
        </Cluster>
    }
}

#[component]
fn GuidelineColumn(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Sm>
            <Heading level=HeadingLevel::H4>{title}</Heading>
            <ul class="guide-bullets">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </Stack>
    }
}

#[component]
/// Animated and static state indicators plus the interactive processing demo.
pub fn StatusIndicatorsSection() -> impl IntoView {
    let processing = create_rw_signal(false);
    let pulse = create_rw_signal(true);
    let pending_reset = store_value(None::<TimeoutHandle>);

    // The pulse flips on a fixed cadence for the whole life of the section.
    match set_interval_with_handle(
        move || pulse.update(|value| *value = !*value),
        PULSE_INTERVAL,
    ) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("pulse interval failed: {err:?}"),
    }

    // Tearing the section down must cancel an in-flight processing reset so
    // the callback never fires against a dead view.
    on_cleanup(move || {
        if let Some(handle) = pending_reset.get_value() {
            handle.clear();
        }
    });

    let start_processing = move |_| {
        if processing.get_untracked() {
            return;
        }
        processing.set(true);
        if let Some(previous) = pending_reset.get_value() {
            previous.clear();
        }
        match set_timeout_with_handle(
            move || {
                processing.set(false);
                pending_reset.set_value(None);
            },
            PROCESSING_DURATION,
        ) {
            Ok(handle) => pending_reset.set_value(Some(handle)),
            Err(err) => {
                processing.set(false);
                logging::warn!("processing reset timer failed: {err:?}");
            }
        }
    };

    view! {
        <Section id="status-indicators" title="Status Indicators">
            <Stack gap=LayoutGap::Md>
                <Card>
                    <CardHeader>
                        <CardTitle>"Processing States"</CardTitle>
                        <CardDescription>
                            "Animated and static indicators for busy, waiting, and ready states"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Stack gap=LayoutGap::Lg>
                            <Grid columns=2 gap=LayoutGap::Lg>
                                <Stack gap=LayoutGap::Sm>
                                    <Cluster gap=LayoutGap::Xs>
                                        <Icon icon=IconName::Zap size=IconSize::Sm />
                                        <Heading level=HeadingLevel::H4>"Animated (Processing)"</Heading>
                                    </Cluster>
                                    <IndicatorRow label="Thinking...">
                                        <Spinner size=IconSize::Sm />
                                    </IndicatorRow>
                                    <IndicatorRow label="Processing request...">
                                        <span class="guide-bounce-dots" aria-hidden="true">
                                            <span></span>
                                            <span></span>
                                            <span></span>
                                        </span>
                                    </IndicatorRow>
                                    <IndicatorRow label="Generating response...">
                                        <Icon icon=IconName::Refresh size=IconSize::Sm spin=true />
                                    </IndicatorRow>
                                    <IndicatorRow label="Connecting...">
                                        <span class="guide-ping" aria-hidden="true">
                                            <Icon icon=IconName::CircleDot size=IconSize::Sm />
                                        </span>
                                    </IndicatorRow>
                                    <IndicatorRow label="Audio processing...">
                                        <span class="guide-level-bars" aria-hidden="true">
                                            <span></span>
                                            <span></span>
                                            <span></span>
                                            <span></span>
                                        </span>
                                    </IndicatorRow>
                                    <IndicatorRow label="Waiting for response...">
                                        <Icon icon=IconName::MoreHorizontal size=IconSize::Sm />
                                    </IndicatorRow>
                                </Stack>

                                <Stack gap=LayoutGap::Sm>
                                    <Cluster gap=LayoutGap::Xs>
                                        <Icon icon=IconName::Circle size=IconSize::Sm />
                                        <Heading level=HeadingLevel::H4>"Static (Ready/Status)"</Heading>
                                    </Cluster>
                                    <IndicatorRow label="Ready for input">
                                        <Text tone=TextTone::Success>
                                            <Icon icon=IconName::CheckCircle size=IconSize::Sm />
                                        </Text>
                                    </IndicatorRow>
                                    <IndicatorRow label="Idle">
                                        <Text tone=TextTone::Muted>
                                            <Icon icon=IconName::Circle size=IconSize::Sm />
                                        </Text>
                                    </IndicatorRow>
                                    <IndicatorRow label="Error occurred">
                                        <Text tone=TextTone::Danger>
                                            <Icon icon=IconName::XCircle size=IconSize::Sm />
                                        </Text>
                                    </IndicatorRow>
                                    <IndicatorRow label="Warning state">
                                        <Text tone=TextTone::Warning>
                                            <Icon icon=IconName::AlertTriangle size=IconSize::Sm />
                                        </Text>
                                    </IndicatorRow>
                                    <IndicatorRow label="Rate limited">
                                        <Text tone=TextTone::Accent>
                                            <Icon icon=IconName::Clock size=IconSize::Sm />
                                        </Text>
                                    </IndicatorRow>
                                    <IndicatorRow label="Paused">
                                        <Text tone=TextTone::Muted>
                                            <Icon icon=IconName::Pause size=IconSize::Sm />
                                        </Text>
                                    </IndicatorRow>
                                </Stack>
                            </Grid>

                            <div class="guide-demo-panel" data-ui-slot="demo">
                                <Cluster justify=LayoutJustify::Between>
                                    <Heading level=HeadingLevel::H4>"Interactive Demo"</Heading>
                                    <Button
                                        size=ButtonSize::Sm
                                        disabled=processing
                                        on_click=Callback::new(start_processing)
                                    >
                                        {move || if processing.get() {
                                            view! {
                                                <Spinner size=IconSize::Sm />
                                                "Processing..."
                                            }
                                            .into_view()
                                        } else {
                                            view! {
                                                <Icon icon=IconName::Play size=IconSize::Sm />
                                                "Start Processing"
                                            }
                                            .into_view()
                                        }}
                                    </Button>
                                </Cluster>
                                <Text role=TextRole::Caption tone=TextTone::Muted>
                                    "Click the button to see a simulated processing state \
                                     transition."
                                </Text>
                            </div>
                        </Stack>
                    </CardContent>
                </Card>

                <Grid columns=2 gap=LayoutGap::Md>
                    <Card>
                        <CardHeader>
                            <CardTitle>"Connection Status"</CardTitle>
                            <CardDescription>
                                "Network and service connectivity indicators"
                            </CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Sm>
                                <ConnectionRow label="Connected" badge="Online" tone=StatusTone::Success>
                                    <Text tone=TextTone::Success>
                                        <Icon icon=IconName::Wifi size=IconSize::Sm />
                                    </Text>
                                </ConnectionRow>
                                <ConnectionRow label="Disconnected" badge="Offline" tone=StatusTone::Danger>
                                    <Text tone=TextTone::Danger>
                                        <Icon icon=IconName::WifiOff size=IconSize::Sm />
                                    </Text>
                                </ConnectionRow>
                                <ConnectionRow label="Reconnecting" badge="Unstable" tone=StatusTone::Warning>
                                    <Text tone=TextTone::Warning>
                                        <Icon icon=IconName::Wifi size=IconSize::Sm />
                                    </Text>
                                </ConnectionRow>
                                <ConnectionRow label="Signal Strength" badge="3/5" tone=StatusTone::Neutral>
                                    <span class="guide-signal-bars" aria-hidden="true">
                                        <span data-ui-selected="true"></span>
                                        <span data-ui-selected="true"></span>
                                        <span data-ui-selected="true"></span>
                                        <span data-ui-selected="false"></span>
                                        <span data-ui-selected="false"></span>
                                    </span>
                                </ConnectionRow>
                            </Stack>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle>"Activity Indicators"</CardTitle>
                            <CardDescription>"User presence and activity status"</CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Sm>
                                <IndicatorRow label="Active">
                                    <StatusDot tone=StatusTone::Success pulse=pulse />
                                </IndicatorRow>
                                <IndicatorRow label="Away">
                                    <StatusDot tone=StatusTone::Warning />
                                </IndicatorRow>
                                <IndicatorRow label="Busy">
                                    <StatusDot tone=StatusTone::Danger />
                                </IndicatorRow>
                                <IndicatorRow label="Offline">
                                    <StatusDot tone=StatusTone::Neutral />
                                </IndicatorRow>
                                <IndicatorRow label="Do Not Disturb">
                                    <StatusDot tone=StatusTone::Info />
                                </IndicatorRow>
                                <IndicatorRow label="Invisible">
                                    <StatusDot tone=StatusTone::Neutral hollow=true />
                                </IndicatorRow>
                            </Stack>
                        </CardContent>
                    </Card>
                </Grid>

                <Card>
                    <CardHeader>
                        <CardTitle>"Usage Guidelines"</CardTitle>
                        <CardDescription>
                            "Best practices for implementing status indicators"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Grid columns=2 gap=LayoutGap::Lg>
                            <GuidelineColumn
                                title="Animation Guidelines"
                                items={&[
                                    "Use animations sparingly, only for important state changes",
                                    "Keep animations subtle and non-distracting",
                                    "Prefer CSS animations over script-driven ones",
                                    "Respect user preferences for reduced motion",
                                    "Use consistent timing and easing across similar animations",
                                ]}
                            />
                            <GuidelineColumn
                                title="Color & Accessibility"
                                items={&[
                                    "Do not rely solely on color to convey status",
                                    "Include text labels or icons alongside color indicators",
                                    "Ensure sufficient contrast for status colors",
                                    "Use semantic colors consistently",
                                    "Test with colorblind users or simulation tools",
                                ]}
                            />
                            <GuidelineColumn
                                title="Busy-State Patterns"
                                items={&[
                                    "Show a processing state immediately upon user action",
                                    "Provide estimated time for longer operations",
                                    "Use different animations for different kinds of work",
                                    "Make it clear when the surface is ready for new input",
                                    "Show connection status for remote services",
                                ]}
                            />
                            <GuidelineColumn
                                title="Performance"
                                items={&[
                                    "Pause animations when not visible to save battery",
                                    "Animate transform and opacity for smoother results",
                                    "Avoid animating layout properties",
                                    "Limit concurrent animations on the same page",
                                ]}
                            />
                        </Grid>
                    </CardContent>
                </Card>
            </Stack>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn processing_demo_runs_for_three_seconds() {
        assert_eq!(PROCESSING_DURATION, Duration::from_secs(3));
    }

    #[test]
    fn pulse_flips_every_two_seconds() {
        assert_eq!(PULSE_INTERVAL, Duration::from_secs(2));
        assert!(PULSE_INTERVAL < PROCESSING_DURATION);
    }
}
