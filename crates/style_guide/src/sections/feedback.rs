use std::time::Duration;

use guide_ui::prelude::*;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

/// How long a toast stays on screen before dismissing itself.
pub(crate) const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone)]
struct ToastEntry {
    id: u32,
    tone: AlertTone,
    message: &'static str,
}

fn toast_copy(tone: AlertTone) -> &'static str {
    match tone {
        AlertTone::Success => "Success! Your changes have been saved.",
        AlertTone::Danger => "Error! Something went wrong. Please try again.",
        AlertTone::Warning => "Warning! Please review your input.",
        AlertTone::Info => "Info: new features are now available.",
    }
}

#[component]
/// Alerts, toasts, progress, tooltips, and status badge boards.
pub fn FeedbackSection() -> impl IntoView {
    let toasts = create_rw_signal(Vec::<ToastEntry>::new());
    let next_toast_id = store_value(0u32);
    let pending_dismissals = store_value(Vec::<TimeoutHandle>::new());

    // Dropping the section must also drop every scheduled dismissal.
    on_cleanup(move || {
        pending_dismissals.update_value(|handles| {
            for handle in handles.drain(..) {
                handle.clear();
            }
        });
    });

    let push_toast = move |tone: AlertTone| {
        let id = next_toast_id.get_value();
        next_toast_id.set_value(id.wrapping_add(1));
        toasts.update(|entries| {
            entries.push(ToastEntry {
                id,
                tone,
                message: toast_copy(tone),
            });
        });

        match set_timeout_with_handle(
            move || toasts.update(|entries| entries.retain(|entry| entry.id != id)),
            TOAST_DURATION,
        ) {
            Ok(handle) => pending_dismissals.update_value(|handles| handles.push(handle)),
            Err(err) => logging::warn!("toast dismissal timer failed: {err:?}"),
        }
    };

    let toast_button = move |label: &'static str, tone: AlertTone| {
        view! {
            <Button
                variant=ButtonVariant::Outline
                layout_class="guide-fill"
                on_click=Callback::new(move |_| push_toast(tone))
            >
                {label}
            </Button>
        }
    };

    view! {
        <Section id="feedback" title="Feedback & Status">
            <Stack gap=LayoutGap::Md>
                <Card>
                    <CardHeader>
                        <CardTitle>"Alert Components"</CardTitle>
                        <CardDescription>
                            "Different alert types for various notification scenarios"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Stack gap=LayoutGap::Sm>
                            <Alert tone=AlertTone::Info title="Information">
                                "This is an informational alert. It provides helpful context \
                                 or additional details."
                            </Alert>
                            <Alert tone=AlertTone::Success title="Success">
                                "Your account has been created successfully. You can now \
                                 start using the application."
                            </Alert>
                            <Alert tone=AlertTone::Warning title="Warning">
                                "Please review your settings. Some configurations may need \
                                 your attention."
                            </Alert>
                            <Alert tone=AlertTone::Danger title="Error">
                                "Unable to process your request. Please check your \
                                 connection and try again."
                            </Alert>
                        </Stack>
                    </CardContent>
                </Card>

                <Grid columns=2 gap=LayoutGap::Md>
                    <Card>
                        <CardHeader>
                            <CardTitle>"Toast Notifications"</CardTitle>
                            <CardDescription>
                                "Temporary notifications that appear and disappear automatically"
                            </CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Sm>
                                <Grid columns=2 gap=LayoutGap::Sm>
                                    {toast_button("Success Toast", AlertTone::Success)}
                                    {toast_button("Error Toast", AlertTone::Danger)}
                                    {toast_button("Warning Toast", AlertTone::Warning)}
                                    {toast_button("Info Toast", AlertTone::Info)}
                                </Grid>
                                <Text role=TextRole::Caption tone=TextTone::Muted>
                                    "Click any button above to see toast notifications in \
                                     action. They appear in the bottom-right corner of the \
                                     screen."
                                </Text>
                            </Stack>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle>"Progress Indicators"</CardTitle>
                            <CardDescription>"Show completion status and loading states"</CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Md>
                                <Stack gap=LayoutGap::Xs>
                                    <Cluster justify=LayoutJustify::Between>
                                        <Text role=TextRole::Caption>"File Upload"</Text>
                                        <Text role=TextRole::Caption>"75%"</Text>
                                    </Cluster>
                                    <ProgressBar max=100 value=75 />
                                </Stack>
                                <Stack gap=LayoutGap::Xs>
                                    <Cluster justify=LayoutJustify::Between>
                                        <Text role=TextRole::Caption>"Profile Completion"</Text>
                                        <Badge tone=StatusTone::Success>"Complete"</Badge>
                                    </Cluster>
                                    <ProgressBar max=100 value=100 />
                                </Stack>
                                <Stack gap=LayoutGap::Xs>
                                    <Cluster justify=LayoutJustify::Between>
                                        <Text role=TextRole::Caption>"Project Setup"</Text>
                                        <Text role=TextRole::Caption>"30%"</Text>
                                    </Cluster>
                                    <ProgressBar max=100 value=30 />
                                </Stack>
                                <Stack gap=LayoutGap::Xs>
                                    <Cluster justify=LayoutJustify::Between>
                                        <Text role=TextRole::Caption>"Loading..."</Text>
                                        <Spinner size=IconSize::Sm />
                                    </Cluster>
                                    <Skeleton layout_class="guide-skeleton-line" />
                                    <Skeleton layout_class="guide-skeleton-short" />
                                </Stack>
                            </Stack>
                        </CardContent>
                    </Card>
                </Grid>

                <Card>
                    <CardHeader>
                        <CardTitle>"Interactive Help Elements"</CardTitle>
                        <CardDescription>
                            "Tooltips and hover cards for contextual information"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Stack gap=LayoutGap::Lg>
                            <Stack gap=LayoutGap::Sm>
                                <Heading level=HeadingLevel::H4>"Tooltips"</Heading>
                                <Cluster gap=LayoutGap::Sm>
                                    <Tooltip tip="This is a helpful tooltip with additional information.">
                                        <Button variant=ButtonVariant::Outline leading_icon=IconName::HelpCircle>
                                            "Hover for help"
                                        </Button>
                                    </Tooltip>
                                    <Tooltip tip="Notifications (3 unread)">
                                        <IconButton
                                            icon=IconName::Bell
                                            variant=ButtonVariant::Ghost
                                            aria_label="Notifications"
                                        />
                                    </Tooltip>
                                    <Tooltip tip="This feature is currently in beta testing">
                                        <Badge variant=BadgeVariant::Outline>"Beta Feature"</Badge>
                                    </Tooltip>
                                </Cluster>
                            </Stack>

                            <Stack gap=LayoutGap::Sm>
                                <Heading level=HeadingLevel::H4>"Hover Cards"</Heading>
                                <Cluster gap=LayoutGap::Sm>
                                    <HoverCard trigger="@johndoe">
                                        <Stack gap=LayoutGap::Xs>
                                            <Heading level=HeadingLevel::H4>"John Doe"</Heading>
                                            <Text role=TextRole::Caption tone=TextTone::Muted>
                                                "Senior Developer at Acme Inc. Passionate about \
                                                 building great user experiences."
                                            </Text>
                                            <Cluster gap=LayoutGap::Xs>
                                                <Icon icon=IconName::Calendar size=IconSize::Sm />
                                                <Text role=TextRole::Caption tone=TextTone::Muted>
                                                    "Joined December 2021"
                                                </Text>
                                            </Cluster>
                                        </Stack>
                                    </HoverCard>
                                    <HoverCard trigger="Design Conference">
                                        <Stack gap=LayoutGap::Xs>
                                            <Heading level=HeadingLevel::H4>"Design Conference"</Heading>
                                            <Text role=TextRole::Caption tone=TextTone::Muted>
                                                "The premier event for designers and developers \
                                                 to connect, learn, and be inspired."
                                            </Text>
                                            <Cluster gap=LayoutGap::Xs>
                                                <Icon icon=IconName::Calendar size=IconSize::Sm />
                                                <Text role=TextRole::Caption tone=TextTone::Muted>"March 15-17"</Text>
                                            </Cluster>
                                            <Cluster gap=LayoutGap::Xs>
                                                <Icon icon=IconName::MapPin size=IconSize::Sm />
                                                <Text role=TextRole::Caption tone=TextTone::Muted>
                                                    "San Francisco, CA"
                                                </Text>
                                            </Cluster>
                                            <Button size=ButtonSize::Sm leading_icon=IconName::ExternalLink>
                                                "Learn More"
                                            </Button>
                                        </Stack>
                                    </HoverCard>
                                </Cluster>
                            </Stack>
                        </Stack>
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle>"Status Badges"</CardTitle>
                        <CardDescription>
                            "Visual indicators for different states and conditions"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Grid columns=2 gap=LayoutGap::Lg>
                            <Stack gap=LayoutGap::Sm>
                                <Heading level=HeadingLevel::H4>"System Status"</Heading>
                                <Cluster justify=LayoutJustify::Between>
                                    <Text role=TextRole::Caption>"API Status"</Text>
                                    <Badge tone=StatusTone::Success>"Operational"</Badge>
                                </Cluster>
                                <Cluster justify=LayoutJustify::Between>
                                    <Text role=TextRole::Caption>"Database"</Text>
                                    <Badge tone=StatusTone::Success>"Healthy"</Badge>
                                </Cluster>
                                <Cluster justify=LayoutJustify::Between>
                                    <Text role=TextRole::Caption>"CDN"</Text>
                                    <Badge tone=StatusTone::Warning>"Degraded"</Badge>
                                </Cluster>
                                <Cluster justify=LayoutJustify::Between>
                                    <Text role=TextRole::Caption>"Backup System"</Text>
                                    <Badge tone=StatusTone::Danger>"Down"</Badge>
                                </Cluster>
                            </Stack>
                            <Stack gap=LayoutGap::Sm>
                                <Heading level=HeadingLevel::H4>"User Status"</Heading>
                                <Cluster justify=LayoutJustify::Between>
                                    <Text role=TextRole::Caption>"Account Status"</Text>
                                    <Badge>"Active"</Badge>
                                </Cluster>
                                <Cluster justify=LayoutJustify::Between>
                                    <Text role=TextRole::Caption>"Subscription"</Text>
                                    <Badge tone=StatusTone::Accent>"Pro Plan"</Badge>
                                </Cluster>
                                <Cluster justify=LayoutJustify::Between>
                                    <Text role=TextRole::Caption>"Email Verification"</Text>
                                    <Badge tone=StatusTone::Success>"Verified"</Badge>
                                </Cluster>
                                <Cluster justify=LayoutJustify::Between>
                                    <Text role=TextRole::Caption>"Two-Factor Auth"</Text>
                                    <Badge variant=BadgeVariant::Outline>"Not Enabled"</Badge>
                                </Cluster>
                            </Stack>
                        </Grid>
                    </CardContent>
                </Card>
            </Stack>

            <ToastShelf>
                <For each=move || toasts.get() key=|entry| entry.id let:entry>
                    {
                        let id = entry.id;
                        view! {
                            <ToastItem
                                tone=entry.tone
                                message=entry.message
                                on_dismiss=Callback::new(move |_| {
                                    toasts.update(|entries| entries.retain(|entry| entry.id != id));
                                })
                            />
                        }
                    }
                </For>
            </ToastShelf>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toasts_dismiss_after_four_seconds() {
        assert_eq!(TOAST_DURATION, Duration::from_secs(4));
    }

    #[test]
    fn toast_copy_is_tone_specific() {
        assert!(toast_copy(AlertTone::Success).starts_with("Success"));
        assert!(toast_copy(AlertTone::Danger).starts_with("Error"));
        assert!(toast_copy(AlertTone::Warning).starts_with("Warning"));
        assert!(toast_copy(AlertTone::Info).starts_with("Info"));
    }
}
