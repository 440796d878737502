use guide_ui::prelude::*;
use leptos::*;

#[component]
fn GuidelineList(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
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
/// Button variants, badges, and toggle controls.
pub fn ButtonsSection() -> impl IntoView {
    let bold = create_rw_signal(false);
    let italic = create_rw_signal(false);
    let group_bold = create_rw_signal(true);
    let group_italic = create_rw_signal(false);
    let group_underline = create_rw_signal(false);

    view! {
        <Section id="buttons" title="Buttons & Interactive Elements">
            <Stack gap=LayoutGap::Md>
                <Card>
                    <CardHeader>
                        <CardTitle>"Button Variants"</CardTitle>
                        <CardDescription>
                            "Different button styles for various use cases and hierarchies"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Stack gap=LayoutGap::Lg>
                            <Stack gap=LayoutGap::Sm>
                                <Heading level=HeadingLevel::H4>"Primary Actions"</Heading>
                                <Cluster gap=LayoutGap::Sm>
                                    <Button>"Default"</Button>
                                    <Button size=ButtonSize::Sm>"Small"</Button>
                                    <Button size=ButtonSize::Lg>"Large"</Button>
                                    <Button disabled=true>"Disabled"</Button>
                                    <Button leading_icon=IconName::Download>"With Icon"</Button>
                                </Cluster>
                            </Stack>

                            <Stack gap=LayoutGap::Sm>
                                <Heading level=HeadingLevel::H4>"Secondary Actions"</Heading>
                                <Cluster gap=LayoutGap::Sm>
                                    <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                                    <Button variant=ButtonVariant::Outline>"Outline"</Button>
                                    <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
                                    <Button variant=ButtonVariant::Link>"Link"</Button>
                                </Cluster>
                            </Stack>

                            <Stack gap=LayoutGap::Sm>
                                <Heading level=HeadingLevel::H4>"Destructive Actions"</Heading>
                                <Cluster gap=LayoutGap::Sm>
                                    <Button variant=ButtonVariant::Destructive>"Delete"</Button>
                                    <Button variant=ButtonVariant::Outline>"Cancel Subscription"</Button>
                                </Cluster>
                            </Stack>

                            <Stack gap=LayoutGap::Sm>
                                <Heading level=HeadingLevel::H4>"Icon Buttons"</Heading>
                                <Cluster gap=LayoutGap::Sm>
                                    <IconButton icon=IconName::Heart variant=ButtonVariant::Primary aria_label="Favorite" />
                                    <IconButton icon=IconName::Settings aria_label="Settings" />
                                    <IconButton icon=IconName::Download variant=ButtonVariant::Ghost aria_label="Download" />
                                </Cluster>
                            </Stack>
                        </Stack>
                    </CardContent>
                </Card>

                <Grid columns=2 gap=LayoutGap::Md>
                    <Card>
                        <CardHeader>
                            <CardTitle>"Badges"</CardTitle>
                            <CardDescription>"Status indicators and labels"</CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Md>
                                <Stack gap=LayoutGap::Sm>
                                    <Heading level=HeadingLevel::H4>"Variants"</Heading>
                                    <Cluster gap=LayoutGap::Xs>
                                        <Badge>"Default"</Badge>
                                        <Badge variant=BadgeVariant::Secondary>"Secondary"</Badge>
                                        <Badge variant=BadgeVariant::Destructive>"Error"</Badge>
                                        <Badge variant=BadgeVariant::Outline>"Outline"</Badge>
                                    </Cluster>
                                </Stack>
                                <Stack gap=LayoutGap::Sm>
                                    <Heading level=HeadingLevel::H4>"Use Cases"</Heading>
                                    <Cluster gap=LayoutGap::Xs>
                                        <Badge tone=StatusTone::Success>"Active"</Badge>
                                        <Badge tone=StatusTone::Warning>"Pending"</Badge>
                                        <Badge tone=StatusTone::Info>"New"</Badge>
                                    </Cluster>
                                </Stack>
                            </Stack>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle>"Toggle Controls"</CardTitle>
                            <CardDescription>"Single and grouped toggle buttons"</CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Md>
                                <Stack gap=LayoutGap::Sm>
                                    <Heading level=HeadingLevel::H4>"Single Toggle"</Heading>
                                    <Cluster gap=LayoutGap::Xs>
                                        <ToggleChip
                                            aria_label="Toggle bold"
                                            pressed=bold
                                            on_click=Callback::new(move |_| bold.update(|value| *value = !*value))
                                        >
                                            <Icon icon=IconName::Bold size=IconSize::Sm />
                                        </ToggleChip>
                                        <ToggleChip
                                            aria_label="Toggle italic"
                                            pressed=italic
                                            on_click=Callback::new(move |_| italic.update(|value| *value = !*value))
                                        >
                                            <Icon icon=IconName::Italic size=IconSize::Sm />
                                        </ToggleChip>
                                    </Cluster>
                                </Stack>
                                <Stack gap=LayoutGap::Sm>
                                    <Heading level=HeadingLevel::H4>"Toggle Group"</Heading>
                                    <Cluster gap=LayoutGap::None layout_class="guide-toggle-group">
                                        <ToggleChip
                                            aria_label="Toggle bold"
                                            pressed=group_bold
                                            on_click=Callback::new(move |_| group_bold.update(|value| *value = !*value))
                                        >
                                            <Icon icon=IconName::Bold size=IconSize::Sm />
                                        </ToggleChip>
                                        <ToggleChip
                                            aria_label="Toggle italic"
                                            pressed=group_italic
                                            on_click=Callback::new(move |_| group_italic.update(|value| *value = !*value))
                                        >
                                            <Icon icon=IconName::Italic size=IconSize::Sm />
                                        </ToggleChip>
                                        <ToggleChip
                                            aria_label="Toggle underline"
                                            pressed=group_underline
                                            on_click=Callback::new(move |_| group_underline.update(|value| *value = !*value))
                                        >
                                            <Icon icon=IconName::Underline size=IconSize::Sm />
                                        </ToggleChip>
                                    </Cluster>
                                </Stack>
                            </Stack>
                        </CardContent>
                    </Card>
                </Grid>

                <Card>
                    <CardHeader>
                        <CardTitle>"Usage Guidelines"</CardTitle>
                        <CardDescription>"When and how to use different button types"</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Grid columns=3 gap=LayoutGap::Lg>
                            <GuidelineList
                                title="Primary Buttons"
                                items={&[
                                    "Main call-to-action",
                                    "One per screen or section",
                                    "High visual weight",
                                    "Important user actions",
                                ]}
                            />
                            <GuidelineList
                                title="Secondary Buttons"
                                items={&[
                                    "Supporting actions",
                                    "Multiple per screen",
                                    "Medium visual weight",
                                    "Common user tasks",
                                ]}
                            />
                            <GuidelineList
                                title="Ghost and Link Buttons"
                                items={&[
                                    "Tertiary actions",
                                    "Low visual weight",
                                    "Navigation elements",
                                    "Optional actions",
                                ]}
                            />
                        </Grid>
                    </CardContent>
                </Card>
            </Stack>
        </Section>
    }
}
