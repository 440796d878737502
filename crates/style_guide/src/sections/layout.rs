use guide_ui::prelude::*;
use leptos::*;

struct ColumnPattern {
    caption: &'static str,
    spans: &'static [(u8, &'static str)],
}

const COLUMN_PATTERNS: &[ColumnPattern] = &[
    ColumnPattern {
        caption: "Two-column layout (8/4)",
        spans: &[(8, "Main Content Area"), (4, "Sidebar")],
    },
    ColumnPattern {
        caption: "Three-column layout (3/6/3)",
        spans: &[(3, "Left Sidebar"), (6, "Main Content"), (3, "Right Sidebar")],
    },
    ColumnPattern {
        caption: "Four-column layout (3/3/3/3)",
        spans: &[(3, "Column 1"), (3, "Column 2"), (3, "Column 3"), (3, "Column 4")],
    },
];

#[component]
fn RatioExample(caption: &'static str, ratio: AspectRatio, badge: &'static str) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Xs>
            <Text role=TextRole::Caption tone=TextTone::Muted>{caption}</Text>
            <AspectFrame ratio=ratio layout_class="guide-ratio-demo">
                <Badge variant=BadgeVariant::Secondary>{badge}</Badge>
            </AspectFrame>
        </Stack>
    }
}

#[component]
/// Grid systems, aspect ratios, and structural guidance.
pub fn LayoutSection() -> impl IntoView {
    view! {
        <Section id="layout" title="Layout & Structure">
            <Stack gap=LayoutGap::Md>
                <Card>
                    <CardHeader>
                        <CardTitle>"Grid Systems"</CardTitle>
                        <CardDescription>
                            "Responsive grid layouts for organizing content"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Stack gap=LayoutGap::Lg>
                            <Stack gap=LayoutGap::Sm>
                                <Heading level=HeadingLevel::H4>"12-Column Grid"</Heading>
                                <div class="guide-twelve-grid" aria-hidden="true">
                                    {(1..=12u8)
                                        .map(|column| view! {
                                            <div data-ui-slot="cell">{column.to_string()}</div>
                                        })
                                        .collect_view()}
                                </div>
                            </Stack>

                            <Stack gap=LayoutGap::Sm>
                                <Heading level=HeadingLevel::H4>"Common Layout Patterns"</Heading>
                                <Stack gap=LayoutGap::Md>
                                    {COLUMN_PATTERNS
                                        .iter()
                                        .map(|pattern| view! {
                                            <Stack gap=LayoutGap::Xs>
                                                <Text role=TextRole::Caption tone=TextTone::Muted>
                                                    {pattern.caption}
                                                </Text>
                                                <div class="guide-twelve-grid" data-ui-slot="pattern">
                                                    {pattern
                                                        .spans
                                                        .iter()
                                                        .map(|(span, label)| view! {
                                                            <div
                                                                data-ui-slot="cell"
                                                                data-span=span.to_string()
                                                            >
                                                                <Text role=TextRole::Caption>{*label}</Text>
                                                            </div>
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </Stack>
                                        })
                                        .collect_view()}
                                </Stack>
                            </Stack>
                        </Stack>
                    </CardContent>
                </Card>

                <Grid columns=2 gap=LayoutGap::Md>
                    <Card>
                        <CardHeader>
                            <CardTitle>"Aspect Ratios"</CardTitle>
                            <CardDescription>
                                "Maintain consistent proportions across different screen sizes"
                            </CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Md>
                                <RatioExample
                                    caption="16:9 (Video/Hero)"
                                    ratio=AspectRatio::Wide
                                    badge="16:9"
                                />
                                <RatioExample
                                    caption="4:3 (Traditional)"
                                    ratio=AspectRatio::Classic
                                    badge="4:3"
                                />
                                <RatioExample
                                    caption="1:1 (Square)"
                                    ratio=AspectRatio::Square
                                    badge="1:1"
                                />
                            </Stack>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle>"Separators & Containers"</CardTitle>
                            <CardDescription>
                                "Divide and bound content without heavy chrome"
                            </CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Md>
                                <Stack gap=LayoutGap::Xs>
                                    <Text role=TextRole::Caption>"Horizontal separator"</Text>
                                    <Separator />
                                </Stack>
                                <Cluster gap=LayoutGap::Sm layout_class="guide-separator-demo">
                                    <Text role=TextRole::Caption>"Left"</Text>
                                    <Separator vertical=true />
                                    <Text role=TextRole::Caption>"Right"</Text>
                                </Cluster>
                                <Stack gap=LayoutGap::Xs>
                                    <Text role=TextRole::Caption>"Bounded scroll region"</Text>
                                    <ScrollRegion
                                        aria_label="Scroll demo"
                                        layout_class="guide-scroll-demo"
                                    >
                                        <Stack gap=LayoutGap::Xs>
                                            {(1..=8u8)
                                                .map(|line| view! {
                                                    <Text role=TextRole::Caption tone=TextTone::Muted>
                                                        {format!("Scrollable line {line} of overflow content")}
                                                    </Text>
                                                })
                                                .collect_view()}
                                        </Stack>
                                    </ScrollRegion>
                                </Stack>
                            </Stack>
                        </CardContent>
                    </Card>
                </Grid>
            </Stack>
        </Section>
    }
}
