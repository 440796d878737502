use guide_ui::prelude::*;
use leptos::*;

use crate::content::{ColorGroup, COLOR_GROUPS};

#[component]
fn ColorGroupCard(group: &'static ColorGroup) -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle>{group.title}</CardTitle>
                <CardDescription>{group.description}</CardDescription>
            </CardHeader>
            <CardContent>
                <Grid columns=4 gap=LayoutGap::Md>
                    {group
                        .colors
                        .iter()
                        .map(|color| view! {
                            <Stack gap=LayoutGap::Xs align=LayoutAlign::Center>
                                <div class="guide-swatch" data-swatch=color.token>
                                    <span>"Aa"</span>
                                </div>
                                <Text role=TextRole::Caption>{color.name}</Text>
                                <Text role=TextRole::Code tone=TextTone::Muted>{color.var}</Text>
                            </Stack>
                        })
                        .collect_view()}
                </Grid>
            </CardContent>
        </Card>
    }
}

#[component]
/// Grouped palette swatches plus usage guidance.
pub fn ColorPaletteSection() -> impl IntoView {
    view! {
        <Section id="colors" title="Color Palette">
            <Stack gap=LayoutGap::Md>
                {COLOR_GROUPS
                    .iter()
                    .map(|group| view! { <ColorGroupCard group /> })
                    .collect_view()}

                <Card>
                    <CardHeader>
                        <CardTitle>"Usage Guidelines"</CardTitle>
                        <CardDescription>"Best practices for color usage"</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Grid columns=2 gap=LayoutGap::Lg>
                            <Stack gap=LayoutGap::Sm>
                                <Heading level=HeadingLevel::H4>"Light Mode"</Heading>
                                <ul class="guide-bullets">
                                    <li>"Use high contrast between text and background"</li>
                                    <li>"Primary colors for main actions and focus states"</li>
                                    <li>"Muted colors for secondary information"</li>
                                    <li>"Borders should be subtle but visible"</li>
                                </ul>
                            </Stack>
                            <Stack gap=LayoutGap::Sm>
                                <Heading level=HeadingLevel::H4>"Dark Mode"</Heading>
                                <ul class="guide-bullets">
                                    <li>"Adapts automatically through CSS custom properties"</li>
                                    <li>"Maintains color relationships and contrast ratios"</li>
                                    <li>"Reduced brightness to prevent eye strain"</li>
                                    <li>"All components work seamlessly in both modes"</li>
                                </ul>
                            </Stack>
                        </Grid>
                    </CardContent>
                </Card>
            </Stack>
        </Section>
    }
}
