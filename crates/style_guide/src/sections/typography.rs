use guide_ui::prelude::*;
use leptos::*;

const CODE_SAMPLE: &str = "#[component]\nfn StyleGuide() -> impl IntoView {\n    view! {\n        <div class=\"guide-container\">\n            <Heading level=HeadingLevel::H1>\"Visual Style Guide\"</Heading>\n        </div>\n    }\n}";

#[component]
/// Heading hierarchy, body text, and code samples.
pub fn TypographySection() -> impl IntoView {
    view! {
        <Section id="typography" title="Typography">
            <Grid columns=2 gap=LayoutGap::Md>
                <Card>
                    <CardHeader>
                        <CardTitle>"Heading Hierarchy"</CardTitle>
                        <CardDescription>
                            "The typography system uses consistent spacing and weights"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Stack gap=LayoutGap::Md>
                            <Stack gap=LayoutGap::Xs>
                                <Heading level=HeadingLevel::H1>"Heading 1"</Heading>
                                <Text role=TextRole::Code tone=TextTone::Muted>"h1 - medium - 2xl"</Text>
                            </Stack>
                            <Stack gap=LayoutGap::Xs>
                                <Heading level=HeadingLevel::H2>"Heading 2"</Heading>
                                <Text role=TextRole::Code tone=TextTone::Muted>"h2 - medium - xl"</Text>
                            </Stack>
                            <Stack gap=LayoutGap::Xs>
                                <Heading level=HeadingLevel::H3>"Heading 3"</Heading>
                                <Text role=TextRole::Code tone=TextTone::Muted>"h3 - medium - lg"</Text>
                            </Stack>
                            <Stack gap=LayoutGap::Xs>
                                <Heading level=HeadingLevel::H4>"Heading 4"</Heading>
                                <Text role=TextRole::Code tone=TextTone::Muted>"h4 - medium - base"</Text>
                            </Stack>
                        </Stack>
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle>"Body Text"</CardTitle>
                        <CardDescription>"Readable and accessible text styles"</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Stack gap=LayoutGap::Md>
                            <Stack gap=LayoutGap::Xs>
                                <Text>
                                    "This is a paragraph of body text. It uses the base font \
                                     size with normal weight and a line height of 1.5 for \
                                     optimal readability across different screen sizes."
                                </Text>
                                <Text role=TextRole::Code tone=TextTone::Muted>
                                    "body - normal - base - relaxed leading"
                                </Text>
                            </Stack>
                            <Stack gap=LayoutGap::Xs>
                                <Text tone=TextTone::Muted>
                                    "This is muted text, often used for descriptions, \
                                     captions, or secondary information."
                                </Text>
                                <Text role=TextRole::Code tone=TextTone::Muted>"tone: muted"</Text>
                            </Stack>
                            <Stack gap=LayoutGap::Xs>
                                <Text role=TextRole::Label>"Form Label"</Text>
                                <Text role=TextRole::Code tone=TextTone::Muted>"label - medium"</Text>
                            </Stack>
                        </Stack>
                    </CardContent>
                </Card>
            </Grid>

            <Card layout_class="guide-section-trailing">
                <CardHeader>
                    <CardTitle>"Code and Technical Text"</CardTitle>
                    <CardDescription>
                        "Monospace fonts for code snippets and technical content"
                    </CardDescription>
                </CardHeader>
                <CardContent>
                    <Stack gap=LayoutGap::Md>
                        <div>
                            <Text role=TextRole::Code layout_class="guide-inline-code">
                                "inline code snippet"
                            </Text>
                        </div>
                        <pre class="guide-code-block"><code>{CODE_SAMPLE}</code></pre>
                    </Stack>
                </CardContent>
            </Card>
        </Section>
    }
}
