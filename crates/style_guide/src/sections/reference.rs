use guide_ui::prelude::*;
use leptos::*;

use crate::content::{
    ComponentSpec, DesignToken, LayoutPattern, COMPONENT_SPECS, DESIGN_TOKENS, LAYOUT_PATTERNS,
};

#[component]
fn TokenRow(token: &'static DesignToken) -> impl IntoView {
    view! {
        <tr>
            <td>
                <Text role=TextRole::Code>{token.name}</Text>
            </td>
            <td>
                <Text role=TextRole::Code tone=TextTone::Muted>{token.light}</Text>
            </td>
            <td>
                <Text role=TextRole::Code tone=TextTone::Muted>{token.dark}</Text>
            </td>
            <td>
                <Text role=TextRole::Caption tone=TextTone::Muted>{token.usage}</Text>
            </td>
        </tr>
    }
}

#[component]
fn SpecCard(spec: &'static ComponentSpec) -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle>{spec.component}</CardTitle>
            </CardHeader>
            <CardContent>
                <Stack gap=LayoutGap::Sm>
                    <Cluster gap=LayoutGap::Xs>
                        <Text role=TextRole::Caption tone=TextTone::Muted>"Variants:"</Text>
                        {spec
                            .variants
                            .iter()
                            .map(|variant| view! {
                                <Badge variant=BadgeVariant::Outline>{*variant}</Badge>
                            })
                            .collect_view()}
                    </Cluster>
                    <Cluster gap=LayoutGap::Xs>
                        <Text role=TextRole::Caption tone=TextTone::Muted>"Sizes:"</Text>
                        {spec
                            .sizes
                            .iter()
                            .map(|size| view! {
                                <Badge variant=BadgeVariant::Secondary>{*size}</Badge>
                            })
                            .collect_view()}
                    </Cluster>
                    <pre class="guide-code-block"><code>{spec.example}</code></pre>
                </Stack>
            </CardContent>
        </Card>
    }
}

#[component]
fn PatternRow(pattern: &'static LayoutPattern) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Xs>
            <Heading level=HeadingLevel::H4>{pattern.name}</Heading>
            <Text role=TextRole::Caption tone=TextTone::Muted>{pattern.description}</Text>
            <pre class="guide-code-block"><code>{pattern.code}</code></pre>
        </Stack>
    }
}

#[component]
/// Machine-friendly quick reference: tokens, component APIs, layout patterns.
pub fn ReferenceSection() -> impl IntoView {
    view! {
        <Section id="reference" title="Quick Reference">
            <Stack gap=LayoutGap::Md>
                <Cluster gap=LayoutGap::Sm>
                    <span class="guide-reference-mark" aria-hidden="true">
                        <Icon icon=IconName::Code size=IconSize::Sm />
                    </span>
                    <Text tone=TextTone::Muted>
                        "Exact token values and component patterns for consistent \
                         implementation across surfaces."
                    </Text>
                </Cluster>

                <Card>
                    <CardHeader>
                        <CardTitle>"Design Tokens"</CardTitle>
                        <CardDescription>
                            "Custom properties resolved per display mode"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <DataTable aria_label="Design tokens">
                            <thead>
                                <tr>
                                    <th>"Token"</th>
                                    <th>"Light"</th>
                                    <th>"Dark"</th>
                                    <th>"Usage"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {DESIGN_TOKENS
                                    .iter()
                                    .map(|token| view! { <TokenRow token /> })
                                    .collect_view()}
                            </tbody>
                        </DataTable>
                    </CardContent>
                </Card>

                <Grid columns=3 gap=LayoutGap::Md>
                    {COMPONENT_SPECS
                        .iter()
                        .map(|spec| view! { <SpecCard spec /> })
                        .collect_view()}
                </Grid>

                <Card>
                    <CardHeader>
                        <CardTitle>"Layout Patterns"</CardTitle>
                        <CardDescription>"Canonical page and form scaffolding"</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Stack gap=LayoutGap::Lg>
                            {LAYOUT_PATTERNS
                                .iter()
                                .map(|pattern| view! { <PatternRow pattern /> })
                                .collect_view()}
                        </Stack>
                    </CardContent>
                </Card>
            </Stack>
        </Section>
    }
}
