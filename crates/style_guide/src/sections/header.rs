use guide_ui::prelude::*;
use leptos::*;

#[component]
/// Centered page intro with the guide mark, title, and stack notes.
pub fn GuideHeader() -> impl IntoView {
    view! {
        <header class="guide-header" data-ui-slot="guide-header">
            <div data-ui-slot="mark" aria-hidden="true">
                <div data-ui-slot="mark-inner"></div>
            </div>

            <Heading level=HeadingLevel::H1>"Visual Style Guide"</Heading>

            <Text role=TextRole::Lead tone=TextTone::Muted layout_class="guide-header-copy">
                "A comprehensive design system reference featuring consistent UI \
                 components, typography, and interaction patterns for building \
                 cohesive web applications."
            </Text>

            <Cluster gap=LayoutGap::Lg justify=LayoutJustify::Center layout_class="guide-header-stack">
                <Cluster gap=LayoutGap::Xs>
                    <StatusDot tone=StatusTone::Accent />
                    <Text role=TextRole::Caption tone=TextTone::Muted>"CSS custom properties"</Text>
                </Cluster>
                <Cluster gap=LayoutGap::Xs>
                    <StatusDot tone=StatusTone::Success />
                    <Text role=TextRole::Caption tone=TextTone::Muted>"Shared Leptos primitives"</Text>
                </Cluster>
                <Cluster gap=LayoutGap::Xs>
                    <StatusDot tone=StatusTone::Info />
                    <Text role=TextRole::Caption tone=TextTone::Muted>"Rust + WebAssembly"</Text>
                </Cluster>
            </Cluster>
        </header>
    }
}
