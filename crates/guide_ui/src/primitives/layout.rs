use super::*;

#[component]
/// Vertical layout stack.
pub fn Stack(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Stretch)] align: LayoutAlign,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stack"
            data-ui-gap=gap.token()
            data-ui-align=align.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal wrapping cluster.
pub fn Cluster(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(default = LayoutJustify::Start)] justify: LayoutJustify,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-cluster", layout_class)
            data-ui-primitive="true"
            data-ui-kind="cluster"
            data-ui-gap=gap.token()
            data-ui-align=align.token()
            data-ui-justify=justify.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Grid layout primitive with an optional fixed column count.
pub fn Grid(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(optional)] columns: Option<u8>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="grid"
            data-ui-gap=gap.token()
            data-ui-columns=columns.map(|columns| columns.to_string())
        >
            {children()}
        </div>
    }
}

#[component]
/// Anchored showcase section with its title heading.
pub fn Section(
    /// Stable fragment id for in-page anchors.
    id: &'static str,
    /// Section title rendered as an `h2`.
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="ui-section"
            id=id
            data-ui-primitive="true"
            data-ui-kind="section"
        >
            <Heading level=HeadingLevel::H2>{title}</Heading>
            {children()}
        </section>
    }
}

#[component]
/// Horizontal or vertical rule between content regions.
pub fn Separator(
    /// Render as a vertical rule.
    #[prop(optional)]
    vertical: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-separator", layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="separator"
            data-ui-orientation={if vertical { "vertical" } else { "horizontal" }}
        ></div>
    }
}

#[component]
/// Fixed aspect-ratio media frame.
pub fn AspectFrame(
    /// Ratio token controlling the frame proportions.
    ratio: AspectRatio,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-aspect-frame", layout_class)
            data-ui-primitive="true"
            data-ui-kind="aspect-frame"
            data-ui-ratio=ratio.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Height-bounded scrollable content region.
pub fn ScrollRegion(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-scroll-region", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="scroll-region"
        >
            {children()}
        </div>
    }
}
