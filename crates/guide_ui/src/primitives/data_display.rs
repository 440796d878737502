use super::*;

#[component]
/// Shared card surface for grouped showcase content.
pub fn Card(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
        >
            {children()}
        </article>
    }
}

#[component]
/// Card header region holding the title/description block and any actions.
pub fn CardHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-card-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-header"
        >
            {children()}
        </header>
    }
}

#[component]
/// Card title line.
pub fn CardTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <h3
            class=merge_layout_class("ui-card-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-title"
        >
            {children()}
        </h3>
    }
}

#[component]
/// Muted supporting copy under a card title.
pub fn CardDescription(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=merge_layout_class("ui-card-description", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-description"
        >
            {children()}
        </p>
    }
}

#[component]
/// Main card content region.
pub fn CardContent(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-card-content", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-content"
        >
            {children()}
        </div>
    }
}

#[component]
/// Card footer region for trailing actions.
pub fn CardFooter(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-card-footer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-footer"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Compact status badge.
pub fn Badge(
    #[prop(default = BadgeVariant::Solid)] variant: BadgeVariant,
    #[prop(default = StatusTone::Neutral)] tone: StatusTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Initials-fallback avatar derived from a display name.
pub fn Avatar(
    /// Display name the initials are derived from.
    #[prop(into)]
    name: String,
    #[prop(default = AvatarSize::Md)] size: AvatarSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let label = name.clone();
    view! {
        <span
            class=merge_layout_class("ui-avatar", layout_class)
            role="img"
            aria-label=label
            data-ui-primitive="true"
            data-ui-kind="avatar"
            data-ui-size=size.token()
        >
            <span data-ui-slot="fallback">{initials(&name)}</span>
        </span>
    }
}

#[component]
/// Shared table primitive; callers provide `thead`/`tbody` markup.
pub fn DataTable(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <table
            class=merge_layout_class("ui-data-table", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="data-table"
        >
            {children()}
        </table>
    }
}

#[component]
/// Semantic heading rendered as a real `h1`-`h4` element.
pub fn Heading(
    /// Heading level, mapped to the matching HTML element.
    level: HeadingLevel,
    #[prop(default = TextTone::Default)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    let tone = tone.token();
    match level {
        HeadingLevel::H1 => view! {
            <h1 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-tone=tone>
                {children()}
            </h1>
        }
        .into_view(),
        HeadingLevel::H2 => view! {
            <h2 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-tone=tone>
                {children()}
            </h2>
        }
        .into_view(),
        HeadingLevel::H3 => view! {
            <h3 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-tone=tone>
                {children()}
            </h3>
        }
        .into_view(),
        HeadingLevel::H4 => view! {
            <h4 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-tone=tone>
                {children()}
            </h4>
        }
        .into_view(),
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Default)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Placeholder block shown while real content loads.
pub fn Skeleton(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-skeleton", layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="skeleton"
        ></span>
    }
}

#[component]
/// Miniature bar chart strip driven by literal percentage values.
pub fn SparkBars(
    /// Bar heights as percentages of the strip height.
    values: &'static [u8],
    #[prop(default = StatusTone::Accent)] tone: StatusTone,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-spark-bars", layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="spark-bars"
            data-ui-tone=tone.token()
        >
            {values
                .iter()
                .map(|height| {
                    let height = (*height).min(100);
                    view! {
                        <span
                            data-ui-slot="bar"
                            style=format!("height: {height}%")
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
/// Small presence/status dot, optionally pulsing.
pub fn StatusDot(
    #[prop(default = StatusTone::Neutral)] tone: StatusTone,
    #[prop(optional, into)] pulse: MaybeSignal<bool>,
    /// Render as an outline ring instead of a filled dot.
    #[prop(optional)]
    hollow: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-status-dot", layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="status-dot"
            data-ui-tone=tone.token()
            data-ui-hollow=bool_token(hollow)
            data-ui-pulse=move || bool_token(pulse.get())
        ></span>
    }
}
