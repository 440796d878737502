use super::*;

#[component]
/// Toned inline alert with a leading glyph and title.
pub fn Alert(
    /// Alert tone, also selecting the leading glyph.
    tone: AlertTone,
    /// Bold alert title line.
    title: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-alert", layout_class)
            role="alert"
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-tone=tone.token()
        >
            <Icon icon=tone.icon() size=IconSize::Sm />
            <div data-ui-slot="copy">
                <div data-ui-slot="title">{title}</div>
                <div data-ui-slot="description">{children()}</div>
            </div>
        </div>
    }
}

#[component]
/// Hover-revealed tip attached to its trigger children.
pub fn Tooltip(
    /// Tip copy revealed on hover/focus.
    #[prop(into)]
    tip: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-tooltip", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tooltip"
        >
            {children()}
            <span data-ui-slot="tip" role="tooltip">
                {tip}
            </span>
        </span>
    }
}

#[component]
/// Hover-revealed detail panel anchored to an inline link-style trigger.
pub fn HoverCard(
    /// Inline trigger copy.
    trigger: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-hover-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="hover-card"
        >
            <button type="button" data-ui-slot="trigger">
                {trigger}
            </button>
            <div data-ui-slot="content">{children()}</div>
        </span>
    }
}

#[component]
/// Fixed-corner stack hosting transient toast entries.
pub fn ToastShelf(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast-shelf", layout_class)
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="toast-shelf"
        >
            {children()}
        </div>
    }
}

#[component]
/// One transient toast entry.
pub fn ToastItem(
    /// Toast tone, also selecting the leading glyph.
    tone: AlertTone,
    /// Toast message copy.
    #[prop(into)]
    message: String,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-toast"
            role="status"
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-tone=tone.token()
        >
            <Icon icon=tone.icon() size=IconSize::Sm />
            <span data-ui-slot="message">{message}</span>
            <button
                type="button"
                data-ui-slot="dismiss"
                aria-label="Dismiss notification"
                on:click=move |ev| {
                    if let Some(on_dismiss) = on_dismiss.as_ref() {
                        on_dismiss.call(ev);
                    }
                }
            >
                <Icon icon=IconName::Dismiss size=IconSize::Sm />
            </button>
        </div>
    }
}
