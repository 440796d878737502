use super::*;

#[component]
/// Shared tab list container with `tablist` semantics.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-list", layout_class)
            role="tablist"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="tab-list"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared tab trigger.
pub fn Tab(
    /// Stable element id referenced by the controlled panel.
    id: &'static str,
    /// Id of the panel this tab controls.
    controls: &'static str,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-tab"
            role="tab"
            id=id
            aria-controls=controls
            aria-selected=move || selected.get().to_string()
            tabindex=move || if selected.get() { 0 } else { -1 }
            data-ui-primitive="true"
            data-ui-kind="tab"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Shared tab panel, hidden while its tab is not selected.
pub fn TabPanel(
    /// Stable element id referenced by the owning tab.
    id: &'static str,
    /// Id of the tab labelling this panel.
    labelled_by: &'static str,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-tab-panel"
            role="tabpanel"
            id=id
            aria-labelledby=labelled_by
            hidden=move || !active.get()
            data-ui-primitive="true"
            data-ui-kind="tab-panel"
        >
            {children()}
        </div>
    }
}

#[component]
/// Breadcrumb trail container.
pub fn Breadcrumb(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-breadcrumb", layout_class)
            aria-label="Breadcrumb"
            data-ui-primitive="true"
            data-ui-kind="breadcrumb"
        >
            <ol data-ui-slot="list">{children()}</ol>
        </nav>
    }
}

#[component]
/// One breadcrumb entry; the current page renders without a link.
pub fn BreadcrumbItem(
    #[prop(optional)] href: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    /// Marks the entry as the current page.
    #[prop(optional)]
    current: bool,
    children: Children,
) -> impl IntoView {
    let icon = icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> });
    let body = if current {
        view! {
            <span data-ui-slot="page" aria-current="page">
                {icon}
                {children()}
            </span>
        }
        .into_view()
    } else {
        view! {
            <a data-ui-slot="link" href=href.unwrap_or("#")>
                {icon}
                {children()}
            </a>
        }
        .into_view()
    };

    view! {
        <li
            class="ui-breadcrumb-item"
            data-ui-primitive="true"
            data-ui-kind="breadcrumb-item"
            data-ui-selected=bool_token(current)
        >
            {body}
        </li>
    }
}

#[component]
/// Chevron separator between breadcrumb entries.
pub fn BreadcrumbSeparator() -> impl IntoView {
    view! {
        <li
            class="ui-breadcrumb-separator"
            role="presentation"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="breadcrumb-separator"
        >
            <Icon icon=IconName::ChevronRight size=IconSize::Sm />
        </li>
    }
}

#[component]
/// Pagination container.
pub fn Pagination(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-pagination", layout_class)
            aria-label="Pagination"
            data-ui-primitive="true"
            data-ui-kind="pagination"
        >
            <ul data-ui-slot="list">{children()}</ul>
        </nav>
    }
}

#[component]
/// One pagination control.
pub fn PageLink(
    /// Marks the control as the current page.
    #[prop(optional)]
    current: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <li class="ui-page-item" data-ui-primitive="true" data-ui-kind="page-item">
            <button
                type="button"
                data-ui-slot="page-link"
                aria-label=aria_label
                aria-current={if current { Some("page") } else { None }}
                disabled=move || disabled.get()
                data-ui-selected=bool_token(current)
                on:click=move |ev| {
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(ev);
                    }
                }
            >
                {children()}
            </button>
        </li>
    }
}

#[component]
/// Ellipsis placeholder between pagination ranges.
pub fn PageEllipsis() -> impl IntoView {
    view! {
        <li
            class="ui-page-item"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="page-ellipsis"
        >
            <Icon icon=IconName::MoreHorizontal size=IconSize::Sm />
        </li>
    }
}

#[component]
/// Link menu rendered horizontally or as a stacked list.
pub fn NavList(
    /// Menu orientation.
    orientation: NavOrientation,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-nav-list", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="nav-list"
            data-ui-orientation=orientation.token()
        >
            {children()}
        </nav>
    }
}

#[component]
/// One entry in a link menu.
pub fn NavLink(
    #[prop(optional)] href: Option<&'static str>,
    #[prop(optional_no_strip)] icon: Option<IconName>,
    /// Marks the entry as the active location.
    #[prop(optional)]
    active: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            class="ui-nav-link"
            href=href.unwrap_or("#")
            aria-current={if active { Some("page") } else { None }}
            data-ui-primitive="true"
            data-ui-kind="nav-link"
            data-ui-selected=bool_token(active)
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </a>
    }
}
