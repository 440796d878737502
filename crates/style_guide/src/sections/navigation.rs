use guide_ui::prelude::*;
use leptos::*;

use crate::content::{page_window, MenuEntry, PageItem, HORIZONTAL_MENU, VERTICAL_MENU};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuideTab {
    Overview,
    Analytics,
    Settings,
    Help,
}

impl GuideTab {
    const ALL: [Self; 4] = [Self::Overview, Self::Analytics, Self::Settings, Self::Help];

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
            Self::Help => "Help",
        }
    }

    fn tab_id(self) -> &'static str {
        match self {
            Self::Overview => "tab-overview",
            Self::Analytics => "tab-analytics",
            Self::Settings => "tab-settings",
            Self::Help => "tab-help",
        }
    }

    fn panel_id(self) -> &'static str {
        match self {
            Self::Overview => "panel-overview",
            Self::Analytics => "panel-analytics",
            Self::Settings => "panel-settings",
            Self::Help => "panel-help",
        }
    }

    fn panel_copy(self) -> (&'static str, &'static str) {
        match self {
            Self::Overview => (
                "Overview Content",
                "This is the overview tab content. It provides a high-level summary of the most important information.",
            ),
            Self::Analytics => (
                "Analytics Content",
                "Charts, graphs, and data insights would be displayed here.",
            ),
            Self::Settings => (
                "Settings Content",
                "Configuration options and preferences would be shown here.",
            ),
            Self::Help => (
                "Help Content",
                "Documentation, FAQs, and support resources would be available here.",
            ),
        }
    }
}

#[component]
fn MenuExample(
    title: &'static str,
    orientation: NavOrientation,
    entries: &'static [MenuEntry],
    aria_label: &'static str,
) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Sm>
            <Heading level=HeadingLevel::H4>{title}</Heading>
            <NavList orientation aria_label=aria_label>
                {entries
                    .iter()
                    .map(|entry| view! {
                        <NavLink icon=entry.icon active=entry.active>
                            {entry.label}
                            {entry
                                .badge
                                .map(|badge| view! { <Badge tone=StatusTone::Accent>{badge}</Badge> })}
                        </NavLink>
                    })
                    .collect_view()}
            </NavList>
        </Stack>
    }
}

#[component]
/// Tabs, breadcrumbs, pagination, and link menus.
pub fn NavigationSection() -> impl IntoView {
    let active_tab = create_rw_signal(GuideTab::Overview);
    let current_page = 2usize;
    let total_pages = 25usize;

    view! {
        <Section id="navigation" title="Navigation Components">
            <Stack gap=LayoutGap::Md>
                <Card>
                    <CardHeader>
                        <CardTitle>"Tabs"</CardTitle>
                        <CardDescription>
                            "Organize content into multiple sections with tab navigation"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Stack gap=LayoutGap::Sm>
                            <TabList aria_label="Example tabs">
                                {GuideTab::ALL
                                    .into_iter()
                                    .map(|tab| view! {
                                        <Tab
                                            id=tab.tab_id()
                                            controls=tab.panel_id()
                                            selected=Signal::derive(move || active_tab.get() == tab)
                                            on_click=Callback::new(move |_| active_tab.set(tab))
                                        >
                                            {tab.label()}
                                        </Tab>
                                    })
                                    .collect_view()}
                            </TabList>
                            {GuideTab::ALL
                                .into_iter()
                                .map(|tab| {
                                    let (title, copy) = tab.panel_copy();
                                    view! {
                                        <TabPanel
                                            id=tab.panel_id()
                                            labelled_by=tab.tab_id()
                                            active=Signal::derive(move || active_tab.get() == tab)
                                        >
                                            <Stack gap=LayoutGap::Xs layout_class="guide-tab-body">
                                                <Heading level=HeadingLevel::H4>{title}</Heading>
                                                <Text role=TextRole::Caption tone=TextTone::Muted>{copy}</Text>
                                            </Stack>
                                        </TabPanel>
                                    }
                                })
                                .collect_view()}
                        </Stack>
                    </CardContent>
                </Card>

                <Grid columns=2 gap=LayoutGap::Md>
                    <Card>
                        <CardHeader>
                            <CardTitle>"Breadcrumbs"</CardTitle>
                            <CardDescription>
                                "Show the current page location within a navigational hierarchy"
                            </CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Md>
                                <Stack gap=LayoutGap::Sm>
                                    <Heading level=HeadingLevel::H4>"Standard Breadcrumb"</Heading>
                                    <Breadcrumb>
                                        <BreadcrumbItem href="#">"Home"</BreadcrumbItem>
                                        <BreadcrumbSeparator />
                                        <BreadcrumbItem href="#">"Components"</BreadcrumbItem>
                                        <BreadcrumbSeparator />
                                        <BreadcrumbItem current=true>"Breadcrumb"</BreadcrumbItem>
                                    </Breadcrumb>
                                </Stack>
                                <Stack gap=LayoutGap::Sm>
                                    <Heading level=HeadingLevel::H4>"With Icons"</Heading>
                                    <Breadcrumb>
                                        <BreadcrumbItem href="#" icon=IconName::Home>"Dashboard"</BreadcrumbItem>
                                        <BreadcrumbSeparator />
                                        <BreadcrumbItem href="#" icon=IconName::Users>"Users"</BreadcrumbItem>
                                        <BreadcrumbSeparator />
                                        <BreadcrumbItem current=true>"Profile"</BreadcrumbItem>
                                    </Breadcrumb>
                                </Stack>
                            </Stack>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle>"Pagination"</CardTitle>
                            <CardDescription>"Navigate through multiple pages of content"</CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Md>
                                <Stack gap=LayoutGap::Sm>
                                    <Heading level=HeadingLevel::H4>"Standard Pagination"</Heading>
                                    <Pagination>
                                        <PageLink aria_label="Previous page">
                                            <Icon icon=IconName::ChevronLeft size=IconSize::Sm />
                                            "Previous"
                                        </PageLink>
                                        {page_window(current_page, total_pages)
                                            .into_iter()
                                            .map(|item| match item {
                                                PageItem::Page(page) => view! {
                                                    <PageLink current={page == current_page}>
                                                        {page.to_string()}
                                                    </PageLink>
                                                }
                                                .into_view(),
                                                PageItem::Ellipsis => view! { <PageEllipsis /> }.into_view(),
                                            })
                                            .collect_view()}
                                        <PageLink aria_label="Next page">
                                            "Next"
                                            <Icon icon=IconName::ChevronRight size=IconSize::Sm />
                                        </PageLink>
                                    </Pagination>
                                </Stack>
                                <Text role=TextRole::Caption tone=TextTone::Muted layout_class="guide-centered">
                                    "Showing 11-20 of 247 results"
                                </Text>
                            </Stack>
                        </CardContent>
                    </Card>
                </Grid>

                <Card>
                    <CardHeader>
                        <CardTitle>"Secondary Navigation"</CardTitle>
                        <CardDescription>"Simple link-based navigation patterns"</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Stack gap=LayoutGap::Lg>
                            <MenuExample
                                title="Horizontal Menu"
                                orientation=NavOrientation::Horizontal
                                entries=HORIZONTAL_MENU
                                aria_label="Horizontal example menu"
                            />
                            <MenuExample
                                title="Vertical Menu"
                                orientation=NavOrientation::Vertical
                                entries=VERTICAL_MENU
                                aria_label="Vertical example menu"
                            />
                        </Stack>
                    </CardContent>
                </Card>
            </Stack>
        </Section>
    }
}
