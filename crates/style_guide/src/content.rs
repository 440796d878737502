//! Shared literal example data rendered by the showcase sections.
//!
//! Hoisting the structured tables keeps every section a pure function over
//! constant input and gives the shape invariants a place to be tested.

use guide_ui::{IconName, StatusTone, TextTone};

/// One swatch in a palette group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEntry {
    /// Display name.
    pub name: &'static str,
    /// Stable swatch token consumed by the stylesheet (`data-swatch`).
    pub token: &'static str,
    /// CSS custom property backing the swatch.
    pub var: &'static str,
}

/// A titled palette group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorGroup {
    /// Group title.
    pub title: &'static str,
    /// Supporting description.
    pub description: &'static str,
    /// Swatches in display order.
    pub colors: &'static [ColorEntry],
}

/// Palette groups shown by the color section.
pub const COLOR_GROUPS: &[ColorGroup] = &[
    ColorGroup {
        title: "Primary Colors",
        description: "Main brand colors and high-contrast elements",
        colors: &[
            ColorEntry { name: "Background", token: "background", var: "--background" },
            ColorEntry { name: "Foreground", token: "foreground", var: "--foreground" },
            ColorEntry { name: "Primary", token: "primary", var: "--primary" },
            ColorEntry { name: "Primary Foreground", token: "primary-foreground", var: "--primary-foreground" },
        ],
    },
    ColorGroup {
        title: "Secondary Colors",
        description: "Supporting colors for UI elements and states",
        colors: &[
            ColorEntry { name: "Secondary", token: "secondary", var: "--secondary" },
            ColorEntry { name: "Muted", token: "muted", var: "--muted" },
            ColorEntry { name: "Accent", token: "accent", var: "--accent" },
            ColorEntry { name: "Card", token: "card", var: "--card" },
        ],
    },
    ColorGroup {
        title: "Semantic Colors",
        description: "Colors with specific meaning and context",
        colors: &[
            ColorEntry { name: "Destructive", token: "destructive", var: "--destructive" },
            ColorEntry { name: "Border", token: "border", var: "--border" },
            ColorEntry { name: "Input", token: "input", var: "--input" },
            ColorEntry { name: "Ring", token: "ring", var: "--ring" },
        ],
    },
    ColorGroup {
        title: "Chart Colors",
        description: "Data visualization and chart colors",
        colors: &[
            ColorEntry { name: "Chart 1", token: "chart-1", var: "--chart-1" },
            ColorEntry { name: "Chart 2", token: "chart-2", var: "--chart-2" },
            ColorEntry { name: "Chart 3", token: "chart-3", var: "--chart-3" },
            ColorEntry { name: "Chart 4", token: "chart-4", var: "--chart-4" },
            ColorEntry { name: "Chart 5", token: "chart-5", var: "--chart-5" },
        ],
    },
];

/// Presence state used by the team table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    /// Currently working.
    Active,
    /// Temporarily away.
    Away,
    /// Not signed in.
    Inactive,
}

impl MemberStatus {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Away => "Away",
            Self::Inactive => "Inactive",
        }
    }

    /// Badge tone for the status.
    pub const fn tone(self) -> StatusTone {
        match self {
            Self::Active => StatusTone::Success,
            Self::Away => StatusTone::Warning,
            Self::Inactive => StatusTone::Neutral,
        }
    }
}

/// One row in the team data table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamRow {
    /// Member display name.
    pub name: &'static str,
    /// Member role.
    pub role: &'static str,
    /// Presence status.
    pub status: MemberStatus,
    /// Current task progress, 0-100.
    pub progress: u8,
}

/// Rows rendered by the data-display table.
pub const TEAM_ROWS: &[TeamRow] = &[
    TeamRow { name: "John Doe", role: "Developer", status: MemberStatus::Active, progress: 85 },
    TeamRow { name: "Sarah Wilson", role: "Designer", status: MemberStatus::Active, progress: 92 },
    TeamRow { name: "Mike Johnson", role: "Manager", status: MemberStatus::Away, progress: 67 },
    TeamRow { name: "Emily Davis", role: "Developer", status: MemberStatus::Inactive, progress: 43 },
];

/// Category of an activity-feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// Something new was created.
    Create,
    /// Existing work was updated.
    Update,
    /// A task reached completion.
    Complete,
    /// A discussion comment.
    Comment,
    /// A deployment event.
    Deploy,
    /// A merge event.
    Merge,
    /// A bug fix.
    Fix,
}

impl ActivityKind {
    /// Feed badge label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Complete => "complete",
            Self::Comment => "comment",
            Self::Deploy => "deploy",
            Self::Merge => "merge",
            Self::Fix => "fix",
        }
    }

    /// Feed badge tone.
    pub const fn tone(self) -> StatusTone {
        match self {
            Self::Create => StatusTone::Success,
            Self::Update => StatusTone::Info,
            Self::Complete => StatusTone::Accent,
            Self::Comment | Self::Merge => StatusTone::Neutral,
            Self::Deploy => StatusTone::Warning,
            Self::Fix => StatusTone::Danger,
        }
    }
}

/// One entry in the activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityEntry {
    /// Acting user.
    pub user: &'static str,
    /// Performed action.
    pub action: &'static str,
    /// Relative timestamp copy.
    pub time: &'static str,
    /// Entry category.
    pub kind: ActivityKind,
}

/// Entries rendered by the scrollable activity feed.
pub const ACTIVITY_FEED: &[ActivityEntry] = &[
    ActivityEntry { user: "John Doe", action: "created a new project", time: "2 hours ago", kind: ActivityKind::Create },
    ActivityEntry { user: "Sarah Wilson", action: "updated the design system", time: "4 hours ago", kind: ActivityKind::Update },
    ActivityEntry { user: "Mike Johnson", action: "completed the sprint", time: "6 hours ago", kind: ActivityKind::Complete },
    ActivityEntry { user: "Emily Davis", action: "commented on issue #123", time: "8 hours ago", kind: ActivityKind::Comment },
    ActivityEntry { user: "Alex Thompson", action: "deployed to production", time: "12 hours ago", kind: ActivityKind::Deploy },
    ActivityEntry { user: "Lisa Chen", action: "created a new branch", time: "1 day ago", kind: ActivityKind::Create },
    ActivityEntry { user: "David Brown", action: "merged a pull request", time: "1 day ago", kind: ActivityKind::Merge },
    ActivityEntry { user: "Anna White", action: "fixed a critical bug", time: "2 days ago", kind: ActivityKind::Fix },
];

/// Direction of a metric trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Improving.
    Up,
    /// Declining.
    Down,
    /// Unchanged.
    Flat,
}

impl Trend {
    /// Glyph for the trend direction.
    pub const fn icon(self) -> IconName {
        match self {
            Self::Up => IconName::TrendingUp,
            Self::Down => IconName::TrendingDown,
            Self::Flat => IconName::Minus,
        }
    }

    /// Text tone for the trend direction.
    pub const fn tone(self) -> TextTone {
        match self {
            Self::Up => TextTone::Success,
            Self::Down => TextTone::Danger,
            Self::Flat => TextTone::Muted,
        }
    }
}

/// Chart-backed metric tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricTile {
    /// Tile title.
    pub title: &'static str,
    /// Headline value.
    pub value: &'static str,
    /// Delta copy next to the trend glyph.
    pub delta: &'static str,
    /// Trend direction.
    pub trend: Trend,
    /// Mini chart bar heights in percent.
    pub bars: &'static [u8],
}

/// Metric tiles with miniature bar charts.
pub const METRIC_TILES: &[MetricTile] = &[
    MetricTile {
        title: "Revenue",
        value: "$45,230",
        delta: "+12%",
        trend: Trend::Up,
        bars: &[40, 65, 45, 80, 55, 90, 70, 85, 60, 75, 95, 80],
    },
    MetricTile {
        title: "Users",
        value: "2,345",
        delta: "-3%",
        trend: Trend::Down,
        bars: &[55, 70, 60, 45, 65, 50, 40, 55, 45, 50, 35, 40],
    },
    MetricTile {
        title: "Conversion",
        value: "3.2%",
        delta: "0%",
        trend: Trend::Flat,
        bars: &[30, 45, 35, 60, 40, 70, 50, 65, 45, 55, 75, 60],
    },
];

/// One key-metric overview cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMetric {
    /// Reporting period copy.
    pub period: &'static str,
    /// Headline value.
    pub value: &'static str,
    /// Metric label.
    pub label: &'static str,
    /// Comparison note.
    pub note: &'static str,
    /// Trend direction.
    pub trend: Trend,
}

/// Key-metrics overview cells.
pub const KEY_METRICS: &[KeyMetric] = &[
    KeyMetric {
        period: "This Month",
        value: "$12,426",
        label: "Monthly Recurring Revenue",
        note: "+8.2% from last month",
        trend: Trend::Up,
    },
    KeyMetric {
        period: "Today",
        value: "1,249",
        label: "Active Sessions",
        note: "-2.1% from yesterday",
        trend: Trend::Down,
    },
    KeyMetric {
        period: "This Week",
        value: "573",
        label: "New Signups",
        note: "+15.3% from last week",
        trend: Trend::Up,
    },
    KeyMetric {
        period: "All Time",
        value: "99.9%",
        label: "System Uptime",
        note: "Stable",
        trend: Trend::Flat,
    },
];

/// One design-token reference row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignToken {
    /// Custom property name.
    pub name: &'static str,
    /// Resolved light value.
    pub light: &'static str,
    /// Resolved dark value.
    pub dark: &'static str,
    /// Usage hint.
    pub usage: &'static str,
}

/// Design tokens listed in the quick-reference table.
pub const DESIGN_TOKENS: &[DesignToken] = &[
    DesignToken { name: "--background", light: "#ffffff", dark: "#1a1a1e", usage: "page surface" },
    DesignToken { name: "--foreground", light: "#1a1a1e", dark: "#fafafa", usage: "primary text" },
    DesignToken { name: "--primary", light: "#030213", dark: "#fafafa", usage: "primary actions" },
    DesignToken { name: "--muted", light: "#ececf0", dark: "#2b2b31", usage: "muted surfaces" },
    DesignToken { name: "--border", light: "rgba(0, 0, 0, 0.1)", dark: "#2b2b31", usage: "hairline borders" },
];

/// One component entry in the quick-reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSpec {
    /// Component name.
    pub component: &'static str,
    /// Supported variant tokens.
    pub variants: &'static [&'static str],
    /// Supported size tokens.
    pub sizes: &'static [&'static str],
    /// Usage snippet.
    pub example: &'static str,
}

/// Component API entries in the quick-reference section.
pub const COMPONENT_SPECS: &[ComponentSpec] = &[
    ComponentSpec {
        component: "Button",
        variants: &["primary", "secondary", "outline", "ghost", "link", "destructive"],
        sizes: &["sm", "md", "lg", "icon"],
        example: "<Button variant=ButtonVariant::Primary>\"Click me\"</Button>",
    },
    ComponentSpec {
        component: "Card",
        variants: &["default"],
        sizes: &["default"],
        example: "<Card>\n    <CardHeader>\n        <CardTitle>\"Title\"</CardTitle>\n    </CardHeader>\n    <CardContent>\"Content\"</CardContent>\n</Card>",
    },
    ComponentSpec {
        component: "TextField",
        variants: &["default"],
        sizes: &["default"],
        example: "<TextField placeholder=\"Enter text...\" />",
    },
];

/// One layout pattern in the quick-reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPattern {
    /// Pattern name.
    pub name: &'static str,
    /// Where to use it.
    pub description: &'static str,
    /// Usage snippet.
    pub code: &'static str,
}

/// Layout patterns in the quick-reference section.
pub const LAYOUT_PATTERNS: &[LayoutPattern] = &[
    LayoutPattern {
        name: "Main Container",
        description: "Standard page wrapper with responsive padding",
        code: "<div class=\"guide-container\">",
    },
    LayoutPattern {
        name: "Card Grid",
        description: "Responsive grid for cards and content blocks",
        code: "<Grid columns=3 gap=LayoutGap::Md>",
    },
    LayoutPattern {
        name: "Form Layout",
        description: "Consistent form field spacing",
        code: "<Stack gap=LayoutGap::Md>\n    <FieldGroup title=\"Field Label\">\n        <TextField />\n    </FieldGroup>\n</Stack>",
    },
];

/// One product in the showcase card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductEntry {
    /// Product name.
    pub name: &'static str,
    /// Short description.
    pub blurb: &'static str,
    /// Rating in tenths (49 renders as 4.9).
    pub rating_tenths: u8,
    /// Gradient token for the preview tile.
    pub swatch: &'static str,
}

/// Products rendered by the cards section.
pub const PRODUCTS: &[ProductEntry] = &[
    ProductEntry {
        name: "Design Tool Pro",
        blurb: "Professional design tool with advanced features",
        rating_tenths: 49,
        swatch: "chart-1",
    },
    ProductEntry {
        name: "Analytics Dashboard",
        blurb: "Comprehensive analytics and reporting platform",
        rating_tenths: 42,
        swatch: "chart-3",
    },
    ProductEntry {
        name: "Team Collaboration",
        blurb: "Real-time collaboration tools for teams",
        rating_tenths: 50,
        swatch: "chart-5",
    },
];

/// Total star slots rendered per product rating.
pub const STAR_SLOTS: u8 = 5;

/// Number of filled stars for a rating given in tenths.
pub const fn filled_stars(rating_tenths: u8) -> u8 {
    let filled = (rating_tenths as u16 + 5) / 10;
    if filled > STAR_SLOTS as u16 {
        STAR_SLOTS
    } else {
        filled as u8
    }
}

/// One entry in a navigation menu example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    /// Link label.
    pub label: &'static str,
    /// Optional leading glyph.
    pub icon: Option<IconName>,
    /// Whether the entry is the active location.
    pub active: bool,
    /// Optional trailing badge copy.
    pub badge: Option<&'static str>,
}

/// Horizontal menu example entries.
pub const HORIZONTAL_MENU: &[MenuEntry] = &[
    MenuEntry { label: "Dashboard", icon: None, active: true, badge: None },
    MenuEntry { label: "Projects", icon: None, active: false, badge: None },
    MenuEntry { label: "Team", icon: None, active: false, badge: None },
    MenuEntry { label: "Settings", icon: None, active: false, badge: None },
    MenuEntry { label: "New Feature", icon: None, active: false, badge: Some("Beta") },
];

/// Vertical menu example entries.
pub const VERTICAL_MENU: &[MenuEntry] = &[
    MenuEntry { label: "Dashboard", icon: Some(IconName::Home), active: true, badge: None },
    MenuEntry { label: "Documents", icon: Some(IconName::FileText), active: false, badge: None },
    MenuEntry { label: "Team", icon: Some(IconName::Users), active: false, badge: None },
    MenuEntry { label: "Settings", icon: Some(IconName::Settings), active: false, badge: None },
];

/// One rendered pagination slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A concrete page number.
    Page(usize),
    /// A gap between page ranges.
    Ellipsis,
}

/// Builds the visible pagination window around `current` out of `total`
/// pages: a three-page window plus first/last pages with gap markers.
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    if total <= 5 {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let end = (current + 1).clamp(3, total);
    let start = end - 2;

    let mut items = Vec::new();
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total {
        if end + 1 < total {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total));
    }
    items
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn team_rows_stay_within_progress_bounds() {
        assert!(!TEAM_ROWS.is_empty());
        for row in TEAM_ROWS {
            assert!(row.progress <= 100, "{} exceeds 100%", row.name);
            assert!(!row.name.is_empty());
        }
    }

    #[test]
    fn member_status_maps_to_stable_tones() {
        assert_eq!(MemberStatus::Active.tone(), StatusTone::Success);
        assert_eq!(MemberStatus::Away.tone(), StatusTone::Warning);
        assert_eq!(MemberStatus::Inactive.tone(), StatusTone::Neutral);
        assert_eq!(MemberStatus::Away.label(), "Away");
    }

    #[test]
    fn activity_feed_covers_every_kind_used() {
        assert_eq!(ACTIVITY_FEED.len(), 8);
        for entry in ACTIVITY_FEED {
            assert!(!entry.kind.label().is_empty());
        }
    }

    #[test]
    fn color_groups_have_swatches_and_vars() {
        assert_eq!(COLOR_GROUPS.len(), 4);
        for group in COLOR_GROUPS {
            assert!(group.colors.len() >= 4, "{} is too small", group.title);
            for color in group.colors {
                assert!(color.var.starts_with("--"));
                assert!(!color.token.is_empty());
            }
        }
    }

    #[test]
    fn metric_bars_fit_the_strip() {
        for tile in METRIC_TILES {
            assert_eq!(tile.bars.len(), 12);
            assert!(tile.bars.iter().all(|height| *height <= 100));
        }
    }

    #[test]
    fn star_ratings_round_to_slots() {
        assert_eq!(filled_stars(49), 5);
        assert_eq!(filled_stars(42), 4);
        assert_eq!(filled_stars(50), 5);
        assert_eq!(filled_stars(0), 0);
        assert_eq!(filled_stars(255), STAR_SLOTS);
    }

    #[test]
    fn small_page_counts_render_every_page() {
        assert_eq!(
            page_window(1, 3),
            vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
        );
        assert_eq!(page_window(4, 0), Vec::<PageItem>::new());
    }

    #[test]
    fn large_page_counts_window_with_gaps() {
        assert_eq!(
            page_window(2, 25),
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Ellipsis,
                PageItem::Page(25),
            ]
        );
        assert_eq!(
            page_window(13, 25),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(12),
                PageItem::Page(13),
                PageItem::Page(14),
                PageItem::Ellipsis,
                PageItem::Page(25),
            ]
        );
        assert_eq!(
            page_window(25, 25),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(23),
                PageItem::Page(24),
                PageItem::Page(25),
            ]
        );
    }
}
