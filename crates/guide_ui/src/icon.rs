//! Centralized inline-SVG icon API.
//!
//! Icons are 24x24 stroke glyphs rendered through a single [`Icon`] component
//! so sections never embed raw SVG markup. Each [`IconName`] resolves to a
//! stable kebab-case token plus its path data.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Canonical icon identifiers available to showcase surfaces.
pub enum IconName {
    /// Crescent moon, the switch-to-dark affordance.
    Moon,
    /// Sun with rays, the switch-to-light affordance.
    Sun,
    /// Download arrow into a tray.
    Download,
    /// Heart outline.
    Heart,
    /// Settings gear.
    Settings,
    /// Bold text glyph.
    Bold,
    /// Italic text glyph.
    Italic,
    /// Underline text glyph.
    Underline,
    /// House outline.
    Home,
    /// Two-person group.
    Users,
    /// Document with text lines.
    FileText,
    /// Chevron pointing left.
    ChevronLeft,
    /// Chevron pointing right.
    ChevronRight,
    /// Horizontal ellipsis dots.
    MoreHorizontal,
    /// Five-point star.
    Star,
    /// Speech bubble.
    MessageCircle,
    /// Share arrow out of a tray.
    Share,
    /// Calendar page.
    Calendar,
    /// Map location pin.
    MapPin,
    /// Upward trend line.
    TrendingUp,
    /// Downward trend line.
    TrendingDown,
    /// Horizontal minus stroke.
    Minus,
    /// Circled information mark.
    Info,
    /// Circled check mark.
    CheckCircle,
    /// Warning triangle.
    AlertTriangle,
    /// Circled cross.
    XCircle,
    /// Notification bell.
    Bell,
    /// Circled question mark.
    HelpCircle,
    /// Box with outgoing arrow.
    ExternalLink,
    /// Plain cross, used for dismiss actions.
    Dismiss,
    /// Open spinner arc.
    Loader,
    /// Empty circle.
    Circle,
    /// Circle with a center dot.
    CircleDot,
    /// Wireless signal arcs.
    Wifi,
    /// Struck-through wireless signal.
    WifiOff,
    /// Clock face.
    Clock,
    /// Lightning bolt.
    Zap,
    /// Pause bars.
    Pause,
    /// Play triangle.
    Play,
    /// Circular refresh arrows.
    Refresh,
    /// Angle-bracket code glyph.
    Code,
}

impl IconName {
    /// Stable kebab-case token emitted as `data-ui-icon`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Moon => "moon",
            Self::Sun => "sun",
            Self::Download => "download",
            Self::Heart => "heart",
            Self::Settings => "settings",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Home => "home",
            Self::Users => "users",
            Self::FileText => "file-text",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::MoreHorizontal => "more-horizontal",
            Self::Star => "star",
            Self::MessageCircle => "message-circle",
            Self::Share => "share",
            Self::Calendar => "calendar",
            Self::MapPin => "map-pin",
            Self::TrendingUp => "trending-up",
            Self::TrendingDown => "trending-down",
            Self::Minus => "minus",
            Self::Info => "info",
            Self::CheckCircle => "check-circle",
            Self::AlertTriangle => "alert-triangle",
            Self::XCircle => "x-circle",
            Self::Bell => "bell",
            Self::HelpCircle => "help-circle",
            Self::ExternalLink => "external-link",
            Self::Dismiss => "dismiss",
            Self::Loader => "loader",
            Self::Circle => "circle",
            Self::CircleDot => "circle-dot",
            Self::Wifi => "wifi",
            Self::WifiOff => "wifi-off",
            Self::Clock => "clock",
            Self::Zap => "zap",
            Self::Pause => "pause",
            Self::Play => "play",
            Self::Refresh => "refresh",
            Self::Code => "code",
        }
    }

    /// Stroke path segments for the 24x24 glyph.
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Moon => &["M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8Z"],
            Self::Sun => &[
                "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8",
                "M12 2v2",
                "M12 20v2",
                "M4.9 4.9l1.4 1.4",
                "M17.7 17.7l1.4 1.4",
                "M2 12h2",
                "M20 12h2",
                "M4.9 19.1l1.4-1.4",
                "M17.7 6.3l1.4-1.4",
            ],
            Self::Download => &[
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
                "M7 10l5 5 5-5",
                "M12 15V3",
            ],
            Self::Heart => &[
                "M19 14c1.5-1.5 3-3.2 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.8 0-3 .5-4.5 2-1.5-1.5-2.7-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4 3 5.5l7 7Z",
            ],
            Self::Settings => &[
                "M12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6",
                "M19.4 15a1.7 1.7 0 0 0 .3 1.9l.1.1a2 2 0 1 1-2.8 2.8l-.1-.1a1.7 1.7 0 0 0-1.9-.3 1.7 1.7 0 0 0-1 1.5V21a2 2 0 1 1-4 0v-.1a1.7 1.7 0 0 0-1-1.6 1.7 1.7 0 0 0-1.9.3l-.1.1a2 2 0 1 1-2.8-2.8l.1-.1a1.7 1.7 0 0 0 .3-1.9 1.7 1.7 0 0 0-1.5-1H3a2 2 0 1 1 0-4h.1a1.7 1.7 0 0 0 1.6-1 1.7 1.7 0 0 0-.3-1.9l-.1-.1a2 2 0 1 1 2.8-2.8l.1.1a1.7 1.7 0 0 0 1.9.3h.1a1.7 1.7 0 0 0 1-1.5V3a2 2 0 1 1 4 0v.1a1.7 1.7 0 0 0 1 1.5 1.7 1.7 0 0 0 1.9-.3l.1-.1a2 2 0 1 1 2.8 2.8l-.1.1a1.7 1.7 0 0 0-.3 1.9v.1a1.7 1.7 0 0 0 1.5 1H21a2 2 0 1 1 0 4h-.1a1.7 1.7 0 0 0-1.5 1Z",
            ],
            Self::Bold => &["M6 4h8a4 4 0 0 1 0 8H6Z", "M6 12h9a4 4 0 0 1 0 8H6Z"],
            Self::Italic => &["M19 4h-9", "M14 20H5", "M15 4 9 20"],
            Self::Underline => &["M6 4v6a6 6 0 0 0 12 0V4", "M4 20h16"],
            Self::Home => &["M3 10.5 12 3l9 7.5", "M5 9.5V21h14V9.5", "M9 21v-6h6v6"],
            Self::Users => &[
                "M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2",
                "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8",
                "M23 21v-2a4 4 0 0 0-3-3.9",
                "M16 3.1a4 4 0 0 1 0 7.8",
            ],
            Self::FileText => &[
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8Z",
                "M14 2v6h6",
                "M16 13H8",
                "M16 17H8",
            ],
            Self::ChevronLeft => &["M15 18l-6-6 6-6"],
            Self::ChevronRight => &["M9 18l6-6-6-6"],
            Self::MoreHorizontal => &["M5 12h.01", "M12 12h.01", "M19 12h.01"],
            Self::Star => &["M12 2l3.1 6.3 6.9 1-5 4.9 1.2 6.8L12 17.8 5.8 21l1.2-6.8-5-4.9 6.9-1Z"],
            Self::MessageCircle => &[
                "M21 11.5a8.5 8.5 0 0 1-8.5 8.5c-1.6 0-3.1-.4-4.4-1.2L3 21l2.2-5.1A8.5 8.5 0 1 1 21 11.5Z",
            ],
            Self::Share => &[
                "M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8",
                "M16 6l-4-4-4 4",
                "M12 2v13",
            ],
            Self::Calendar => &[
                "M19 4H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6a2 2 0 0 0-2-2Z",
                "M16 2v4",
                "M8 2v4",
                "M3 10h18",
            ],
            Self::MapPin => &[
                "M20 10c0 6-8 12-8 12S4 16 4 10a8 8 0 0 1 16 0Z",
                "M12 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6",
            ],
            Self::TrendingUp => &["M22 7l-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            Self::TrendingDown => &["M22 17l-8.5-8.5-5 5L2 7", "M16 17h6v-6"],
            Self::Minus => &["M5 12h14"],
            Self::Info => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20", "M12 16v-4", "M12 8h.01"],
            Self::CheckCircle => &["M22 11.1V12A10 10 0 1 1 16.1 2.8", "M22 4 12 14l-3-3"],
            Self::AlertTriangle => &[
                "M10.3 3.9 1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0Z",
                "M12 9v4",
                "M12 17h.01",
            ],
            Self::XCircle => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20",
                "M15 9l-6 6",
                "M9 9l6 6",
            ],
            Self::Bell => &[
                "M18 8a6 6 0 1 0-12 0c0 7-3 9-3 9h18s-3-2-3-9",
                "M13.7 21a2 2 0 0 1-3.4 0",
            ],
            Self::HelpCircle => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20",
                "M9.1 9a3 3 0 0 1 5.8 1c0 2-3 3-3 3",
                "M12 17h.01",
            ],
            Self::ExternalLink => &[
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
                "M15 3h6v6",
                "M10 14 21 3",
            ],
            Self::Dismiss => &["M18 6 6 18", "M6 6l12 12"],
            Self::Loader => &["M21 12a9 9 0 1 1-6.2-8.6"],
            Self::Circle => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20"],
            Self::CircleDot => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20",
                "M12 11a1 1 0 1 0 0 2 1 1 0 0 0 0-2",
            ],
            Self::Wifi => &[
                "M5 12.9a11 11 0 0 1 14 0",
                "M8.5 16.4a6 6 0 0 1 7 0",
                "M2 8.8a16 16 0 0 1 20 0",
                "M12 20h.01",
            ],
            Self::WifiOff => &[
                "M2 2l20 20",
                "M8.5 16.4a6 6 0 0 1 7 0",
                "M5 12.9a11 11 0 0 1 5.2-2.7",
                "M12 20h.01",
            ],
            Self::Clock => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20", "M12 6v6l4 2"],
            Self::Zap => &["M13 2 3 14h9l-1 8 10-12h-9Z"],
            Self::Pause => &["M10 4H6v16h4Z", "M18 4h-4v16h4Z"],
            Self::Play => &["M6 3l14 9-14 9Z"],
            Self::Refresh => &[
                "M3 12a9 9 0 0 1 15-6.7L21 8",
                "M21 3v5h-5",
                "M21 12a9 9 0 0 1-15 6.7L3 16",
                "M3 21v-5h5",
            ],
            Self::Code => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Dense inline icon.
    Sm,
    /// Default icon.
    Md,
    /// Prominent icon.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Shared inline-SVG icon.
pub fn Icon(
    /// Glyph to render.
    icon: IconName,
    /// Size token.
    #[prop(default = IconSize::Md)]
    size: IconSize,
    /// Whether the glyph should spin continuously.
    #[prop(optional)]
    spin: bool,
) -> impl IntoView {
    view! {
        <svg
            class="ui-icon"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
            data-ui-spin={if spin { "true" } else { "false" }}
        >
            {icon
                .paths()
                .iter()
                .map(|segment| view! { <path d={*segment}></path> })
                .collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn icon_tokens_are_kebab_case() {
        for icon in [
            IconName::Moon,
            IconName::CheckCircle,
            IconName::MoreHorizontal,
            IconName::WifiOff,
            IconName::ExternalLink,
        ] {
            let token = icon.token();
            assert!(!token.is_empty());
            assert!(token
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }

    #[test]
    fn every_icon_has_path_data() {
        assert_eq!(IconName::Minus.paths(), &["M5 12h14"]);
        for icon in [
            IconName::Sun,
            IconName::Settings,
            IconName::Loader,
            IconName::Code,
        ] {
            assert!(!icon.paths().is_empty());
            assert!(icon.paths().iter().all(|d| d.starts_with('M')));
        }
    }
}
