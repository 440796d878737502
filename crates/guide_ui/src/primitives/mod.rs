//! Shared structural, control, data-display, navigation, feedback, and layout
//! primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod feedback;
mod layout;
mod navigation;

pub use controls::{
    Button, CheckboxField, FieldGroup, IconButton, ProgressBar, RadioField, RangeField,
    SelectField, Spinner, Switch, TextArea, TextField, ToggleChip,
};
pub use data_display::{
    Avatar, Badge, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    DataTable, Heading, Skeleton, SparkBars, StatusDot, Text,
};
pub use feedback::{Alert, HoverCard, ToastItem, ToastShelf, Tooltip};
pub use layout::{AspectFrame, Cluster, Grid, ScrollRegion, Section, Separator, Stack};
pub use navigation::{
    Breadcrumb, BreadcrumbItem, BreadcrumbSeparator, NavLink, NavList, PageEllipsis, PageLink,
    Pagination, Tab, TabList, TabPanel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants mirroring the design-system hierarchy.
pub enum ButtonVariant {
    /// Primary call-to-action button.
    Primary,
    /// Secondary filled button.
    Secondary,
    /// Bordered low-emphasis button.
    Outline,
    /// Borderless quiet button.
    Ghost,
    /// Inline link-styled button.
    Link,
    /// Destructive action button.
    Destructive,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge presentation variants.
pub enum BadgeVariant {
    /// Solid high-contrast badge.
    Solid,
    /// Muted secondary badge.
    Secondary,
    /// Bordered badge.
    Outline,
    /// Destructive badge.
    Destructive,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Solid
    }
}

impl BadgeVariant {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic tone applied to badges, dots, bars, and text accents.
pub enum StatusTone {
    /// Default neutral tone.
    Neutral,
    /// Positive/operational tone.
    Success,
    /// Cautionary tone.
    Warning,
    /// Failure tone.
    Danger,
    /// Informational tone.
    Info,
    /// Brand accent tone.
    Accent,
}

impl Default for StatusTone {
    fn default() -> Self {
        Self::Neutral
    }
}

impl StatusTone {
    /// Stable kebab-case DOM token for the tone.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Accent => "accent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text roles.
pub enum TextRole {
    /// Body copy.
    Body,
    /// Larger introductory copy.
    Lead,
    /// Small caption copy.
    Caption,
    /// Form label copy.
    Label,
    /// Monospace/code copy.
    Code,
}

impl Default for TextRole {
    fn default() -> Self {
        Self::Body
    }
}

impl TextRole {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Lead => "lead",
            Self::Caption => "caption",
            Self::Label => "label",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text tones.
pub enum TextTone {
    /// Default foreground tone.
    Default,
    /// Muted secondary tone.
    Muted,
    /// Brand accent tone.
    Accent,
    /// Positive tone.
    Success,
    /// Cautionary tone.
    Warning,
    /// Failure tone.
    Danger,
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Default
    }
}

impl TextTone {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Muted => "muted",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Heading levels rendered as real `h1`-`h4` elements.
pub enum HeadingLevel {
    /// Page title.
    H1,
    /// Section title.
    H2,
    /// Card title.
    H3,
    /// Group label.
    H4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Alert tones.
pub enum AlertTone {
    /// Informational alert.
    Info,
    /// Success alert.
    Success,
    /// Warning alert.
    Warning,
    /// Error alert.
    Danger,
}

impl AlertTone {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    pub(crate) const fn icon(self) -> IconName {
        match self {
            Self::Info => IconName::Info,
            Self::Success => IconName::CheckCircle,
            Self::Warning => IconName::AlertTriangle,
            Self::Danger => IconName::XCircle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Avatar sizing tokens.
pub enum AvatarSize {
    /// Compact stacked avatar.
    Sm,
    /// Default avatar.
    Md,
    /// Prominent avatar.
    Lg,
}

impl Default for AvatarSize {
    fn default() -> Self {
        Self::Md
    }
}

impl AvatarSize {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Fixed aspect-ratio tokens for media frames.
pub enum AspectRatio {
    /// 16:9 video/hero frame.
    Wide,
    /// 4:3 traditional frame.
    Classic,
    /// 1:1 square frame.
    Square,
}

impl AspectRatio {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Wide => "16x9",
            Self::Classic => "4x3",
            Self::Square => "1x1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Orientation for link menus.
pub enum NavOrientation {
    /// Inline horizontal menu.
    Horizontal,
    /// Stacked vertical menu.
    Vertical,
}

impl NavOrientation {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Tight gap.
    Xs,
    /// Small gap.
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutGap {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for LayoutPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutPadding {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl Default for LayoutAlign {
    fn default() -> Self {
        Self::Stretch
    }
}

impl LayoutAlign {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl Default for LayoutJustify {
    fn default() -> Self {
        Self::Start
    }
}

impl LayoutJustify {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Derives up-to-two-letter initials from a display name, used by avatar
/// fallbacks.
pub fn initials(name: &str) -> String {
    let mut letters = name
        .split_whitespace()
        .filter_map(|word| word.chars().next());
    let first = letters.next();
    let second = letters.last();
    first
        .into_iter()
        .chain(second)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_merging_keeps_base_first() {
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(
            merge_layout_class("ui-card", Some("guide-hero")),
            "ui-card guide-hero"
        );
    }

    #[test]
    fn tone_tokens_are_stable() {
        assert_eq!(StatusTone::Success.token(), "success");
        assert_eq!(StatusTone::Danger.token(), "danger");
        assert_eq!(TextTone::Muted.token(), "muted");
        assert_eq!(ButtonVariant::Destructive.token(), "destructive");
        assert_eq!(ButtonSize::Icon.token(), "icon");
        assert_eq!(AspectRatio::Wide.token(), "16x9");
    }

    #[test]
    fn initials_take_first_and_last_words() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("Sarah"), "S");
        assert_eq!(initials("anna maria white"), "AW");
        assert_eq!(initials(""), "");
    }
}
