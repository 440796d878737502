//! Shared UI primitive library for the style-guide showcase.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the stylesheet layers. Sections
//! compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Alert, AlertTone, AspectFrame, AspectRatio, Avatar, AvatarSize, Badge, BadgeVariant,
    Breadcrumb, BreadcrumbItem, BreadcrumbSeparator, Button, ButtonSize, ButtonVariant, Card,
    CardContent, CardDescription, CardFooter, CardHeader, CardTitle, CheckboxField, Cluster,
    DataTable, FieldGroup, Grid, Heading, HeadingLevel, HoverCard, IconButton, LayoutAlign,
    LayoutGap, LayoutJustify, LayoutPadding, NavLink, NavList, NavOrientation, PageEllipsis,
    PageLink, Pagination, ProgressBar, RadioField, RangeField, ScrollRegion, Section, SelectField,
    Separator, Skeleton, SparkBars, Spinner, Stack, StatusDot, StatusTone, Switch, Tab, TabList,
    TabPanel, Text, TextArea, TextField, TextRole, TextTone, ToastItem, ToastShelf, ToggleChip,
    Tooltip,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Alert, AlertTone, AspectFrame, AspectRatio, Avatar, AvatarSize, Badge, BadgeVariant,
        Breadcrumb, BreadcrumbItem, BreadcrumbSeparator, Button, ButtonSize, ButtonVariant, Card,
        CardContent, CardDescription, CardFooter, CardHeader, CardTitle, CheckboxField, Cluster,
        DataTable, FieldGroup, Grid, Heading, HeadingLevel, HoverCard, Icon, IconButton, IconName,
        IconSize, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, NavLink, NavList,
        NavOrientation, PageEllipsis, PageLink, Pagination, ProgressBar, RadioField, RangeField,
        ScrollRegion, Section, SelectField, Separator, Skeleton, SparkBars, Spinner, Stack,
        StatusDot, StatusTone, Switch, Tab, TabList, TabPanel, Text, TextArea, TextField, TextRole,
        TextTone, ToastItem, ToastShelf, ToggleChip, Tooltip,
    };
}
