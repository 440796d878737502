//! Style-guide showcase application.
//!
//! Renders every component family of the shared design system through
//! `guide_ui` primitives so visual refinements can be reviewed on one page.
//! The only shared state is the display mode owned by `theme_runtime`; every
//! section below is a pure view over literal example data.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod content;
mod sections;

use guide_ui::prelude::*;
use leptos::*;
use theme_runtime::use_theme;

use sections::{
    ButtonsSection, CardsSection, ColorPaletteSection, DataDisplaySection, FeedbackSection,
    FormsSection, GuideHeader, LayoutSection, NavigationSection, ReferenceSection,
    StatusIndicatorsSection, TypographySection,
};

#[component]
/// Full style-guide page: fixed theme toggle, ordered sections, footer.
pub fn StyleGuideApp() -> impl IntoView {
    view! {
        <div class="guide-root" data-ui-kind="guide-root">
            <ThemeToggle />
            <div class="guide-container">
                <GuideHeader />
                <Stack gap=LayoutGap::Lg layout_class="guide-sections">
                    <ReferenceSection />
                    <TypographySection />
                    <ColorPaletteSection />
                    <ButtonsSection />
                    <FormsSection />
                    <NavigationSection />
                    <CardsSection />
                    <DataDisplaySection />
                    <FeedbackSection />
                    <StatusIndicatorsSection />
                    <LayoutSection />
                </Stack>
                <footer class="guide-footer">
                    <Stack gap=LayoutGap::Xs align=LayoutAlign::Center>
                        <Text tone=TextTone::Muted>
                            "Visual Style Guide for design-reference use"
                        </Text>
                        <Text role=TextRole::Caption tone=TextTone::Muted>
                            "Use this guide to maintain consistent UI patterns across applications"
                        </Text>
                    </Stack>
                </footer>
            </div>
        </div>
    }
}

#[component]
/// Fixed top-right control flipping the page display mode.
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="guide-theme-toggle" data-ui-slot="theme-toggle">
            {move || {
                let dark = theme.mode.get().is_dark();
                let (icon, label) = if dark {
                    (IconName::Sun, "Switch to light mode")
                } else {
                    (IconName::Moon, "Switch to dark mode")
                };
                view! {
                    <IconButton
                        icon=icon
                        aria_label=label
                        title=label
                        on_click=Callback::new(move |_| theme.toggle())
                    />
                }
            }}
        </div>
    }
}
