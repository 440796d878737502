use guide_ui::prelude::*;
use leptos::*;

use crate::content::{filled_stars, ProductEntry, PRODUCTS, STAR_SLOTS};

#[component]
fn StarRating(rating_tenths: u8) -> impl IntoView {
    let filled = filled_stars(rating_tenths);
    view! {
        <Cluster gap=LayoutGap::Xs>
            <span data-ui-slot="stars" aria-hidden="true">
                {(0..STAR_SLOTS)
                    .map(|slot| view! {
                        <span data-ui-slot="star" data-ui-selected={if slot < filled { "true" } else { "false" }}>
                            <Icon icon=IconName::Star size=IconSize::Sm />
                        </span>
                    })
                    .collect_view()}
            </span>
            <Text role=TextRole::Caption tone=TextTone::Muted>
                {format!("({}.{})", rating_tenths / 10, rating_tenths % 10)}
            </Text>
        </Cluster>
    }
}

#[component]
fn ProductTile(product: &'static ProductEntry) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Sm>
            <AspectFrame ratio=AspectRatio::Square layout_class="guide-product-art">
                <div data-swatch=product.swatch data-ui-slot="art"></div>
            </AspectFrame>
            <Stack gap=LayoutGap::Xs>
                <Heading level=HeadingLevel::H4>{product.name}</Heading>
                <StarRating rating_tenths=product.rating_tenths />
                <Text role=TextRole::Caption tone=TextTone::Muted>{product.blurb}</Text>
            </Stack>
        </Stack>
    }
}

#[component]
/// Card layouts from basic containers to composite showcases.
pub fn CardsSection() -> impl IntoView {
    view! {
        <Section id="cards" title="Cards & Containers">
            <Stack gap=LayoutGap::Md>
                <Grid columns=3 gap=LayoutGap::Md>
                    <Card>
                        <CardHeader>
                            <CardTitle>"Basic Card"</CardTitle>
                            <CardDescription>
                                "Simple card with header, content, and footer sections"
                            </CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Text role=TextRole::Caption tone=TextTone::Muted>
                                "This is the main content area of the card. It can contain \
                                 any type of content."
                            </Text>
                        </CardContent>
                        <CardFooter>
                            <Button layout_class="guide-fill">"Action"</Button>
                        </CardFooter>
                    </Card>

                    <Card>
                        <CardHeader>
                            <Cluster gap=LayoutGap::Sm>
                                <Avatar name="John Doe" />
                                <Stack gap=LayoutGap::None>
                                    <CardTitle>"John Doe"</CardTitle>
                                    <CardDescription>"Software Engineer"</CardDescription>
                                </Stack>
                            </Cluster>
                        </CardHeader>
                        <CardContent>
                            <Text role=TextRole::Caption>
                                "\"Working with this design system has been incredible. The \
                                 components are well-crafted and the documentation is \
                                 excellent.\""
                            </Text>
                        </CardContent>
                        <CardFooter>
                            <Cluster justify=LayoutJustify::Between layout_class="guide-fill">
                                <Cluster gap=LayoutGap::Sm>
                                    <Cluster gap=LayoutGap::Xs>
                                        <Icon icon=IconName::Heart size=IconSize::Sm />
                                        <Text role=TextRole::Caption tone=TextTone::Muted>"24"</Text>
                                    </Cluster>
                                    <Cluster gap=LayoutGap::Xs>
                                        <Icon icon=IconName::MessageCircle size=IconSize::Sm />
                                        <Text role=TextRole::Caption tone=TextTone::Muted>"8"</Text>
                                    </Cluster>
                                </Cluster>
                                <IconButton
                                    icon=IconName::Share
                                    variant=ButtonVariant::Ghost
                                    aria_label="Share"
                                />
                            </Cluster>
                        </CardFooter>
                    </Card>

                    <Card>
                        <CardHeader>
                            <Cluster justify=LayoutJustify::Between>
                                <Stack gap=LayoutGap::None>
                                    <CardTitle>"Project Alpha"</CardTitle>
                                    <CardDescription>"In Progress"</CardDescription>
                                </Stack>
                                <Badge tone=StatusTone::Info>"Active"</Badge>
                            </Cluster>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Sm>
                                <Stack gap=LayoutGap::Xs>
                                    <Cluster justify=LayoutJustify::Between>
                                        <Text role=TextRole::Caption>"Progress"</Text>
                                        <Text role=TextRole::Caption>"68%"</Text>
                                    </Cluster>
                                    <ProgressBar max=100 value=68 />
                                </Stack>
                                <Cluster gap=LayoutGap::Xs>
                                    <Icon icon=IconName::Calendar size=IconSize::Sm />
                                    <Text role=TextRole::Caption tone=TextTone::Muted>
                                        "Due Dec 15, 2026"
                                    </Text>
                                </Cluster>
                            </Stack>
                        </CardContent>
                        <CardFooter>
                            <Cluster justify=LayoutJustify::Between layout_class="guide-fill">
                                <Cluster gap=LayoutGap::None layout_class="guide-avatar-stack">
                                    <Avatar name="John Doe" size=AvatarSize::Sm />
                                    <Avatar name="Sarah Miller" size=AvatarSize::Sm />
                                    <Avatar name="Two More" size=AvatarSize::Sm />
                                </Cluster>
                                <IconButton
                                    icon=IconName::MoreHorizontal
                                    variant=ButtonVariant::Ghost
                                    aria_label="More actions"
                                />
                            </Cluster>
                        </CardFooter>
                    </Card>
                </Grid>

                <Grid columns=2 gap=LayoutGap::Md>
                    <Card>
                        <CardHeader>
                            <CardTitle>"Statistics Card"</CardTitle>
                            <CardDescription>"Display key metrics and statistics"</CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Md>
                                <Grid columns=2 gap=LayoutGap::Md>
                                    <Stack gap=LayoutGap::Xs>
                                        <Text role=TextRole::Lead>"2,345"</Text>
                                        <Text role=TextRole::Caption tone=TextTone::Muted>"Total Users"</Text>
                                        <Cluster gap=LayoutGap::Xs>
                                            <Badge tone=StatusTone::Success>"+12%"</Badge>
                                            <Text role=TextRole::Caption tone=TextTone::Muted>"vs last month"</Text>
                                        </Cluster>
                                    </Stack>
                                    <Stack gap=LayoutGap::Xs>
                                        <Text role=TextRole::Lead>"$45,230"</Text>
                                        <Text role=TextRole::Caption tone=TextTone::Muted>"Revenue"</Text>
                                        <Cluster gap=LayoutGap::Xs>
                                            <Badge tone=StatusTone::Danger>"-3%"</Badge>
                                            <Text role=TextRole::Caption tone=TextTone::Muted>"vs last month"</Text>
                                        </Cluster>
                                    </Stack>
                                </Grid>
                                <Separator />
                                <Grid columns=2 gap=LayoutGap::Md>
                                    <Stack gap=LayoutGap::Xs>
                                        <Text role=TextRole::Lead>"156"</Text>
                                        <Text role=TextRole::Caption tone=TextTone::Muted>"New Signups"</Text>
                                    </Stack>
                                    <Stack gap=LayoutGap::Xs>
                                        <Text role=TextRole::Lead>"89%"</Text>
                                        <Text role=TextRole::Caption tone=TextTone::Muted>"Satisfaction"</Text>
                                    </Stack>
                                </Grid>
                            </Stack>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle>"Event Card"</CardTitle>
                            <CardDescription>
                                "Display event information with location and time"
                            </CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Md>
                                <Stack gap=LayoutGap::Xs>
                                    <Heading level=HeadingLevel::H4>"Design System Workshop"</Heading>
                                    <Text role=TextRole::Caption tone=TextTone::Muted>
                                        "Learn how to build and maintain design systems at scale"
                                    </Text>
                                </Stack>
                                <Stack gap=LayoutGap::Xs>
                                    <Cluster gap=LayoutGap::Xs>
                                        <Icon icon=IconName::Calendar size=IconSize::Sm />
                                        <Text role=TextRole::Caption>
                                            "Thursday, Dec 14 - 2:00 PM to 4:00 PM"
                                        </Text>
                                    </Cluster>
                                    <Cluster gap=LayoutGap::Xs>
                                        <Icon icon=IconName::MapPin size=IconSize::Sm />
                                        <Text role=TextRole::Caption>"Conference Room A, Building 2"</Text>
                                    </Cluster>
                                </Stack>
                                <Cluster justify=LayoutJustify::Between>
                                    <Cluster gap=LayoutGap::Xs>
                                        <Text role=TextRole::Caption tone=TextTone::Muted>"25 attending"</Text>
                                        <Cluster gap=LayoutGap::None layout_class="guide-avatar-stack">
                                            <Avatar name="Amy Brown" size=AvatarSize::Sm />
                                            <Avatar name="Carl Diaz" size=AvatarSize::Sm />
                                        </Cluster>
                                    </Cluster>
                                    <Button size=ButtonSize::Sm>"Join"</Button>
                                </Cluster>
                            </Stack>
                        </CardContent>
                    </Card>
                </Grid>

                <Card>
                    <CardHeader>
                        <CardTitle>"Product Showcase"</CardTitle>
                        <CardDescription>
                            "Complex card layout with multiple content sections"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Grid columns=3 gap=LayoutGap::Lg>
                            {PRODUCTS
                                .iter()
                                .map(|product| view! { <ProductTile product /> })
                                .collect_view()}
                        </Grid>
                    </CardContent>
                    <CardFooter>
                        <Cluster justify=LayoutJustify::Between layout_class="guide-fill">
                            <Text role=TextRole::Caption tone=TextTone::Muted>
                                "Showing 3 of 12 products"
                            </Text>
                            <Button variant=ButtonVariant::Outline>"View All"</Button>
                        </Cluster>
                    </CardFooter>
                </Card>
            </Stack>
        </Section>
    }
}
