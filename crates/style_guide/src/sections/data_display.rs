use guide_ui::prelude::*;
use leptos::*;

use crate::content::{
    ActivityEntry, KeyMetric, MetricTile, TeamRow, ACTIVITY_FEED, KEY_METRICS, METRIC_TILES,
    TEAM_ROWS,
};

#[component]
fn TeamTableRow(row: &'static TeamRow) -> impl IntoView {
    view! {
        <tr>
            <td>
                <Cluster gap=LayoutGap::Sm>
                    <Avatar name=row.name size=AvatarSize::Sm />
                    <Text role=TextRole::Caption>{row.name}</Text>
                </Cluster>
            </td>
            <td>
                <Text role=TextRole::Caption>{row.role}</Text>
            </td>
            <td>
                <Badge tone=row.status.tone()>{row.status.label()}</Badge>
            </td>
            <td>
                <Cluster gap=LayoutGap::Xs>
                    <ProgressBar max=100 value={row.progress as u16} layout_class="guide-table-progress" />
                    <Text role=TextRole::Caption tone=TextTone::Muted>
                        {format!("{}%", row.progress)}
                    </Text>
                </Cluster>
            </td>
            <td data-ui-slot="actions">
                <Button variant=ButtonVariant::Link size=ButtonSize::Sm>"Edit"</Button>
            </td>
        </tr>
    }
}

#[component]
fn ActivityRow(entry: &'static ActivityEntry) -> impl IntoView {
    view! {
        <Cluster gap=LayoutGap::Sm align=LayoutAlign::Start layout_class="guide-activity-row">
            <Avatar name=entry.user size=AvatarSize::Sm />
            <Stack gap=LayoutGap::Xs layout_class="guide-activity-copy">
                <Text role=TextRole::Caption>
                    {entry.user}
                    " "
                    <Text role=TextRole::Caption tone=TextTone::Muted>{entry.action}</Text>
                </Text>
                <Text role=TextRole::Caption tone=TextTone::Muted>{entry.time}</Text>
            </Stack>
            <Badge variant=BadgeVariant::Outline tone=entry.kind.tone()>
                {entry.kind.label()}
            </Badge>
        </Cluster>
    }
}

#[component]
fn MetricTileCard(tile: &'static MetricTile) -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle>{tile.title}</CardTitle>
                <Cluster gap=LayoutGap::Xs>
                    <Text role=TextRole::Lead>{tile.value}</Text>
                    <Cluster gap=LayoutGap::Xs>
                        <Text tone=tile.trend.tone()>
                            <Icon icon=tile.trend.icon() size=IconSize::Sm />
                        </Text>
                        <Text role=TextRole::Caption tone=tile.trend.tone()>{tile.delta}</Text>
                    </Cluster>
                </Cluster>
            </CardHeader>
            <CardContent>
                <AspectFrame ratio=AspectRatio::Wide layout_class="guide-metric-chart">
                    <SparkBars values=tile.bars />
                </AspectFrame>
            </CardContent>
        </Card>
    }
}

#[component]
fn KeyMetricCell(metric: &'static KeyMetric) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Xs>
            <Cluster gap=LayoutGap::Xs>
                <Icon icon=IconName::Calendar size=IconSize::Sm />
                <Text role=TextRole::Caption tone=TextTone::Muted>{metric.period}</Text>
            </Cluster>
            <Text role=TextRole::Lead>{metric.value}</Text>
            <Text role=TextRole::Caption tone=TextTone::Muted>{metric.label}</Text>
            <Cluster gap=LayoutGap::Xs>
                <Text tone=metric.trend.tone()>
                    <Icon icon=metric.trend.icon() size=IconSize::Sm />
                </Text>
                <Text role=TextRole::Caption tone=metric.trend.tone()>{metric.note}</Text>
            </Cluster>
        </Stack>
    }
}

#[component]
/// Tables, loading states, feeds, and metric summaries.
pub fn DataDisplaySection() -> impl IntoView {
    view! {
        <Section id="data-display" title="Data Display">
            <Stack gap=LayoutGap::Md>
                <Card>
                    <CardHeader>
                        <CardTitle>"Data Table"</CardTitle>
                        <CardDescription>
                            "Structured data presentation with status indicators and progress"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <DataTable aria_label="Team members">
                            <thead>
                                <tr>
                                    <th>"User"</th>
                                    <th>"Role"</th>
                                    <th>"Status"</th>
                                    <th>"Progress"</th>
                                    <th data-ui-slot="actions">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {TEAM_ROWS
                                    .iter()
                                    .map(|row| view! { <TeamTableRow row /> })
                                    .collect_view()}
                            </tbody>
                        </DataTable>
                    </CardContent>
                </Card>

                <Grid columns=2 gap=LayoutGap::Md>
                    <Card>
                        <CardHeader>
                            <CardTitle>"Loading States"</CardTitle>
                            <CardDescription>"Skeleton components for loading states"</CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Md>
                                <Stack gap=LayoutGap::Xs>
                                    <Skeleton layout_class="guide-skeleton-wide" />
                                    <Skeleton layout_class="guide-skeleton-half" />
                                    <Skeleton layout_class="guide-skeleton-wide" />
                                </Stack>
                                <Separator />
                                <Cluster gap=LayoutGap::Sm>
                                    <Skeleton layout_class="guide-skeleton-avatar" />
                                    <Stack gap=LayoutGap::Xs>
                                        <Skeleton layout_class="guide-skeleton-line" />
                                        <Skeleton layout_class="guide-skeleton-short" />
                                    </Stack>
                                </Cluster>
                                <Separator />
                                <Stack gap=LayoutGap::Xs>
                                    <Cluster justify=LayoutJustify::Between>
                                        <Skeleton layout_class="guide-skeleton-short" />
                                        <Skeleton layout_class="guide-skeleton-chip" />
                                    </Cluster>
                                    <Skeleton layout_class="guide-skeleton-bar" />
                                </Stack>
                            </Stack>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle>"Activity Feed"</CardTitle>
                            <CardDescription>"Scrollable list of recent activities"</CardDescription>
                        </CardHeader>
                        <CardContent>
                            <ScrollRegion aria_label="Recent activity" layout_class="guide-feed">
                                <Stack gap=LayoutGap::Sm>
                                    {ACTIVITY_FEED
                                        .iter()
                                        .map(|entry| view! { <ActivityRow entry /> })
                                        .collect_view()}
                                </Stack>
                            </ScrollRegion>
                        </CardContent>
                    </Card>
                </Grid>

                <Grid columns=3 gap=LayoutGap::Md>
                    {METRIC_TILES
                        .iter()
                        .map(|tile| view! { <MetricTileCard tile /> })
                        .collect_view()}
                </Grid>

                <Card>
                    <CardHeader>
                        <CardTitle>"Key Metrics Overview"</CardTitle>
                        <CardDescription>
                            "Important performance indicators at a glance"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Grid columns=4 gap=LayoutGap::Lg>
                            {KEY_METRICS
                                .iter()
                                .map(|metric| view! { <KeyMetricCell metric /> })
                                .collect_view()}
                        </Grid>
                    </CardContent>
                </Card>
            </Stack>
        </Section>
    }
}
