use guide_ui::prelude::*;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotifyFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl NotifyFrequency {
    fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

#[component]
fn SliderRow(
    label: &'static str,
    value: RwSignal<u8>,
    aria_label: &'static str,
) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Xs>
            <Cluster justify=LayoutJustify::Between>
                <Text role=TextRole::Label>{label}</Text>
                <Badge variant=BadgeVariant::Secondary>
                    {move || format!("{}%", value.get())}
                </Badge>
            </Cluster>
            <RangeField
                min="0"
                max="100"
                aria_label=aria_label
                value=Signal::derive(move || value.get().to_string())
                on_input=Callback::new(move |ev| {
                    if let Ok(parsed) = event_target_value(&ev).parse::<u8>() {
                        value.set(parsed.min(100));
                    }
                })
            />
        </Stack>
    }
}

#[component]
/// Inputs, selection controls, switches, sliders, and a full form example.
pub fn FormsSection() -> impl IntoView {
    let newsletter = create_rw_signal(true);
    let updates = create_rw_signal(false);
    let frequency = create_rw_signal(NotifyFrequency::Weekly);
    let demo_dark = create_rw_signal(false);
    let notifications = create_rw_signal(true);
    let master_volume = create_rw_signal(75u8);
    let effects_volume = create_rw_signal(50u8);
    let role_value = create_rw_signal("developer".to_string());
    let terms = create_rw_signal(false);

    view! {
        <Section id="forms" title="Form Elements">
            <Stack gap=LayoutGap::Md>
                <Grid columns=2 gap=LayoutGap::Md>
                    <Card>
                        <CardHeader>
                            <CardTitle>"Text Inputs"</CardTitle>
                            <CardDescription>
                                "Various input types for collecting user data"
                            </CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Md>
                                <FieldGroup title="Email">
                                    <TextField input_type="email" placeholder="Enter your email" />
                                </FieldGroup>
                                <FieldGroup title="Password">
                                    <TextField input_type="password" placeholder="Enter your password" />
                                </FieldGroup>
                                <FieldGroup title="Disabled Input">
                                    <TextField placeholder="This is disabled" disabled=true />
                                </FieldGroup>
                                <FieldGroup title="Message">
                                    <TextArea placeholder="Enter your message here..." rows=3 />
                                </FieldGroup>
                            </Stack>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle>"Selection Controls"</CardTitle>
                            <CardDescription>
                                "Dropdowns, checkboxes, and radio buttons"
                            </CardDescription>
                        </CardHeader>
                        <CardContent>
                            <Stack gap=LayoutGap::Lg>
                                <FieldGroup title="Country">
                                    <SelectField aria_label="Country">
                                        <option value="us">"United States"</option>
                                        <option value="ca">"Canada"</option>
                                        <option value="uk">"United Kingdom"</option>
                                        <option value="de">"Germany"</option>
                                    </SelectField>
                                </FieldGroup>

                                <Stack gap=LayoutGap::Sm>
                                    <Text role=TextRole::Label>"Preferences"</Text>
                                    <Cluster gap=LayoutGap::Xs>
                                        <CheckboxField
                                            id="newsletter"
                                            checked=newsletter
                                            on_change=Callback::new(move |_| {
                                                newsletter.update(|value| *value = !*value)
                                            })
                                        />
                                        <Text role=TextRole::Caption>"Subscribe to newsletter"</Text>
                                    </Cluster>
                                    <Cluster gap=LayoutGap::Xs>
                                        <CheckboxField
                                            id="updates"
                                            checked=updates
                                            on_change=Callback::new(move |_| {
                                                updates.update(|value| *value = !*value)
                                            })
                                        />
                                        <Text role=TextRole::Caption>"Receive product updates"</Text>
                                    </Cluster>
                                    <Cluster gap=LayoutGap::Xs>
                                        <CheckboxField id="marketing" disabled=true />
                                        <Text role=TextRole::Caption tone=TextTone::Muted>
                                            "Marketing emails (disabled)"
                                        </Text>
                                    </Cluster>
                                </Stack>

                                <Stack gap=LayoutGap::Sm>
                                    <Text role=TextRole::Label>"Notification Frequency"</Text>
                                    {[
                                        NotifyFrequency::Daily,
                                        NotifyFrequency::Weekly,
                                        NotifyFrequency::Monthly,
                                    ]
                                        .into_iter()
                                        .map(|option| view! {
                                            <Cluster gap=LayoutGap::Xs>
                                                <RadioField
                                                    name="notify-frequency"
                                                    aria_label=option.label()
                                                    checked=Signal::derive(move || frequency.get() == option)
                                                    on_change=Callback::new(move |_| frequency.set(option))
                                                />
                                                <Text role=TextRole::Caption>{option.label()}</Text>
                                            </Cluster>
                                        })
                                        .collect_view()}
                                </Stack>
                            </Stack>
                        </CardContent>
                    </Card>
                </Grid>

                <Card>
                    <CardHeader>
                        <CardTitle>"Interactive Controls"</CardTitle>
                        <CardDescription>
                            "Switches, sliders, and other interactive form elements"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Grid columns=2 gap=LayoutGap::Lg>
                            <Stack gap=LayoutGap::Sm>
                                <Text role=TextRole::Label>"Settings"</Text>
                                <Cluster justify=LayoutJustify::Between>
                                    <Text role=TextRole::Caption>"Dark mode"</Text>
                                    <Switch
                                        aria_label="Dark mode"
                                        checked=demo_dark
                                        on_toggle=Callback::new(move |next| demo_dark.set(next))
                                    />
                                </Cluster>
                                <Cluster justify=LayoutJustify::Between>
                                    <Text role=TextRole::Caption>"Push notifications"</Text>
                                    <Switch
                                        aria_label="Push notifications"
                                        checked=notifications
                                        on_toggle=Callback::new(move |next| notifications.set(next))
                                    />
                                </Cluster>
                                <Cluster justify=LayoutJustify::Between>
                                    <Text role=TextRole::Caption>"Analytics tracking"</Text>
                                    <Switch aria_label="Analytics tracking" disabled=true />
                                </Cluster>
                            </Stack>

                            <Stack gap=LayoutGap::Md>
                                <Text role=TextRole::Label>"Volume Settings"</Text>
                                <SliderRow
                                    label="Master Volume"
                                    value=master_volume
                                    aria_label="Master volume"
                                />
                                <SliderRow
                                    label="Sound Effects"
                                    value=effects_volume
                                    aria_label="Sound effects volume"
                                />
                            </Stack>
                        </Grid>
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle>"Form Layout Example"</CardTitle>
                        <CardDescription>
                            "A complete form showcasing proper spacing and organization"
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <form class="guide-form" on:submit=move |ev| ev.prevent_default()>
                            <Stack gap=LayoutGap::Md>
                                <Grid columns=2 gap=LayoutGap::Sm>
                                    <FieldGroup title="First name">
                                        <TextField placeholder="John" />
                                    </FieldGroup>
                                    <FieldGroup title="Last name">
                                        <TextField placeholder="Doe" />
                                    </FieldGroup>
                                </Grid>
                                <FieldGroup title="Company">
                                    <TextField placeholder="Acme Inc." />
                                </FieldGroup>
                                <FieldGroup title="Role">
                                    <SelectField
                                        aria_label="Role"
                                        value=Signal::derive(move || role_value.get())
                                        on_change=Callback::new(move |ev| {
                                            role_value.set(event_target_value(&ev));
                                        })
                                    >
                                        <option value="developer">"Developer"</option>
                                        <option value="designer">"Designer"</option>
                                        <option value="manager">"Manager"</option>
                                        <option value="other">"Other"</option>
                                    </SelectField>
                                </FieldGroup>
                                <Cluster gap=LayoutGap::Xs>
                                    <CheckboxField
                                        id="terms"
                                        checked=terms
                                        on_change=Callback::new(move |_| {
                                            terms.update(|value| *value = !*value)
                                        })
                                    />
                                    <Text role=TextRole::Caption>
                                        "I agree to the terms and conditions"
                                    </Text>
                                </Cluster>
                                <Cluster gap=LayoutGap::Sm>
                                    <Button layout_class="guide-form-submit">"Create Account"</Button>
                                    <Button variant=ButtonVariant::Outline>"Cancel"</Button>
                                </Cluster>
                            </Stack>
                        </form>
                    </CardContent>
                </Card>
            </Stack>
        </Section>
    }
}
