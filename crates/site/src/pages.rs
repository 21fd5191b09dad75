//! Routed pages.

use design_system::prelude::*;
use design_system::{Appearance, CardBorder, InteractionState};
use leptos::*;

use crate::config::SiteConfig;
use crate::sections::{FeatureGrid, Hero, TagCloud};
use crate::signup::SignupForm;

const TOPPINGS: [(&str, &str); 3] = [
    ("cheese", "Cheese"),
    ("basil", "Basil"),
    ("olives", "Olives"),
];

/// State of a "select all" checkbox for `selected` out of `total` items.
///
/// Returns `(checked, indeterminate)`.
pub fn select_all_state(selected: usize, total: usize) -> (bool, bool) {
    match selected {
        0 => (false, false),
        n if n >= total => (true, false),
        _ => (false, true),
    }
}

#[component]
/// Landing page.
pub fn LandingPage(config: SiteConfig) -> impl IntoView {
    view! {
        <Hero copy=config.hero />
        <FeatureGrid features=config.features />
        <TagCloud tags=config.tags />
        <SignupForm copy=config.signup />
    }
}

#[component]
/// Gallery rendering every component in its main variants.
pub fn ComponentsPage() -> impl IntoView {
    view! {
        <Surface as_kind=ElementKind::Main padding=LayoutPadding::Lg layout_class="site-gallery">
            <Stack gap=LayoutGap::Xl>
                <Heading level=HeadingLevel::H1>"Components"</Heading>
                <ButtonMatrix />
                <TagRow />
                <SelectAllDemo />
                <FieldDemo />
                <CardDemo />
            </Stack>
        </Surface>
    }
}

#[component]
fn ButtonMatrix() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Md>
            <Heading level=HeadingLevel::H2>"Buttons"</Heading>
            {[Emphasis::Solid, Emphasis::Subtle, Emphasis::Outline]
                .into_iter()
                .map(|emphasis| {
                    view! {
                        <Cluster gap=LayoutGap::Sm>
                            {Tone::ALL
                                .into_iter()
                                .map(|tone| {
                                    let label = format!("{tone:?}");
                                    view! { <Button tone emphasis>{label}</Button> }
                                })
                                .collect_view()}
                            <Button emphasis disabled=true>"Disabled"</Button>
                        </Cluster>
                    }
                })
                .collect_view()}
        </Stack>
    }
}

#[component]
fn TagRow() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Md>
            <Heading level=HeadingLevel::H2>"Tags"</Heading>
            <Cluster gap=LayoutGap::Sm>
                {Tone::ALL
                    .into_iter()
                    .map(|tone| {
                        let label = format!("{tone:?}");
                        view! { <Tag tone>{label}</Tag> }
                    })
                    .collect_view()}
                <Tag tone=Tone::Brand selectable=true default_selected=true icon=IconName::Star>
                    "Selectable"
                </Tag>
                <Tag tone=Tone::Danger selectable=true disabled=true>"Disabled"</Tag>
            </Cluster>
        </Stack>
    }
}

#[component]
fn SelectAllDemo() -> impl IntoView {
    let selected = create_rw_signal(vec!["basil".to_string()]);
    let all = move || select_all_state(selected.with(Vec::len), TOPPINGS.len());

    view! {
        <Stack gap=LayoutGap::Md>
            <Heading level=HeadingLevel::H2>"Controlled group"</Heading>
            <Checkbox
                label="All toppings"
                checked=Signal::derive(move || Some(all().0))
                indeterminate=Signal::derive(move || all().1)
                on_change=Callback::new(move |change: CheckboxChange| {
                    let next = if change.checked {
                        TOPPINGS.iter().map(|(value, _)| value.to_string()).collect()
                    } else {
                        Vec::new()
                    };
                    selected.set(next);
                })
            />
            <CheckboxGroup
                name="toppings"
                label="Toppings"
                values=Signal::derive(move || Some(selected.get()))
                on_change=Callback::new(move |next: Vec<String>| selected.set(next))
            >
                {TOPPINGS
                    .into_iter()
                    .map(|(value, label)| view! { <CheckboxItem value>{label}</CheckboxItem> })
                    .collect_view()}
            </CheckboxGroup>
            <Text role=TextRole::Code tone=TextTone::Secondary>
                {move || format!("{:?}", selected.get())}
            </Text>
        </Stack>
    }
}

#[component]
fn FieldDemo() -> impl IntoView {
    let options = vec![
        SelectOption::new("xs", "Extra small"),
        SelectOption::new("md", "Medium"),
        SelectOption::new("xl", "Extra large").disabled(),
    ];

    view! {
        <Stack gap=LayoutGap::Md>
            <Heading level=HeadingLevel::H2>"Fields"</Heading>
            <Select label="Size" options default_value="md" />
            <Checkbox label="Disabled and required" required=true disabled=true default_checked=true />
            <CheckboxGroup name="locked" label="Disabled group" required=true disabled=true default_values=vec!["a".to_string()]>
                <CheckboxItem value="a">"Alpha"</CheckboxItem>
                <CheckboxItem value="b">"Beta"</CheckboxItem>
            </CheckboxGroup>
            <RadioGroup name="density" label="Density" default_value="cozy" orientation=Orientation::Horizontal>
                <Radio value="compact">"Compact"</Radio>
                <Radio value="cozy">"Cozy"</Radio>
                <Radio value="roomy" disabled=true>"Roomy"</Radio>
            </RadioGroup>
        </Stack>
    }
}

#[component]
fn CardDemo() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Md>
            <Heading level=HeadingLevel::H2>"Cards"</Heading>
            <Grid columns=3>
                {[(Tone::Neutral, false), (Tone::Neutral, true), (Tone::Danger, true)]
                    .into_iter()
                    .map(|(tone, outline)| {
                        let border = CardBorder::resolve(tone, outline);
                        let swatch = Appearance::resolve(tone, Emphasis::Subtle, InteractionState::Idle);
                        view! {
                            <CardRoot tone outline>
                                <CardBody>
                                    <CardIcon icon=IconName::Info />
                                    <CardTitle>{format!("{tone:?} card")}</CardTitle>
                                    <CardDescription>
                                        {format!("Border {} on {} surface.", border.token(), swatch.surface.token())}
                                    </CardDescription>
                                    <CardLink href="https://www.w3.org/WAI/ARIA/apg/" external=true>
                                        "Learn more"
                                    </CardLink>
                                </CardBody>
                            </CardRoot>
                        }
                    })
                    .collect_view()}
            </Grid>
        </Stack>
    }
}

#[component]
/// Fallback for unknown paths.
pub fn NotFound() -> impl IntoView {
    view! {
        <Surface as_kind=ElementKind::Main padding=LayoutPadding::Lg layout_class="site-not-found">
            <Stack gap=LayoutGap::Md align=LayoutAlign::Start>
                <Heading level=HeadingLevel::H1>"Page not found"</Heading>
                <Text tone=TextTone::Secondary>"Nothing lives at this address."</Text>
                <Link href="/">"Back home"</Link>
            </Stack>
        </Surface>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn select_all_reflects_partial_selection() {
        assert_eq!(select_all_state(0, 3), (false, false));
        assert_eq!(select_all_state(1, 3), (false, true));
        assert_eq!(select_all_state(3, 3), (true, false));
    }
}
