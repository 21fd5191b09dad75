//! Landing page sections. Each one only composes `design_system` components.

use design_system::prelude::*;
use leptos::*;
use leptos_router::use_location;

use crate::config::{FeatureCard, HeroCopy, NavItem, TagItem};

#[component]
/// Brand, primary navigation, and the theme toggle.
pub fn SiteHeader(#[prop(into)] brand: String, nav: Vec<NavItem>) -> impl IntoView {
    let location = use_location();

    view! {
        <Surface as_kind=ElementKind::Header padding=LayoutPadding::Md layout_class="site-header">
            <Flex justify=LayoutJustify::Between align=LayoutAlign::Center>
                <Link href="/" tone=TextTone::Primary layout_class="site-brand">
                    <Icon icon=IconName::Layers size=IconSize::Md />
                    {brand}
                </Link>
                <Cluster gap=LayoutGap::Lg>
                    <NavBar current=location.pathname>
                        {nav
                            .into_iter()
                            .map(|item| view! { <NavLink href=item.href external=item.external>{item.label}</NavLink> })
                            .collect_view()}
                    </NavBar>
                    <ThemeToggle />
                </Cluster>
            </Flex>
        </Surface>
    }
}

#[component]
/// Opening banner with the primary and optional secondary call to action.
pub fn Hero(copy: HeroCopy) -> impl IntoView {
    let HeroCopy {
        eyebrow,
        title,
        lead,
        primary_cta,
        secondary_cta,
    } = copy;

    view! {
        <Surface as_kind=ElementKind::Section id="top" padding=LayoutPadding::Lg layout_class="site-hero">
            <Stack gap=LayoutGap::Md align=LayoutAlign::Start>
                <Tag tone=Tone::Brand icon=IconName::Sparkles>{eyebrow}</Tag>
                <Heading level=HeadingLevel::H1>{title}</Heading>
                <Text role=TextRole::Lead tone=TextTone::Secondary>{lead}</Text>
                <Cluster>
                    <Link href=primary_cta.href external=primary_cta.external layout_class="site-cta">
                        {primary_cta.label}
                    </Link>
                    {secondary_cta.map(|cta| view! {
                        <Link href=cta.href external=cta.external tone=TextTone::Secondary layout_class="site-cta">
                            {cta.label}
                        </Link>
                    })}
                </Cluster>
            </Stack>
        </Surface>
    }
}

#[component]
/// Grid of toned feature cards.
pub fn FeatureGrid(features: Vec<FeatureCard>) -> impl IntoView {
    view! {
        <Surface as_kind=ElementKind::Section padding=LayoutPadding::Lg layout_class="site-features">
            <Stack gap=LayoutGap::Lg>
                <Heading level=HeadingLevel::H2>"What you get"</Heading>
                <Grid columns=2 gap=LayoutGap::Lg>
                    {features.into_iter().map(|feature| view! { <FeatureCardView feature /> }).collect_view()}
                </Grid>
            </Stack>
        </Surface>
    }
}

#[component]
fn FeatureCardView(feature: FeatureCard) -> impl IntoView {
    view! {
        <CardRoot tone=feature.tone outline=feature.outline>
            <CardBody>
                <CardIcon icon=feature.icon />
                <CardTitle>{feature.title}</CardTitle>
                <CardDescription>{feature.description}</CardDescription>
                <CardLink href=feature.link.href external=feature.link.external>
                    {feature.link.label}
                </CardLink>
            </CardBody>
        </CardRoot>
    }
}

#[component]
/// Selectable tags, one per configured label. Selection is local to each tag.
pub fn TagCloud(tags: Vec<TagItem>) -> impl IntoView {
    view! {
        <Surface as_kind=ElementKind::Section padding=LayoutPadding::Lg layout_class="site-tags">
            <Stack gap=LayoutGap::Md>
                <Heading level=HeadingLevel::H2>"Built for"</Heading>
                <Cluster gap=LayoutGap::Sm>
                    {tags
                        .into_iter()
                        .map(|tag| view! { <Tag tone=tag.tone selectable=true>{tag.label}</Tag> })
                        .collect_view()}
                </Cluster>
            </Stack>
        </Surface>
    }
}

#[component]
/// Closing footer.
pub fn SiteFooter(#[prop(into)] brand: String, #[prop(into)] note: String) -> impl IntoView {
    view! {
        <Surface as_kind=ElementKind::Footer padding=LayoutPadding::Md layout_class="site-footer">
            <Divider />
            <Flex justify=LayoutJustify::Between align=LayoutAlign::Center>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{brand}</Text>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{note}</Text>
            </Flex>
        </Surface>
    }
}
