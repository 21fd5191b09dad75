use super::*;
use crate::state::{ControllableState, ToggleState};

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive. The level selects the element; it never comes from a string.
pub fn Heading(
    #[prop(default = HeadingLevel::H2)] level: HeadingLevel,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let element = match level {
        HeadingLevel::H1 => html::h1().into_any(),
        HeadingLevel::H2 => html::h2().into_any(),
        HeadingLevel::H3 => html::h3().into_any(),
        HeadingLevel::H4 => html::h4().into_any(),
    };

    element
        .attr("class", merge_layout_class("ui-heading", layout_class))
        .attr("id", id)
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", "heading")
        .attr("data-ui-slot", ui_slot)
        .attr("data-ui-level", level.token())
        .attr("data-ui-tone", tone.token())
        .child(children())
}

#[component]
/// Toned label chip.
///
/// Static by default. With `selectable` it becomes a toggle that is controlled through `selected`
/// or seeded by `default_selected`.
pub fn Tag(
    #[prop(default = Tone::Neutral)] tone: Tone,
    #[prop(default = Emphasis::Subtle)] emphasis: Emphasis,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] selectable: bool,
    #[prop(optional, into)] selected: MaybeProp<bool>,
    #[prop(optional)] default_selected: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    children: Children,
) -> impl IntoView {
    let state = ControllableState::new(
        Signal::derive(move || selected.get()),
        Some(default_selected),
        on_change,
    );
    let toggle = ToggleState::new(state, Signal::derive(move || disabled.get()));
    let interaction = move || {
        InteractionState::from_flags(selectable && toggle.is_on(), toggle.is_disabled())
    };
    let appearance = create_memo(move |_| Appearance::resolve(tone, emphasis, interaction()));
    let class = merge_layout_class("ui-tag", layout_class);
    let content = view! {
        {icon.map(|icon| view! { <Icon icon size=size.icon_size() ui_slot="icon" /> })}
        <span data-ui-slot="label">{children()}</span>
    };

    if selectable {
        view! {
            <button
                type="button"
                class=class
                aria-pressed=move || bool_token(toggle.is_on())
                disabled=move || disabled.get()
                data-ui-primitive="true"
                data-ui-kind="tag"
                data-ui-tone=tone.token()
                data-ui-variant=emphasis.token()
                data-ui-size=size.token()
                data-ui-mode=state.mode().token()
                data-ui-state=move || interaction().token()
                data-ui-surface=move || appearance.get().surface.token()
                data-ui-foreground=move || appearance.get().foreground.token()
                data-ui-border=move || appearance.get().border.token()
                on:click=move |_| toggle.activate()
            >
                {content}
            </button>
        }
        .into_view()
    } else {
        view! {
            <span
                class=class
                data-ui-primitive="true"
                data-ui-kind="tag"
                data-ui-tone=tone.token()
                data-ui-variant=emphasis.token()
                data-ui-size=size.token()
                data-ui-state=move || interaction().token()
                data-ui-surface=move || appearance.get().surface.token()
                data-ui-foreground=move || appearance.get().foreground.token()
                data-ui-border=move || appearance.get().border.token()
            >
                {content}
            </span>
        }
        .into_view()
    }
}
