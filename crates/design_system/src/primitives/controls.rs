use super::*;
use crate::state::{ControllableState, ToggleState};

#[component]
/// Shared button primitive with tone/emphasis compound variants and icon slots.
pub fn Button(
    #[prop(default = Emphasis::Solid)] emphasis: Emphasis,
    #[prop(default = Tone::Brand)] tone: Tone,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Toggle buttons pass a pressed signal; plain buttons omit `aria-pressed`.
    #[prop(optional, into)]
    pressed: Option<MaybeSignal<bool>>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let is_pressed = move || pressed.map(|pressed| pressed.get()).unwrap_or(false);
    let appearance = create_memo(move |_| {
        Appearance::resolve(
            tone,
            emphasis,
            InteractionState::from_flags(is_pressed(), disabled.get()),
        )
    });

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=merge_layout_class("ui-button", layout_class)
            id=id
            aria-label=aria_label
            aria-pressed=move || pressed.map(|pressed| bool_token(pressed.get()))
            title=title
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=emphasis.token()
            data-ui-tone=tone.token()
            data-ui-size=size.token()
            data-ui-state=move || {
                InteractionState::from_flags(is_pressed(), disabled.get()).token()
            }
            data-ui-surface=move || appearance.get().surface.token()
            data-ui-foreground=move || appearance.get().foreground.token()
            data-ui-border=move || appearance.get().border.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=size.icon_size() ui_slot="leading" /> })}
            <span data-ui-slot="label">{children()}</span>
            {trailing_icon.map(|icon| view! { <Icon icon size=size.icon_size() ui_slot="trailing" /> })}
        </button>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Anchor attributes derived from the external-link flag.
pub struct ExternalLinkAttrs {
    /// Browsing context for the link.
    pub target: Option<&'static str>,
    /// Relationship tokens that keep the opened page from reaching `window.opener`.
    pub rel: Option<&'static str>,
    /// Trailing glyph marking the link as leaving the site.
    pub indicator: Option<IconName>,
}

impl ExternalLinkAttrs {
    /// Resolves anchor attributes for an internal or external link.
    pub fn for_link(external: bool) -> Self {
        if external {
            Self {
                target: Some("_blank"),
                rel: Some("noopener noreferrer"),
                indicator: Some(IconName::ArrowUpRight),
            }
        } else {
            Self {
                target: None,
                rel: None,
                indicator: None,
            }
        }
    }
}

#[component]
/// Shared anchor primitive. External links open in a new tab with a trailing indicator.
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional)] external: bool,
    #[prop(default = TextTone::Toned(Tone::Brand))] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_current: MaybeSignal<Option<&'static str>>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let attrs = ExternalLinkAttrs::for_link(external);

    view! {
        <a
            class=merge_layout_class("ui-link", layout_class)
            href=href
            target=attrs.target
            rel=attrs.rel
            aria-label=aria_label
            aria-current=move || aria_current.get()
            data-ui-primitive="true"
            data-ui-kind="link"
            data-ui-slot=ui_slot
            data-ui-tone=tone.token()
            data-ui-external=bool_token(external)
        >
            {children()}
            {attrs.indicator.map(|icon| view! { <Icon icon size=IconSize::Xs ui_slot="external" /> })}
        </a>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Payload delivered to [`Checkbox`] change callbacks.
pub struct CheckboxChange {
    /// Checked state after the interaction.
    pub checked: bool,
    /// The checkbox's `value` prop, if any.
    pub value: Option<String>,
}

pub(crate) fn checked_token(checked: bool, indeterminate: bool) -> &'static str {
    if indeterminate {
        "mixed"
    } else {
        bool_token(checked)
    }
}

pub(crate) fn checkbox_glyph(checked: bool, indeterminate: bool) -> Option<IconName> {
    if indeterminate {
        Some(IconName::Minus)
    } else if checked {
        Some(IconName::Check)
    } else {
        None
    }
}

/// Adapts a [`Checkbox`] change callback to the bare `bool` the state resolver reports, attaching
/// the checkbox's `value` to every notification.
fn checkbox_notifier(
    on_change: Option<Callback<CheckboxChange>>,
    value: Option<String>,
) -> Option<Callback<bool>> {
    on_change.map(|on_change| {
        Callback::new(move |checked: bool| {
            on_change.call(CheckboxChange {
                checked,
                value: value.clone(),
            });
        })
    })
}

#[component]
/// Standalone checkbox with controlled (`checked`) or uncontrolled (`default_checked`) state.
///
/// Disabled checkboxes ignore activation entirely: no state change and no `on_change`.
pub fn Checkbox(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] value: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] checked: MaybeProp<bool>,
    #[prop(optional)] default_checked: bool,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(default = Tone::Brand)] tone: Tone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<CheckboxChange>>,
) -> impl IntoView {
    let state = ControllableState::new(
        Signal::derive(move || checked.get()),
        Some(default_checked),
        checkbox_notifier(on_change, value.clone()),
    );
    let toggle = ToggleState::new(state, Signal::derive(move || disabled.get()));
    let appearance = create_memo(move |_| {
        Appearance::resolve(
            tone,
            Emphasis::Solid,
            InteractionState::from_flags(toggle.is_on() || indeterminate.get(), toggle.is_disabled()),
        )
    });
    let form_name = store_value(name);
    let form_value = store_value(value.unwrap_or_else(|| "on".to_string()));

    view! {
        <label
            class=merge_layout_class("ui-checkbox", layout_class)
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-tone=tone.token()
            data-ui-mode=state.mode().token()
            data-ui-checked=move || checked_token(toggle.is_on(), indeterminate.get())
            data-ui-disabled=move || bool_token(disabled.get())
            data-ui-invalid=move || bool_token(invalid.get())
            data-ui-required=move || bool_token(required.get())
        >
            <button
                type="button"
                role="checkbox"
                id=id
                aria-checked=move || checked_token(toggle.is_on(), indeterminate.get())
                aria-required=move || aria_flag(required.get())
                aria-invalid=move || aria_flag(invalid.get())
                disabled=move || disabled.get()
                data-ui-slot="control"
                data-ui-surface=move || appearance.get().surface.token()
                data-ui-foreground=move || appearance.get().foreground.token()
                data-ui-border=move || appearance.get().border.token()
                on:click=move |_| toggle.activate()
            >
                {move || {
                    checkbox_glyph(toggle.is_on(), indeterminate.get())
                        .map(|icon| view! { <Icon icon size=IconSize::Xs ui_slot="indicator" /> })
                }}
            </button>
            <FieldLabel label required disabled />
            {move || {
                form_name
                    .get_value()
                    .filter(|_| toggle.is_on())
                    .map(|name| view! { <input type="hidden" name=name value=form_value.get_value() /> })
            }}
        </label>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry in a [`Select`].
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Whether the option can be chosen.
    pub disabled: bool,
}

impl SelectOption {
    /// Creates an enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks the option as not selectable.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Text shown as the current selection.
///
/// A matching option shows its label; an empty value shows the placeholder; any other value is
/// shown verbatim.
pub fn select_display(
    options: &[SelectOption],
    value: &str,
    placeholder: Option<&str>,
) -> Option<String> {
    if let Some(option) = options.iter().find(|option| option.value == value) {
        return Some(option.label.clone());
    }
    if value.is_empty() {
        return placeholder.map(str::to_string);
    }
    Some(value.to_string())
}

#[component]
/// Native select with dual-mode value state and a styled display slot.
///
/// In controlled mode the control is re-asserted to `value` after every change, so it only moves
/// once the caller feeds the new value back.
pub fn Select(
    options: Vec<SelectOption>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] value: MaybeProp<String>,
    #[prop(optional, into)] default_value: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let state = ControllableState::new(
        Signal::derive(move || value.get()),
        default_value,
        on_change,
    );
    let options = store_value(options);
    let placeholder = store_value(placeholder);
    let display = move || {
        let current = state.get();
        options.with_value(|options| {
            placeholder.with_value(|placeholder| {
                select_display(options, &current, placeholder.as_deref())
            })
        })
    };
    let showing_placeholder = move || state.get().is_empty() && placeholder.with_value(Option::is_some);
    let select_ref = create_node_ref::<html::Select>();

    // Re-assert the displayed value after every change, declined controlled choices included.
    create_effect(move |_| {
        let current = state.get();
        if let Some(select) = select_ref.get() {
            select.set_value(&current);
        }
    });

    let option_views = options
        .get_value()
        .into_iter()
        .map(|option| {
            view! {
                <option value=option.value disabled=option.disabled>
                    {option.label}
                </option>
            }
        })
        .collect_view();

    view! {
        <label
            class=merge_layout_class("ui-select", layout_class)
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-mode=state.mode().token()
            data-ui-placeholder=move || bool_token(showing_placeholder())
            data-ui-disabled=move || bool_token(disabled.get())
            data-ui-invalid=move || bool_token(invalid.get())
            data-ui-required=move || bool_token(required.get())
        >
            <FieldLabel label required disabled />
            <span data-ui-slot="control">
                <select
                    node_ref=select_ref
                    id=id
                    name=name
                    aria-required=move || aria_flag(required.get())
                    aria-invalid=move || aria_flag(invalid.get())
                    disabled=move || disabled.get()
                    on:change=move |ev| {
                        if disabled.get_untracked() {
                            return;
                        }
                        state.set(event_target_value(&ev));
                    }
                >
                    {placeholder
                        .get_value()
                        .map(|placeholder| {
                            view! {
                                <option value="" disabled=true hidden=true>
                                    {placeholder}
                                </option>
                            }
                        })}
                    {option_views}
                </select>
                <span data-ui-slot="display" aria-hidden="true">{display}</span>
                <Icon icon=IconName::ChevronDown size=IconSize::Sm ui_slot="chevron" />
            </span>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    fn frameworks() -> Vec<SelectOption> {
        vec![
            SelectOption::new("react", "React"),
            SelectOption::new("leptos", "Leptos"),
            SelectOption::new("legacy", "Legacy").disabled(),
        ]
    }

    #[test]
    fn empty_value_shows_placeholder() {
        assert_eq!(
            select_display(&frameworks(), "", Some("Pick a framework")),
            Some("Pick a framework".to_string())
        );
        assert_eq!(select_display(&frameworks(), "", None), None);
    }

    #[test]
    fn matching_value_shows_option_label() {
        assert_eq!(
            select_display(&frameworks(), "leptos", Some("Pick")),
            Some("Leptos".to_string())
        );
    }

    #[test]
    fn unknown_value_is_shown_verbatim() {
        assert_eq!(
            select_display(&frameworks(), "svelte", Some("Pick")),
            Some("svelte".to_string())
        );
    }

    #[test]
    fn controlled_select_reports_choice_but_keeps_showing_placeholder() {
        let _ = create_runtime();
        let chosen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&chosen);
        let state = ControllableState::new(
            Signal::derive(|| Some(String::new())),
            None,
            Some(Callback::new(move |value: String| sink.borrow_mut().push(value))),
        );

        state.set("react".to_string());

        assert_eq!(*chosen.borrow(), vec!["react".to_string()]);
        assert_eq!(
            select_display(&frameworks(), &state.get_untracked(), Some("Pick a framework")),
            Some("Pick a framework".to_string())
        );
    }

    #[test]
    fn checkbox_notifications_carry_checked_state_and_value() {
        let _ = create_runtime();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        let notify = checkbox_notifier(
            Some(Callback::new(move |change: CheckboxChange| sink.borrow_mut().push(change))),
            Some("yes".to_string()),
        );
        let state = ControllableState::new(Signal::derive(|| None), Some(false), notify);
        let toggle = ToggleState::new(state, Signal::derive(|| false));

        toggle.activate();
        toggle.activate();

        assert_eq!(
            *changes.borrow(),
            vec![
                CheckboxChange {
                    checked: true,
                    value: Some("yes".to_string()),
                },
                CheckboxChange {
                    checked: false,
                    value: Some("yes".to_string()),
                },
            ]
        );
    }

    #[test]
    fn disabled_checkbox_never_reaches_change_callback() {
        let _ = create_runtime();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        let notify = checkbox_notifier(
            Some(Callback::new(move |change: CheckboxChange| sink.borrow_mut().push(change))),
            None,
        );
        let state = ControllableState::new(Signal::derive(|| Some(true)), None, notify);
        let toggle = ToggleState::new(state, Signal::derive(|| true));

        toggle.activate();

        assert!(changes.borrow().is_empty());
        assert!(toggle.is_on());
    }

    #[test]
    fn checkbox_without_change_callback_has_no_notifier() {
        assert!(checkbox_notifier(None, Some("yes".to_string())).is_none());
    }

    #[test]
    fn external_links_open_in_new_tab_with_safe_rel() {
        let attrs = ExternalLinkAttrs::for_link(true);
        assert_eq!(attrs.target, Some("_blank"));
        assert_eq!(attrs.rel, Some("noopener noreferrer"));
        assert_eq!(attrs.indicator, Some(IconName::ArrowUpRight));
        assert_eq!(
            ExternalLinkAttrs::for_link(false),
            ExternalLinkAttrs {
                target: None,
                rel: None,
                indicator: None,
            }
        );
    }

    #[test]
    fn indeterminate_overrides_checked_tokens() {
        assert_eq!(checked_token(true, true), "mixed");
        assert_eq!(checked_token(false, false), "false");
        assert_eq!(checkbox_glyph(false, true), Some(IconName::Minus));
        assert_eq!(checkbox_glyph(true, false), Some(IconName::Check));
        assert_eq!(checkbox_glyph(false, false), None);
    }
}
