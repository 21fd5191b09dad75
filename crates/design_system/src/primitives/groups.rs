use super::controls::{checkbox_glyph, checked_token};
use super::*;
use crate::context::ScopedContext;
use crate::state::{is_selected, toggle_selection, ControllableState};

const CHECKBOX_GROUP: ScopedContext<CheckboxGroupContext> = ScopedContext::new("CheckboxGroup");
const RADIO_GROUP: ScopedContext<RadioGroupContext> = ScopedContext::new("RadioGroup");

/// Reads the enclosing [`CheckboxGroup`]'s context on behalf of `consumer`.
///
/// # Panics
///
/// Panics when called outside a [`CheckboxGroup`].
pub fn use_checkbox_group(consumer: &'static str) -> CheckboxGroupContext {
    CHECKBOX_GROUP.require(consumer)
}

/// Reads the enclosing [`RadioGroup`]'s context on behalf of `consumer`.
///
/// # Panics
///
/// Panics when called outside a [`RadioGroup`].
pub fn use_radio_group(consumer: &'static str) -> RadioGroupContext {
    RADIO_GROUP.require(consumer)
}

/// Ambient configuration a [`CheckboxGroup`] exposes to its [`CheckboxItem`] leaves.
#[derive(Clone, Copy)]
pub struct CheckboxGroupContext {
    name: StoredValue<String>,
    tone: Tone,
    disabled: Signal<bool>,
    invalid: Signal<bool>,
    required: Signal<bool>,
    selection: ControllableState<Vec<String>>,
}

impl CheckboxGroupContext {
    /// Bundles the group's flags with its selection resolver.
    pub fn new(
        name: String,
        tone: Tone,
        disabled: Signal<bool>,
        invalid: Signal<bool>,
        required: Signal<bool>,
        selection: ControllableState<Vec<String>>,
    ) -> Self {
        Self {
            name: store_value(name),
            tone,
            disabled,
            invalid,
            required,
            selection,
        }
    }

    /// Form field name shared by every item.
    pub fn name(&self) -> String {
        self.name.get_value()
    }

    /// Tone shared by every item.
    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Whether the group is invalid, tracked.
    pub fn is_invalid(&self) -> bool {
        self.invalid.get()
    }

    /// Whether the group is required, tracked.
    pub fn is_required(&self) -> bool {
        self.required.get()
    }

    /// Current selection in insertion order, tracked.
    pub fn selected(&self) -> Vec<String> {
        self.selection.get()
    }

    /// Whether `value` is checked, tracked.
    pub fn is_checked(&self, value: &str) -> bool {
        self.selection.with_current(|selection| is_selected(selection, value))
    }

    /// Effective disabled state of an item: the group flag OR the item's own flag.
    pub fn is_item_disabled(&self, item_disabled: bool) -> bool {
        self.disabled.get() || item_disabled
    }

    /// Toggles `value` in response to an item activation.
    ///
    /// Ignored while the group or the item is disabled.
    pub fn activate(&self, value: &str, item_disabled: bool) {
        if self.disabled.get_untracked() || item_disabled {
            return;
        }
        self.selection.update(|selection| {
            let checked = !is_selected(selection, value);
            toggle_selection(selection, value, checked)
        });
    }
}

#[component]
/// Fieldset owning a set-valued selection shared with nested [`CheckboxItem`]s.
///
/// Controlled through `values`, or uncontrolled from `default_values`. `on_change` receives the
/// full next selection in insertion order.
pub fn CheckboxGroup(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] values: MaybeProp<Vec<String>>,
    #[prop(optional)] default_values: Option<Vec<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(default = Tone::Brand)] tone: Tone,
    #[prop(default = Orientation::Vertical)] orientation: Orientation,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<Vec<String>>>,
    children: Children,
) -> impl IntoView {
    let selection = ControllableState::new(
        Signal::derive(move || values.get()),
        default_values,
        on_change,
    );
    let disabled = Signal::derive(move || disabled.get());
    let required = Signal::derive(move || required.get());
    let invalid = Signal::derive(move || invalid.get());
    CHECKBOX_GROUP.provide(CheckboxGroupContext::new(
        name, tone, disabled, invalid, required, selection,
    ));

    view! {
        <fieldset
            class=merge_layout_class("ui-checkbox-group", layout_class)
            role="group"
            aria-required=move || aria_flag(required.get())
            aria-invalid=move || aria_flag(invalid.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="checkbox-group"
            data-ui-tone=tone.token()
            data-ui-mode=selection.mode().token()
            data-ui-orientation=orientation.token()
            data-ui-disabled=move || bool_token(disabled.get())
            data-ui-invalid=move || bool_token(invalid.get())
            data-ui-required=move || bool_token(required.get())
        >
            <legend data-ui-slot="legend">
                <FieldLabel label=Some(label) required disabled />
            </legend>
            {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
            <div data-ui-slot="items" data-ui-orientation=orientation.token()>
                {children()}
            </div>
        </fieldset>
    }
}

#[component]
/// Checkbox leaf of a [`CheckboxGroup`]. Tone, name, required, and invalid come from the group.
///
/// # Panics
///
/// Panics when rendered outside a [`CheckboxGroup`].
pub fn CheckboxItem(
    #[prop(into)] value: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let group = use_checkbox_group("CheckboxItem");
    let value = store_value(value);
    let checked = move || value.with_value(|value| group.is_checked(value));
    let item_disabled = move || group.is_item_disabled(disabled.get());
    let appearance = create_memo(move |_| {
        Appearance::resolve(
            group.tone(),
            Emphasis::Solid,
            InteractionState::from_flags(checked(), item_disabled()),
        )
    });

    view! {
        <label
            class=merge_layout_class("ui-checkbox", layout_class)
            data-ui-primitive="true"
            data-ui-kind="checkbox-item"
            data-ui-tone=group.tone().token()
            data-ui-checked=move || checked_token(checked(), false)
            data-ui-disabled=move || bool_token(item_disabled())
            data-ui-invalid=move || bool_token(group.is_invalid())
        >
            <button
                type="button"
                role="checkbox"
                aria-checked=move || checked_token(checked(), false)
                aria-invalid=move || aria_flag(group.is_invalid())
                disabled=item_disabled
                data-ui-slot="control"
                data-ui-surface=move || appearance.get().surface.token()
                data-ui-foreground=move || appearance.get().foreground.token()
                data-ui-border=move || appearance.get().border.token()
                on:click=move |_| {
                    value.with_value(|value| group.activate(value, disabled.get_untracked()));
                }
            >
                {move || {
                    checkbox_glyph(checked(), false)
                        .map(|icon| view! { <Icon icon size=IconSize::Xs ui_slot="indicator" /> })
                }}
            </button>
            <span data-ui-slot="label">{children()}</span>
            {move || {
                checked()
                    .then(|| view! { <input type="hidden" name=group.name() value=value.get_value() /> })
            }}
        </label>
    }
}

/// Ambient configuration a [`RadioGroup`] exposes to its [`Radio`] leaves.
#[derive(Clone, Copy)]
pub struct RadioGroupContext {
    name: StoredValue<String>,
    tone: Tone,
    disabled: Signal<bool>,
    invalid: Signal<bool>,
    required: Signal<bool>,
    selection: ControllableState<String>,
}

impl RadioGroupContext {
    /// Bundles the group's flags with its selection resolver.
    pub fn new(
        name: String,
        tone: Tone,
        disabled: Signal<bool>,
        invalid: Signal<bool>,
        required: Signal<bool>,
        selection: ControllableState<String>,
    ) -> Self {
        Self {
            name: store_value(name),
            tone,
            disabled,
            invalid,
            required,
            selection,
        }
    }

    /// Form field name shared by every radio.
    pub fn name(&self) -> String {
        self.name.get_value()
    }

    /// Tone shared by every radio.
    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Whether the group is invalid, tracked.
    pub fn is_invalid(&self) -> bool {
        self.invalid.get()
    }

    /// Whether the group is required, tracked.
    pub fn is_required(&self) -> bool {
        self.required.get()
    }

    /// Currently selected value; empty when nothing is selected. Tracked.
    pub fn selected(&self) -> String {
        self.selection.get()
    }

    /// Whether `value` is the selected radio, tracked.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selection.with_current(|selected| selected == value)
    }

    /// Effective disabled state of a radio: the group flag OR the radio's own flag.
    pub fn is_item_disabled(&self, item_disabled: bool) -> bool {
        self.disabled.get() || item_disabled
    }

    /// Selects `value`. Re-selecting the current value is a no-op, as is selecting while disabled.
    pub fn select(&self, value: &str, item_disabled: bool) {
        if self.disabled.get_untracked() || item_disabled {
            return;
        }
        if self.selection.get_untracked() == value {
            return;
        }
        self.selection.set(value.to_string());
    }
}

#[component]
/// Radio group owning a single selected value shared with nested [`Radio`]s.
///
/// Arrow-key movement between radios is the browser's native behavior for inputs sharing a
/// `name`; every resulting change is routed through the group's selection state.
pub fn RadioGroup(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] value: MaybeProp<String>,
    #[prop(optional, into)] default_value: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(default = Tone::Brand)] tone: Tone,
    #[prop(default = Orientation::Vertical)] orientation: Orientation,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    children: Children,
) -> impl IntoView {
    let selection = ControllableState::new(
        Signal::derive(move || value.get()),
        default_value,
        on_change,
    );
    let disabled = Signal::derive(move || disabled.get());
    let required = Signal::derive(move || required.get());
    let invalid = Signal::derive(move || invalid.get());
    RADIO_GROUP.provide(RadioGroupContext::new(
        name, tone, disabled, invalid, required, selection,
    ));

    view! {
        <fieldset
            class=merge_layout_class("ui-radio-group", layout_class)
            role="radiogroup"
            aria-required=move || aria_flag(required.get())
            aria-invalid=move || aria_flag(invalid.get())
            aria-orientation=orientation.token()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="radio-group"
            data-ui-tone=tone.token()
            data-ui-mode=selection.mode().token()
            data-ui-orientation=orientation.token()
            data-ui-disabled=move || bool_token(disabled.get())
            data-ui-invalid=move || bool_token(invalid.get())
            data-ui-required=move || bool_token(required.get())
        >
            <legend data-ui-slot="legend">
                <FieldLabel label=Some(label) required disabled />
            </legend>
            {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
            <div data-ui-slot="items" data-ui-orientation=orientation.token()>
                {children()}
            </div>
        </fieldset>
    }
}

#[component]
/// Radio leaf of a [`RadioGroup`].
///
/// # Panics
///
/// Panics when rendered outside a [`RadioGroup`].
pub fn Radio(
    #[prop(into)] value: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let group = use_radio_group("Radio");
    let value = store_value(value);
    let checked = move || value.with_value(|value| group.is_selected(value));
    let input_ref = create_node_ref::<html::Input>();

    // Native radios flip themselves on click; re-assert the group's value after every change,
    // declined controlled ones included.
    create_effect(move |_| {
        let checked = checked();
        if let Some(input) = input_ref.get() {
            input.set_checked(checked);
        }
    });
    let item_disabled = move || group.is_item_disabled(disabled.get());
    let appearance = create_memo(move |_| {
        Appearance::resolve(
            group.tone(),
            Emphasis::Outline,
            InteractionState::from_flags(checked(), item_disabled()),
        )
    });

    view! {
        <label
            class=merge_layout_class("ui-radio", layout_class)
            data-ui-primitive="true"
            data-ui-kind="radio"
            data-ui-tone=group.tone().token()
            data-ui-checked=move || bool_token(checked())
            data-ui-disabled=move || bool_token(item_disabled())
            data-ui-invalid=move || bool_token(group.is_invalid())
        >
            <input
                node_ref=input_ref
                type="radio"
                name=group.name()
                value=value.get_value()
                disabled=item_disabled
                aria-invalid=move || aria_flag(group.is_invalid())
                data-ui-slot="control"
                data-ui-surface=move || appearance.get().surface.token()
                data-ui-foreground=move || appearance.get().foreground.token()
                data-ui-border=move || appearance.get().border.token()
                on:change=move |_| {
                    value.with_value(|value| group.select(value, disabled.get_untracked()));
                }
            />
            <span data-ui-slot="label">{children()}</span>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use pretty_assertions::assert_eq;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn checkbox_group(
        values: Signal<Option<Vec<String>>>,
        default_values: Option<Vec<String>>,
        disabled: Signal<bool>,
    ) -> (CheckboxGroupContext, Rc<RefCell<Vec<Vec<String>>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let selection = ControllableState::new(
            values,
            default_values,
            Some(Callback::new(move |next: Vec<String>| sink.borrow_mut().push(next))),
        );
        let context = CheckboxGroupContext::new(
            "fruits".to_string(),
            Tone::Brand,
            disabled,
            Signal::derive(|| false),
            Signal::derive(|| true),
            selection,
        );
        (context, log)
    }

    #[test]
    fn uncontrolled_group_seeds_from_defaults_and_appends_clicks() {
        let _ = create_runtime();
        let (group, log) = checkbox_group(
            Signal::derive(|| None),
            Some(strings(&["banana"])),
            Signal::derive(|| false),
        );

        assert!(group.is_checked("banana"));
        assert!(!group.is_checked("apple"));

        group.activate("apple", false);

        assert_eq!(*log.borrow(), vec![strings(&["banana", "apple"])]);
        assert_eq!(group.selected(), strings(&["banana", "apple"]));
        for (value, expected) in [("apple", true), ("banana", true), ("orange", false)] {
            assert_eq!(group.is_checked(value), expected, "{value}");
        }
    }

    #[test]
    fn clicking_a_checked_item_removes_it() {
        let _ = create_runtime();
        let (group, log) = checkbox_group(
            Signal::derive(|| None),
            Some(strings(&["banana", "apple", "orange"])),
            Signal::derive(|| false),
        );

        group.activate("apple", false);
        group.activate("apple", false);

        assert_eq!(
            *log.borrow(),
            vec![strings(&["banana", "orange"]), strings(&["banana", "orange", "apple"])]
        );
    }

    #[test]
    fn controlled_group_waits_for_caller_feedback() {
        let _ = create_runtime();
        let values = create_rw_signal(Some(strings(&["banana"])));
        let (group, log) = checkbox_group(
            Signal::derive(move || values.get()),
            Some(strings(&["orange"])),
            Signal::derive(|| false),
        );

        group.activate("apple", false);
        assert_eq!(*log.borrow(), vec![strings(&["banana", "apple"])]);
        assert!(!group.is_checked("apple"));

        values.set(log.borrow().last().cloned());
        assert!(group.is_checked("apple"));
    }

    #[test]
    fn group_and_item_disabled_flags_combine_with_or() {
        let _ = create_runtime();
        let group_disabled = create_rw_signal(true);
        let (group, log) = checkbox_group(
            Signal::derive(|| None),
            None,
            group_disabled.into(),
        );

        assert!(group.is_item_disabled(false));
        assert!(group.is_item_disabled(true));
        group.activate("apple", false);
        group.activate("banana", true);

        group_disabled.set(false);
        assert!(!group.is_item_disabled(false));
        assert!(group.is_item_disabled(true));
        group.activate("banana", true);

        assert!(log.borrow().is_empty());
        assert!(group.selected().is_empty());
    }

    #[test]
    fn group_context_is_shared_with_items_and_missing_outside() {
        let _ = create_runtime();
        let inside = run_as_child(|| {
            let (group, _) = checkbox_group(
                Signal::derive(|| None),
                Some(strings(&["kiwi"])),
                Signal::derive(|| false),
            );
            CHECKBOX_GROUP.provide(group);
            run_as_child(|| {
                let item = use_checkbox_group("CheckboxItem");
                (item.name(), item.tone(), item.is_checked("kiwi"), item.is_required())
            })
        });
        assert_eq!(inside, ("fruits".to_string(), Tone::Brand, true, true));

        let outside = run_as_child(|| CHECKBOX_GROUP.lookup("CheckboxItem"));
        assert_eq!(
            outside.err().map(|err| err.to_string()),
            Some("CheckboxItem must be used within CheckboxGroup".to_string())
        );
    }

    #[test]
    #[should_panic(expected = "CheckboxItem must be used within CheckboxGroup")]
    fn checkbox_item_outside_group_panics() {
        let _ = create_runtime();
        let _ = use_checkbox_group("CheckboxItem");
    }

    fn radio_group(
        value: Signal<Option<String>>,
        default_value: Option<String>,
    ) -> (RadioGroupContext, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let selection = ControllableState::new(
            value,
            default_value,
            Some(Callback::new(move |next: String| sink.borrow_mut().push(next))),
        );
        let context = RadioGroupContext::new(
            "plan".to_string(),
            Tone::Info,
            Signal::derive(|| false),
            Signal::derive(|| false),
            Signal::derive(|| false),
            selection,
        );
        (context, log)
    }

    #[test]
    fn uncontrolled_radio_group_moves_selection() {
        let _ = create_runtime();
        let (group, log) = radio_group(Signal::derive(|| None), Some("starter".to_string()));

        assert!(group.is_selected("starter"));
        group.select("pro", false);
        group.select("pro", false);
        group.select("team", true);

        assert_eq!(*log.borrow(), vec!["pro".to_string()]);
        assert!(group.is_selected("pro"));
        assert!(!group.is_selected("starter"));
    }

    #[test]
    fn controlled_radio_group_only_reports() {
        let _ = create_runtime();
        let (group, log) = radio_group(Signal::derive(|| Some("starter".to_string())), None);

        group.select("team", false);

        assert_eq!(*log.borrow(), vec!["team".to_string()]);
        assert_eq!(group.selected(), "starter");
    }

    #[test]
    fn declined_controlled_radio_choice_reruns_every_radio_reader() {
        let _ = create_runtime();
        let (group, log) = radio_group(Signal::derive(|| Some("starter".to_string())), None);
        let runs = Rc::new(Cell::new(0usize));
        let starter = {
            let runs = Rc::clone(&runs);
            create_memo(move |_| {
                runs.set(runs.get() + 1);
                group.is_selected("starter")
            })
        };
        let team = create_memo(move |_| group.is_selected("team"));

        assert!(starter.get());
        assert!(!team.get());
        assert_eq!(runs.get(), 1);

        group.select("team", false);

        assert_eq!(*log.borrow(), vec!["team".to_string()]);
        assert!(starter.get());
        assert!(!team.get());
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn reselecting_the_controlled_value_does_not_rerun_readers() {
        let _ = create_runtime();
        let (group, log) = radio_group(Signal::derive(|| Some("starter".to_string())), None);
        let runs = Rc::new(Cell::new(0usize));
        let starter = {
            let runs = Rc::clone(&runs);
            create_memo(move |_| {
                runs.set(runs.get() + 1);
                group.is_selected("starter")
            })
        };

        assert!(starter.get());
        group.select("starter", false);
        assert!(starter.get());
        assert_eq!(runs.get(), 1);
        assert!(log.borrow().is_empty());
    }

    #[test]
    #[should_panic(expected = "Radio must be used within RadioGroup")]
    fn radio_outside_group_panics() {
        let _ = create_runtime();
        let _ = use_radio_group("Radio");
    }
}
