//! Controlled/uncontrolled value reconciliation shared by every stateful input.
//!
//! An input is *controlled* when the caller supplies a value on first render and *uncontrolled*
//! otherwise. The mode is fixed when the [`ControllableState`] is created. Switching modes after
//! mount is a caller error: a controlled input that stops receiving a value keeps showing the last
//! value it observed, and an uncontrolled input ignores values that appear later.

use leptos::*;

/// Ownership mode of a stateful input, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMode {
    /// The caller owns the value and feeds it back after every change.
    Controlled,
    /// The component owns the value, seeded from its default.
    Uncontrolled,
}

impl ValueMode {
    /// Derives the mode from the external value observed on first render.
    pub fn detect<T>(external: Option<&T>) -> Self {
        if external.is_some() {
            Self::Controlled
        } else {
            Self::Uncontrolled
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Controlled => "controlled",
            Self::Uncontrolled => "uncontrolled",
        }
    }
}

/// Reactive resolver deciding, per read, whether the displayed value comes from the caller or
/// from component-owned state, and routing user-driven changes to the right sink.
pub struct ControllableState<T: 'static> {
    mode: ValueMode,
    external: Signal<Option<T>>,
    internal: RwSignal<T>,
    last_external: StoredValue<T>,
    resync: Trigger,
    warned: StoredValue<bool>,
    on_change: Option<Callback<T>>,
}

impl<T: 'static> Clone for ControllableState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ControllableState<T> {}

impl<T: Clone + Default + 'static> ControllableState<T> {
    /// Creates the resolver, fixing the mode from the current external value.
    ///
    /// `default` only seeds uncontrolled state; when both are present the external value wins.
    pub fn new(
        external: Signal<Option<T>>,
        default: Option<T>,
        on_change: Option<Callback<T>>,
    ) -> Self {
        let initial = external.get_untracked();
        let mode = ValueMode::detect(initial.as_ref());
        let seed = initial.clone().or(default).unwrap_or_default();

        Self {
            mode,
            external,
            internal: create_rw_signal(seed.clone()),
            last_external: store_value(initial.unwrap_or(seed)),
            resync: create_trigger(),
            warned: store_value(false),
            on_change,
        }
    }

    /// Ownership mode fixed at construction.
    pub fn mode(&self) -> ValueMode {
        self.mode
    }

    /// Returns `true` when the caller owns the value.
    pub fn is_controlled(&self) -> bool {
        self.mode == ValueMode::Controlled
    }

    /// Displayed value, tracked by the current reactive observer.
    ///
    /// Readers also re-run after every [`ControllableState::set`] in controlled mode, so a DOM
    /// control that changed itself natively is re-asserted to the caller's value.
    pub fn get(&self) -> T {
        match self.mode {
            ValueMode::Controlled => {
                self.resync.track();
                match self.external.get() {
                    Some(value) => {
                        self.last_external.set_value(value.clone());
                        value
                    }
                    None => {
                        if !self.warned.get_value() {
                            self.warned.set_value(true);
                            logging::debug_warn!(
                                "controlled input lost its value after mount; showing the last value"
                            );
                        }
                        self.last_external.get_value()
                    }
                }
            }
            ValueMode::Uncontrolled => self.internal.get(),
        }
    }

    /// Applies `f` to the displayed value, tracked.
    pub fn with_current<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.get())
    }

    /// Displayed value without subscribing the current observer.
    pub fn get_untracked(&self) -> T {
        match self.mode {
            ValueMode::Controlled => self
                .external
                .get_untracked()
                .unwrap_or_else(|| self.last_external.get_value()),
            ValueMode::Uncontrolled => self.internal.get_untracked(),
        }
    }

    /// Read-only signal over the displayed value.
    pub fn signal(&self) -> Signal<T> {
        let state = *self;
        Signal::derive(move || state.get())
    }

    /// Commits a user-driven change.
    ///
    /// Uncontrolled state is written before `on_change` runs; controlled state is left to the
    /// caller.
    pub fn set(&self, next: T) {
        match self.mode {
            ValueMode::Uncontrolled => self.internal.set(next.clone()),
            ValueMode::Controlled => self.resync.notify(),
        }
        if let Some(on_change) = self.on_change.as_ref() {
            on_change.call(next);
        }
    }

    /// Computes the next value from the displayed one and commits it.
    pub fn update(&self, next: impl FnOnce(&T) -> T) {
        let current = self.get_untracked();
        self.set(next(&current));
    }
}

/// Returns `true` when `value` is part of the selection.
pub fn is_selected(selection: &[String], value: &str) -> bool {
    selection.iter().any(|entry| entry == value)
}

/// Computes the selection after toggling `value`.
///
/// Checking appends the value unless it is already present. Unchecking removes the first matching
/// entry. The relative order of every other entry is preserved.
pub fn toggle_selection(selection: &[String], value: &str, checked: bool) -> Vec<String> {
    let mut next = selection.to_vec();
    if checked {
        if !is_selected(selection, value) {
            next.push(value.to_string());
        }
    } else if let Some(index) = next.iter().position(|entry| entry == value) {
        next.remove(index);
    }
    next
}

/// Boolean dual-mode state gated by a disabled flag, shared by checkboxes and selectable tags.
#[derive(Clone, Copy)]
pub struct ToggleState {
    state: ControllableState<bool>,
    disabled: Signal<bool>,
}

impl ToggleState {
    /// Wraps `state` so activations are ignored while `disabled` holds.
    pub fn new(state: ControllableState<bool>, disabled: Signal<bool>) -> Self {
        Self { state, disabled }
    }

    /// Displayed on/off value, tracked.
    pub fn is_on(&self) -> bool {
        self.state.get()
    }

    /// Current disabled flag, tracked.
    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Underlying resolver.
    pub fn state(&self) -> ControllableState<bool> {
        self.state
    }

    /// Handles a click or keyboard activation. Disabled toggles neither change nor notify.
    pub fn activate(&self) {
        if self.disabled.get_untracked() {
            return;
        }
        self.state.update(|on| !on);
    }
}
