use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Color of the required marker.
pub enum IndicatorTone {
    /// Alert color on an interactive control.
    Danger,
    /// Muted color on a disabled control or group.
    Muted,
}

impl IndicatorTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Muted => "muted",
        }
    }
}

/// Required-marker derivation shared by standalone controls and group legends.
pub struct RequiredIndicator;

impl RequiredIndicator {
    /// Returns the marker tone, or `None` when no marker renders.
    ///
    /// A marker needs both `required` and a non-blank label. Disabled scopes mute it.
    pub fn derive(required: bool, label: Option<&str>, disabled: bool) -> Option<IndicatorTone> {
        let has_label = label.is_some_and(|label| !label.trim().is_empty());
        if !(required && has_label) {
            return None;
        }
        Some(if disabled {
            IndicatorTone::Muted
        } else {
            IndicatorTone::Danger
        })
    }
}

#[component]
/// Required `*` marker. Hidden from assistive technology; `aria-required` carries the meaning.
pub fn RequiredMark(#[prop(into)] tone: MaybeSignal<IndicatorTone>) -> impl IntoView {
    view! {
        <span
            class="ui-required-mark"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="required-mark"
            data-ui-tone=move || tone.get().token()
        >
            "*"
        </span>
    }
}

#[component]
/// Label text plus the derived required marker.
pub fn FieldLabel(
    #[prop(optional)] layout_class: Option<&'static str>,
    label: Option<String>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    let label = store_value(label);
    let marker = move || {
        label.with_value(|label| {
            RequiredIndicator::derive(required.get(), label.as_deref(), disabled.get())
        })
    };

    view! {
        <span
            class=merge_layout_class("ui-field-label", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-label"
            data-ui-slot=ui_slot.unwrap_or("label")
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {label.get_value()}
            {move || marker().map(|tone| view! { <RequiredMark tone /> })}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn indicator_requires_both_flag_and_label() {
        assert_eq!(RequiredIndicator::derive(false, Some("Email"), false), None);
        assert_eq!(RequiredIndicator::derive(true, None, false), None);
        assert_eq!(RequiredIndicator::derive(true, Some(""), false), None);
        assert_eq!(RequiredIndicator::derive(true, Some("   "), false), None);
        assert_eq!(
            RequiredIndicator::derive(true, Some("Email"), false),
            Some(IndicatorTone::Danger)
        );
    }

    #[test]
    fn disabled_scope_mutes_the_indicator() {
        assert_eq!(
            RequiredIndicator::derive(true, Some("Fruits"), true),
            Some(IndicatorTone::Muted)
        );
        assert_eq!(RequiredIndicator::derive(false, Some("Fruits"), true), None);
    }
}
