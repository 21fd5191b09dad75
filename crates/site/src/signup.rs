//! Signup form: one instance of every stateful control, in both state modes.

use design_system::prelude::*;
use leptos::*;
use thiserror::Error;

use crate::config::{ChoiceItem, SignupCopy};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Values collected by the signup form before submission.
pub struct SignupDraft {
    pub role: String,
    pub interests: Vec<String>,
    pub plan: String,
    pub updates: bool,
    pub consent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Accepted signup.
pub struct SignupSummary {
    pub role: String,
    pub interests: Vec<String>,
    pub plan: String,
    pub updates: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Reason a draft cannot be submitted.
pub enum SignupError {
    #[error("choose a role")]
    MissingRole,
    #[error("choose a plan")]
    MissingPlan,
    #[error("accept the terms to continue")]
    ConsentRequired,
}

impl SignupDraft {
    /// Checks the draft, reporting the first missing field in form order.
    pub fn validate(&self) -> Result<SignupSummary, SignupError> {
        if self.role.is_empty() {
            return Err(SignupError::MissingRole);
        }
        if self.plan.is_empty() {
            return Err(SignupError::MissingPlan);
        }
        if !self.consent {
            return Err(SignupError::ConsentRequired);
        }
        Ok(SignupSummary {
            role: self.role.clone(),
            interests: self.interests.clone(),
            plan: self.plan.clone(),
            updates: self.updates,
        })
    }
}

fn select_options(choices: &[ChoiceItem]) -> Vec<SelectOption> {
    choices
        .iter()
        .map(|choice| SelectOption::new(choice.value.clone(), choice.label.clone()))
        .collect()
}

#[component]
/// Signup section.
///
/// The role select and the consent checkbox are controlled by this form; the interest group and
/// the updates checkbox keep their own state and report changes.
pub fn SignupForm(copy: SignupCopy) -> impl IntoView {
    let role = create_rw_signal(String::new());
    let consent = create_rw_signal(false);
    let interests = create_rw_signal(copy.default_interests.clone());
    let plan = create_rw_signal(String::new());
    let updates = create_rw_signal(false);
    let submitted = create_rw_signal(None::<Result<SignupSummary, SignupError>>);
    let invalid = move |error: SignupError| {
        Signal::derive(move || matches!(submitted.get(), Some(Err(current)) if current == error))
    };

    let SignupCopy {
        roles,
        interests: interest_choices,
        default_interests,
        plans,
    } = copy;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = SignupDraft {
            role: role.get_untracked(),
            interests: interests.get_untracked(),
            plan: plan.get_untracked(),
            updates: updates.get_untracked(),
            consent: consent.get_untracked(),
        };
        submitted.set(Some(draft.validate()));
    };

    view! {
        <Surface as_kind=ElementKind::Section id="signup" padding=LayoutPadding::Lg layout_class="site-signup">
            <Stack gap=LayoutGap::Lg>
                <Heading level=HeadingLevel::H2>"Get early access"</Heading>
                <form class="site-signup-form" on:submit=on_submit novalidate=true>
                    <Stack gap=LayoutGap::Md>
                        <Select
                            label="Role"
                            name="role"
                            options=select_options(&roles)
                            placeholder="Select a role"
                            required=true
                            invalid=invalid(SignupError::MissingRole)
                            value=Signal::derive(move || Some(role.get()))
                            on_change=Callback::new(move |next: String| role.set(next))
                        />
                        <CheckboxGroup
                            name="interests"
                            label="Interests"
                            description="Pick as many as you like."
                            default_values=default_interests
                            orientation=Orientation::Horizontal
                            on_change=Callback::new(move |next: Vec<String>| interests.set(next))
                        >
                            {interest_choices
                                .into_iter()
                                .map(|choice| view! { <CheckboxItem value=choice.value>{choice.label}</CheckboxItem> })
                                .collect_view()}
                        </CheckboxGroup>
                        <RadioGroup
                            name="plan"
                            label="Plan"
                            required=true
                            invalid=invalid(SignupError::MissingPlan)
                            tone=Tone::Info
                            on_change=Callback::new(move |next: String| plan.set(next))
                        >
                            {plans
                                .into_iter()
                                .map(|choice| view! { <Radio value=choice.value>{choice.label}</Radio> })
                                .collect_view()}
                        </RadioGroup>
                        <Checkbox
                            label="Send me product updates"
                            name="updates"
                            value="yes"
                            on_change=Callback::new(move |change: CheckboxChange| updates.set(change.checked))
                        />
                        <Checkbox
                            label="I accept the terms"
                            name="consent"
                            required=true
                            invalid=invalid(SignupError::ConsentRequired)
                            checked=Signal::derive(move || Some(consent.get()))
                            on_change=Callback::new(move |change: CheckboxChange| consent.set(change.checked))
                        />
                        <Cluster>
                            <Button button_type="submit" trailing_icon=IconName::ArrowRight>
                                "Join the waitlist"
                            </Button>
                        </Cluster>
                    </Stack>
                </form>
                {move || submitted.get().map(|outcome| match outcome {
                    Ok(summary) => view! {
                        <Text role=TextRole::Lead tone=TextTone::Toned(Tone::Success)>
                            {format!(
                                "Thanks! {} plan for a {} with {} interest(s).",
                                summary.plan,
                                summary.role,
                                summary.interests.len()
                            )}
                        </Text>
                    }
                    .into_view(),
                    Err(error) => view! {
                        <Text role=TextRole::Label tone=TextTone::Toned(Tone::Danger)>
                            {error.to_string()}
                        </Text>
                    }
                    .into_view(),
                })}
            </Stack>
        </Surface>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn complete() -> SignupDraft {
        SignupDraft {
            role: "engineer".to_string(),
            interests: vec!["forms".to_string(), "cards".to_string()],
            plan: "team".to_string(),
            updates: true,
            consent: true,
        }
    }

    #[test]
    fn complete_draft_is_accepted() {
        assert_eq!(
            complete().validate(),
            Ok(SignupSummary {
                role: "engineer".to_string(),
                interests: vec!["forms".to_string(), "cards".to_string()],
                plan: "team".to_string(),
                updates: true,
            })
        );
    }

    #[test]
    fn first_missing_field_is_reported() {
        assert_eq!(SignupDraft::default().validate(), Err(SignupError::MissingRole));

        let no_plan = SignupDraft {
            plan: String::new(),
            ..complete()
        };
        assert_eq!(no_plan.validate(), Err(SignupError::MissingPlan));

        let no_consent = SignupDraft {
            consent: false,
            ..complete()
        };
        assert_eq!(no_consent.validate(), Err(SignupError::ConsentRequired));
    }

    #[test]
    fn interests_are_optional() {
        let draft = SignupDraft {
            interests: Vec::new(),
            ..complete()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn choices_become_enabled_select_options() {
        let options = select_options(&[ChoiceItem {
            value: "designer".to_string(),
            label: "Designer".to_string(),
        }]);

        assert_eq!(options, vec![SelectOption::new("designer", "Designer")]);
    }
}
