//! Compound variant resolution.
//!
//! Every `tone x emphasis x state` combination maps to exactly one [`Appearance`]. Components emit
//! the resolved color tokens as `data-ui-surface`, `data-ui-foreground`, and `data-ui-border`
//! so the stylesheet never has to re-derive precedence between selection, disablement, and tone.

use super::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named color slot consumed by the stylesheet.
pub enum ColorToken {
    /// No paint.
    Transparent,
    /// Neutral muted fill used by disabled controls.
    Muted,
    /// Muted foreground used by disabled controls.
    Disabled,
    /// Foreground placed on a solid tone fill.
    OnTone,
    /// Base shade of a tone.
    Base(Tone),
    /// Low-contrast tint of a tone.
    Soft(Tone),
    /// High-contrast shade of a tone.
    Strong(Tone),
}

impl ColorToken {
    /// Stylesheet token for this slot, for example `brand-soft`.
    pub fn token(self) -> String {
        match self {
            Self::Transparent => "transparent".to_string(),
            Self::Muted => "muted".to_string(),
            Self::Disabled => "disabled".to_string(),
            Self::OnTone => "on-tone".to_string(),
            Self::Base(tone) => tone.token().to_string(),
            Self::Soft(tone) => format!("{}-soft", tone.token()),
            Self::Strong(tone) => format!("{}-strong", tone.token()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Visual weight of a toned control.
pub enum Emphasis {
    /// Filled with the tone.
    Solid,
    /// Tinted fill, toned text.
    Subtle,
    /// Toned border and text, no fill.
    Outline,
}

impl Default for Emphasis {
    fn default() -> Self {
        Self::Subtle
    }
}

impl Emphasis {
    /// Every emphasis, in declaration order.
    pub const ALL: [Emphasis; 3] = [Self::Solid, Self::Subtle, Self::Outline];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Subtle => "subtle",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Interaction state feeding compound variant resolution.
pub enum InteractionState {
    /// Resting state.
    Idle,
    /// Selected, checked, or pressed.
    Selected,
    /// Non-interactive.
    Disabled,
}

impl InteractionState {
    /// Every state, in declaration order.
    pub const ALL: [InteractionState; 3] = [Self::Idle, Self::Selected, Self::Disabled];

    /// Folds the two flags with disablement taking precedence.
    pub fn from_flags(selected: bool, disabled: bool) -> Self {
        if disabled {
            Self::Disabled
        } else if selected {
            Self::Selected
        } else {
            Self::Idle
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Selected => "selected",
            Self::Disabled => "disabled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Resolved paint for a toned control.
pub struct Appearance {
    /// Fill color.
    pub surface: ColorToken,
    /// Text and icon color.
    pub foreground: ColorToken,
    /// Border color.
    pub border: ColorToken,
}

impl Appearance {
    /// Resolves the single appearance for a variant combination.
    pub fn resolve(tone: Tone, emphasis: Emphasis, state: InteractionState) -> Self {
        match (state, emphasis) {
            (InteractionState::Disabled, Emphasis::Outline) => Self {
                surface: ColorToken::Transparent,
                foreground: ColorToken::Disabled,
                border: ColorToken::Muted,
            },
            (InteractionState::Disabled, _) => Self {
                surface: ColorToken::Muted,
                foreground: ColorToken::Disabled,
                border: ColorToken::Muted,
            },
            (InteractionState::Selected, Emphasis::Solid) => Self {
                surface: ColorToken::Strong(tone),
                foreground: ColorToken::OnTone,
                border: ColorToken::Strong(tone),
            },
            (InteractionState::Selected, _) | (InteractionState::Idle, Emphasis::Solid) => Self {
                surface: ColorToken::Base(tone),
                foreground: ColorToken::OnTone,
                border: ColorToken::Base(tone),
            },
            (InteractionState::Idle, Emphasis::Subtle) => Self {
                surface: ColorToken::Soft(tone),
                foreground: ColorToken::Base(tone),
                border: ColorToken::Transparent,
            },
            (InteractionState::Idle, Emphasis::Outline) => Self {
                surface: ColorToken::Transparent,
                foreground: ColorToken::Base(tone),
                border: ColorToken::Base(tone),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Border paint for a card root.
pub struct CardBorder;

impl CardBorder {
    /// Neutral outlined cards use the muted border; toned outlined cards use the tone.
    pub fn resolve(tone: Tone, outline: bool) -> ColorToken {
        match (outline, tone) {
            (false, _) => ColorToken::Transparent,
            (true, Tone::Neutral) => ColorToken::Muted,
            (true, tone) => ColorToken::Base(tone),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_combination_resolves_deterministically() {
        let mut seen = HashSet::new();
        for tone in Tone::ALL {
            for emphasis in Emphasis::ALL {
                for state in InteractionState::ALL {
                    let first = Appearance::resolve(tone, emphasis, state);
                    assert_eq!(first, Appearance::resolve(tone, emphasis, state));
                    seen.insert((tone, emphasis, state, first));
                }
            }
        }
        assert_eq!(seen.len(), Tone::ALL.len() * Emphasis::ALL.len() * InteractionState::ALL.len());
    }

    #[test]
    fn disabled_ignores_tone() {
        for emphasis in Emphasis::ALL {
            let neutral = Appearance::resolve(Tone::Neutral, emphasis, InteractionState::Disabled);
            for tone in Tone::ALL {
                assert_eq!(
                    Appearance::resolve(tone, emphasis, InteractionState::Disabled),
                    neutral
                );
            }
            assert_eq!(neutral.foreground, ColorToken::Disabled);
        }
    }

    #[test]
    fn selection_promotes_subtle_and_outline_to_solid() {
        let solid = Appearance::resolve(Tone::Success, Emphasis::Solid, InteractionState::Idle);
        for emphasis in [Emphasis::Subtle, Emphasis::Outline] {
            assert_eq!(
                Appearance::resolve(Tone::Success, emphasis, InteractionState::Selected),
                solid
            );
        }
        assert_eq!(
            Appearance::resolve(Tone::Success, Emphasis::Solid, InteractionState::Selected).surface,
            ColorToken::Strong(Tone::Success)
        );
    }

    #[test]
    fn idle_variants_differ_by_emphasis() {
        let subtle = Appearance::resolve(Tone::Info, Emphasis::Subtle, InteractionState::Idle);
        let outline = Appearance::resolve(Tone::Info, Emphasis::Outline, InteractionState::Idle);
        assert_eq!(subtle.surface.token(), "info-soft");
        assert_eq!(subtle.border, ColorToken::Transparent);
        assert_eq!(outline.surface, ColorToken::Transparent);
        assert_eq!(outline.border.token(), "info");
    }

    #[test]
    fn disabled_flag_takes_precedence_over_selection() {
        assert_eq!(InteractionState::from_flags(true, true), InteractionState::Disabled);
        assert_eq!(InteractionState::from_flags(true, false), InteractionState::Selected);
        assert_eq!(InteractionState::from_flags(false, false), InteractionState::Idle);
    }

    #[test]
    fn card_border_follows_outline_and_tone() {
        assert_eq!(CardBorder::resolve(Tone::Danger, false), ColorToken::Transparent);
        assert_eq!(CardBorder::resolve(Tone::Neutral, true), ColorToken::Muted);
        assert_eq!(CardBorder::resolve(Tone::Danger, true).token(), "danger");
    }
}
