//! Shared layout, typography, control, group, card, and navigation primitives.

use leptos::ev::MouseEvent;
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::{Icon, IconName, IconSize};

mod appearance;
pub mod card;
mod controls;
mod data_display;
mod field;
mod groups;
mod layout;
mod navigation;

pub use appearance::{Appearance, CardBorder, ColorToken, Emphasis, InteractionState};
pub use controls::{
    select_display, Button, Checkbox, CheckboxChange, ExternalLinkAttrs, Link, Select,
    SelectOption,
};
pub use data_display::{Heading, Tag, Text};
pub use field::{FieldLabel, IndicatorTone, RequiredIndicator, RequiredMark};
pub use groups::{
    use_checkbox_group, use_radio_group, CheckboxGroup, CheckboxGroupContext, CheckboxItem, Radio,
    RadioGroup, RadioGroupContext,
};
pub use layout::{Cluster, Divider, Flex, FlexDirection, Grid, Stack, Surface};
pub use navigation::{use_nav_context, NavBar, NavContext, NavLink};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Closed set of semantic color categories.
pub enum Tone {
    /// Default, low-emphasis tone.
    #[default]
    Neutral,
    /// Primary brand accent.
    Brand,
    /// Destructive or error tone.
    Danger,
    /// Cautionary tone.
    Warning,
    /// Positive/confirmation tone.
    Success,
    /// Informational tone.
    Info,
}

impl Tone {
    /// Every tone, in declaration order.
    pub const ALL: [Tone; 6] = [
        Self::Neutral,
        Self::Brand,
        Self::Danger,
        Self::Warning,
        Self::Success,
        Self::Info,
    ];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Brand => "brand",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button and tag sizing tokens.
pub enum ControlSize {
    /// Dense control.
    Sm,
    /// Default control.
    Md,
    /// Large control.
    Lg,
}

impl Default for ControlSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ControlSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    pub(crate) fn icon_size(self) -> IconSize {
        match self {
            Self::Sm => IconSize::Xs,
            Self::Md => IconSize::Sm,
            Self::Lg => IconSize::Md,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Lead paragraph text.
    Lead,
    /// Monospace/code text.
    Code,
}

impl Default for TextRole {
    fn default() -> Self {
        Self::Body
    }
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Lead => "lead",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Secondary or muted text.
    Secondary,
    /// Text colored by a semantic tone.
    Toned(Tone),
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl From<Tone> for TextTone {
    fn from(tone: Tone) -> Self {
        Self::Toned(tone)
    }
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Toned(tone) => tone.token(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Heading levels rendered by [`Heading`].
pub enum HeadingLevel {
    /// Page title.
    H1,
    /// Section title.
    H2,
    /// Subsection title.
    H3,
    /// Minor heading.
    H4,
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::H2
    }
}

impl HeadingLevel {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Element kinds a polymorphic layout primitive may render as.
pub enum ElementKind {
    /// `<div>`.
    Div,
    /// `<section>`.
    Section,
    /// `<article>`.
    Article,
    /// `<aside>`.
    Aside,
    /// `<header>`.
    Header,
    /// `<footer>`.
    Footer,
    /// `<nav>`.
    Nav,
    /// `<main>`.
    Main,
    /// `<ul>`.
    List,
    /// `<li>`.
    ListItem,
    /// `<span>`.
    Span,
}

impl Default for ElementKind {
    fn default() -> Self {
        Self::Div
    }
}

impl ElementKind {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Section => "section",
            Self::Article => "article",
            Self::Aside => "aside",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Nav => "nav",
            Self::Main => "main",
            Self::List => "ul",
            Self::ListItem => "li",
            Self::Span => "span",
        }
    }

    pub(crate) fn element(self) -> HtmlElement<html::AnyElement> {
        match self {
            Self::Div => html::div().into_any(),
            Self::Section => html::section().into_any(),
            Self::Article => html::article().into_any(),
            Self::Aside => html::aside().into_any(),
            Self::Header => html::header().into_any(),
            Self::Footer => html::footer().into_any(),
            Self::Nav => html::nav().into_any(),
            Self::Main => html::main().into_any(),
            Self::List => html::ul().into_any(),
            Self::ListItem => html::li().into_any(),
            Self::Span => html::span().into_any(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Axis along which group items are laid out.
pub enum Orientation {
    /// Items stacked vertically.
    Vertical,
    /// Items in a row.
    Horizontal,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Vertical
    }
}

impl Orientation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
    /// Section-level gap.
    Xl,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for LayoutPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl Default for LayoutAlign {
    fn default() -> Self {
        Self::Stretch
    }
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl Default for LayoutJustify {
    fn default() -> Self {
        Self::Start
    }
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// `aria-*` boolean attribute value that is omitted entirely when false.
pub(crate) fn aria_flag(value: bool) -> Option<&'static str> {
    value.then_some("true")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_non_empty() {
        assert_eq!(merge_layout_class("ui-tag", None), "ui-tag");
        assert_eq!(merge_layout_class("ui-tag", Some("")), "ui-tag");
        assert_eq!(merge_layout_class("ui-tag", Some("hero-tag")), "ui-tag hero-tag");
    }

    #[test]
    fn tones_serialize_as_kebab_case_tokens() {
        for tone in Tone::ALL {
            let encoded = serde_json::to_string(&tone).expect("encode tone");
            assert_eq!(encoded, format!("\"{}\"", tone.token()));
        }
    }

    #[test]
    fn toned_text_reuses_tone_tokens() {
        assert_eq!(TextTone::from(Tone::Danger).token(), "danger");
        assert_eq!(TextTone::Secondary.token(), "secondary");
    }

    #[test]
    fn aria_flags_are_omitted_when_false() {
        assert_eq!(aria_flag(true), Some("true"));
        assert_eq!(aria_flag(false), None);
    }
}
