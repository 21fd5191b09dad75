//! Card compound: [`CardRoot`] plus the parts that read its ambient tone.
//!
//! Every part other than the root fails fast when rendered outside a `CardRoot`.

use super::*;
use crate::context::{ContextError, ScopedContext};

const CARD: ScopedContext<CardContext> = ScopedContext::new("Card.Root");

/// Ambient tone and outline flag established by [`CardRoot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardContext {
    /// Tone inherited by icon, title, and link parts.
    pub tone: Tone,
    /// Whether the root draws a border.
    pub outline: bool,
}

impl CardContext {
    /// Border color of the root for this context.
    pub fn border(&self) -> ColorToken {
        CardBorder::resolve(self.tone, self.outline)
    }
}

/// Looks up the enclosing card's context on behalf of `consumer`.
pub fn use_card_context(consumer: &'static str) -> Result<CardContext, ContextError> {
    CARD.lookup(consumer)
}

fn require_card(consumer: &'static str) -> CardContext {
    CARD.require(consumer)
}

#[component]
/// Card container. Renders an `<article>` landmark and provides tone to every nested part.
pub fn CardRoot(
    #[prop(default = Tone::Neutral)] tone: Tone,
    #[prop(optional)] outline: bool,
    #[prop(default = LayoutPadding::Lg)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let context = CardContext { tone, outline };
    CARD.provide(context);

    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-tone=tone.token()
            data-ui-outline=bool_token(outline)
            data-ui-border=context.border().token()
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Vertical content area of a card.
pub fn CardBody(
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let card = require_card("Card.Body");

    view! {
        <div
            class=merge_layout_class("ui-card-body", layout_class)
            data-ui-slot="body"
            data-ui-tone=card.tone.token()
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Decorative icon badge in the card's tone.
pub fn CardIcon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let card = require_card("Card.Icon");
    let appearance = Appearance::resolve(card.tone, Emphasis::Subtle, InteractionState::Idle);

    view! {
        <span
            class=merge_layout_class("ui-card-icon", layout_class)
            data-ui-slot="icon"
            data-ui-tone=card.tone.token()
            data-ui-surface=appearance.surface.token()
            data-ui-foreground=appearance.foreground.token()
        >
            <Icon icon size />
        </span>
    }
}

#[component]
/// Card heading. Neutral cards use the primary text color; toned cards use the tone.
pub fn CardTitle(
    #[prop(default = HeadingLevel::H3)] level: HeadingLevel,
    children: Children,
) -> impl IntoView {
    let card = require_card("Card.Title");
    let tone = match card.tone {
        Tone::Neutral => TextTone::Primary,
        tone => TextTone::Toned(tone),
    };

    view! {
        <Heading level tone layout_class="ui-card-title" ui_slot="title">
            {children()}
        </Heading>
    }
}

#[component]
/// Secondary copy of a card.
pub fn CardDescription(children: Children) -> impl IntoView {
    let _card = require_card("Card.Description");

    view! {
        <Text
            role=TextRole::Body
            tone=TextTone::Secondary
            layout_class="ui-card-description"
            ui_slot="description"
        >
            {children()}
        </Text>
    }
}

#[component]
/// Call-to-action link in the card's tone.
///
/// External links open in a new tab with `rel="noopener noreferrer"` and a trailing indicator.
pub fn CardLink(
    #[prop(into)] href: String,
    #[prop(optional)] external: bool,
    children: Children,
) -> impl IntoView {
    let card = require_card("Card.Link");
    let tone = match card.tone {
        Tone::Neutral => TextTone::Toned(Tone::Brand),
        tone => TextTone::Toned(tone),
    };

    view! {
        <Link href external tone layout_class="ui-card-link" ui_slot="link">
            {children()}
        </Link>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parts_read_the_nearest_root() {
        let _ = create_runtime();
        let seen = run_as_child(|| {
            CARD.provide(CardContext {
                tone: Tone::Success,
                outline: true,
            });
            run_as_child(|| use_card_context("Card.Icon"))
        });

        assert_eq!(
            seen,
            Ok(CardContext {
                tone: Tone::Success,
                outline: true,
            })
        );
    }

    #[test]
    fn missing_root_is_reported_with_the_part_name() {
        let _ = create_runtime();
        let err = run_as_child(|| use_card_context("Card.Title")).unwrap_err();

        assert_eq!(err.to_string(), "Card.Title must be used within Card.Root");
    }

    #[test]
    #[should_panic(expected = "Card.Root")]
    fn card_icon_outside_root_panics() {
        let _ = create_runtime();
        let _ = require_card("Card.Icon");
    }

    #[test]
    fn border_follows_tone_and_outline() {
        let plain = CardContext {
            tone: Tone::Brand,
            outline: false,
        };
        let outlined = CardContext {
            tone: Tone::Brand,
            outline: true,
        };

        assert_eq!(plain.border(), ColorToken::Transparent);
        assert_eq!(outlined.border(), ColorToken::Base(Tone::Brand));
    }
}
