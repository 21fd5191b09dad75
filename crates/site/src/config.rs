//! Site copy and navigation loaded from the embedded `site.json`.

use design_system::{IconName, Tone};
use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED_SITE_JSON: &str = include_str!("../assets/site.json");

#[derive(Debug, Error)]
/// Failure turning `site.json` into a [`SiteConfig`].
pub enum ConfigError {
    /// The document is not valid JSON for the schema.
    #[error("site config is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but is unusable.
    #[error("site config is invalid: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Top-level navigation entry.
pub struct NavItem {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Hero copy and calls to action.
pub struct HeroCopy {
    pub eyebrow: String,
    pub title: String,
    pub lead: String,
    pub primary_cta: NavItem,
    #[serde(default)]
    pub secondary_cta: Option<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One card of the feature grid.
pub struct FeatureCard {
    pub icon: IconName,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub outline: bool,
    pub title: String,
    pub description: String,
    pub link: NavItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Entry of the tag cloud.
pub struct TagItem {
    pub label: String,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Choice offered by a signup form control.
pub struct ChoiceItem {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Option lists of the signup form.
pub struct SignupCopy {
    #[serde(default)]
    pub roles: Vec<ChoiceItem>,
    #[serde(default)]
    pub interests: Vec<ChoiceItem>,
    #[serde(default)]
    pub default_interests: Vec<String>,
    #[serde(default)]
    pub plans: Vec<ChoiceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Everything the landing and gallery pages render that is not component structure.
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    pub hero: HeroCopy,
    #[serde(default)]
    pub features: Vec<FeatureCard>,
    #[serde(default)]
    pub tags: Vec<TagItem>,
    #[serde(default)]
    pub signup: SignupCopy,
    #[serde(default)]
    pub footer_note: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Design System".to_string(),
            tagline: "Toned components for product and marketing pages.".to_string(),
            nav: vec![
                NavItem {
                    label: "Home".to_string(),
                    href: "/".to_string(),
                    external: false,
                },
                NavItem {
                    label: "Components".to_string(),
                    href: "/components".to_string(),
                    external: false,
                },
            ],
            hero: HeroCopy {
                eyebrow: "Design system".to_string(),
                title: "Build pages from one set of parts".to_string(),
                lead: "Buttons, fields, cards, and tags that share tone and state rules."
                    .to_string(),
                primary_cta: NavItem {
                    label: "Browse components".to_string(),
                    href: "/components".to_string(),
                    external: false,
                },
                secondary_cta: None,
            },
            features: Vec::new(),
            tags: Vec::new(),
            signup: SignupCopy::default(),
            footer_note: String::new(),
        }
    }
}

impl SiteConfig {
    /// Parses and validates a `site.json` document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::Invalid`] when the
    /// brand is blank or a navigation entry has no `href`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.brand.trim().is_empty() {
            return Err(ConfigError::Invalid("brand is blank".to_string()));
        }
        let links = self
            .nav
            .iter()
            .chain(std::iter::once(&self.hero.primary_cta))
            .chain(self.hero.secondary_cta.iter())
            .chain(self.features.iter().map(|feature| &feature.link));
        if let Some(link) = links.into_iter().find(|link| link.href.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "link `{}` has an empty href",
                link.label
            )));
        }
        Ok(())
    }
}

/// Loads the embedded configuration, falling back to [`SiteConfig::default`] when it is unusable.
pub fn load_site_config() -> SiteConfig {
    SiteConfig::from_json(EMBEDDED_SITE_JSON).unwrap_or_else(|err| {
        logging::warn!("{err}; using the built-in site config");
        SiteConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_parses_and_validates() {
        let config = SiteConfig::from_json(EMBEDDED_SITE_JSON).expect("embedded config");

        assert!(!config.features.is_empty());
        assert!(config.features.iter().any(|feature| feature.link.external));
        assert!(config.nav.iter().any(|item| item.href == "/components"));
        for interest in &config.signup.default_interests {
            assert!(
                config.signup.interests.iter().any(|item| &item.value == interest),
                "default interest `{interest}` is not offered"
            );
        }
    }

    #[test]
    fn optional_sections_default_when_absent() {
        let raw = r#"{
            "brand": "Acme",
            "tagline": "Parts",
            "hero": {
                "eyebrow": "New",
                "title": "Hello",
                "lead": "World",
                "primary_cta": { "label": "Go", "href": "/go" }
            }
        }"#;
        let config = SiteConfig::from_json(raw).expect("minimal config");

        assert_eq!(config.brand, "Acme");
        assert_eq!(config.nav, Vec::new());
        assert_eq!(config.signup, SignupCopy::default());
        assert_eq!(config.hero.secondary_cta, None);
        assert!(!config.hero.primary_cta.external);
    }

    #[test]
    fn tones_and_icons_decode_from_kebab_case() {
        let raw = r#"{ "icon": "arrow-right", "tone": "success", "title": "T",
            "description": "D", "link": { "label": "L", "href": "/l", "external": true } }"#;
        let card: FeatureCard = serde_json::from_str(raw).expect("feature card");

        assert_eq!(card.icon, IconName::ArrowRight);
        assert_eq!(card.tone, Tone::Success);
        assert!(!card.outline);
    }

    #[test]
    fn malformed_and_invalid_documents_are_rejected() {
        assert!(matches!(
            SiteConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));

        let mut blank = SiteConfig::default();
        blank.brand = "  ".to_string();
        let raw = serde_json::to_string(&blank).expect("encode");
        assert!(matches!(
            SiteConfig::from_json(&raw),
            Err(ConfigError::Invalid(message)) if message == "brand is blank"
        ));

        let mut broken_link = SiteConfig::default();
        broken_link.nav[1].href = String::new();
        let raw = serde_json::to_string(&broken_link).expect("encode");
        let err = SiteConfig::from_json(&raw).expect_err("empty href");
        assert_eq!(
            err.to_string(),
            "site config is invalid: link `Components` has an empty href"
        );
    }

    #[test]
    fn default_config_is_valid() {
        let raw = serde_json::to_string(&SiteConfig::default()).expect("encode");
        assert_eq!(SiteConfig::from_json(&raw).expect("default"), SiteConfig::default());
    }
}
