//! Centralized icon API.
//!
//! Glyphs are stroke paths on a 24x24 grid rendered inline so they inherit `currentColor`.

use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Named glyphs available to every component.
pub enum IconName {
    /// Check mark.
    Check,
    /// Horizontal bar, used for indeterminate checkboxes.
    Minus,
    /// Downward chevron.
    ChevronDown,
    /// Right arrow.
    ArrowRight,
    /// Diagonal arrow marking links that leave the site.
    ArrowUpRight,
    /// Close/dismiss cross.
    Close,
    /// Hamburger menu.
    Menu,
    /// Light theme.
    Sun,
    /// Dark theme.
    Moon,
    /// Sparkles.
    Sparkles,
    /// Shield.
    Shield,
    /// Lightning bolt.
    Bolt,
    /// Layers.
    Layers,
    /// Information circle.
    Info,
    /// Warning triangle.
    Warning,
    /// Star.
    Star,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Minus => "minus",
            Self::ChevronDown => "chevron-down",
            Self::ArrowRight => "arrow-right",
            Self::ArrowUpRight => "arrow-up-right",
            Self::Close => "close",
            Self::Menu => "menu",
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Sparkles => "sparkles",
            Self::Shield => "shield",
            Self::Bolt => "bolt",
            Self::Layers => "layers",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Star => "star",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Check => "M5 12.5l4.5 4.5L19 7.5",
            Self::Minus => "M6 12h12",
            Self::ChevronDown => "M6 9l6 6 6-6",
            Self::ArrowRight => "M5 12h14M13 6l6 6-6 6",
            Self::ArrowUpRight => "M7 17L17 7M9 7h8v8",
            Self::Close => "M6 6l12 12M18 6L6 18",
            Self::Menu => "M4 7h16M4 12h16M4 17h16",
            Self::Sun => "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8zM12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M4.9 19.1l1.4-1.4M17.7 6.3l1.4-1.4",
            Self::Moon => "M20 14.5A8 8 0 0 1 9.5 4a8 8 0 1 0 10.5 10.5z",
            Self::Sparkles => "M12 3l1.8 4.7L18.5 9.5l-4.7 1.8L12 16l-1.8-4.7L5.5 9.5l4.7-1.8zM19 15l.8 2.2L22 18l-2.2.8L19 21l-.8-2.2L16 18l2.2-.8z",
            Self::Shield => "M12 3l8 3v6c0 4.5-3.4 8.3-8 9-4.6-.7-8-4.5-8-9V6z",
            Self::Bolt => "M13 2L4 14h7l-1 8 9-12h-7z",
            Self::Layers => "M12 3l9 5-9 5-9-5zM3 13l9 5 9-5",
            Self::Info => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 16v-5M12 8h.01",
            Self::Warning => "M12 3L2 20h20zM12 10v4M12 17h.01",
            Self::Star => "M12 3l2.8 5.7 6.2.9-4.5 4.4 1 6.2L12 17.3 6.5 20.2l1-6.2L3 9.6l6.2-.9z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon box sizes.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    Sm,
    /// 20px.
    Md,
    /// 32px.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn pixels(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }
}

#[component]
/// Decorative inline SVG glyph. Pass `label` when the icon carries meaning on its own.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    let pixels = size.pixels();
    let decorative = label.is_none();
    let role = label.as_ref().map(|_| "img");

    view! {
        <svg
            class="ui-icon"
            viewBox="0 0 24 24"
            width=pixels
            height=pixels
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            role=role
            aria-label=label
            aria-hidden=decorative.then_some("true")
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-slot=ui_slot
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            <path d=icon.path()></path>
        </svg>
    }
}
