//! Toned component library for marketing sites and product forms.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable `data-ui-*`
//! DOM contract consumed by the stylesheet. Stateful inputs share one controlled/uncontrolled
//! resolver ([`ControllableState`]); compound widgets (checkbox and radio groups, cards, the
//! navigation bar) share state with their leaves through [`ScopedContext`] descriptors that fail
//! fast when a leaf renders outside its root.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod context;
mod icon;
mod primitives;
mod state;
mod theme;

pub use context::{ContextError, ScopedContext};
pub use icon::{Icon, IconName, IconSize};
pub use primitives::card;
pub use primitives::{
    select_display, use_checkbox_group, use_nav_context, use_radio_group, Appearance, Button,
    CardBorder, Checkbox, CheckboxChange, CheckboxGroup, CheckboxGroupContext, CheckboxItem,
    Cluster, ColorToken, ControlSize, Divider, ElementKind, Emphasis, ExternalLinkAttrs,
    FieldLabel, Flex, FlexDirection, Grid, Heading, HeadingLevel, IndicatorTone, InteractionState,
    LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, Link, NavBar, NavContext, NavLink,
    Orientation, Radio, RadioGroup, RadioGroupContext, RequiredIndicator, RequiredMark, Select,
    SelectOption, Stack, Surface, Tag, Text, TextRole, TextTone, Tone,
};
pub use state::{is_selected, toggle_selection, ControllableState, ToggleState, ValueMode};
pub use theme::{
    decode_mode, encode_mode, use_theme, MemoryThemeStore, NoopThemeStore, ThemeContext,
    ThemeMode, ThemeProvider, ThemeStore, ThemeStoreError, ThemeToggle, THEME_STORAGE_KEY,
};

/// Convenience imports for page crates composing the shared primitive set.
pub mod prelude {
    pub use crate::card::{CardBody, CardDescription, CardIcon, CardLink, CardRoot, CardTitle};
    pub use crate::{
        Button, Checkbox, CheckboxChange, CheckboxGroup, CheckboxItem, Cluster, ControlSize,
        Divider, ElementKind, Emphasis, Flex, FlexDirection, Grid, Heading, HeadingLevel, Icon,
        IconName, IconSize, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, Link, NavBar,
        NavLink, Orientation, Radio, RadioGroup, Select, SelectOption, Stack, Surface, Tag, Text,
        TextRole, TextTone, ThemeMode, ThemeProvider, ThemeToggle, Tone,
    };
}
