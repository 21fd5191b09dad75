use super::*;
use crate::context::ScopedContext;

const NAV: ScopedContext<NavContext> = ScopedContext::new("NavBar");

/// Reads the enclosing [`NavBar`]'s context on behalf of `consumer`.
///
/// # Panics
///
/// Panics when called outside a [`NavBar`].
pub fn use_nav_context(consumer: &'static str) -> NavContext {
    NAV.require(consumer)
}

/// Active location shared by a [`NavBar`] with its [`NavLink`]s.
#[derive(Clone, Copy)]
pub struct NavContext {
    current: Signal<String>,
}

impl NavContext {
    /// Wraps the signal carrying the current path.
    pub fn new(current: Signal<String>) -> Self {
        Self { current }
    }

    /// Whether `href` points at the current location, tracked.
    ///
    /// Trailing slashes are ignored so `/components/` and `/components` match.
    pub fn is_active(&self, href: &str) -> bool {
        self.current
            .with(|current| normalize_path(current) == normalize_path(href))
    }
}

fn normalize_path(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[component]
/// Primary navigation landmark. `current` is the path the router reports as active.
pub fn NavBar(
    #[prop(into)] current: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    NAV.provide(NavContext::new(Signal::derive(move || current.get())));

    view! {
        <nav
            class=merge_layout_class("ui-navbar", layout_class)
            aria-label=aria_label.unwrap_or_else(|| "Primary".to_string())
            data-ui-primitive="true"
            data-ui-kind="navbar"
            data-ui-gap=gap.token()
        >
            <ul data-ui-slot="items">{children()}</ul>
        </nav>
    }
}

#[component]
/// Entry of a [`NavBar`]. Marks itself `aria-current="page"` when its `href` is active.
///
/// # Panics
///
/// Panics when rendered outside a [`NavBar`].
pub fn NavLink(
    #[prop(into)] href: String,
    #[prop(optional)] external: bool,
    children: Children,
) -> impl IntoView {
    let nav = use_nav_context("NavLink");
    let target = store_value(href.clone());
    let active = move || target.with_value(|target| nav.is_active(target));
    let attrs = ExternalLinkAttrs::for_link(external);

    view! {
        <li data-ui-slot="item" data-ui-active=move || bool_token(active())>
            <a
                class="ui-link ui-nav-link"
                href=href
                target=attrs.target
                rel=attrs.rel
                aria-current=move || active().then_some("page")
                data-ui-primitive="true"
                data-ui-kind="nav-link"
                data-ui-tone=move || {
                    if active() {
                        TextTone::Toned(Tone::Brand).token()
                    } else {
                        TextTone::Secondary.token()
                    }
                }
                data-ui-external=bool_token(external)
            >
                {children()}
                {attrs.indicator.map(|icon| view! { <Icon icon size=IconSize::Xs ui_slot="external" /> })}
            </a>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn active_link_matches_the_current_path() {
        let _ = create_runtime();
        let current = create_rw_signal("/".to_string());
        let nav = NavContext::new(current.into());

        assert!(nav.is_active("/"));
        assert!(!nav.is_active("/components"));

        current.set("/components/".to_string());
        assert!(nav.is_active("/components"));
        assert!(!nav.is_active("/"));
    }

    #[test]
    fn normalized_paths_drop_trailing_slashes() {
        for (path, expected) in [("/", "/"), ("", "/"), ("/a/", "/a"), ("/a//", "/a")] {
            assert_eq!(normalize_path(path), expected, "{path}");
        }
    }

    #[test]
    #[should_panic(expected = "NavLink must be used within NavBar")]
    fn nav_link_outside_bar_panics() {
        let _ = create_runtime();
        let _ = use_nav_context("NavLink");
    }
}
