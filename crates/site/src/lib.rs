//! Marketing site assembled from `design_system` components.

mod config;
mod pages;
mod sections;
mod signup;
mod storage;
mod web_app;

pub use config::{load_site_config, ConfigError, SiteConfig};
pub use storage::LocalStorageThemeStore;
pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
