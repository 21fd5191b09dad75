use std::rc::Rc;

use design_system::{ThemeMode, ThemeProvider, ThemeStore};
use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::{Route, Router, Routes};

use crate::config::load_site_config;
use crate::pages::{ComponentsPage, LandingPage, NotFound};
use crate::sections::{SiteFooter, SiteHeader};
use crate::storage::LocalStorageThemeStore;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let config = store_value(load_site_config());
    let store: Rc<dyn ThemeStore> = Rc::new(LocalStorageThemeStore::default());
    let (brand, tagline, nav, footer_note) = config.with_value(|config| {
        (
            config.brand.clone(),
            config.tagline.clone(),
            config.nav.clone(),
            config.footer_note.clone(),
        )
    });

    view! {
        <Title text=brand.clone() />
        <Meta name="description" content=tagline />

        <ThemeProvider store default_mode=ThemeMode::Light>
            <Router>
                <SiteHeader brand=brand.clone() nav />
                <main class="site-root">
                    <Routes>
                        <Route path="" view=move || view! { <LandingPage config=config.get_value() /> } />
                        <Route path="/components" view=ComponentsPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
                <SiteFooter brand note=footer_note />
            </Router>
        </ThemeProvider>
    }
}
