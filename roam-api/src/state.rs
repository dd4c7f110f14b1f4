use std::sync::Arc;
use roam_catalog::{Chrome, ProjectionOptions};
use roam_core::PackageSource;
use roam_store::app_config::PresentationConfig;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PackageSource>,
    pub projection: ProjectionOptions,
    pub chrome: Arc<Chrome>,
}

impl AppState {
    pub fn new(source: Arc<dyn PackageSource>, projection: ProjectionOptions) -> Self {
        Self {
            source,
            projection,
            chrome: Arc::new(site_chrome()),
        }
    }
}

/// Projection options from the `[presentation]` section; unset keys keep the defaults.
pub fn projection_options(presentation: &PresentationConfig) -> ProjectionOptions {
    let defaults = ProjectionOptions::default();
    ProjectionOptions {
        placeholder_image: presentation
            .placeholder_image
            .clone()
            .unwrap_or(defaults.placeholder_image),
        currency_marker: presentation
            .currency_marker
            .clone()
            .unwrap_or(defaults.currency_marker),
    }
}

/// Navbar above and contact block below every page.
pub fn site_chrome() -> Chrome {
    Chrome::new(
        "<nav class=\"navbar\"><a href=\"/destinations\">Destinations</a></nav>",
        "<footer class=\"contact\"><p>Contact us to book your trip.</p></footer>",
    )
}
