// classifieds/src/lib.rs

pub mod configs;
pub mod controllers;
pub mod error;
pub mod form;
pub mod health;
pub mod helpers;
pub mod locale;
pub mod models;
pub mod registry;
pub mod resolver;
pub mod router;
pub mod services;

// Configuration and app wiring
pub use configs::initializer::{
    classifieds_initialize,
    configure_classifieds_services,
    get_app_config,
    get_session_key,
    get_session_middleware,
    setup_logging,
    AppConfig,
    AppState,
};

pub use error::{ClassifiedsError, FetchError, RegistryError};
pub use locale::{Locale, LocaleContext};
pub use registry::{default_registry, FieldConfigRegistry};
pub use resolver::{FieldResolver, FieldSource, ResolvedField, ResolvedFields};
pub use form::{validate, FormData, FormErrors, FormValue, PostAdFlow};
pub use services::{CachedCatalogApi, CatalogApi, FieldQueryOptions, HttpCatalogApi, MockDataService};

pub use router::register_routes;

pub use helpers::form_helper::{render_field, InputContract};
pub use helpers::template_helper::{render_404, render_500, render_template};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

pub mod prelude {
    pub use crate::{
        AppConfig,
        AppState,
        CatalogApi,
        FieldResolver,
        FormData,
        FormValue,
        LocaleContext,
        PostAdFlow,
        ResolvedFields,
        render_field,
        validate,
    };
}
