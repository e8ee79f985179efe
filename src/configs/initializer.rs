// classifieds/src/configs/initializer.rs
use actix_session::{config::PersistentSession, storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use anyhow::{Context as _, Error as AnyhowError};
use env_logger::Env;
use log::{debug, info, warn};
use std::str::FromStr;
use std::sync::Arc;
use std::{env, time::Duration};

use crate::controllers::home_controller::not_found;
use crate::registry::{default_registry, FieldConfigRegistry};
use crate::resolver::FieldResolver;
use crate::router::register_routes;
use crate::services::api_service::{DEFAULT_API_BASE_URL, DEFAULT_FETCH_TIMEOUT};
use crate::services::{CachedCatalogApi, CatalogApi, HttpCatalogApi, MockDataService};

const MIN_SESSION_SECRET_LEN: usize = 64;
const LOCALE_COOKIE_TTL_SECS: i64 = 60 * 60 * 24 * 365;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub fetch_timeout: Duration,
    pub cache_ttl: Duration,
    pub submit_delay: Duration,
    pub mock_delay: Duration,
    pub session_secret: String,
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            cache_ttl: Duration::from_secs(300),
            submit_delay: Duration::from_millis(1000),
            mock_delay: Duration::from_millis(800),
            session_secret: String::new(),
            environment: "development".to_string(),
        }
    }
}

fn env_parse<T>(name: &str, default: T) -> Result<T, Box<dyn std::error::Error>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| format!("{} has an invalid value '{}': {}", name, raw, e).into()),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let defaults = Self::default();
        let session_secret = match env::var("SESSION_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                warn!("⚠️  SESSION_SECRET not set, using generated key - NOT suitable for production!");
                String::new()
            }
            Err(_) => return Err("SESSION_SECRET is required in production".into()),
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env_parse("PORT", defaults.port)?,
            api_base_url: env::var("API_BASE_URL").unwrap_or(defaults.api_base_url),
            fetch_timeout: Duration::from_secs(env_parse("FETCH_TIMEOUT_SECS", defaults.fetch_timeout.as_secs())?),
            cache_ttl: Duration::from_secs(env_parse("CACHE_TTL_SECS", defaults.cache_ttl.as_secs())?),
            submit_delay: Duration::from_millis(env_parse("SUBMIT_DELAY_MS", defaults.submit_delay.as_millis() as u64)?),
            mock_delay: Duration::from_millis(env_parse("MOCK_DELAY_MS", defaults.mock_delay.as_millis() as u64)?),
            session_secret,
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn load_session_key(config: &AppConfig) -> Result<Key, Box<dyn std::error::Error>> {
    if config.session_secret.is_empty() {
        if cfg!(debug_assertions) {
            warn!("⚠️  Using generated session key - NOT suitable for production!");
            return Ok(Key::generate());
        }
        return Err("SESSION_SECRET environment variable is required in production".into());
    }
    if config.session_secret.len() < MIN_SESSION_SECRET_LEN {
        return Err(format!("SESSION_SECRET must be at least {} bytes long", MIN_SESSION_SECRET_LEN).into());
    }
    Ok(Key::from(config.session_secret.as_bytes()))
}

fn create_session_middleware(key: Key, config: &AppConfig) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("classifieds_session".to_string())
        .cookie_secure(config.is_production())
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(
            PersistentSession::default()
                .session_ttl(actix_web::cookie::time::Duration::seconds(LOCALE_COOKIE_TTL_SECS)),
        )
        .build()
}

pub fn get_app_config() -> AppConfig {
    AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("❌ Classifieds configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Installs the `RUST_LOG`-filtered logger. Needs no configuration, so it
/// can run before the environment is read.
pub fn setup_logging() {
    if env::var("CLASSIFIEDS_LOGGING_INITIALIZED").is_err() {
        let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_LEVEL))
            .format_timestamp_millis()
            .try_init();

        env::set_var("CLASSIFIEDS_LOGGING_INITIALIZED", "true");
        info!("✅ Classifieds logging initialized");
        debug!("🔍 Debug logging active");
    }
}

/// The key is derived once so every worker signs cookies the same way.
pub fn get_session_key(config: &AppConfig) -> Key {
    load_session_key(config).unwrap_or_else(|e| {
        eprintln!("❌ Session configuration error: {}", e);
        std::process::exit(1);
    })
}

pub fn get_session_middleware(key: Key, config: &AppConfig) -> SessionMiddleware<CookieSessionStore> {
    create_session_middleware(key, config)
}

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub api: Arc<dyn CatalogApi>,
    pub resolver: FieldResolver,
    pub ads: MockDataService,
}

impl AppState {
    pub fn new(config: AppConfig, registry: Arc<FieldConfigRegistry>, api: Arc<dyn CatalogApi>) -> Self {
        Self {
            resolver: FieldResolver::new(registry, api.clone()),
            ads: MockDataService::new(config.mock_delay),
            api,
            config,
        }
    }

    pub fn registry(&self) -> &FieldConfigRegistry {
        self.resolver.registry()
    }
}

/// Validates the built-in field registry and wires the remote catalog
/// behind its cache.
pub async fn classifieds_initialize(config: AppConfig) -> Result<AppState, AnyhowError> {
    let registry = Arc::new(default_registry().clone());
    registry
        .validate()
        .context("built-in category field registry is invalid")?;
    info!("📋 Field registry loaded with {} families", registry.len());

    let http = HttpCatalogApi::new(&config.api_base_url, config.fetch_timeout)
        .context("failed to build the catalog HTTP client")?;
    info!(
        "🌐 Catalog API at {} (timeout {:?}, cache ttl {:?})",
        http.base_url(),
        config.fetch_timeout,
        config.cache_ttl
    );
    let api: Arc<dyn CatalogApi> = Arc::new(CachedCatalogApi::new(http, config.cache_ttl));

    Ok(AppState::new(config, registry, api))
}

pub fn configure_classifieds_services(cfg: &mut web::ServiceConfig, state: web::Data<AppState>) {
    cfg.app_data(state)
        .service(register_routes())
        .default_service(web::route().to(not_found));
}
