// classifieds/src/resolver.rs
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::form::PostAdFlow;
use crate::models::{CategoryField, CategoryFieldConfig, CategoryFieldsResponse, CustomField, RemoteFieldKind};
use crate::registry::FieldConfigRegistry;
use crate::services::api_service::{CatalogApi, FieldQueryOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSource {
    Config,
    Api,
    None,
}

/// One field of a resolved set, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "field", rename_all = "lowercase")]
pub enum ResolvedField {
    Config(CustomField),
    Api(CategoryField),
}

impl ResolvedField {
    pub fn name(&self) -> &str {
        match self {
            ResolvedField::Config(field) => &field.name,
            ResolvedField::Api(field) => &field.name,
        }
    }
}

/// The field set chosen for a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "fields", rename_all = "lowercase")]
pub enum ResolvedFields {
    /// A static family matched; its main, details and amenities groups apply.
    Config(Arc<CategoryFieldConfig>),
    /// Remote fields, flattened and sorted by `order`.
    Api(Vec<CategoryField>),
    None,
}

impl ResolvedFields {
    /// Step 2 and 3 of the decision rule, for when no family matched.
    /// Fields of an unknown kind are dropped; the rest still apply.
    pub fn from_remote(response: &CategoryFieldsResponse) -> Self {
        let mut fields = response.flatten_sorted();
        fields.retain(|field| field.kind != RemoteFieldKind::Unknown);
        if fields.is_empty() {
            ResolvedFields::None
        } else {
            ResolvedFields::Api(fields)
        }
    }

    pub fn source(&self) -> FieldSource {
        match self {
            ResolvedFields::Config(_) => FieldSource::Config,
            ResolvedFields::Api(_) => FieldSource::Api,
            ResolvedFields::None => FieldSource::None,
        }
    }

    pub fn config(&self) -> Option<&CategoryFieldConfig> {
        match self {
            ResolvedFields::Config(config) => Some(config.as_ref()),
            _ => None,
        }
    }

    /// Fields rendered inline with the basic info: a family's main fields
    /// or the sorted remote fields.
    pub fn main_fields(&self) -> Vec<ResolvedField> {
        match self {
            ResolvedFields::Config(config) => config
                .main_fields
                .iter()
                .cloned()
                .map(ResolvedField::Config)
                .collect(),
            ResolvedFields::Api(fields) => fields.iter().cloned().map(ResolvedField::Api).collect(),
            ResolvedFields::None => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ResolvedFields::None)
    }
}

/// Chooses between the static registry and the remote catalog.
#[derive(Clone)]
pub struct FieldResolver {
    registry: Arc<FieldConfigRegistry>,
    api: Arc<dyn CatalogApi>,
    options: FieldQueryOptions,
}

impl FieldResolver {
    pub fn new(registry: Arc<FieldConfigRegistry>, api: Arc<dyn CatalogApi>) -> Self {
        Self {
            registry,
            api,
            options: FieldQueryOptions::default(),
        }
    }

    pub fn registry(&self) -> &FieldConfigRegistry {
        &self.registry
    }

    pub fn api(&self) -> &Arc<dyn CatalogApi> {
        &self.api
    }

    /// Synchronous half: a matching family always wins.
    pub fn resolve_local(&self, slug: &str) -> Option<ResolvedFields> {
        self.registry.resolve_config(slug).map(ResolvedFields::Config)
    }

    /// Remote half, consulted only when no family matched.
    pub async fn fetch_remote(&self, slug: &str) -> CategoryFieldsResponse {
        self.api.fetch_category_fields(&[slug], self.options).await
    }

    pub async fn resolve(&self, slug: &str) -> ResolvedFields {
        if let Some(resolved) = self.resolve_local(slug) {
            debug!("Category '{}' resolved from static config", slug);
            return resolved;
        }

        let response = self.fetch_remote(slug).await;
        let resolved = ResolvedFields::from_remote(&response);
        match &resolved {
            ResolvedFields::Api(fields) => info!("Category '{}' resolved from remote with {} fields", slug, fields.len()),
            _ => info!("Category '{}' has no custom fields", slug),
        }
        resolved
    }

    /// Selects `slug` in `flow` and completes the remote fetch when one is
    /// needed. Returns `false` if the response arrived for a stale selection.
    pub async fn load_into(&self, flow: &mut PostAdFlow, slug: &str) -> bool {
        match flow.select_category(&self.registry, slug) {
            Some(ticket) => {
                let response = self.fetch_remote(ticket.slug()).await;
                flow.complete_fetch(ticket, &response)
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{fallback_categories, Category};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubApi {
        response: CategoryFieldsResponse,
        calls: AtomicUsize,
    }

    impl StubApi {
        fn new(response: serde_json::Value) -> Self {
            Self {
                response: serde_json::from_value(response).unwrap(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CatalogApi for StubApi {
        async fn fetch_categories(&self) -> Vec<Category> {
            fallback_categories()
        }

        async fn fetch_category_fields(&self, _slugs: &[&str], _options: FieldQueryOptions) -> CategoryFieldsResponse {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    fn remote_fields() -> serde_json::Value {
        json!({
            "data": {
                "1": [
                    { "id": 10, "name": "storage", "label": "Storage", "type": "select", "order": 2 },
                    { "id": 11, "name": "brand", "label": "Brand", "type": "text", "order": 1 }
                ]
            }
        })
    }

    fn resolver(api: Arc<StubApi>) -> FieldResolver {
        FieldResolver::new(Arc::new(FieldConfigRegistry::builtin()), api)
    }

    #[tokio::test]
    async fn test_static_config_beats_remote_fields() {
        let api = Arc::new(StubApi::new(remote_fields()));
        let resolved = resolver(api.clone()).resolve("cars-for-sale").await;

        assert_eq!(resolved.source(), FieldSource::Config);
        let expected: Vec<ResolvedField> = crate::configs::category_fields::vehicle_fields_config()
            .main_fields
            .into_iter()
            .map(ResolvedField::Config)
            .collect();
        assert_eq!(resolved.main_fields(), expected);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_remote_fields_used_without_config() {
        let api = Arc::new(StubApi::new(remote_fields()));
        let resolved = resolver(api.clone()).resolve("mobile-phones").await;

        assert_eq!(resolved.source(), FieldSource::Api);
        let names: Vec<String> = resolved.main_fields().iter().map(|f| f.name().to_string()).collect();
        assert_eq!(names, vec!["brand", "storage"]);
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_remote_resolves_none() {
        let api = Arc::new(StubApi::new(json!({ "data": { "1": [] } })));
        let resolved = resolver(api).resolve("jobs").await;
        assert_eq!(resolved, ResolvedFields::None);
        assert!(resolved.main_fields().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_kind_does_not_hide_known_fields() {
        let api = Arc::new(StubApi::new(json!({
            "data": {
                "12": [
                    { "id": 1, "name": "brand", "label": "Brand", "type": "text", "order": 1 },
                    { "id": 2, "name": "budget", "label": "Budget", "type": "range", "order": 2 },
                    { "id": 3, "name": "storage", "label": null, "type": "select", "order": 3 }
                ]
            }
        })));
        let resolved = resolver(api).resolve("mobile-phones").await;

        assert_eq!(resolved.source(), FieldSource::Api);
        let names: Vec<String> = resolved.main_fields().iter().map(|f| f.name().to_string()).collect();
        assert_eq!(names, vec!["brand", "storage"]);
    }

    #[test]
    fn test_only_unknown_kinds_resolve_none() {
        let response: CategoryFieldsResponse = serde_json::from_value(json!({
            "data": { "3": [{ "id": 1, "name": "area", "label": "Area", "type": "map" }] }
        }))
        .unwrap();
        assert_eq!(ResolvedFields::from_remote(&response), ResolvedFields::None);
    }

    #[tokio::test]
    async fn test_load_into_resolves_flow() {
        let api = Arc::new(StubApi::new(remote_fields()));
        let mut flow = PostAdFlow::new();
        assert!(resolver(api).load_into(&mut flow, "mobile-phones").await);
        assert!(!flow.is_loading());
        assert_eq!(flow.resolved().source(), FieldSource::Api);
    }

    #[test]
    fn test_serializes_with_source_tag() {
        let resolved = ResolvedFields::None;
        assert_eq!(serde_json::to_value(&resolved).unwrap(), json!({ "source": "none" }));

        let response: CategoryFieldsResponse = serde_json::from_value(remote_fields()).unwrap();
        let value = serde_json::to_value(ResolvedFields::from_remote(&response)).unwrap();
        assert_eq!(value["source"], "api");
        assert_eq!(value["fields"][0]["name"], "brand");
    }
}
