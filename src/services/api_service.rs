// classifieds/src/services/api_service.rs
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::error::FetchError;
use crate::models::{fallback_categories, Category, CategoryFieldsResponse};

pub const DEFAULT_API_BASE_URL: &str = "https://www.olx.com.lb/api";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Flags forwarded to `GET /categoryFields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldQueryOptions {
    pub include_child_categories: bool,
    pub split_by_category_ids: bool,
    pub flat_choices: bool,
    pub group_choices_by_section: bool,
    pub flat: bool,
}

impl Default for FieldQueryOptions {
    fn default() -> Self {
        Self {
            include_child_categories: true,
            split_by_category_ids: true,
            flat_choices: true,
            group_choices_by_section: true,
            flat: true,
        }
    }
}

impl FieldQueryOptions {
    pub fn to_query(&self, slugs: &[&str]) -> Vec<(&'static str, String)> {
        vec![
            ("categorySlugs", slugs.join(",")),
            ("includeChildCategories", self.include_child_categories.to_string()),
            ("splitByCategoryIDs", self.split_by_category_ids.to_string()),
            ("flatChoices", self.flat_choices.to_string()),
            ("groupChoicesBySection", self.group_choices_by_section.to_string()),
            ("flat", self.flat.to_string()),
        ]
    }
}

/// Remote category catalog. Implementations never fail: every error is
/// replaced by the documented fallback before it reaches the caller.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// All categories, or the built-in fallback list.
    async fn fetch_categories(&self) -> Vec<Category>;

    /// Field groups for the given slugs, or an empty mapping.
    async fn fetch_category_fields(&self, slugs: &[&str], options: FieldQueryOptions) -> CategoryFieldsResponse;
}

#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn try_fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        let url = format!("{}/categories", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        Ok(response.json::<Vec<Category>>().await?)
    }

    async fn try_fetch_category_fields(
        &self,
        slugs: &[&str],
        options: FieldQueryOptions,
    ) -> Result<CategoryFieldsResponse, FetchError> {
        let url = format!("{}/categoryFields", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&options.to_query(slugs))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        Ok(response.json::<CategoryFieldsResponse>().await?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_categories(&self) -> Vec<Category> {
        match self.try_fetch_categories().await {
            Ok(categories) => {
                debug!("Fetched {} categories from {}", categories.len(), self.base_url);
                categories
            }
            Err(e) => {
                error!("Error fetching categories: {}", e);
                info!("Using fallback categories");
                fallback_categories()
            }
        }
    }

    async fn fetch_category_fields(&self, slugs: &[&str], options: FieldQueryOptions) -> CategoryFieldsResponse {
        match self.try_fetch_category_fields(slugs, options).await {
            Ok(fields) => {
                debug!("Fetched {} field groups for {:?}", fields.data.len(), slugs);
                fields
            }
            Err(e) => {
                warn!("Error fetching category fields for {:?}: {}", slugs, e);
                CategoryFieldsResponse::empty()
            }
        }
    }
}
