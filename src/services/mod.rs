pub mod api_service;
pub mod cache;
pub mod mock_data;

pub use api_service::{CatalogApi, FieldQueryOptions, HttpCatalogApi};
pub use cache::CachedCatalogApi;
pub use mock_data::MockDataService;
