pub mod category;
pub mod category_field;
pub mod custom_field;
pub mod listing;

pub use category::{fallback_categories, Category};
pub use category_field::{CategoryField, CategoryFieldsResponse, FieldChoice, RemoteFieldKind};
pub use custom_field::{CategoryFieldConfig, CustomField, FieldKind, FieldOption, FieldTable};
pub use listing::{Ad, AdSubmission};
