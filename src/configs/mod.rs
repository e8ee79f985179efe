pub mod category_fields;
pub mod initializer;
