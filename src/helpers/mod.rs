pub mod form_helper;
pub mod listing_helper;
pub mod template_helper;
pub mod upload_helper;
