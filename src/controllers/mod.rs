pub mod api_controller;
pub mod asset_controller;
pub mod home_controller;
pub mod locale_controller;
pub mod post_ad_controller;
