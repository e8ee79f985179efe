// classifieds/src/helpers/listing_helper.rs
use convert_case::{Case, Casing};
use serde::Serialize;
use std::collections::HashMap;
use tera::Value;

use crate::models::Category;
use crate::registry::FieldConfigRegistry;

const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("vehicles", "🚗"),
    ("cars", "🚗"),
    ("properties", "🏠"),
    ("mobiles", "📱"),
    ("electronics", "💻"),
    ("furniture", "🛋️"),
    ("jobs", "💼"),
    ("services", "🔧"),
    ("fashion", "👗"),
    ("kids", "👶"),
    ("sports", "⚽"),
    ("hobbies", "🎮"),
    ("pets", "🐕"),
    ("business", "🏭"),
];

const DEFAULT_ICON: &str = "📦";

/// First icon whose key occurs in the slug or the name.
pub fn category_icon(slug: &str, name: &str) -> &'static str {
    let slug = slug.to_lowercase();
    let name = name.to_lowercase();
    CATEGORY_ICONS
        .iter()
        .find(|(key, _)| slug.contains(key) || name.contains(key))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// `"mobile-phones"` becomes `"Mobile Phones"`.
pub fn slug_to_title(slug: &str) -> String {
    slug.to_case(Case::Title)
}

/// Dollar price with thousands separators, e.g. `$250,000` or `$1,234.5`.
pub fn format_price(price: f64) -> String {
    let sign = if price < 0.0 { "-" } else { "" };
    let rounded = (price.abs() * 1000.0).round() / 1000.0;
    let whole = rounded.trunc() as u64;
    let fraction = format!("{:.3}", rounded.fract());
    let fraction = fraction.trim_start_matches('0').trim_end_matches('0').trim_end_matches('.');

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}{}", sign, grouped, fraction)
}

/// Tera filter wrapping [`format_price`].
pub fn price_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let price = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg(format!("price filter expects a number, got {}", value)))?;
    Ok(Value::String(format_price(price)))
}

/// A category tile on the post-ad category step.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub icon: String,
    pub has_custom_fields: bool,
    pub has_children: bool,
    pub active: bool,
}

fn category_view(category: &Category, all: &[Category], registry: &FieldConfigRegistry, selected: Option<i64>) -> CategoryView {
    CategoryView {
        id: category.id,
        name: category.name.clone(),
        slug: category.slug.clone(),
        icon: category
            .icon
            .clone()
            .unwrap_or_else(|| category_icon(&category.slug, &category.name).to_string()),
        has_custom_fields: registry.has_config(&category.slug),
        has_children: all.iter().any(|c| c.parent_id == Some(category.id)),
        active: selected == Some(category.id),
    }
}

pub fn main_category_views(all: &[Category], registry: &FieldConfigRegistry, selected: Option<i64>) -> Vec<CategoryView> {
    all.iter()
        .filter(|c| c.is_root())
        .map(|c| category_view(c, all, registry, selected))
        .collect()
}

pub fn subcategory_views(all: &[Category], registry: &FieldConfigRegistry, parent_id: i64) -> Vec<CategoryView> {
    all.iter()
        .filter(|c| c.parent_id == Some(parent_id))
        .map(|c| category_view(c, all, registry, None))
        .collect()
}

pub fn find_category<'a>(all: &'a [Category], slug: &str) -> Option<&'a Category> {
    all.iter().find(|c| c.slug == slug)
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= 100
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// A slug the post-ad form accepts: listed in the catalog, or matched by a
/// static field family.
pub fn is_known_category(all: &[Category], registry: &FieldConfigRegistry, slug: &str) -> bool {
    is_valid_slug(slug) && (find_category(all, slug).is_some() || registry.has_config(slug))
}
