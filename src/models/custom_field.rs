// classifieds/src/models/custom_field.rs
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Input kinds a statically configured field can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Select,
    Checkbox,
    Textarea,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Textarea => "textarea",
        }
    }
}

/// One entry of a select field. Declaration order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOption {
    pub value: String,
    pub label: String,
    pub label_ar: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, label_ar: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            label_ar: label_ar.into(),
        }
    }

    pub fn localized_label(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.label,
            Locale::Ar => &self.label_ar,
        }
    }
}

/// A bilingual field definition from the local configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    pub id: String,
    /// Key into the form data map.
    pub name: String,
    pub label: String,
    pub label_ar: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_ar: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl CustomField {
    /// Starts a definition whose `id` and `name` are the same key.
    pub fn new(name: &str, label: &str, label_ar: &str, kind: FieldKind) -> Self {
        Self {
            id: name.to_string(),
            name: name.to_string(),
            label: label.to_string(),
            label_ar: label_ar.to_string(),
            kind,
            required: false,
            placeholder: None,
            placeholder_ar: None,
            options: Vec::new(),
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, en: &str, ar: &str) -> Self {
        self.placeholder = Some(en.to_string());
        self.placeholder_ar = Some(ar.to_string());
        self
    }

    pub fn options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    pub fn bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Label in the requested locale. An empty `label_ar` is a registry
    /// defect and is rejected by `FieldConfigRegistry::validate`.
    pub fn localized_label(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.label,
            Locale::Ar => &self.label_ar,
        }
    }

    pub fn localized_placeholder(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::En => self.placeholder.as_deref(),
            Locale::Ar => self.placeholder_ar.as_deref(),
        }
    }
}

/// A titled group of fields rendered as its own section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTable {
    pub title: String,
    pub title_ar: String,
    pub fields: Vec<CustomField>,
}

impl FieldTable {
    pub fn new(title: &str, title_ar: &str, fields: Vec<CustomField>) -> Self {
        Self {
            title: title.to_string(),
            title_ar: title_ar.to_string(),
            fields,
        }
    }

    pub fn localized_title(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.title,
            Locale::Ar => &self.title_ar,
        }
    }
}

/// Field configuration shared by every category of one family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFieldConfig {
    pub category_slug: String,
    /// Slug fragments; a category belongs to the family when its slug
    /// contains any of them.
    pub category_matches: Vec<String>,
    pub main_fields: Vec<CustomField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details_table: Option<FieldTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities_table: Option<FieldTable>,
}

impl CategoryFieldConfig {
    /// `lower_slug` must already be lower-cased.
    pub fn matches(&self, lower_slug: &str) -> bool {
        self.category_matches
            .iter()
            .any(|fragment| lower_slug.contains(fragment.to_lowercase().as_str()))
    }

    /// Every field of the family: main fields, then details, then amenities.
    pub fn all_fields(&self) -> impl Iterator<Item = &CustomField> {
        self.main_fields
            .iter()
            .chain(self.details_table.iter().flat_map(|t| t.fields.iter()))
            .chain(self.amenities_table.iter().flat_map(|t| t.fields.iter()))
    }
}
