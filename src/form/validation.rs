// classifieds/src/form/validation.rs
use indexmap::IndexMap;
use serde::Serialize;

use crate::form::form_data::{FormData, FormValue};
use crate::locale::LocaleContext;
use crate::models::{CustomField, FieldKind};
use crate::resolver::ResolvedFields;

pub const MIN_TITLE_LENGTH: usize = 10;
pub const MAX_TITLE_LENGTH: usize = 100;
pub const MIN_DESCRIPTION_LENGTH: usize = 20;
pub const MAX_DESCRIPTION_LENGTH: usize = 5000;

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormErrors {
    errors: IndexMap<String, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, message: String) {
        self.errors.insert(name.to_string(), message);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.errors.contains_key(name)
    }

    /// Drops the error for `name`; every other entry is untouched.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.errors.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn check_length(
    errors: &mut FormErrors,
    form: &FormData,
    name: &str,
    field_label: &str,
    min: usize,
    max: usize,
    ctx: &LocaleContext,
) {
    let length = form.text(name).chars().count();
    if length < min {
        errors.insert(name, ctx.min_length_message(field_label, min));
    } else if length > max {
        errors.insert(name, ctx.max_length_message(field_label, max));
    }
}

fn check_bounds(errors: &mut FormErrors, form: &FormData, field: &CustomField, ctx: &LocaleContext) {
    if field.kind != FieldKind::Number || errors.contains(&field.name) {
        return;
    }
    let label = field.localized_label(ctx.locale);
    match form.get(&field.name) {
        Some(FormValue::Number(value)) => {
            if let Some(min) = field.min.filter(|min| value < min) {
                errors.insert(&field.name, ctx.min_value_message(label, min));
            } else if let Some(max) = field.max.filter(|max| value > max) {
                errors.insert(&field.name, ctx.max_value_message(label, max));
            }
        }
        Some(FormValue::Text(text)) if !text.is_empty() => {
            errors.insert(&field.name, ctx.number_message(label));
        }
        _ => {}
    }
}

/// Checks a post-ad form. Title and description lengths always apply;
/// required and numeric checks cover the main fields of a matched family.
/// Remote fields are not checked.
pub fn validate(form: &FormData, resolved: &ResolvedFields, ctx: &LocaleContext) -> FormErrors {
    let mut errors = FormErrors::new();

    check_length(
        &mut errors,
        form,
        "title",
        ctx.text.title_field,
        MIN_TITLE_LENGTH,
        MAX_TITLE_LENGTH,
        ctx,
    );
    check_length(
        &mut errors,
        form,
        "description",
        ctx.text.description_field,
        MIN_DESCRIPTION_LENGTH,
        MAX_DESCRIPTION_LENGTH,
        ctx,
    );

    if let Some(config) = resolved.config() {
        for field in config.main_fields.iter().filter(|f| f.required) {
            if !form.is_truthy(&field.name) {
                errors.insert(&field.name, ctx.required_message(field.localized_label(ctx.locale)));
            }
        }
        for field in &config.main_fields {
            check_bounds(&mut errors, form, field, ctx);
        }
    }

    errors
}
