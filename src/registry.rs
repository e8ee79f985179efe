// classifieds/src/registry.rs
use lazy_static::lazy_static;
use std::collections::HashSet;
use std::sync::Arc;

use crate::configs::category_fields::{property_fields_config, reserved_field_names, vehicle_fields_config};
use crate::error::RegistryError;
use crate::models::{CategoryFieldConfig, FieldKind};

lazy_static! {
    static ref CATEGORY_FIELD_REGISTRY: FieldConfigRegistry = FieldConfigRegistry::builtin();
}

/// Ordered table of category families. Earlier families win when a slug
/// matches more than one.
#[derive(Debug, Clone, Default)]
pub struct FieldConfigRegistry {
    configs: Vec<Arc<CategoryFieldConfig>>,
}

impl FieldConfigRegistry {
    pub fn new(configs: Vec<CategoryFieldConfig>) -> Self {
        Self {
            configs: configs.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(vec![vehicle_fields_config(), property_fields_config()])
    }

    /// Family for `slug` by case-insensitive substring match, first
    /// registered family first.
    pub fn resolve_config(&self, slug: &str) -> Option<Arc<CategoryFieldConfig>> {
        let lower_slug = slug.to_lowercase();
        self.configs
            .iter()
            .find(|config| config.matches(&lower_slug))
            .cloned()
    }

    pub fn has_config(&self, slug: &str) -> bool {
        self.resolve_config(slug).is_some()
    }

    pub fn configs(&self) -> &[Arc<CategoryFieldConfig>] {
        &self.configs
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Checks every family for definitions the form cannot render or store.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let reserved: HashSet<String> = reserved_field_names().into_iter().collect();

        for config in &self.configs {
            let family = config.category_slug.as_str();
            if config.category_matches.is_empty() {
                return Err(RegistryError::NoMatches(family.to_string()));
            }

            let mut seen = HashSet::new();
            for field in config.all_fields() {
                let defect = |reason: &str| RegistryError::InvalidField {
                    family: family.to_string(),
                    field: field.name.clone(),
                    reason: reason.to_string(),
                };

                if reserved.contains(&field.name) || !seen.insert(field.name.as_str()) {
                    return Err(RegistryError::DuplicateField {
                        family: family.to_string(),
                        field: field.name.clone(),
                    });
                }
                if field.label.trim().is_empty() || field.label_ar.trim().is_empty() {
                    return Err(RegistryError::MissingTranslation {
                        family: family.to_string(),
                        field: field.name.clone(),
                    });
                }
                if field.kind == FieldKind::Select && field.options.is_empty() {
                    return Err(defect("select field without options"));
                }
                if field.options.iter().any(|o| o.label_ar.trim().is_empty()) {
                    return Err(RegistryError::MissingTranslation {
                        family: family.to_string(),
                        field: field.name.clone(),
                    });
                }
                if field.kind != FieldKind::Number && (field.min.is_some() || field.max.is_some()) {
                    return Err(defect("numeric bounds on a non-number field"));
                }
                if let (Some(min), Some(max)) = (field.min, field.max) {
                    if min > max {
                        return Err(defect("min is greater than max"));
                    }
                }
            }
        }

        Ok(())
    }
}

/// Shared built-in registry.
pub fn default_registry() -> &'static FieldConfigRegistry {
    &CATEGORY_FIELD_REGISTRY
}

/// Resolve against the built-in registry.
pub fn resolve_config(slug: &str) -> Option<Arc<CategoryFieldConfig>> {
    CATEGORY_FIELD_REGISTRY.resolve_config(slug)
}

/// Number of registered families
pub fn family_count() -> usize {
    CATEGORY_FIELD_REGISTRY.len()
}
