// classifieds/src/form/form_data.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value};
use std::collections::HashMap;
use std::fmt;

use crate::helpers::form_helper::InputKind;

/// A single form value. Checkboxes hold `Bool`, number inputs hold
/// `Number` once the raw text parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FormValue {
    /// Reads a raw browser value for an input of the given kind. An unchecked
    /// checkbox is absent from the body and becomes `false`; an empty number
    /// input stays unset.
    pub fn from_input(kind: InputKind, raw: Option<&str>) -> Option<FormValue> {
        match kind {
            InputKind::Checkbox => Some(FormValue::Bool(
                raw.map(|v| matches!(v, "on" | "true" | "1")).unwrap_or(false),
            )),
            InputKind::Number => {
                let raw = raw?.trim();
                if raw.is_empty() {
                    return None;
                }
                // Non-numeric text is kept so validation can report it.
                Some(
                    raw.parse::<f64>()
                        .ok()
                        .filter(|n| n.is_finite())
                        .map(FormValue::Number)
                        .unwrap_or_else(|| FormValue::Text(raw.to_string())),
                )
            }
            _ => raw.map(|v| FormValue::Text(v.to_string())),
        }
    }

    /// Text must be non-empty, booleans must be true, numbers always count.
    pub fn is_truthy(&self) -> bool {
        match self {
            FormValue::Text(text) => !text.is_empty(),
            FormValue::Bool(flag) => *flag,
            FormValue::Number(_) => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FormValue::Bool(flag) => Value::Bool(*flag),
            FormValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FormValue::Text(text) => Value::String(text.clone()),
        }
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Bool(flag) => write!(f, "{}", flag),
            FormValue::Number(n) => write!(f, "{}", n),
            FormValue::Text(text) => f.write_str(text),
        }
    }
}

/// Form values keyed by field name, in the order they were first set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormData {
    values: IndexMap<String, FormValue>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds form data from a submitted body. Only keys named in `fields`
    /// are read; everything else in the body is ignored.
    pub fn from_submission<'a, I>(raw: &HashMap<String, String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, InputKind)>,
    {
        let mut data = FormData::new();
        for (name, kind) in fields {
            if let Some(value) = FormValue::from_input(kind, raw.get(name).map(String::as_str)) {
                data.set(name, value);
            }
        }
        data
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: &str, value: FormValue) {
        self.values.insert(name.to_string(), value);
    }

    pub fn is_truthy(&self, name: &str) -> bool {
        self.get(name).map(FormValue::is_truthy).unwrap_or(false)
    }

    /// Text of a field, or an empty string when unset or not text.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(FormValue::as_text).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_json_map(&self) -> JsonMap<String, Value> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_truthiness_rules() {
        assert!(!FormValue::Text(String::new()).is_truthy());
        assert!(FormValue::Text("x".into()).is_truthy());
        assert!(!FormValue::Bool(false).is_truthy());
        assert!(FormValue::Number(0.0).is_truthy());
        assert!(!FormData::new().is_truthy("missing"));
    }

    #[test]
    fn test_from_submission_reads_declared_fields_only() {
        let raw = body(&[("title", "Old bike"), ("kilometers", "12000"), ("csrf", "x")]);
        let fields = vec![
            ("title", InputKind::Text),
            ("kilometers", InputKind::Number),
            ("showPhone", InputKind::Checkbox),
        ];
        let data = FormData::from_submission(&raw, fields);

        assert_eq!(data.get("title"), Some(&FormValue::Text("Old bike".into())));
        assert_eq!(data.get("kilometers"), Some(&FormValue::Number(12000.0)));
        assert_eq!(data.get("showPhone"), Some(&FormValue::Bool(false)));
        assert!(data.get("csrf").is_none());
    }

    #[test]
    fn test_number_input_keeps_bad_text_and_drops_blank() {
        assert_eq!(
            FormValue::from_input(InputKind::Number, Some("12k")),
            Some(FormValue::Text("12k".into()))
        );
        assert_eq!(FormValue::from_input(InputKind::Number, Some("  ")), None);
        assert_eq!(FormValue::from_input(InputKind::Checkbox, Some("on")), Some(FormValue::Bool(true)));
    }

    #[test]
    fn test_json_map_keeps_value_types() {
        let mut data = FormData::new();
        data.set("price", FormValue::Number(250.0));
        data.set("isNegotiable", FormValue::Bool(true));
        let json = data.to_json_map();
        assert_eq!(json["price"], serde_json::json!(250.0));
        assert_eq!(json["isNegotiable"], serde_json::json!(true));
    }
}
