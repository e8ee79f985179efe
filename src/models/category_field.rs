// classifieds/src/models/category_field.rs
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Input kinds the remote category-fields service can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteFieldKind {
    Text,
    Number,
    Select,
    Multiselect,
    Checkbox,
    Radio,
    Textarea,
    Date,
    /// Any kind this frontend does not know; such fields are skipped.
    #[serde(other)]
    Unknown,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChoice {
    pub id: i64,
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldPattern {
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A monolingual field definition served by the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryField {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub label: String,
    #[serde(rename = "type")]
    pub kind: RemoteFieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<FieldChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// Fields keyed by the remote category id, in the order the service sent them.
pub type GroupedFields = IndexMap<String, Vec<CategoryField>>;

impl CategoryField {
    pub fn sort_key(&self) -> i64 {
        self.order.unwrap_or(0)
    }
}

/// Body of `GET /categoryFields`: fields grouped by category id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryFieldsResponse {
    #[serde(default)]
    pub data: GroupedFields,
}

impl CategoryFieldsResponse {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.values().all(|fields| fields.is_empty())
    }

    /// Flattens every group into one sequence ordered by `order`
    /// (missing = 0). The sort is stable, so equal keys keep the order in
    /// which the groups and their fields were received.
    pub fn flatten_sorted(&self) -> Vec<CategoryField> {
        let mut fields: Vec<CategoryField> = self
            .data
            .values()
            .flat_map(|group| group.iter().cloned())
            .collect();
        fields.sort_by_key(CategoryField::sort_key);
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(id: i64, name: &str, order: Option<i64>) -> serde_json::Value {
        let mut value = json!({ "id": id, "name": name, "label": name, "type": "text", "required": false });
        if let Some(order) = order {
            value["order"] = json!(order);
        }
        value
    }

    fn names(fields: &[CategoryField]) -> Vec<&str> {
        fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_flatten_sorts_by_order_across_groups() {
        let response: CategoryFieldsResponse = serde_json::from_value(json!({
            "data": {
                "23": [field(1, "mileage", Some(3)), field(2, "brand", Some(1))],
                "7": [field(3, "year", Some(2))]
            }
        }))
        .unwrap();

        assert_eq!(names(&response.flatten_sorted()), vec!["brand", "year", "mileage"]);
    }

    #[test]
    fn test_flatten_missing_order_is_zero_and_stable() {
        let response: CategoryFieldsResponse = serde_json::from_value(json!({
            "data": {
                "b": [field(1, "first", None), field(2, "positive", Some(1)), field(3, "second", Some(0))],
                "a": [field(4, "third", None), field(5, "negative", Some(-1))]
            }
        }))
        .unwrap();

        assert_eq!(
            names(&response.flatten_sorted()),
            vec!["negative", "first", "second", "third", "positive"]
        );
    }

    #[test]
    fn test_missing_data_deserializes_as_empty() {
        let response: CategoryFieldsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.is_empty());
        assert!(response.flatten_sorted().is_empty());
    }

    #[test]
    fn test_choices_deserialize_with_parent_id() {
        let parsed: CategoryField = serde_json::from_value(json!({
            "id": 9, "name": "model", "label": "Model", "type": "select",
            "choices": [{ "id": 1, "label": "Corolla", "value": "corolla", "parentId": 4 }]
        }))
        .unwrap();
        assert_eq!(parsed.kind, RemoteFieldKind::Select);
        assert_eq!(parsed.choices[0].parent_id, Some(4));
        assert!(!parsed.required);
    }

    #[test]
    fn test_unknown_kind_and_null_label_keep_the_payload() {
        let response: CategoryFieldsResponse = serde_json::from_value(json!({
            "data": {
                "12": [
                    { "id": 1, "name": "brand", "label": null, "type": "text", "order": 1 },
                    { "id": 2, "name": "budget", "label": "Budget", "type": "range", "order": 2 }
                ]
            }
        }))
        .unwrap();

        let fields = response.flatten_sorted();
        assert_eq!(names(&fields), vec!["brand", "budget"]);
        assert_eq!(fields[0].label, "");
        assert_eq!(fields[1].kind, RemoteFieldKind::Unknown);
    }
}
