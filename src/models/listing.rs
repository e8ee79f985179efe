// classifieds/src/models/listing.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value};
use uuid::Uuid;

/// A published listing as shown in the featured feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category_slug: String,
    pub category_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated post-ad form ready for the simulated submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdSubmission {
    pub reference: Uuid,
    pub category_slug: String,
    pub fields: JsonMap<String, Value>,
    /// File names of the attached photos; contents are not kept.
    pub images: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

impl AdSubmission {
    pub fn new(category_slug: &str, fields: JsonMap<String, Value>) -> Self {
        Self {
            reference: Uuid::new_v4(),
            category_slug: category_slug.to_string(),
            fields,
            images: Vec::new(),
            submitted_at: Utc::now(),
        }
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_payload_lists_photo_names() {
        let mut fields = JsonMap::new();
        fields.insert("videoUrl".into(), Value::String("https://youtu.be/abc".into()));
        let submission = AdSubmission::new("cars-for-sale", fields).with_images(vec!["front.jpg".into()]);

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["categorySlug"], "cars-for-sale");
        assert_eq!(value["fields"]["videoUrl"], "https://youtu.be/abc");
        assert_eq!(value["images"], serde_json::json!(["front.jpg"]));
    }
}
