// classifieds/src/models/category.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Category>>,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl Category {
    fn seed(id: i64, name: &str, slug: &str, parent_id: Option<i64>) -> Self {
        Self {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            icon: None,
            children: None,
            parent_id,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Categories used whenever `GET /categories` is unavailable.
pub fn fallback_categories() -> Vec<Category> {
    vec![
        Category::seed(1, "Vehicles", "vehicles", None),
        Category::seed(2, "Cars for Sale", "cars-for-sale", Some(1)),
        Category::seed(3, "Motorcycles", "motorcycles", Some(1)),
        Category::seed(4, "Auto Accessories", "auto-accessories", Some(1)),
        Category::seed(5, "Properties", "properties", None),
        Category::seed(6, "Apartments & Villas For Sale", "apartments-villas-for-sale", Some(5)),
        Category::seed(7, "Apartments & Villas For Rent", "apartments-villas-for-rent", Some(5)),
        Category::seed(8, "Commercials For Sale", "commercials-for-sale", Some(5)),
        Category::seed(9, "Commercials For Rent", "commercials-for-rent", Some(5)),
        Category::seed(10, "Lands for Sale", "lands-for-sale", Some(5)),
        Category::seed(11, "Mobiles & Accessories", "mobiles", None),
        Category::seed(12, "Mobile Phones", "mobile-phones", Some(11)),
        Category::seed(13, "Mobile Accessories", "mobile-accessories", Some(11)),
        Category::seed(14, "Tablets", "tablets", Some(11)),
        Category::seed(15, "Electronics & Appliances", "electronics", None),
        Category::seed(16, "Computers & Laptops", "computers-laptops", Some(15)),
        Category::seed(17, "TVs & Audio", "tvs-audio", Some(15)),
        Category::seed(18, "Cameras", "cameras", Some(15)),
        Category::seed(19, "Furniture & Decor", "furniture", None),
        Category::seed(20, "Jobs", "jobs", None),
        Category::seed(21, "Services", "services", None),
        Category::seed(22, "Fashion & Beauty", "fashion", None),
        Category::seed(23, "Kids & Babies", "kids", None),
        Category::seed(24, "Sports & Equipment", "sports", None),
        Category::seed(25, "Pets", "pets", None),
    ]
}
