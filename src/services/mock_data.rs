// classifieds/src/services/mock_data.rs
use chrono::Utc;
use std::time::Duration;

use crate::models::Ad;

pub const DEFAULT_FEATURED_LIMIT: usize = 9;

/// In-process listing catalog standing in for a listings backend.
#[derive(Debug, Clone)]
pub struct MockDataService {
    ads: Vec<Ad>,
    delay: Duration,
}

impl MockDataService {
    pub fn new(delay: Duration) -> Self {
        Self {
            ads: seed_ads(),
            delay,
        }
    }

    async fn simulate_delay(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    pub async fn featured_ads(&self, limit: usize) -> Vec<Ad> {
        self.simulate_delay().await;
        self.ads.iter().take(limit).cloned().collect()
    }

    pub async fn ads_by_category(&self, slug: &str) -> Vec<Ad> {
        self.simulate_delay().await;
        self.ads.iter().filter(|ad| ad.category_slug == slug).cloned().collect()
    }

    pub async fn ads_by_category_slugs(&self, slugs: &[&str]) -> Vec<Ad> {
        self.simulate_delay().await;
        self.ads
            .iter()
            .filter(|ad| slugs.contains(&ad.category_slug.as_str()))
            .cloned()
            .collect()
    }
}

fn ad(id: i64, title: &str, description: &str, price: f64, slug: &str, category: &str, location: &str) -> Ad {
    Ad {
        id,
        title: title.to_string(),
        description: description.to_string(),
        price,
        category_slug: slug.to_string(),
        category_name: category.to_string(),
        image: None,
        location: Some(location.to_string()),
        created_at: Utc::now(),
    }
}

fn seed_ads() -> Vec<Ad> {
    vec![
        ad(1, "Spacious 3BR Apartment in Achrafieh", "Beautiful apartment with sea view, fully furnished", 250_000.0, "properties-for-sale", "Properties", "Achrafieh, Beirut"),
        ad(2, "Modern Villa in Dbayeh", "Luxury villa with pool and garden, 5 bedrooms", 850_000.0, "properties-for-sale", "Properties", "Dbayeh"),
        ad(3, "Office Space in Downtown", "Prime location office space, 200 sqm", 180_000.0, "properties-for-sale", "Properties", "Downtown Beirut"),
        ad(4, "2020 BMW 320i", "Excellent condition, low mileage, full options", 28_000.0, "cars", "Cars", "Beirut"),
        ad(5, "2019 Toyota Corolla", "Well maintained, single owner, automatic", 15_000.0, "cars", "Cars", "Jounieh"),
        ad(6, "2021 Mercedes C200", "Like new, under warranty, premium package", 42_000.0, "cars", "Cars", "Beirut"),
        ad(7, "iPhone 14 Pro Max 256GB", "Brand new sealed, international warranty", 1_200.0, "mobile-phones", "Mobiles", "Hamra, Beirut"),
        ad(8, "Samsung Galaxy S23 Ultra", "Mint condition, with all accessories", 950.0, "mobile-phones", "Mobiles", "Achrafieh"),
        ad(9, "iPad Pro 12.9 inch", "2022 model, 512GB, WiFi + Cellular", 1_100.0, "mobile-phones", "Mobiles", "Verdun"),
    ]
}
