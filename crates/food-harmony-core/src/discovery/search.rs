//! Restaurant Search Service
//!
//! Abstract search seam plus the mock implementation the demo ships with.
//! A real backend implements [`RestaurantSearch`] and replaces the mock
//! without touching the UI layer.

use async_trait::async_trait;
use log::debug;

use crate::domain::{Coordinates, DomainResult, Restaurant};

/// Simulated network delay the UI applies before invoking the service, in
/// milliseconds
pub const SEARCH_DELAY_MS: u32 = 1_500;

/// Payload for one search invocation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub location: String,
    pub radius_miles: u8,
    /// Names of the user's stored foods, drinks and desserts
    pub preferences: Vec<String>,
    /// Names of the user's stored restrictions
    pub restrictions: Vec<String>,
}

/// Nearby-restaurant search boundary.
///
/// `?Send` because the consumer is a single-threaded WASM page; native test
/// runners drive it on a current-thread runtime.
#[async_trait(?Send)]
pub trait RestaurantSearch {
    async fn search_nearby(&self, query: &SearchQuery) -> DomainResult<Vec<Restaurant>>;
}

/// Returns the fixed candidate list regardless of the query. No filtering
/// by location, radius, preferences or restrictions happens here; the
/// matching/accommodates fields are baked into each record.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockRestaurantSearch;

#[async_trait(?Send)]
impl RestaurantSearch for MockRestaurantSearch {
    async fn search_nearby(&self, query: &SearchQuery) -> DomainResult<Vec<Restaurant>> {
        debug!(
            "mock search: location={:?} radius={}mi ({} preferences, {} restrictions)",
            query.location,
            query.radius_miles,
            query.preferences.len(),
            query.restrictions.len()
        );
        Ok(mock_restaurants())
    }
}

/// The demo candidate set
pub fn mock_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: 1,
            name: "Green Garden Bistro".to_string(),
            address: "123 Main St, Downtown".to_string(),
            distance: "0.8 mi".to_string(),
            rating: 4.6,
            price_level: 2,
            cuisine: vec![
                "Healthy".to_string(),
                "Mediterranean".to_string(),
                "Vegetarian".to_string(),
            ],
            phone: Some("(555) 123-4567".to_string()),
            website: Some("greengardenbistro.com".to_string()),
            coordinates: Coordinates {
                lat: 40.7589,
                lng: -73.9851,
            },
            matching_items: vec![
                "Salmon".to_string(),
                "Quinoa".to_string(),
                "Green Tea".to_string(),
            ],
            accommodates_restrictions: vec![
                "Gluten-Free Options".to_string(),
                "Allergy-Friendly".to_string(),
            ],
            image_url: Some(
                "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=400&h=300&fit=crop"
                    .to_string(),
            ),
        },
        Restaurant {
            id: 2,
            name: "Ocean Harvest".to_string(),
            address: "456 Harbor Ave, Waterfront".to_string(),
            distance: "1.2 mi".to_string(),
            rating: 4.4,
            price_level: 3,
            cuisine: vec!["Seafood".to_string(), "Contemporary".to_string()],
            phone: Some("(555) 987-6543".to_string()),
            website: Some("oceanharvest.com".to_string()),
            coordinates: Coordinates {
                lat: 40.7614,
                lng: -73.9776,
            },
            matching_items: vec!["Salmon".to_string(), "Dark Chocolate".to_string()],
            accommodates_restrictions: vec!["Shellfish-Free Options".to_string()],
            image_url: Some(
                "https://images.unsplash.com/photo-1559339352-11d035aa65de?w=400&h=300&fit=crop"
                    .to_string(),
            ),
        },
        Restaurant {
            id: 3,
            name: "The Wholesome Table".to_string(),
            address: "789 Oak Street, Midtown".to_string(),
            distance: "2.1 mi".to_string(),
            rating: 4.7,
            price_level: 2,
            cuisine: vec![
                "Organic".to_string(),
                "Farm-to-Table".to_string(),
                "Gluten-Free".to_string(),
            ],
            phone: Some("(555) 456-7890".to_string()),
            website: None,
            coordinates: Coordinates {
                lat: 40.7505,
                lng: -73.9934,
            },
            matching_items: vec![
                "Quinoa".to_string(),
                "Fresh Berries".to_string(),
                "Kombucha".to_string(),
            ],
            accommodates_restrictions: vec![
                "Gluten-Free".to_string(),
                "Allergy-Friendly".to_string(),
                "Dietary Preferences".to_string(),
            ],
            image_url: Some(
                "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=400&h=300&fit=crop"
                    .to_string(),
            ),
        },
        Restaurant {
            id: 4,
            name: "Zen Tea House".to_string(),
            address: "321 Peaceful Way, Garden District".to_string(),
            distance: "1.8 mi".to_string(),
            rating: 4.3,
            price_level: 1,
            cuisine: vec![
                "Tea House".to_string(),
                "Light Meals".to_string(),
                "Asian Fusion".to_string(),
            ],
            phone: Some("(555) 234-5678".to_string()),
            website: None,
            coordinates: Coordinates {
                lat: 40.7411,
                lng: -73.9897,
            },
            matching_items: vec!["Green Tea".to_string(), "Dark Chocolate".to_string()],
            accommodates_restrictions: vec!["Dietary Preferences".to_string()],
            image_url: Some(
                "https://images.unsplash.com/photo-1544787219-7f47ccb76574?w=400&h=300&fit=crop"
                    .to_string(),
            ),
        },
        Restaurant {
            id: 5,
            name: "Berry Bliss Cafe".to_string(),
            address: "654 Sweet Street, Arts Quarter".to_string(),
            distance: "2.5 mi".to_string(),
            rating: 4.5,
            price_level: 2,
            cuisine: vec![
                "Cafe".to_string(),
                "Desserts".to_string(),
                "Brunch".to_string(),
            ],
            phone: Some("(555) 345-6789".to_string()),
            website: None,
            coordinates: Coordinates {
                lat: 40.7282,
                lng: -73.9942,
            },
            matching_items: vec![
                "Fresh Berries".to_string(),
                "Dark Chocolate".to_string(),
                "Kombucha".to_string(),
            ],
            accommodates_restrictions: vec!["Gluten-Free Options".to_string()],
            image_url: Some(
                "https://images.unsplash.com/photo-1571115764595-644a1f56a55c?w=400&h=300&fit=crop"
                    .to_string(),
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entity;

    fn query() -> SearchQuery {
        SearchQuery {
            location: "New York, NY".to_string(),
            radius_miles: 5,
            preferences: vec!["Salmon".to_string()],
            restrictions: vec!["Shellfish".to_string()],
        }
    }

    #[tokio::test]
    async fn test_mock_returns_the_fixed_candidate_set() {
        let service = MockRestaurantSearch;
        let results = service.search_nearby(&query()).await.expect("mock cannot fail");

        assert_eq!(results.len(), 5);
        assert_eq!(results[0].name, "Green Garden Bistro");
        assert_eq!(results[4].name, "Berry Bliss Cafe");
    }

    #[tokio::test]
    async fn test_mock_ignores_the_query() {
        let service = MockRestaurantSearch;
        let a = service.search_nearby(&query()).await.unwrap();
        let empty = SearchQuery {
            location: "Nowhere".to_string(),
            radius_miles: 1,
            preferences: vec![],
            restrictions: vec![],
        };
        let b = service.search_nearby(&empty).await.unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_candidate_ids_are_unique() {
        let mut ids: Vec<u32> = mock_restaurants().iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
