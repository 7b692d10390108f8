//! Restaurant Result Record
//!
//! Data structure for discovery results. The matching/accommodates fields
//! are static per record, never computed from the user's profile.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Geographic point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One nearby-restaurant candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub address: String,
    /// Pre-formatted display distance, e.g. "0.8 mi"
    pub distance: String,
    pub rating: f64,
    /// 1 (cheap) to 4 (expensive)
    pub price_level: u8,
    pub cuisine: Vec<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub coordinates: Coordinates,
    /// Static per record; not derived from the user's stored items
    pub matching_items: Vec<String>,
    /// Static per record; not derived from the user's stored restrictions
    pub accommodates_restrictions: Vec<String>,
    pub image_url: Option<String>,
}

impl Entity for Restaurant {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
