//! Discovery Layer
//!
//! Transient state for the mocked nearby-restaurant search, plus the
//! service boundary a real search backend would implement.

mod session;
mod search;

pub use search::{mock_restaurants, MockRestaurantSearch, RestaurantSearch, SearchQuery, SEARCH_DELAY_MS};
pub use session::{
    DiscoveryPhase, DiscoverySession, GeolocationError, SearchTicket, DEFAULT_COORDINATES,
    DEFAULT_LOCATION, DEFAULT_RADIUS_MILES, RADIUS_OPTIONS_MILES,
};
