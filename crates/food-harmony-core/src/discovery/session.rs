//! Discovery Session
//!
//! Location input, search radius, geolocation fallback and the result list
//! for the mocked restaurant search. Searches carry generation tickets so a
//! superseded search can never overwrite a newer one (last started wins).

use log::debug;

use crate::domain::{Coordinates, DomainError, Restaurant};
use crate::store::PreferenceStore;

use super::search::SearchQuery;

/// Fallback shown when geolocation fails or is unsupported
pub const DEFAULT_LOCATION: &str = "New York, NY";
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    lat: 40.7589,
    lng: -73.9851,
};

/// Radius choices offered by the search form, in miles
pub const RADIUS_OPTIONS_MILES: &[u8] = &[1, 3, 5, 10, 25];
pub const DEFAULT_RADIUS_MILES: u8 = 5;

/// Geolocation failure causes, each with its own user-facing message.
///
/// Failures are advisory only; the session falls back to a fixed default
/// location so the feature keeps working (fail-open).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    PermissionDenied,
    Unavailable,
    Timeout,
    /// The hosting environment has no geolocation capability at all
    Unsupported,
    Other,
}

impl GeolocationError {
    /// Classify a browser `PositionError.code`
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            2 => GeolocationError::Unavailable,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::Other,
        }
    }

    pub fn advisory(&self) -> &'static str {
        match self {
            GeolocationError::PermissionDenied => {
                "Location access denied. Please enable location services and try again."
            }
            GeolocationError::Unavailable => "Location information unavailable.",
            GeolocationError::Timeout => "Location request timed out.",
            GeolocationError::Unsupported => "Geolocation not supported by this browser.",
            GeolocationError::Other => "Unable to detect your location.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoveryPhase {
    #[default]
    Idle,
    /// Waiting on the platform geolocation callback
    Locating,
    /// A search timer/service call is in flight
    Searching,
}

/// Handle for one search invocation. Completing with a superseded ticket is
/// a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Transient state of the Discover tab
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverySession {
    pub location: String,
    radius_miles: u8,
    user_location: Option<Coordinates>,
    advisory: Option<GeolocationError>,
    search_error: Option<DomainError>,
    phase: DiscoveryPhase,
    generation: u64,
    results: Vec<Restaurant>,
}

impl Default for DiscoverySession {
    fn default() -> Self {
        Self {
            location: String::new(),
            radius_miles: DEFAULT_RADIUS_MILES,
            user_location: None,
            advisory: None,
            search_error: None,
            phase: DiscoveryPhase::Idle,
            generation: 0,
            results: Vec::new(),
        }
    }
}

impl DiscoverySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DiscoveryPhase {
        self.phase
    }

    /// True while either the geolocation request or a search is in flight
    pub fn is_loading(&self) -> bool {
        self.phase != DiscoveryPhase::Idle
    }

    pub fn radius_miles(&self) -> u8 {
        self.radius_miles
    }

    pub fn set_radius_miles(&mut self, miles: u8) {
        self.radius_miles = miles;
    }

    pub fn user_location(&self) -> Option<Coordinates> {
        self.user_location
    }

    pub fn advisory(&self) -> Option<GeolocationError> {
        self.advisory
    }

    pub fn search_error(&self) -> Option<&DomainError> {
        self.search_error.as_ref()
    }

    pub fn results(&self) -> &[Restaurant] {
        &self.results
    }

    pub fn begin_locate(&mut self) {
        self.phase = DiscoveryPhase::Locating;
        self.advisory = None;
    }

    /// Geolocation succeeded: show the raw coordinates, 4 decimal places
    pub fn locate_succeeded(&mut self, coords: Coordinates) {
        self.location = format!("{:.4}, {:.4}", coords.lat, coords.lng);
        self.user_location = Some(coords);
        self.advisory = None;
        self.phase = DiscoveryPhase::Idle;
    }

    /// Geolocation failed: record the advisory and substitute the fixed
    /// default location so the tab stays usable
    pub fn locate_failed(&mut self, cause: GeolocationError) {
        self.advisory = Some(cause);
        self.location = DEFAULT_LOCATION.to_string();
        self.user_location = Some(DEFAULT_COORDINATES);
        self.phase = DiscoveryPhase::Idle;
    }

    /// Whether the search button should be enabled
    pub fn can_search(&self) -> bool {
        self.phase == DiscoveryPhase::Idle && !self.location.trim().is_empty()
    }

    /// Start a search. `None` when the location is blank. Starting while a
    /// search is already in flight supersedes it.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if self.location.trim().is_empty() {
            return None;
        }
        self.generation += 1;
        self.phase = DiscoveryPhase::Searching;
        self.search_error = None;
        Some(SearchTicket(self.generation))
    }

    /// Commit results for `ticket`. Returns false and changes nothing when
    /// the ticket has been superseded by a newer search.
    pub fn complete_search(&mut self, ticket: SearchTicket, results: Vec<Restaurant>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                "dropping superseded search result (ticket {}, current {})",
                ticket.0, self.generation
            );
            return false;
        }
        self.results = results;
        self.phase = DiscoveryPhase::Idle;
        true
    }

    /// Record a search failure for `ticket`, same staleness rule as
    /// [`complete_search`]. The bundled mock never takes this path.
    ///
    /// [`complete_search`]: Self::complete_search
    pub fn fail_search(&mut self, ticket: SearchTicket, error: DomainError) -> bool {
        if ticket.0 != self.generation {
            debug!(
                "dropping superseded search failure (ticket {}, current {})",
                ticket.0, self.generation
            );
            return false;
        }
        self.search_error = Some(error);
        self.phase = DiscoveryPhase::Idle;
        true
    }

    /// Snapshot the service-call payload from the session and the user's
    /// stored profile
    pub fn search_query(&self, profile: &PreferenceStore) -> SearchQuery {
        SearchQuery {
            location: self.location.trim().to_string(),
            radius_miles: self.radius_miles,
            preferences: profile.preference_names(),
            restrictions: profile.restriction_names(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Restaurant;

    fn restaurant(id: u32, name: &str) -> Restaurant {
        Restaurant {
            id,
            name: name.to_string(),
            address: String::new(),
            distance: String::new(),
            rating: 4.0,
            price_level: 2,
            cuisine: vec![],
            phone: None,
            website: None,
            coordinates: DEFAULT_COORDINATES,
            matching_items: vec![],
            accommodates_restrictions: vec![],
            image_url: None,
        }
    }

    #[test]
    fn test_locate_success_formats_four_decimals() {
        let mut session = DiscoverySession::new();
        session.begin_locate();
        session.locate_succeeded(Coordinates {
            lat: 40.75891234,
            lng: -73.98512345,
        });

        assert_eq!(session.location, "40.7589, -73.9851");
        assert_eq!(session.phase(), DiscoveryPhase::Idle);
        assert!(session.advisory().is_none());
    }

    #[test]
    fn test_permission_denied_falls_back_to_default() {
        let mut session = DiscoverySession::new();
        session.begin_locate();
        session.locate_failed(GeolocationError::PermissionDenied);

        assert_eq!(session.location, "New York, NY");
        assert_eq!(session.user_location(), Some(DEFAULT_COORDINATES));
        let advisory = session.advisory().expect("advisory set");
        assert!(advisory.advisory().contains("denied"));
    }

    #[test]
    fn test_error_code_classification() {
        assert_eq!(
            GeolocationError::from_code(1),
            GeolocationError::PermissionDenied
        );
        assert_eq!(GeolocationError::from_code(2), GeolocationError::Unavailable);
        assert_eq!(GeolocationError::from_code(3), GeolocationError::Timeout);
        assert_eq!(GeolocationError::from_code(42), GeolocationError::Other);
    }

    #[test]
    fn test_search_requires_location() {
        let mut session = DiscoverySession::new();
        assert!(session.begin_search().is_none());
        session.location = "   ".to_string();
        assert!(session.begin_search().is_none());
        assert!(!session.can_search());

        session.location = "New York, NY".to_string();
        assert!(session.can_search());
        assert!(session.begin_search().is_some());
    }

    #[test]
    fn test_last_started_search_wins() {
        let mut session = DiscoverySession::new();
        session.location = "Midtown".to_string();

        let first = session.begin_search().unwrap();
        let second = session.begin_search().unwrap();

        // The slower first search completes after the second one started
        assert!(session.complete_search(second, vec![restaurant(2, "Newer")]));
        assert!(!session.complete_search(first, vec![restaurant(1, "Stale")]));

        assert_eq!(session.results().len(), 1);
        assert_eq!(session.results()[0].name, "Newer");
        assert_eq!(session.phase(), DiscoveryPhase::Idle);
    }

    #[test]
    fn test_stale_failure_is_dropped() {
        let mut session = DiscoverySession::new();
        session.location = "Midtown".to_string();

        let first = session.begin_search().unwrap();
        let second = session.begin_search().unwrap();

        assert!(!session.fail_search(first, DomainError::Timeout("slow".into())));
        assert!(session.search_error().is_none());

        assert!(session.fail_search(second, DomainError::Unavailable("down".into())));
        assert!(session.search_error().is_some());
        assert_eq!(session.phase(), DiscoveryPhase::Idle);
    }

    #[test]
    fn test_search_query_snapshots_profile() {
        let mut session = DiscoverySession::new();
        session.location = "  Brooklyn  ".to_string();
        session.set_radius_miles(10);

        let profile = PreferenceStore::sample();
        let query = session.search_query(&profile);

        assert_eq!(query.location, "Brooklyn");
        assert_eq!(query.radius_miles, 10);
        assert_eq!(query.preferences.len(), 6);
        assert_eq!(query.restrictions, vec!["Shellfish", "Gluten", "Very Spicy Food"]);
    }
}
