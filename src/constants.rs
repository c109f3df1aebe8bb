//! Stable application-wide constants.
//!
//! Default fallbacks for env-var-based configuration live here alongside the
//! fixed coefficients used by distance and link building. For values that are
//! meant to be tuned per install, see [`Config`](crate::config::Config).

// --- Configuration defaults (used when env vars are absent) ---

/// Default dataset location. Overridden by `STALLPICK_DATASET` or `--dataset=`.
pub const DEFAULT_DATASET_PATH: &str = "data/stalls.json";
/// Default home choice. Overridden by `STALLPICK_HOME` or `--home=`.
pub const DEFAULT_HOME_CHOICE: &str = "a";

// --- Distance ---

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Decimal places kept on the distance shown for a picked stall.
pub const DISTANCE_DISPLAY_DECIMALS: u32 = 2;

// --- Schedule ---

pub const MINUTES_PER_HOUR: u32 = 60;

// --- Directions ---

/// Base of the map deep link; origin, destination and travel mode are appended.
pub const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// Directions are always on foot.
pub const DIRECTIONS_TRAVEL_MODE: &str = "walking";
