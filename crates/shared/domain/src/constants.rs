//! Fixed paths shared by the gateway and the navigation layer.

/// Customization page (create flow).
pub const CUSTOMIZE_PATH: &str = "/";
/// Listing page shown after a successful save.
pub const CARS_PATH: &str = "/cars";

pub const FEATURES_ENDPOINT: &str = "/api/features";
pub const CARS_ENDPOINT: &str = "/api/cars";

/// Option names containing this phrase (any case) require a convertible car.
pub const SOFT_TOP_MARKER: &str = "convertible soft top";

/// Prefix for environment overrides, e.g. `BOLT__API__BASE_URL`.
pub const ENV_PREFIX: &str = "BOLT";
