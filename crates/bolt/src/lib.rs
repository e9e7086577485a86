//! Facade crate for Bolt Bucket.
//! Re-exports domain/kernel primitives and the feature slices enabled by Cargo features.
//! Keep this crate thin: it composes other crates and holds no business logic.
//!
//! ## Usage
//! - Depend on `bolt` (default features pull in every slice plus the HTTP gateway).
//! - Front-ends build an [`http::HttpGateway`] and drive the slice page controllers.

pub use bolt_domain as domain;
#[cfg(feature = "http")]
pub use bolt_http as http;
pub use bolt_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "configurator")]
    pub use bolt_configurator as configurator;
    #[cfg(feature = "garage")]
    pub use bolt_garage as garage;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "configurator")]
        "configurator",
        #[cfg(feature = "garage")]
        "garage",
        #[cfg(feature = "http")]
        "http",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
