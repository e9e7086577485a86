//! Page routes and the navigation collaborator.

use bolt_domain::CarId;
use bolt_domain::constants::{CARS_PATH, CUSTOMIZE_PATH};
use std::fmt;

/// Pages of the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Create a new car.
    Customize,
    /// Listing of saved cars.
    Cars,
    EditCar(CarId),
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Customize => CUSTOMIZE_PATH.to_owned(),
            Self::Cars => CARS_PATH.to_owned(),
            Self::EditCar(id) => format!("{CARS_PATH}/{id}/edit"),
        }
    }
}

/// Site name shown in the header.
pub const BRAND: &str = "Bolt Bucket";

/// Header links in display order.
#[must_use]
pub const fn menu() -> [(&'static str, Route); 2] {
    [("Customize", Route::Customize), ("View Cars", Route::Cars)]
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Moves the user to another page. Only invoked after a confirmed save.
pub trait Navigator {
    fn go_to(&mut self, route: Route);
}

/// Remembers every requested route; useful for headless front-ends and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    visited: Vec<Route>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visited(&self) -> &[Route] {
        &self.visited
    }

    #[must_use]
    pub fn current(&self) -> Option<&Route> {
        self.visited.last()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&mut self, route: Route) {
        tracing::debug!(path = %route, "Navigating");
        self.visited.push(route);
    }
}
