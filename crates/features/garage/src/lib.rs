//! Listing slice: every saved car with its chosen options and total price.

mod error;

pub use crate::error::{GarageError, GarageErrorExt};
use bolt_kernel::domain::{CarId, CarRecord, Cents};
use bolt_kernel::gateway::CarsGateway;
use bolt_kernel::navigation::Route;
use tracing::{debug, warn};

const LOADING_TEXT: &str = "Loading cars...";
const EMPTY_TEXT: &str = "No cars saved yet.";

/// Fetches all saved cars.
///
/// # Errors
/// [`GarageError::Gateway`] if the backend call fails.
pub async fn load_cars<G: CarsGateway>(gateway: &G) -> Result<Vec<CarRecord>, GarageError> {
    debug!("Loading saved cars");
    match gateway.fetch_cars().await {
        Ok(cars) => {
            debug!(count = cars.len(), "Saved cars loaded");
            Ok(cars)
        },
        Err(err) => {
            warn!(error = %err, "Loading saved cars failed");
            Err(err.into())
        },
    }
}

#[derive(Debug, Clone)]
pub enum GaragePhase {
    Loading,
    Ready(Vec<CarRecord>),
    Failed(String),
}

/// Page controller for `/cars`. Same lifecycle as the car form page.
#[derive(Debug, Clone)]
pub struct GaragePage {
    phase: GaragePhase,
    mounted: bool,
}

impl Default for GaragePage {
    fn default() -> Self {
        Self::new()
    }
}

impl GaragePage {
    #[must_use]
    pub const fn new() -> Self {
        Self { phase: GaragePhase::Loading, mounted: true }
    }

    #[must_use]
    pub const fn phase(&self) -> &GaragePhase {
        &self.phase
    }

    pub async fn mount<G: CarsGateway>(&mut self, gateway: &G) {
        let result = load_cars(gateway).await;
        self.finish_load(result);
    }

    /// Returns `false` and drops the result if the page was left or already settled.
    pub fn finish_load(&mut self, result: Result<Vec<CarRecord>, GarageError>) -> bool {
        if !self.mounted || !matches!(self.phase, GaragePhase::Loading) {
            return false;
        }

        self.phase = match result {
            Ok(cars) => GaragePhase::Ready(cars),
            Err(err) => GaragePhase::Failed(err.message().to_owned()),
        };
        true
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    #[must_use]
    pub fn view(&self) -> GarageView {
        match &self.phase {
            GaragePhase::Loading => GarageView::Loading(LOADING_TEXT.to_owned()),
            GaragePhase::Failed(message) => GarageView::Failed(format!("Error: {message}")),
            GaragePhase::Ready(cars) if cars.is_empty() => GarageView::Empty(EMPTY_TEXT.to_owned()),
            GaragePhase::Ready(cars) => GarageView::List(cars.iter().map(CarCard::from_record).collect()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GarageView {
    Loading(String),
    Failed(String),
    Empty(String),
    List(Vec<CarCard>),
}

/// One saved car as shown in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarCard {
    pub id: CarId,
    pub name: String,
    pub is_convertible: bool,
    pub options: Vec<String>,
    pub total: Cents,
    pub edit_route: Route,
}

impl CarCard {
    #[must_use]
    pub fn from_record(record: &CarRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            is_convertible: record.is_convertible.unwrap_or_default(),
            options: record.options.iter().map(|o| o.name.clone()).collect(),
            total: record.total_price(),
            edit_route: Route::EditCar(record.id.clone()),
        }
    }
}
