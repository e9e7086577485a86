#![allow(dead_code)]

use bolt_kernel::prelude::*;
use parking_lot::Mutex;

/// Serves a fixed listing, or a fixed error, and counts listing requests.
#[derive(Default)]
pub struct ListingGateway {
    pub cars: Vec<CarRecord>,
    pub failure: Option<GatewayError>,
    listings: Mutex<usize>,
}

impl ListingGateway {
    #[must_use]
    pub fn serving(cars: Vec<CarRecord>) -> Self {
        Self { cars, ..Self::default() }
    }

    #[must_use]
    pub fn failing(err: GatewayError) -> Self {
        Self { failure: Some(err), ..Self::default() }
    }

    pub fn listings(&self) -> usize {
        *self.listings.lock()
    }
}

fn unsupported() -> GatewayError {
    GatewayError::Internal { message: "not served by the listing fixture".into(), context: None }
}

impl CarsGateway for ListingGateway {
    async fn fetch_features(&self) -> Result<Vec<Feature>, GatewayError> {
        Err(unsupported())
    }

    async fn fetch_cars(&self) -> Result<Vec<CarRecord>, GatewayError> {
        *self.listings.lock() += 1;
        self.failure.clone().map_or_else(|| Ok(self.cars.clone()), Err)
    }

    async fn fetch_car(&self, _id: &CarId) -> Result<CarRecord, GatewayError> {
        Err(unsupported())
    }

    async fn create_car(&self, _draft: &CarDraft) -> Result<(), GatewayError> {
        Err(unsupported())
    }

    async fn update_car(&self, _id: &CarId, _draft: &CarDraft) -> Result<(), GatewayError> {
        Err(unsupported())
    }
}

pub fn car(id: &str, name: &str, convertible: Option<bool>, prices: &[u64]) -> CarRecord {
    let options = prices
        .iter()
        .enumerate()
        .map(|(i, cents)| CarOption {
            id: OptionId(i as u64 + 1),
            feature_id: FeatureId(i as u64 + 1),
            name: format!("Option {}", i + 1),
            image: String::new(),
            price_in_cents: Cents(*cents),
        })
        .collect();
    CarRecord { id: CarId::new(id), name: name.to_owned(), is_convertible: convertible, options }
}
