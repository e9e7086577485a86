#![allow(dead_code)]

use bolt_kernel::prelude::*;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Gateway call as seen by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchFeatures,
    FetchCars,
    FetchCar(CarId),
    Create(CarDraft),
    Update(CarId, CarDraft),
}

/// In-memory gateway recording every call. Failures are injected per endpoint.
#[derive(Default)]
pub struct FakeGateway {
    pub features: Vec<Feature>,
    pub records: Vec<CarRecord>,
    pub fail_features: Option<GatewayError>,
    pub fail_car: Option<GatewayError>,
    pub fail_save: Option<GatewayError>,
    /// Simulated latency of each fetch.
    pub latency: Option<Duration>,
    calls: Mutex<Vec<Call>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl FakeGateway {
    #[must_use]
    pub fn with_features(features: Vec<Feature>) -> Self {
        Self { features, ..Self::default() }
    }

    #[must_use]
    pub fn with_record(mut self, record: CarRecord) -> Self {
        self.records.push(record);
        self
    }

    #[must_use]
    pub fn failing_features(mut self, err: GatewayError) -> Self {
        self.fail_features = Some(err);
        self
    }

    #[must_use]
    pub fn failing_car(mut self, err: GatewayError) -> Self {
        self.fail_car = Some(err);
        self
    }

    #[must_use]
    pub fn failing_save(mut self, err: GatewayError) -> Self {
        self.fail_save = Some(err);
        self
    }

    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn saves(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Create(_) | Call::Update(..)))
            .collect()
    }

    /// Highest number of fetches that were pending at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    async fn fetch<T>(&self, call: Call, result: Result<T, GatewayError>) -> Result<T, GatewayError> {
        self.calls.lock().push(call);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    fn save(&self, call: Call) -> Result<(), GatewayError> {
        self.calls.lock().push(call);
        self.fail_save.clone().map_or(Ok(()), Err)
    }
}

impl CarsGateway for FakeGateway {
    async fn fetch_features(&self) -> Result<Vec<Feature>, GatewayError> {
        let result = self.fail_features.clone().map_or_else(|| Ok(self.features.clone()), Err);
        self.fetch(Call::FetchFeatures, result).await
    }

    async fn fetch_cars(&self) -> Result<Vec<CarRecord>, GatewayError> {
        self.fetch(Call::FetchCars, Ok(self.records.clone())).await
    }

    async fn fetch_car(&self, id: &CarId) -> Result<CarRecord, GatewayError> {
        let result = match &self.fail_car {
            Some(err) => Err(err.clone()),
            None => self.records.iter().find(|r| &r.id == id).cloned().ok_or_else(|| {
                GatewayError::NotFound { message: "Car not found".into(), context: None }
            }),
        };
        self.fetch(Call::FetchCar(id.clone()), result).await
    }

    async fn create_car(&self, draft: &CarDraft) -> Result<(), GatewayError> {
        self.save(Call::Create(draft.clone()))
    }

    async fn update_car(&self, id: &CarId, draft: &CarDraft) -> Result<(), GatewayError> {
        self.save(Call::Update(id.clone(), draft.clone()))
    }
}

pub fn option(id: u64, feature: u64, name: &str, cents: u64) -> CarOption {
    CarOption {
        id: OptionId(id),
        feature_id: FeatureId(feature),
        name: name.to_owned(),
        image: String::new(),
        price_in_cents: Cents(cents),
    }
}

/// `[{1, "Color", [{10, "Red"}, {11, "Blue"}]}]`
pub fn color_catalog() -> Vec<Feature> {
    vec![Feature {
        id: FeatureId(1),
        name: "Color".to_owned(),
        options: vec![option(10, 1, "Red", 0), option(11, 1, "Blue", 50_000)],
    }]
}

/// Color plus a top feature: a hard top first, then the soft top.
pub fn soft_top_catalog() -> Vec<Feature> {
    let mut features = color_catalog();
    features.push(Feature {
        id: FeatureId(2),
        name: "Top".to_owned(),
        options: vec![option(13, 2, "Hard Top", 0), option(12, 2, "Convertible Soft Top", 150_000)],
    });
    features
}

/// Color plus a top feature whose only option is the soft top.
pub fn soft_top_only_catalog() -> Vec<Feature> {
    let mut features = color_catalog();
    features.push(Feature {
        id: FeatureId(2),
        name: "Top".to_owned(),
        options: vec![option(12, 2, "Convertible Soft Top", 150_000)],
    });
    features
}

pub fn record(id: &str, name: &str, options: Vec<CarOption>) -> CarRecord {
    CarRecord { id: CarId::new(id), name: name.to_owned(), is_convertible: None, options }
}

pub fn transport_error(message: &'static str) -> GatewayError {
    GatewayError::Transport { message: message.into(), context: None }
}
