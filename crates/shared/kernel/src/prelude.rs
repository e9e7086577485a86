pub use crate::gateway::{CarsGateway, GatewayError};
pub use crate::navigation::{Navigator, RecordingNavigator, Route};
pub use bolt_domain::{CarDraft, CarId, CarOption, CarRecord, Cents, Feature, FeatureId, OptionId};
