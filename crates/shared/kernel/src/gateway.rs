//! Backend contract for reading the catalog and reading/writing car records.

use bolt_domain::{CarDraft, CarId, CarRecord, Feature};
use std::borrow::Cow;
use std::future::Future;

#[bolt_derive::bolt_error]
#[derive(Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a response (DNS, refused connection, timeout).
    #[error("{message}{}", format_context(.context))]
    Transport { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("{message}{}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The backend answered with a non-success status.
    #[error("{message} (HTTP {status}){}", format_context(.context))]
    Status { status: u16, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The response body did not match the expected shape.
    #[error("{message}{}", format_context(.context))]
    Decode { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("{message}{}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl GatewayError {
    /// The underlying message without status or context decoration.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message, .. }
            | Self::NotFound { message, .. }
            | Self::Status { message, .. }
            | Self::Decode { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }
}

/// Everything the client needs from the car backend.
///
/// Implementations own transport concerns (timeouts, TLS, serialization). Callers never
/// retry on their own; each method is attempted once per user action.
pub trait CarsGateway: Send + Sync {
    fn fetch_features(&self) -> impl Future<Output = Result<Vec<Feature>, GatewayError>> + Send;

    fn fetch_cars(&self) -> impl Future<Output = Result<Vec<CarRecord>, GatewayError>> + Send;

    fn fetch_car(
        &self,
        id: &CarId,
    ) -> impl Future<Output = Result<CarRecord, GatewayError>> + Send;

    fn create_car(
        &self,
        draft: &CarDraft,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;

    fn update_car(
        &self,
        id: &CarId,
        draft: &CarDraft,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;
}
