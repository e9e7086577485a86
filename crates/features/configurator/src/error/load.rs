use bolt_kernel::gateway::GatewayError;
use std::borrow::Cow;

/// The catalog or the car record could not be fetched. Terminal for that load attempt.
#[bolt_derive::bolt_error]
pub enum LoadError {
    #[error("{source}{}", format_context(.context))]
    Gateway { source: GatewayError, context: Option<Cow<'static, str>> },
}

impl LoadError {
    /// The failed fetch's message as the backend reported it.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Gateway { source, .. } => source.message(),
        }
    }
}
