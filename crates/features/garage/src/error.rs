use bolt_kernel::gateway::GatewayError;
use std::borrow::Cow;

#[bolt_derive::bolt_error]
pub enum GarageError {
    #[error("{source}{}", format_context(.context))]
    Gateway { source: GatewayError, context: Option<Cow<'static, str>> },
}

impl GarageError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Gateway { source, .. } => source.message(),
        }
    }
}
