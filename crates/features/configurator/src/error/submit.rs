use super::ValidationError;
use bolt_kernel::gateway::GatewayError;
use std::borrow::Cow;

/// Saving failed. The form keeps every selection so the user can resubmit.
#[bolt_derive::bolt_error]
pub enum SubmitError {
    #[error("{source}{}", format_context(.context))]
    Validation { source: ValidationError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Gateway { source: GatewayError, context: Option<Cow<'static, str>> },
}
