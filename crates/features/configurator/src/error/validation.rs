use bolt_kernel::domain::{FeatureId, OptionId};
use std::borrow::Cow;

/// A user action the form refuses. The form state is left untouched.
#[bolt_derive::bolt_error]
#[derive(Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please give your car a name.{}", format_context(.context))]
    EmptyName { context: Option<Cow<'static, str>> },

    /// A soft-top option was picked while the car is not marked convertible.
    #[error(
        "Can't choose the Convertible Soft Top unless the car is convertible!{}",
        format_context(.context)
    )]
    SoftTopRequiresConvertible { option: String, context: Option<Cow<'static, str>> },

    #[error("Option {option_id} does not belong to feature {feature_id}{}", format_context(.context))]
    UnknownOption {
        feature_id: FeatureId,
        option_id: OptionId,
        context: Option<Cow<'static, str>>,
    },
}
