//! Error taxonomy of the configurator.
//!
//! One enum per module: `#[bolt_error]` emits a module-private `format_context` helper.

mod load;
mod submit;
mod validation;

pub use load::{LoadError, LoadErrorExt};
pub use submit::{SubmitError, SubmitErrorExt};
pub use validation::{ValidationError, ValidationErrorExt};
