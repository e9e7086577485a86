pub use crate::error::{LoadError, SubmitError, ValidationError};
pub use crate::form::{CarForm, FormMode};
pub use crate::loader::load_form;
pub use crate::page::{CarFormPage, LoadPhase};
pub use crate::selection::{SelectionState, Selections, requires_convertible};
pub use crate::view::{FeatureView, FormView, OptionView, PageView};
