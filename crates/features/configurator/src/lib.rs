//! Create/edit car slice.
//!
//! A [`page::CarFormPage`] goes `Loading -> Ready | Failed`. Once ready it owns a
//! [`form::CarForm`] whose [`selection::SelectionState`] enforces one option per feature
//! and the convertible soft-top rule. Submitting validates the name, calls the gateway
//! once and navigates to the listing on success.
//!
//! ```rust,ignore
//! let mut page = CarFormPage::create();
//! page.mount(&gateway).await;
//! if let Some(form) = page.form_mut() {
//!     form.set_name("Speedy");
//!     form.submit(&gateway, &mut navigator).await?;
//! }
//! ```

pub mod error;
pub mod form;
pub mod loader;
pub mod page;
pub mod prelude;
pub mod selection;
pub mod view;

pub use error::{LoadError, SubmitError, ValidationError};
pub use form::{CarForm, FormMode};
pub use loader::load_form;
pub use page::{CarFormPage, LoadPhase};
pub use selection::{SelectionState, Selections};
pub use view::{FeatureView, FormView, OptionView, PageView};
