//! Fetches what a form needs before it can be shown.

use crate::error::LoadError;
use crate::form::{CarForm, FormMode};
use bolt_kernel::gateway::CarsGateway;
use tracing::{debug, warn};

/// Loads the catalog (and, when editing, the saved car) and builds the initial form.
///
/// The edit flow fetches both concurrently and fails as soon as either fetch fails.
///
/// # Errors
/// [`LoadError::Gateway`] with the first failed fetch.
pub async fn load_form<G: CarsGateway>(gateway: &G, mode: &FormMode) -> Result<CarForm, LoadError> {
    debug!(?mode, "Loading car form");

    let loaded = match mode {
        FormMode::Create => gateway.fetch_features().await.map(CarForm::create),
        FormMode::Edit(id) => tokio::try_join!(gateway.fetch_features(), gateway.fetch_car(id))
            .map(|(features, record)| CarForm::edit(id.clone(), features, &record)),
    };

    match loaded {
        Ok(form) => {
            debug!(features = form.features().len(), "Car form ready");
            Ok(form)
        },
        Err(err) => {
            warn!(?mode, error = %err, "Loading car form failed");
            Err(err.into())
        },
    }
}
