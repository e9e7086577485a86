//! A loaded car form: the catalog, the selection state, and the name field.

use crate::error::{SubmitError, ValidationError};
use crate::selection::{SelectionState, selections_from_record};
use crate::view::FormView;
use bolt_kernel::domain::{CarDraft, CarId, CarOption, CarRecord, Cents, Feature, FeatureId, OptionId};
use bolt_kernel::gateway::CarsGateway;
use bolt_kernel::navigation::{Navigator, Route};
use tracing::{info, warn};

/// Which backend call a submit turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(CarId),
}

#[derive(Debug, Clone)]
pub struct CarForm {
    mode: FormMode,
    features: Vec<Feature>,
    selection: SelectionState,
    name: String,
    submit_error: Option<String>,
}

impl CarForm {
    /// Fresh form: first option of every feature, not convertible, empty name.
    #[must_use]
    pub fn create(features: Vec<Feature>) -> Self {
        let selection = SelectionState::initialize(&features, None);
        Self { mode: FormMode::Create, features, selection, name: String::new(), submit_error: None }
    }

    /// Form prefilled from a saved car. The record's choices replace the defaults.
    #[must_use]
    pub fn edit(id: CarId, features: Vec<Feature>, record: &CarRecord) -> Self {
        let mut selection =
            SelectionState::initialize(&features, Some(selections_from_record(record)));
        if let Some(flag) = record.is_convertible {
            selection.set_convertible(flag);
        }

        Self {
            mode: FormMode::Edit(id),
            features,
            selection,
            name: record.name.clone(),
            submit_error: None,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_convertible(&mut self, flag: bool) {
        self.selection.set_convertible(flag);
    }

    /// Picks `option` for `feature_id`.
    ///
    /// # Errors
    /// See [`SelectionState::choose_option`].
    pub fn choose_option(
        &mut self,
        feature_id: FeatureId,
        option: &CarOption,
    ) -> Result<(), ValidationError> {
        self.selection.choose_option(feature_id, option)
    }

    /// Picks an option of the loaded catalog by id.
    ///
    /// # Errors
    /// [`ValidationError::UnknownOption`] if the catalog has no such option under that
    /// feature, otherwise see [`SelectionState::choose_option`].
    pub fn pick(&mut self, feature_id: FeatureId, option_id: OptionId) -> Result<(), ValidationError> {
        let option = self
            .features
            .iter()
            .find(|f| f.id == feature_id)
            .and_then(|f| f.option(option_id))
            .ok_or(ValidationError::UnknownOption { feature_id, option_id, context: None })?;

        self.selection.choose_option(feature_id, option)
    }

    /// Options currently selected, in catalog order.
    pub fn selected_options(&self) -> impl Iterator<Item = &CarOption> {
        self.features
            .iter()
            .filter_map(|f| self.selection.selected(f.id).and_then(|id| f.option(id)))
    }

    #[must_use]
    pub fn total_price(&self) -> Cents {
        self.selected_options().map(|o| o.price_in_cents).sum()
    }

    /// Payload for the current state.
    ///
    /// # Errors
    /// [`ValidationError::EmptyName`] for a blank name.
    pub fn draft(&self) -> Result<CarDraft, ValidationError> {
        self.selection.to_draft(&self.name)
    }

    /// Message of the last failed submit, shown inline above the form. Gateway messages
    /// are kept as the backend sent them.
    #[must_use]
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Validates, saves through the gateway, then navigates to the listing.
    ///
    /// Exactly one gateway call is made per invocation and none when validation fails.
    /// On failure the selections and the name stay as they were so the user can resubmit.
    ///
    /// # Errors
    /// [`SubmitError::Validation`] for a blank name, [`SubmitError::Gateway`] if the backend
    /// call fails.
    pub async fn submit<G, N>(&mut self, gateway: &G, navigator: &mut N) -> Result<(), SubmitError>
    where
        G: CarsGateway,
        N: Navigator,
    {
        let draft = match self.draft() {
            Ok(draft) => draft,
            Err(err) => {
                self.submit_error = Some(err.to_string());
                return Err(err.into());
            },
        };

        let saved = match &self.mode {
            FormMode::Create => gateway.create_car(&draft).await,
            FormMode::Edit(id) => gateway.update_car(id, &draft).await,
        };

        match saved {
            Ok(()) => {
                info!(car = %draft.name, options = draft.option_ids.len(), "Car saved");
                self.submit_error = None;
                navigator.go_to(Route::Cars);
                Ok(())
            },
            Err(err) => {
                warn!(car = %draft.name, error = %err, "Saving car failed");
                self.submit_error = Some(err.message().to_owned());
                Err(err.into())
            },
        }
    }

    #[must_use]
    pub fn view(&self) -> FormView {
        FormView::from_form(self)
    }
}
