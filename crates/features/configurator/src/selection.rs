//! Per-feature option selection with the convertible soft-top rule.

use crate::error::ValidationError;
use bolt_kernel::domain::constants::SOFT_TOP_MARKER;
use bolt_kernel::domain::{CarDraft, CarOption, CarRecord, Feature, FeatureId, OptionId};
use std::collections::BTreeMap;
use tracing::debug;

/// Chosen option per feature, keyed in ascending feature order.
pub type Selections = BTreeMap<FeatureId, OptionId>;

/// Current choices of one car form.
///
/// Every transition either applies completely or returns a [`ValidationError`] and
/// leaves the state exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selections: Selections,
    is_convertible: bool,
}

impl SelectionState {
    /// Starts from `existing` when given, otherwise from the first option of every
    /// feature. Features without options get no entry. The convertible flag starts off.
    #[must_use]
    pub fn initialize(features: &[Feature], existing: Option<Selections>) -> Self {
        let selections = existing.unwrap_or_else(|| {
            features
                .iter()
                .filter_map(|feature| feature.first_option().map(|option| (feature.id, option.id)))
                .collect()
        });

        Self { selections, is_convertible: false }
    }

    #[must_use]
    pub const fn is_convertible(&self) -> bool {
        self.is_convertible
    }

    /// Replaces the convertible flag.
    ///
    /// Turning the flag off keeps an already chosen soft top selected; the rule is only
    /// enforced when an option is picked.
    pub fn set_convertible(&mut self, flag: bool) {
        self.is_convertible = flag;
    }

    /// Makes `option` the single active choice for `feature_id`.
    ///
    /// # Errors
    /// [`ValidationError::SoftTopRequiresConvertible`] if the option is a convertible soft
    /// top and the car is not convertible.
    pub fn choose_option(
        &mut self,
        feature_id: FeatureId,
        option: &CarOption,
    ) -> Result<(), ValidationError> {
        if !self.is_convertible && requires_convertible(option) {
            debug!(feature = %feature_id, option = %option.id, "Rejected soft top for non-convertible");
            return Err(ValidationError::SoftTopRequiresConvertible {
                option: option.name.clone(),
                context: None,
            });
        }

        self.selections.insert(feature_id, option.id);
        Ok(())
    }

    #[must_use]
    pub fn selected(&self, feature_id: FeatureId) -> Option<OptionId> {
        self.selections.get(&feature_id).copied()
    }

    #[must_use]
    pub fn is_selected(&self, feature_id: FeatureId, option_id: OptionId) -> bool {
        self.selected(feature_id) == Some(option_id)
    }

    #[must_use]
    pub const fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Builds the save payload.
    ///
    /// # Errors
    /// [`ValidationError::EmptyName`] if `name` is blank after trimming.
    pub fn to_draft(&self, name: &str) -> Result<CarDraft, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName { context: None });
        }

        Ok(CarDraft {
            name: name.to_owned(),
            option_ids: self.selections.values().copied().collect(),
            is_convertible: self.is_convertible,
        })
    }
}

/// Whether picking `option` needs the convertible flag.
#[must_use]
pub fn requires_convertible(option: &CarOption) -> bool {
    option.name.to_lowercase().contains(SOFT_TOP_MARKER)
}

/// Saved choices of a record keyed by feature. A later option for the same feature wins.
#[must_use]
pub fn selections_from_record(record: &CarRecord) -> Selections {
    record.options.iter().map(|option| (option.feature_id, option.id)).collect()
}
