//! Render-agnostic view model. Derived from state on every call and never mutated.

use crate::form::{CarForm, FormMode};
use crate::page::{CarFormPage, LoadPhase};
use crate::selection::requires_convertible;
use bolt_kernel::domain::{CarOption, Cents, Feature, FeatureId, OptionId};

const CREATE_TITLE: &str = "Create Your Custom Car";
const CREATE_LOADING: &str = "Loading customization options...";
const EDIT_LOADING: &str = "Loading car for editing...";
const CREATE_SUBMIT: &str = "Save Car";
const EDIT_SUBMIT: &str = "Update Car";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Loading(String),
    /// `Error: {message}`.
    Failed(String),
    Form(FormView),
}

impl PageView {
    #[must_use]
    pub fn from_page(page: &CarFormPage) -> Self {
        match page.phase() {
            LoadPhase::Loading => Self::Loading(loading_text(page.mode()).to_owned()),
            LoadPhase::Failed(message) => Self::Failed(format!("Error: {message}")),
            LoadPhase::Ready(form) => Self::Form(FormView::from_form(form)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: String,
    pub name: String,
    pub is_convertible: bool,
    pub features: Vec<FeatureView>,
    pub total: Cents,
    pub submit_label: &'static str,
    /// Inline message of the last failed submit.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureView {
    pub id: FeatureId,
    pub name: String,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub id: OptionId,
    pub name: String,
    pub image: String,
    /// `(+$X)`.
    pub price_label: String,
    pub selected: bool,
    /// Picking it now would be refused: a soft top on a car that is not convertible.
    pub locked: bool,
}

impl FormView {
    #[must_use]
    pub fn from_form(form: &CarForm) -> Self {
        let (title, submit_label) = match form.mode() {
            FormMode::Create => (CREATE_TITLE.to_owned(), CREATE_SUBMIT),
            FormMode::Edit(_) => (format!("Edit {}", form.name()), EDIT_SUBMIT),
        };

        Self {
            title,
            name: form.name().to_owned(),
            is_convertible: form.selection().is_convertible(),
            features: form.features().iter().map(|f| feature_view(form, f)).collect(),
            total: form.total_price(),
            submit_label,
            error: form.submit_error().map(str::to_owned),
        }
    }
}

const fn loading_text(mode: &FormMode) -> &'static str {
    match mode {
        FormMode::Create => CREATE_LOADING,
        FormMode::Edit(_) => EDIT_LOADING,
    }
}

fn feature_view(form: &CarForm, feature: &Feature) -> FeatureView {
    let selection = form.selection();
    FeatureView {
        id: feature.id,
        name: feature.name.clone(),
        options: feature
            .options
            .iter()
            .map(|option| {
                let selected = selection.is_selected(feature.id, option.id);
                OptionView {
                    id: option.id,
                    name: option.name.clone(),
                    image: option.image.clone(),
                    price_label: price_label(option),
                    selected,
                    locked: !selected
                        && !selection.is_convertible()
                        && requires_convertible(option),
                }
            })
            .collect(),
    }
}

fn price_label(option: &CarOption) -> String {
    format!("(+{})", option.price_in_cents)
}
