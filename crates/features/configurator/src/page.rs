//! Page controller owning the form through its load lifecycle.

use crate::error::LoadError;
use crate::form::{CarForm, FormMode};
use crate::loader::load_form;
use crate::view::PageView;
use bolt_kernel::domain::CarId;
use bolt_kernel::gateway::CarsGateway;
use tracing::debug;

/// `Loading -> Ready` or `Loading -> Failed`. There is no way back to `Loading`.
#[derive(Debug, Clone)]
pub enum LoadPhase {
    Loading,
    Ready(CarForm),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct CarFormPage {
    mode: FormMode,
    phase: LoadPhase,
    mounted: bool,
}

impl CarFormPage {
    #[must_use]
    pub const fn create() -> Self {
        Self::new(FormMode::Create)
    }

    #[must_use]
    pub const fn edit(id: CarId) -> Self {
        Self::new(FormMode::Edit(id))
    }

    #[must_use]
    pub const fn new(mode: FormMode) -> Self {
        Self { mode, phase: LoadPhase::Loading, mounted: true }
    }

    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    #[must_use]
    pub const fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Loads and applies the result in one step.
    pub async fn mount<G: CarsGateway>(&mut self, gateway: &G) {
        let result = load_form(gateway, &self.mode).await;
        self.finish_load(result);
    }

    /// Applies a load result that completed elsewhere.
    ///
    /// Returns `false` and drops the result if the page was left or already settled.
    pub fn finish_load(&mut self, result: Result<CarForm, LoadError>) -> bool {
        if !self.mounted || !matches!(self.phase, LoadPhase::Loading) {
            debug!(mode = ?self.mode, "Discarding late load result");
            return false;
        }

        self.phase = match result {
            Ok(form) => LoadPhase::Ready(form),
            Err(err) => LoadPhase::Failed(err.message().to_owned()),
        };
        true
    }

    /// Leaves the page. Any load still in flight is ignored when it lands.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    #[must_use]
    pub const fn form(&self) -> Option<&CarForm> {
        match &self.phase {
            LoadPhase::Ready(form) => Some(form),
            _ => None,
        }
    }

    pub const fn form_mut(&mut self) -> Option<&mut CarForm> {
        match &mut self.phase {
            LoadPhase::Ready(form) => Some(form),
            _ => None,
        }
    }

    #[must_use]
    pub fn view(&self) -> PageView {
        PageView::from_page(self)
    }
}
