//! Command handlers. Each one drives a page controller the same way a UI would.

use crate::cli::{Command, Pick};
use crate::render;
use anyhow::{Context, bail};
use bolt::domain::{CarId, Feature, FeatureId, OptionId};
use bolt::features::configurator::{CarForm, CarFormPage, PageView};
use bolt::features::garage::GaragePage;
use bolt::kernel::gateway::CarsGateway;
use bolt::kernel::navigation::RecordingNavigator;
use std::io::Write;
use tracing::debug;

/// Changes requested on the command line, applied after the form loads.
#[derive(Debug, Default)]
struct Changes {
    name: Option<String>,
    convertible: Option<bool>,
    picks: Vec<Pick>,
}

/// Runs one command against `gateway`, writing human-readable output to `out`.
///
/// # Errors
/// Load and save failures, rejected picks and output errors.
pub async fn run<G: CarsGateway>(command: Command, gateway: &G, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Features => {
            let features = gateway.fetch_features().await.context("Loading features failed")?;
            render::features(&features, out)?;
        },
        Command::Cars => {
            let mut page = GaragePage::new();
            page.mount(gateway).await;
            render::garage(&page.view(), out)?;
        },
        Command::Create { name, convertible, picks } => {
            let changes = Changes { name: Some(name), convertible: Some(convertible), picks };
            save(CarFormPage::create(), changes, gateway, out).await?;
        },
        Command::Edit { id, name, convertible, picks } => {
            let changes = Changes { name, convertible, picks };
            save(CarFormPage::edit(CarId::new(id)), changes, gateway, out).await?;
        },
    }
    Ok(())
}

async fn save<G: CarsGateway>(
    mut page: CarFormPage,
    changes: Changes,
    gateway: &G,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    page.mount(gateway).await;
    if let view @ PageView::Failed(_) = page.view() {
        render::page(&view, out)?;
        bail!("Car form did not load");
    }
    let form = page.form_mut().context("Car form did not load")?;

    apply(form, changes)?;

    let mut navigator = RecordingNavigator::new();
    let saved = form.submit(gateway, &mut navigator).await;
    render::form(&form.view(), out)?;
    saved?;

    if let Some(route) = navigator.current() {
        writeln!(out, "Saved. View your cars at {route}")?;
    }
    Ok(())
}

/// Applies command-line changes to a loaded form. The convertible flag goes first so
/// that soft-top picks in the same command are allowed.
fn apply(form: &mut CarForm, changes: Changes) -> anyhow::Result<()> {
    if let Some(flag) = changes.convertible {
        form.set_convertible(flag);
    }

    for pick in &changes.picks {
        let (feature_id, option_id) = resolve_pick(form.features(), pick)?;
        debug!(%pick, %feature_id, %option_id, "Applying pick");
        form.pick(feature_id, option_id).with_context(|| format!("--pick {pick}"))?;
    }

    if let Some(name) = changes.name {
        form.set_name(name);
    }
    Ok(())
}

/// Finds the feature and option a pick names, by case-insensitive name or numeric id.
///
/// # Errors
/// When either side matches nothing in the catalog.
pub fn resolve_pick(features: &[Feature], pick: &Pick) -> anyhow::Result<(FeatureId, OptionId)> {
    let feature = features
        .iter()
        .find(|f| matches(&pick.feature, f.id.0, &f.name))
        .with_context(|| format!("Unknown feature '{}'", pick.feature))?;

    let option = feature
        .options
        .iter()
        .find(|o| matches(&pick.option, o.id.0, &o.name))
        .with_context(|| format!("Unknown option '{}' for {}", pick.option, feature.name))?;

    Ok((feature.id, option.id))
}

fn matches(query: &str, id: u64, name: &str) -> bool {
    query.parse::<u64>().is_ok_and(|q| q == id) || query.to_lowercase() == name.to_lowercase()
}
