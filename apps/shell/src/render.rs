//! Plain-text rendering of the view models.

use bolt::domain::Feature;
use bolt::features::configurator::{FormView, PageView, selection::requires_convertible};
use bolt::features::garage::GarageView;
use bolt::kernel::navigation::{BRAND, menu};
use std::io::{self, Write};

pub fn header(out: &mut impl Write) -> io::Result<()> {
    let links: Vec<_> = menu().iter().map(|(label, route)| format!("{label} ({route})")).collect();
    writeln!(out, "{BRAND} | {}", links.join(" | "))
}

pub fn features(features: &[Feature], out: &mut impl Write) -> io::Result<()> {
    for feature in features {
        writeln!(out, "[{}] {}", feature.id, feature.name)?;
        if feature.options.is_empty() {
            writeln!(out, "    (no options)")?;
        }
        for option in &feature.options {
            let note = if requires_convertible(option) { "  convertible only" } else { "" };
            writeln!(out, "    [{}] {} (+{}){note}", option.id, option.name, option.price_in_cents)?;
        }
    }
    Ok(())
}

pub fn form(view: &FormView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", view.title)?;
    writeln!(out, "  Name: {}", view.name)?;
    writeln!(out, "  Convertible: {}", yes_no(view.is_convertible))?;
    for feature in &view.features {
        writeln!(out, "  {}", feature.name)?;
        for option in &feature.options {
            let mark = if option.selected { "(*)" } else { "( )" };
            writeln!(out, "    {mark} {} {}", option.name, option.price_label)?;
        }
    }
    writeln!(out, "  Total: {}", view.total)?;
    if let Some(error) = &view.error {
        writeln!(out, "  ! {error}")?;
    }
    Ok(())
}

/// Loading and failure screens of the form page. Ready pages go through [`form`].
pub fn page(view: &PageView, out: &mut impl Write) -> io::Result<()> {
    match view {
        PageView::Loading(text) | PageView::Failed(text) => writeln!(out, "{text}"),
        PageView::Form(view) => form(view, out),
    }
}

pub fn garage(view: &GarageView, out: &mut impl Write) -> io::Result<()> {
    match view {
        GarageView::Loading(text) | GarageView::Failed(text) | GarageView::Empty(text) => {
            writeln!(out, "{text}")
        },
        GarageView::List(cards) => {
            for card in cards {
                writeln!(out, "{} [{}]", card.name, card.id)?;
                writeln!(out, "  Convertible: {}", yes_no(card.is_convertible))?;
                if !card.options.is_empty() {
                    writeln!(out, "  Options: {}", card.options.join(", "))?;
                }
                writeln!(out, "  Total: {}", card.total)?;
                writeln!(out, "  Edit: {}", card.edit_route)?;
            }
            Ok(())
        },
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
