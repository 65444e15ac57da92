use crate::catalog::{cost_categories, indicator_types, periods};
use anyhow::Result;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Catalog {
    indicator_types: Vec<crate::catalog::IndicatorTypeInfo>,
    periods: Vec<crate::catalog::PeriodInfo>,
    cost_categories: Vec<crate::catalog::CostCategoryInfo>,
}

/// Print the reference catalog, as tables or as one JSON document.
pub fn print_catalog<W: Write>(out: &mut W, json: bool) -> Result<()> {
    if json {
        let catalog = Catalog {
            indicator_types: indicator_types(),
            periods: periods(),
            cost_categories: cost_categories(),
        };
        serde_json::to_writer_pretty(&mut *out, &catalog)?;
        writeln!(out)?;
        return Ok(());
    }

    let mut types = Table::new();
    types
        .load_preset(UTF8_FULL)
        .set_header(vec!["Type", "Label", "Formula", "Unit"]);
    for info in indicator_types() {
        types.add_row(vec![
            info.indicator_type.to_string(),
            info.label.to_string(),
            info.formula.to_string(),
            info.unit.to_string(),
        ]);
    }
    writeln!(out, "{}", "Indicator types".bold())?;
    writeln!(out, "{types}")?;
    writeln!(out)?;

    let mut frequency = Table::new();
    frequency
        .load_preset(UTF8_FULL)
        .set_header(vec!["Period", "Label", "Monthly multiplier"]);
    for info in periods() {
        frequency.add_row(vec![
            info.period.to_string(),
            info.label.to_string(),
            format!("{:.4}", info.monthly_multiplier),
        ]);
    }
    writeln!(out, "{}", "Frequency periods".bold())?;
    writeln!(out, "{frequency}")?;
    writeln!(out)?;

    writeln!(out, "{}", "Cost categories".bold())?;
    for info in cost_categories() {
        writeln!(out, "  {:<16} {}", info.category.as_str(), info.label)?;
    }
    Ok(())
}
