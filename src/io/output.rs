use crate::catalog::indicator_type_info;
use crate::core::{Indicator, Project};
use crate::roi::{IndicatorRoi, ProjectRoi, UNBOUNDED_PAYBACK_MONTHS};
use chrono::Utc;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// A project together with its aggregated metrics.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub project: Project,
    pub roi: ProjectRoi,
}

/// A single indicator together with its metrics.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorReport {
    pub indicator_id: String,
    pub project_id: String,
    pub name: String,
    pub description: String,
    pub metrics: IndicatorRoi,
}

impl IndicatorReport {
    pub fn new(indicator: &Indicator, metrics: IndicatorRoi) -> Self {
        Self {
            indicator_id: indicator.id.clone(),
            project_id: indicator.project_id.clone(),
            name: indicator.name.clone(),
            description: indicator.description.clone(),
            metrics,
        }
    }
}

/// Presentation settings shared by the human-readable writers.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportOptions {
    pub currency: String,
    pub show_details: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
            show_details: true,
        }
    }
}

impl ReportOptions {
    fn money(&self, value: f64) -> String {
        format!("{} {:.2}", self.currency, value)
    }
}

fn format_payback(months: f64) -> String {
    if months >= UNBOUNDED_PAYBACK_MONTHS {
        "never".to_string()
    } else {
        format!("{:.1} months", months)
    }
}

fn format_pct(value: f64) -> String {
    format!("{:.2}%", value)
}

pub trait OutputWriter {
    fn write_projects(&mut self, reports: &[ProjectReport]) -> anyhow::Result<()>;
    fn write_indicator(&mut self, report: &IndicatorReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_projects(&mut self, reports: &[ProjectReport]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_indicator(&mut self, report: &IndicatorReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    options: ReportOptions,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, options: ReportOptions) -> Self {
        Self { writer, options }
    }

    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", title)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_project(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        let roi = &report.roi;
        writeln!(self.writer, "## {}", report.project.name)?;
        writeln!(self.writer)?;
        if !report.project.area.is_empty() {
            writeln!(self.writer, "Area: {}", report.project.area)?;
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Indicators | {} |", roi.total_indicators)?;
        writeln!(
            self.writer,
            "| Annual economy | {} |",
            self.options.money(roi.annual_economy_total)
        )?;
        writeln!(
            self.writer,
            "| Implementation cost | {} |",
            self.options.money(roi.implementation_cost_total)
        )?;
        writeln!(
            self.writer,
            "| Annual recurring cost | {} |",
            self.options.money(roi.annual_recurring_cost_total)
        )?;
        writeln!(self.writer, "| ROI | {} |", format_pct(roi.overall_roi_pct))?;
        writeln!(
            self.writer,
            "| Average payback | {} |",
            format_payback(roi.average_payback_months)
        )?;
        writeln!(self.writer)?;

        if !roi.economy_by_type.is_empty() {
            writeln!(self.writer, "### Economy by type")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Type | Indicators | Annual economy |")?;
            writeln!(self.writer, "|------|------------|----------------|")?;
            for entry in &roi.economy_by_type {
                writeln!(
                    self.writer,
                    "| {} | {} | {} |",
                    indicator_type_info(entry.indicator_type).label,
                    entry.count,
                    self.options.money(entry.annual_economy)
                )?;
            }
            writeln!(self.writer)?;
        }

        if self.options.show_details && roi.total_indicators > 0 {
            writeln!(self.writer, "### First-year projection")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Month | Cumulative net economy |")?;
            writeln!(self.writer, "|-------|------------------------|")?;
            for (month, value) in roi.cumulative_net_projection.iter().enumerate() {
                writeln!(
                    self.writer,
                    "| {} | {} |",
                    month + 1,
                    self.options.money(*value)
                )?;
            }
            writeln!(self.writer)?;
        }

        if self.options.show_details && !roi.indicators.is_empty() {
            writeln!(self.writer, "### Indicators")?;
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "| Indicator | Type | Effect | Annual economy | ROI | Payback |"
            )?;
            writeln!(
                self.writer,
                "|-----------|------|--------|----------------|-----|---------|"
            )?;
            for item in &roi.indicators {
                let m = &item.metrics;
                writeln!(
                    self.writer,
                    "| {} | {} | {} | {} | {} | {} |",
                    item.name,
                    m.indicator_type,
                    m.valuation.description,
                    self.options.money(m.annual_economy),
                    format_pct(m.roi_pct),
                    format_payback(m.payback_months)
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_projects(&mut self, reports: &[ProjectReport]) -> anyhow::Result<()> {
        self.write_header("ROI Report")?;
        if reports.is_empty() {
            writeln!(self.writer, "No projects found.")?;
        }
        for report in reports {
            self.write_project(report)?;
        }
        Ok(())
    }

    fn write_indicator(&mut self, report: &IndicatorReport) -> anyhow::Result<()> {
        let m = &report.metrics;
        self.write_header(&format!("Indicator: {}", report.name))?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Type | {} |", m.indicator_type)?;
        writeln!(self.writer, "| Effect | {} |", m.valuation.description)?;
        writeln!(
            self.writer,
            "| Monthly economy | {} |",
            self.options.money(m.monthly_economy)
        )?;
        writeln!(
            self.writer,
            "| Annual economy | {} |",
            self.options.money(m.annual_economy)
        )?;
        writeln!(
            self.writer,
            "| Implementation cost | {} |",
            self.options.money(m.implementation_cost)
        )?;
        writeln!(
            self.writer,
            "| Monthly cost | {} |",
            self.options.money(m.monthly_cost)
        )?;
        writeln!(
            self.writer,
            "| Total investment | {} |",
            self.options.money(m.total_investment)
        )?;
        writeln!(self.writer, "| ROI | {} |", format_pct(m.roi_pct))?;
        writeln!(
            self.writer,
            "| Payback | {} |",
            format_payback(m.payback_months)
        )?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    options: ReportOptions,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, options: ReportOptions) -> Self {
        Self { writer, options }
    }

    fn write_project(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        let roi = &report.roi;
        writeln!(self.writer, "{}", report.project.name.bold())?;
        writeln!(self.writer, "  Indicators: {}", roi.total_indicators)?;
        writeln!(
            self.writer,
            "  Annual economy: {}",
            self.options.money(roi.annual_economy_total).green()
        )?;
        writeln!(
            self.writer,
            "  Investment: {} implementation + {} recurring/year",
            self.options.money(roi.implementation_cost_total),
            self.options.money(roi.annual_recurring_cost_total)
        )?;
        writeln!(self.writer, "  ROI: {}", colored_pct(roi.overall_roi_pct))?;
        writeln!(
            self.writer,
            "  Average payback: {}",
            format_payback(roi.average_payback_months)
        )?;
        for entry in &roi.economy_by_type {
            writeln!(
                self.writer,
                "    {}: {} ({} indicators)",
                indicator_type_info(entry.indicator_type).label,
                self.options.money(entry.annual_economy),
                entry.count
            )?;
        }
        if roi.total_indicators > 0 {
            // Quarter checkpoints
            let checkpoints: Vec<String> = roi
                .cumulative_net_projection
                .iter()
                .enumerate()
                .skip(2)
                .step_by(3)
                .map(|(month, value)| format!("M{} {}", month + 1, self.options.money(*value)))
                .collect();
            writeln!(self.writer, "  Cumulative net: {}", checkpoints.join(", "))?;
        }

        if self.options.show_details && !roi.indicators.is_empty() {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![
                    "Indicator",
                    "Type",
                    "Effect",
                    "Annual economy",
                    "ROI",
                    "Payback",
                ]);
            for item in &roi.indicators {
                let m = &item.metrics;
                table.add_row(vec![
                    Cell::new(&item.name),
                    Cell::new(m.indicator_type),
                    Cell::new(&m.valuation.description),
                    Cell::new(self.options.money(m.annual_economy))
                        .set_alignment(CellAlignment::Right),
                    Cell::new(format_pct(m.roi_pct)).set_alignment(CellAlignment::Right),
                    Cell::new(format_payback(m.payback_months))
                        .set_alignment(CellAlignment::Right),
                ]);
            }
            writeln!(self.writer, "{table}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn colored_pct(value: f64) -> ColoredString {
    let text = format_pct(value);
    if value >= 0.0 {
        text.green()
    } else {
        text.red()
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_projects(&mut self, reports: &[ProjectReport]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "ROI Report".bold().blue())?;
        writeln!(self.writer, "{}", "==========".blue())?;
        writeln!(self.writer)?;
        if reports.is_empty() {
            writeln!(self.writer, "No projects found.")?;
        }
        for report in reports {
            self.write_project(report)?;
        }
        Ok(())
    }

    fn write_indicator(&mut self, report: &IndicatorReport) -> anyhow::Result<()> {
        let m = &report.metrics;
        writeln!(self.writer, "{}", report.name.bold().blue())?;
        writeln!(self.writer, "  Type: {}", m.indicator_type)?;
        writeln!(self.writer, "  Effect: {}", m.valuation.description)?;
        writeln!(
            self.writer,
            "  Economy: {} / month, {} / year",
            self.options.money(m.monthly_economy),
            self.options.money(m.annual_economy).green()
        )?;
        writeln!(
            self.writer,
            "  Costs: {} implementation, {} / month",
            self.options.money(m.implementation_cost),
            self.options.money(m.monthly_cost)
        )?;
        if m.staff.count > 0 {
            writeln!(
                self.writer,
                "  Staff still involved: {} ({} / month)",
                m.staff.count,
                self.options.money(m.staff.monthly_cost)
            )?;
        }
        writeln!(self.writer, "  ROI: {}", colored_pct(m.roi_pct))?;
        writeln!(self.writer, "  Payback: {}", format_payback(m.payback_months))?;
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    destination: Box<dyn Write + 'a>,
    options: ReportOptions,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination, options)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination, options)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Baseline, IndicatorType, WithAi};
    use crate::roi::{compute_indicator_roi, compute_project_roi};

    fn sample_indicator() -> Indicator {
        Indicator {
            id: "i1".into(),
            project_id: "p1".into(),
            name: "Invoice triage".into(),
            indicator_type: IndicatorType::Productivity,
            baseline: Baseline {
                time_before_minutes: 60.0,
                hourly_rate: 50.0,
                ..Baseline::default()
            },
            with_ai: WithAi {
                time_after_minutes: 15.0,
                implementation_cost: 1000.0,
                ..WithAi::default()
            },
            ..Indicator::default()
        }
    }

    fn sample_report() -> ProjectReport {
        ProjectReport {
            project: Project {
                id: "p1".into(),
                name: "Back office".into(),
                area: "Finance".into(),
                ..Project::default()
            },
            roi: compute_project_roi(&[sample_indicator()]),
        }
    }

    #[test]
    fn test_json_writer_emits_camel_case() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_projects(&[sample_report()])
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let roi = &value[0]["roi"];
        assert_eq!(roi["totalIndicators"], 1);
        assert_eq!(roi["annualEconomyTotal"], 450.0);
        assert_eq!(roi["averagePaybackMonths"], 26.7);
        assert_eq!(roi["indicators"][0]["metrics"]["indicatorType"], "productivity");
        assert_eq!(roi["indicators"][0]["metrics"]["valuation"]["unit"], "min");
    }

    #[test]
    fn test_markdown_writer_lists_indicators() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer, ReportOptions::default())
            .write_projects(&[sample_report()])
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("# ROI Report"));
        assert!(output.contains("## Back office"));
        assert!(output.contains("| Annual economy | $ 450.00 |"));
        assert!(output.contains("| Invoice triage | productivity | 45 min saved per execution |"));
        assert!(output.contains("26.7 months"));
    }

    #[test]
    fn test_markdown_writer_breaks_down_economy() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer, ReportOptions::default())
            .write_projects(&[sample_report()])
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("### Economy by type"));
        assert!(output.contains("| Productivity | 1 | $ 450.00 |"));
        assert!(output.contains("| 1 | $ 37.50 |"));
        assert!(output.contains("| 12 | $ 450.00 |"));
    }

    #[test]
    fn test_terminal_writer_project_summary() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, ReportOptions::default())
            .write_projects(&[sample_report()])
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("Productivity: $ 450.00 (1 indicators)"));
        assert!(output.contains("M3 $ 112.50, M6 $ 225.00, M9 $ 337.50, M12 $ 450.00"));
    }

    #[test]
    fn test_json_writer_includes_breakdowns() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_projects(&[sample_report()])
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let roi = &value[0]["roi"];
        assert_eq!(roi["economyByType"][0]["indicatorType"], "productivity");
        assert_eq!(roi["economyByType"][0]["count"], 1);
        assert_eq!(roi["cumulativeNetProjection"][11], 450.0);
    }

    #[test]
    fn test_markdown_writer_hides_details() {
        let mut buffer = Vec::new();
        let options = ReportOptions {
            currency: "R$".into(),
            show_details: false,
        };
        MarkdownWriter::new(&mut buffer, options)
            .write_projects(&[sample_report()])
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("R$ 450.00"));
        assert!(output.contains("### Economy by type"));
        assert!(!output.contains("### First-year projection"));
        assert!(!output.contains("### Indicators"));
    }

    #[test]
    fn test_terminal_writer_indicator() {
        let indicator = sample_indicator();
        let report = IndicatorReport::new(&indicator, compute_indicator_roi(&indicator));
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, ReportOptions::default())
            .write_indicator(&report)
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("Invoice triage"));
        assert!(output.contains("45 min saved per execution"));
        assert!(output.contains("26.7 months"));
    }

    #[test]
    fn test_unbounded_payback_renders_as_never() {
        assert_eq!(format_payback(UNBOUNDED_PAYBACK_MONTHS), "never");
        assert_eq!(format_payback(3.24), "3.2 months");
    }
}
