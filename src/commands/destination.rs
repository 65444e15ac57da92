use crate::config::RoimapConfig;
use crate::io::output::ReportOptions;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Report destination: the given file, or stdout.
///
/// Colors are disabled when writing to a file.
pub fn open_destination(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create output file {}", path.display()))?;
            colored::control::set_override(false);
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

pub fn report_options(config: &RoimapConfig) -> ReportOptions {
    let output = config.output();
    ReportOptions {
        currency: output.currency,
        show_details: output.show_details,
    }
}
