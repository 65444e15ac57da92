//! Loading portfolio snapshots (projects + indicators) from disk.
//!
//! Accepted document shapes, in any supported format:
//!
//! - a portfolio object `{ "projects": [...], "indicators": [...] }`
//! - the persisted dashboard store `{ "state": { "projetos": [...], "indicadores": [...] } }`
//! - a bare list of indicators

use crate::core::{Error, Indicator, Portfolio, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortfolioFormat {
    Json,
    Toml,
    Yaml,
}

impl PortfolioFormat {
    /// Pick a format from the file extension; unknown extensions read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => PortfolioFormat::Toml,
            Some("yaml") | Some("yml") => PortfolioFormat::Yaml,
            _ => PortfolioFormat::Json,
        }
    }
}

impl fmt::Display for PortfolioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PortfolioFormat::Json => "json",
            PortfolioFormat::Toml => "toml",
            PortfolioFormat::Yaml => "yaml",
        })
    }
}

/// Top-level layout of a portfolio document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    Indicators,
    Persisted,
    Plain,
}

const EXPECTED_SHAPE: &str = "expected a portfolio object or a list of indicators";

#[derive(Deserialize)]
struct Persisted {
    state: Portfolio,
}

fn object_shape(has_state: bool) -> Shape {
    if has_state {
        Shape::Persisted
    } else {
        Shape::Plain
    }
}

/// Shape of the document, and whether it holds anything at all.
fn detect_shape(contents: &str, format: PortfolioFormat) -> Result<(Shape, bool)> {
    let parse_error = |e: &dyn fmt::Display| Error::portfolio(format.to_string(), e);
    match format {
        PortfolioFormat::Json => {
            match serde_json::from_str::<serde_json::Value>(contents).map_err(|e| parse_error(&e))? {
                serde_json::Value::Array(items) => Ok((Shape::Indicators, !items.is_empty())),
                serde_json::Value::Object(map) => Ok((
                    object_shape(map.get("state").is_some_and(|state| state.is_object())),
                    !map.is_empty(),
                )),
                _ => Err(parse_error(&EXPECTED_SHAPE)),
            }
        }
        PortfolioFormat::Toml => {
            let table: toml::Table = toml::from_str(contents).map_err(|e| parse_error(&e))?;
            Ok((
                object_shape(table.get("state").is_some_and(|state| state.is_table())),
                !table.is_empty(),
            ))
        }
        PortfolioFormat::Yaml => {
            match serde_yaml::from_str::<serde_yaml::Value>(contents).map_err(|e| parse_error(&e))? {
                serde_yaml::Value::Sequence(items) => Ok((Shape::Indicators, !items.is_empty())),
                serde_yaml::Value::Mapping(map) => Ok((
                    object_shape(map.get("state").is_some_and(|state| state.is_mapping())),
                    !map.is_empty(),
                )),
                _ => Err(parse_error(&EXPECTED_SHAPE)),
            }
        }
    }
}

/// Typed parse of the whole document, so errors carry the parser's location.
fn deserialize<T: DeserializeOwned>(contents: &str, format: PortfolioFormat) -> Result<T> {
    match format {
        PortfolioFormat::Json => {
            serde_json::from_str(contents).map_err(|e| Error::portfolio(format.to_string(), e))
        }
        PortfolioFormat::Toml => {
            toml::from_str(contents).map_err(|e| Error::portfolio(format.to_string(), e))
        }
        PortfolioFormat::Yaml => {
            serde_yaml::from_str(contents).map_err(|e| Error::portfolio(format.to_string(), e))
        }
    }
}

/// Pure function to parse a portfolio document
pub fn parse_portfolio(contents: &str, format: PortfolioFormat) -> Result<Portfolio> {
    let (shape, populated) = detect_shape(contents, format)?;
    let portfolio = match shape {
        Shape::Indicators => Portfolio {
            projects: Vec::new(),
            indicators: deserialize::<Vec<Indicator>>(contents, format)?,
        },
        Shape::Persisted => deserialize::<Persisted>(contents, format)?.state,
        Shape::Plain => deserialize::<Portfolio>(contents, format)?,
    };

    if populated && portfolio.is_empty() {
        log::warn!(
            "The {format} document is not empty but holds no recognized projects or indicators"
        );
    }
    Ok(portfolio)
}

pub fn load_portfolio(path: &Path) -> Result<Portfolio> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Cannot read portfolio", path, e))?;
    let format = PortfolioFormat::from_path(path);
    let portfolio = parse_portfolio(&contents, format)?;
    log::debug!(
        "Loaded {} projects and {} indicators from {}",
        portfolio.projects.len(),
        portfolio.indicators.len(),
        path.display()
    );
    Ok(portfolio)
}
