use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use thiserror::Error;

use super::model::{TrekDataset, TrekRecord};
use super::normalize::{
    normalize_accommodation, normalize_grade, parse_altitude, parse_cost, parse_days,
};

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

pub const COL_MAX_ALTITUDE: &str = "Max Altitude";
pub const COL_TIME: &str = "Time";
pub const COL_COST: &str = "Cost (USD)";
pub const COL_TRIP_GRADE: &str = "Trip Grade";
/// Spelled the way the published dataset spells it.
pub const COL_ACCOMMODATION: &str = "Accomodation";

pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_MAX_ALTITUDE,
    COL_TIME,
    COL_COST,
    COL_TRIP_GRADE,
    COL_ACCOMMODATION,
];

/// Structural problems that make a file unusable as a trek dataset.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    /// One of [`REQUIRED_COLUMNS`] is absent from the header row.
    #[error("CSV missing required column '{0}'")]
    MissingColumn(String),
}

/// The five columns the dashboard reads, as raw text.
#[derive(Debug, Deserialize)]
struct RawTrek {
    #[serde(rename = "Max Altitude")]
    max_altitude: String,
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Cost (USD)")]
    cost: String,
    #[serde(rename = "Trip Grade")]
    trip_grade: String,
    #[serde(rename = "Accomodation")]
    accommodation: String,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and normalize a trek dataset from a file. Only `.csv` is supported.
pub fn load_file(path: &Path) -> Result<TrekDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            load_csv(file).with_context(|| format!("loading {}", path.display()))
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Pandas writes its row index as a header-less column, which comes back as
/// `Unnamed: 0` (or an empty header when read raw).
fn is_unnamed(header: &str) -> bool {
    header.is_empty() || header.starts_with("Unnamed")
}

/// Parse CSV text into a normalized dataset.
///
/// Required columns must be present; all other named columns are kept as
/// text on each record.
pub fn load_csv<R: Read>(source: R) -> Result<TrekDataset> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(DatasetError::MissingColumn(required.to_string()).into());
        }
    }

    let extra_cols: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !is_unnamed(h) && !REQUIRED_COLUMNS.contains(h))
        .map(|(i, h)| (i, h.to_string()))
        .collect();
    let dropped = headers.iter().filter(|h| is_unnamed(h)).count();
    if dropped > 0 {
        log::debug!("Dropping {dropped} unnamed column(s)");
    }

    let mut records = Vec::new();
    let mut unknown_grades: BTreeSet<String> = BTreeSet::new();
    let mut unknown_accommodations: BTreeSet<String> = BTreeSet::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let raw: RawTrek = row
            .deserialize(Some(&headers))
            .with_context(|| format!("CSV row {row_no}"))?;

        let trip_grade = normalize_grade(&raw.trip_grade);
        if trip_grade.is_none() && !raw.trip_grade.is_empty() {
            unknown_grades.insert(raw.trip_grade.clone());
        }
        let accommodation = normalize_accommodation(&raw.accommodation);
        if accommodation.is_none() && !raw.accommodation.is_empty() {
            unknown_accommodations.insert(raw.accommodation.clone());
        }

        let extra: BTreeMap<String, String> = extra_cols
            .iter()
            .map(|(idx, name)| (name.clone(), row.get(*idx).unwrap_or("").to_string()))
            .collect();

        records.push(TrekRecord {
            trip_grade,
            accommodation,
            cost_usd: parse_cost(&raw.cost),
            max_altitude: parse_altitude(&raw.max_altitude),
            days: parse_days(&raw.time),
            extra,
        });
    }

    for label in &unknown_grades {
        log::debug!("Unrecognized trip grade {label:?} treated as missing");
    }
    for label in &unknown_accommodations {
        log::debug!("Unrecognized accommodation {label:?} treated as missing");
    }

    let extra_columns = extra_cols.into_iter().map(|(_, name)| name).collect();
    Ok(TrekDataset::from_records(records, extra_columns))
}
