use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// TripGrade – canonical difficulty levels
// ---------------------------------------------------------------------------

/// Canonical trip difficulty. Variant order is the display order on chart
/// axes, from the gentlest to the hardest grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TripGrade {
    Light,
    Easy,
    Moderate,
    Strenuous,
    Demanding,
}

impl TripGrade {
    pub const ALL: [TripGrade; 5] = [
        TripGrade::Light,
        TripGrade::Easy,
        TripGrade::Moderate,
        TripGrade::Strenuous,
        TripGrade::Demanding,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TripGrade::Light => "Light",
            TripGrade::Easy => "Easy",
            TripGrade::Moderate => "Moderate",
            TripGrade::Strenuous => "Strenuous",
            TripGrade::Demanding => "Demanding",
        }
    }
}

impl fmt::Display for TripGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Accommodation – canonical lodging types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Accommodation {
    HotelGuesthouse,
    HotelTeahouse,
    HotelLuxuryLodge,
    HotelLodge,
    TeahouseLodge,
}

impl Accommodation {
    pub const ALL: [Accommodation; 5] = [
        Accommodation::HotelGuesthouse,
        Accommodation::HotelTeahouse,
        Accommodation::HotelLuxuryLodge,
        Accommodation::HotelLodge,
        Accommodation::TeahouseLodge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Accommodation::HotelGuesthouse => "Hotel/Guesthouse",
            Accommodation::HotelTeahouse => "Hotel/Teahouse",
            Accommodation::HotelLuxuryLodge => "Hotel/Luxury Lodge",
            Accommodation::HotelLodge => "Hotel/Lodge",
            Accommodation::TeahouseLodge => "Teahouse/Lodge",
        }
    }
}

impl fmt::Display for Accommodation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for a category cell that did not survive normalization.
pub const MISSING_LABEL: &str = "Unknown";

/// Display an optional category, using [`MISSING_LABEL`] for `None`.
pub fn category_label<T: fmt::Display>(value: Option<&T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => MISSING_LABEL.to_string(),
    }
}

// ---------------------------------------------------------------------------
// TrekRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single trekking route after normalization.
///
/// Numeric fields are `None` when the source text held no usable number;
/// category fields are `None` when the label is not in the lookup tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrekRecord {
    pub trip_grade: Option<TripGrade>,
    pub accommodation: Option<Accommodation>,
    pub cost_usd: Option<f64>,
    pub max_altitude: Option<f64>,
    pub days: Option<f64>,
    /// Remaining named columns, kept verbatim: column_name → cell text.
    pub extra: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// TrekDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full normalized dataset with pre-computed filter domains.
#[derive(Debug, Clone, Default)]
pub struct TrekDataset {
    /// All records (rows), in file order.
    pub records: Vec<TrekRecord>,
    /// Extra column names in file order (required and `Unnamed` columns excluded).
    pub extra_columns: Vec<String>,
    /// Observed trip grades, including `None` if any row lacks one.
    pub grades: BTreeSet<Option<TripGrade>>,
    /// Observed accommodation types, including `None` if any row lacks one.
    pub accommodations: BTreeSet<Option<Accommodation>>,
    /// Observed `(min, max)` cost, `None` when no row has a cost.
    pub cost_bounds: Option<(f64, f64)>,
}

impl TrekDataset {
    /// Build the filter domains from the loaded records.
    pub fn from_records(records: Vec<TrekRecord>, extra_columns: Vec<String>) -> Self {
        let mut grades = BTreeSet::new();
        let mut accommodations = BTreeSet::new();
        let mut cost_bounds: Option<(f64, f64)> = None;

        for rec in &records {
            grades.insert(rec.trip_grade);
            accommodations.insert(rec.accommodation);
            if let Some(cost) = rec.cost_usd.filter(|c| c.is_finite()) {
                cost_bounds = Some(match cost_bounds {
                    Some((lo, hi)) => (lo.min(cost), hi.max(cost)),
                    None => (cost, cost),
                });
            }
        }

        TrekDataset {
            records,
            extra_columns,
            grades,
            accommodations,
            cost_bounds,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(grade: Option<TripGrade>, cost: Option<f64>) -> TrekRecord {
        TrekRecord {
            trip_grade: grade,
            cost_usd: cost,
            ..Default::default()
        }
    }

    #[test]
    fn test_domains_include_missing() {
        let ds = TrekDataset::from_records(
            vec![
                record(Some(TripGrade::Easy), Some(900.0)),
                record(None, Some(1500.0)),
                record(Some(TripGrade::Demanding), None),
            ],
            Vec::new(),
        );
        assert_eq!(ds.len(), 3);
        assert!(ds.grades.contains(&None));
        assert!(ds.grades.contains(&Some(TripGrade::Easy)));
        assert_eq!(ds.accommodations.len(), 1);
        assert_eq!(ds.cost_bounds, Some((900.0, 1500.0)));
    }

    #[test]
    fn test_cost_bounds_absent_without_costs() {
        let ds = TrekDataset::from_records(vec![record(None, None)], Vec::new());
        assert_eq!(ds.cost_bounds, None);
    }

    #[test]
    fn test_cost_bounds_skip_non_finite() {
        let ds = TrekDataset::from_records(
            vec![
                record(None, Some(f64::NAN)),
                record(None, Some(500.0)),
                record(None, Some(f64::INFINITY)),
            ],
            Vec::new(),
        );
        assert_eq!(ds.cost_bounds, Some((500.0, 500.0)));

        let ds = TrekDataset::from_records(vec![record(None, Some(f64::NAN))], Vec::new());
        assert_eq!(ds.cost_bounds, None);
    }

    #[test]
    fn test_grade_order_follows_difficulty() {
        let mut grades = TripGrade::ALL.to_vec();
        grades.reverse();
        grades.sort();
        assert_eq!(grades, TripGrade::ALL.to_vec());
        // Missing sorts before every known value.
        assert!(None < Some(TripGrade::Light));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Accommodation::HotelLuxuryLodge.to_string(), "Hotel/Luxury Lodge");
        assert_eq!(category_label(Some(&TripGrade::Strenuous)), "Strenuous");
        assert_eq!(category_label::<TripGrade>(None), MISSING_LABEL);
    }
}
