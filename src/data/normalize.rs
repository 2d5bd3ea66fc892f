//! Cleaning of the free-text columns in the trek CSV.
//!
//! The source spreadsheet was assembled by hand, so numbers arrive wrapped in
//! units and prose ("Max 5364m", "14 Days", "USD 1,200") and categories use
//! many spellings of the same thing. Everything here is infallible: text that
//! cannot be cleaned becomes `None`.

use std::sync::LazyLock;

use regex::Regex;

use super::model::{Accommodation, TripGrade};

static ALTITUDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{3,5}").expect("Invalid altitude regex"));

static DAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid days regex"));

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

/// First run of 3 to 5 digits anywhere in the text, e.g. `"Max 5364m"` → 5364.
pub fn parse_altitude(text: &str) -> Option<f64> {
    first_number(&ALTITUDE_RE, text)
}

/// First run of digits anywhere in the text, e.g. `"12-14 days"` → 12.
pub fn parse_days(text: &str) -> Option<f64> {
    first_number(&DAYS_RE, text)
}

fn first_number(re: &Regex, text: &str) -> Option<f64> {
    re.find(text).and_then(|m| m.as_str().parse().ok())
}

/// Parse a price such as `"USD 1,200\n"` or `"$ 950"`.
///
/// Newlines, the `USD` token, `$` and thousands separators are removed and
/// the remainder is parsed as a float. Only finite, non-negative amounts are
/// kept; `nan`, `inf` and negative prices count as missing.
pub fn parse_cost(text: &str) -> Option<f64> {
    let cleaned = text
        .replace('\n', "")
        .replace("USD", "")
        .replace('$', "")
        .replace(',', "");
    let cleaned = cleaned.trim();

    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        Ok(v) => {
            log::debug!("Rejected cost {v} from {text:?}");
            None
        }
        Err(_) => {
            log::debug!("Unparseable cost {text:?}");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Every spelling of a trip grade seen in the source data.
pub const GRADE_SYNONYMS: &[(&str, TripGrade)] = &[
    ("Light", TripGrade::Light),
    ("Light+Moderate", TripGrade::Light),
    ("Easy", TripGrade::Easy),
    ("Easy To Moderate", TripGrade::Easy),
    ("Easy-Moderate", TripGrade::Easy),
    ("Moderate", TripGrade::Moderate),
    ("Moderate+Demanding", TripGrade::Moderate),
    ("Moderate-Hard", TripGrade::Moderate),
    ("Strenuous", TripGrade::Strenuous),
    ("Demanding", TripGrade::Demanding),
    ("Demanding+Challenging", TripGrade::Demanding),
];

/// Every spelling of an accommodation type seen in the source data.
pub const ACCOMMODATION_SYNONYMS: &[(&str, Accommodation)] = &[
    ("Hotel/Guesthouse", Accommodation::HotelGuesthouse),
    ("Hotel/Guest Houses", Accommodation::HotelGuesthouse),
    ("Hotel/Guesthouses", Accommodation::HotelGuesthouse),
    ("Hotel/Teahouse", Accommodation::HotelTeahouse),
    ("Hotel/Teahouses", Accommodation::HotelTeahouse),
    ("Hotel/Luxury Lodges", Accommodation::HotelLuxuryLodge),
    ("Hotel/Lodges", Accommodation::HotelLodge),
    ("Teahouses/Lodges", Accommodation::TeahouseLodge),
];

/// Exact-match lookup. Labels missing from the table are dropped, not passed
/// through.
pub fn normalize_grade(label: &str) -> Option<TripGrade> {
    lookup(GRADE_SYNONYMS, label)
}

/// Exact-match lookup. Labels missing from the table are dropped, not passed
/// through.
pub fn normalize_accommodation(label: &str) -> Option<Accommodation> {
    lookup(ACCOMMODATION_SYNONYMS, label)
}

fn lookup<T: Copy>(table: &[(&str, T)], label: &str) -> Option<T> {
    table
        .iter()
        .find(|(synonym, _)| *synonym == label)
        .map(|&(_, canonical)| canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_altitude() {
        assert_eq!(parse_altitude("Max 5364m"), Some(5364.0));
        assert_eq!(parse_altitude("5,545 m"), Some(545.0));
        assert_eq!(parse_altitude("4130"), Some(4130.0));
        assert_eq!(parse_altitude("1234567"), Some(12345.0));
    }

    #[test]
    fn test_altitude_needs_three_digits() {
        assert_eq!(parse_altitude("42m"), None);
        assert_eq!(parse_altitude("nan"), None);
        assert_eq!(parse_altitude(""), None);
    }

    #[test]
    fn test_days() {
        assert_eq!(parse_days("14 Days"), Some(14.0));
        assert_eq!(parse_days("12-14 days"), Some(12.0));
        assert_eq!(parse_days("Duration: 7"), Some(7.0));
        assert_eq!(parse_days("two weeks"), None);
    }

    #[test]
    fn test_cost() {
        assert_eq!(parse_cost("USD 1,200\n"), Some(1200.0));
        assert_eq!(parse_cost("$1,450"), Some(1450.0));
        assert_eq!(parse_cost("  USD\n2,150.50 "), Some(2150.5));
        assert_eq!(parse_cost("950"), Some(950.0));
    }

    #[test]
    fn test_cost_malformed() {
        assert_eq!(parse_cost("On request"), None);
        assert_eq!(parse_cost(""), None);
        assert_eq!(parse_cost("USD"), None);
    }

    #[test]
    fn test_cost_rejects_non_finite_and_negative() {
        assert_eq!(parse_cost("nan"), None);
        assert_eq!(parse_cost("NaN"), None);
        assert_eq!(parse_cost("inf"), None);
        assert_eq!(parse_cost("USD Infinity"), None);
        assert_eq!(parse_cost("-5"), None);
        assert_eq!(parse_cost("$-500"), None);
        assert_eq!(parse_cost("0"), Some(0.0));
    }

    #[test]
    fn test_grade_synonyms() {
        assert_eq!(normalize_grade("Easy-Moderate"), Some(TripGrade::Easy));
        assert_eq!(normalize_grade("Light+Moderate"), Some(TripGrade::Light));
        assert_eq!(normalize_grade("Moderate-Hard"), Some(TripGrade::Moderate));
        assert_eq!(
            normalize_grade("Demanding+Challenging"),
            Some(TripGrade::Demanding)
        );
    }

    #[test]
    fn test_unmapped_labels_drop() {
        assert_eq!(normalize_grade("Hard"), None);
        assert_eq!(normalize_grade("easy"), None);
        assert_eq!(normalize_grade(" Easy"), None);
        assert_eq!(normalize_accommodation("Camping"), None);
        assert_eq!(normalize_accommodation("Hotel/Guesthouse "), None);
    }

    #[test]
    fn test_accommodation_synonyms() {
        assert_eq!(
            normalize_accommodation("Hotel/Guest Houses"),
            Some(Accommodation::HotelGuesthouse)
        );
        assert_eq!(
            normalize_accommodation("Hotel/Luxury Lodges"),
            Some(Accommodation::HotelLuxuryLodge)
        );
        assert_eq!(
            normalize_accommodation("Teahouses/Lodges"),
            Some(Accommodation::TeahouseLodge)
        );
    }

    #[test]
    fn test_every_canonical_value_is_reachable() {
        for grade in TripGrade::ALL {
            assert_eq!(normalize_grade(grade.label()), Some(grade));
        }
        for acc in Accommodation::ALL {
            assert!(ACCOMMODATION_SYNONYMS.iter().any(|(_, a)| *a == acc));
        }
    }

    mod props {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn clean_cost_round_trips(v in 0.0f64..1.0e7) {
                let text = v.to_string();
                prop_assert_eq!(parse_cost(&text), Some(v));
            }

            #[test]
            fn normalized_grade_is_canonical(label in "\\PC{0,24}") {
                if let Some(grade) = normalize_grade(&label) {
                    prop_assert!(TripGrade::ALL.contains(&grade));
                    prop_assert!(GRADE_SYNONYMS.iter().any(|(s, _)| *s == label));
                }
            }

            #[test]
            fn parsed_cost_is_finite_and_non_negative(text in "\\PC{0,24}") {
                if let Some(cost) = parse_cost(&text) {
                    prop_assert!(cost.is_finite());
                    prop_assert!(cost >= 0.0);
                }
            }

            #[test]
            fn altitude_is_non_negative(text in "\\PC{0,32}") {
                if let Some(alt) = parse_altitude(&text) {
                    prop_assert!(alt >= 0.0);
                    prop_assert!(alt < 100_000.0);
                }
            }
        }
    }
}
