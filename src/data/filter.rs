use std::collections::BTreeSet;

use super::model::{Accommodation, TrekDataset, TrekRecord, TripGrade};

// ---------------------------------------------------------------------------
// Filter predicate: selected categories and cost window
// ---------------------------------------------------------------------------

/// Sidebar selection state.
///
/// A category set contains `None` when rows with a missing value should be
/// kept. An empty set hides every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub grades: BTreeSet<Option<TripGrade>>,
    pub accommodations: BTreeSet<Option<Accommodation>>,
    /// Inclusive `(low, high)` cost window in USD.
    pub cost_range: (f64, f64),
}

impl FilterState {
    /// Everything selected: full category domains and the observed cost span.
    pub fn for_dataset(dataset: &TrekDataset) -> Self {
        FilterState {
            grades: dataset.grades.clone(),
            accommodations: dataset.accommodations.clone(),
            cost_range: dataset.cost_bounds.unwrap_or((0.0, 0.0)),
        }
    }

    /// Whether a single record passes all three predicates.
    ///
    /// A record without a cost never falls inside the cost window.
    pub fn matches(&self, record: &TrekRecord) -> bool {
        let (lo, hi) = self.cost_range;
        self.grades.contains(&record.trip_grade)
            && self.accommodations.contains(&record.accommodation)
            && record.cost_usd.is_some_and(|c| lo <= c && c <= hi)
    }
}

/// Return indices of records that pass the filters, in dataset order.
pub fn filtered_indices(dataset: &TrekDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| filters.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(
        grade: Option<TripGrade>,
        acc: Option<Accommodation>,
        cost: Option<f64>,
    ) -> TrekRecord {
        TrekRecord {
            trip_grade: grade,
            accommodation: acc,
            cost_usd: cost,
            ..Default::default()
        }
    }

    fn sample() -> TrekDataset {
        TrekDataset::from_records(
            vec![
                rec(Some(TripGrade::Easy), Some(Accommodation::HotelTeahouse), Some(800.0)),
                rec(Some(TripGrade::Moderate), Some(Accommodation::HotelLodge), Some(1400.0)),
                rec(None, Some(Accommodation::HotelTeahouse), Some(1100.0)),
                rec(Some(TripGrade::Demanding), None, Some(3200.0)),
                rec(Some(TripGrade::Easy), Some(Accommodation::HotelLodge), Some(950.0)),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_full_selection_keeps_everything() {
        let ds = sample();
        let filters = FilterState::for_dataset(&ds);
        assert_eq!(filters.cost_range, (800.0, 3200.0));
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_grade_filter() {
        let ds = sample();
        let mut filters = FilterState::for_dataset(&ds);
        filters.grades = BTreeSet::from([Some(TripGrade::Easy)]);
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 4]);
    }

    #[test]
    fn test_missing_category_selectable() {
        let ds = sample();
        let mut filters = FilterState::for_dataset(&ds);
        filters.grades = BTreeSet::from([None]);
        assert_eq!(filtered_indices(&ds, &filters), vec![2]);
        filters.grades = ds.grades.clone();
        filters.accommodations.remove(&None);
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1, 2, 4]);
    }

    #[test]
    fn test_cost_range_is_inclusive() {
        let ds = sample();
        let mut filters = FilterState::for_dataset(&ds);
        filters.cost_range = (950.0, 1400.0);
        assert_eq!(filtered_indices(&ds, &filters), vec![1, 2, 4]);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let ds = sample();
        let mut filters = FilterState::for_dataset(&ds);
        filters.grades = BTreeSet::from([Some(TripGrade::Easy)]);
        filters.accommodations = BTreeSet::from([Some(Accommodation::HotelLodge)]);
        filters.cost_range = (0.0, 1000.0);
        assert_eq!(filtered_indices(&ds, &filters), vec![4]);
    }

    #[test]
    fn test_empty_selection_hides_all() {
        let ds = sample();
        let mut filters = FilterState::for_dataset(&ds);
        filters.accommodations.clear();
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn test_missing_cost_never_matches() {
        let mut records = sample().records;
        records.push(rec(Some(TripGrade::Easy), Some(Accommodation::HotelLodge), None));
        let ds = TrekDataset::from_records(records, Vec::new());
        let filters = FilterState::for_dataset(&ds);
        assert_eq!(filtered_indices(&ds, &filters).len(), 5);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn arb_record() -> impl Strategy<Value = TrekRecord> {
            (
                proptest::option::of(proptest::sample::select(TripGrade::ALL.to_vec())),
                proptest::option::of(proptest::sample::select(Accommodation::ALL.to_vec())),
                0.0f64..10_000.0,
            )
                .prop_map(|(g, a, c)| rec(g, a, Some(c)))
        }

        proptest! {
            #[test]
            fn full_domain_selects_all(records in proptest::collection::vec(arb_record(), 0..40)) {
                let ds = TrekDataset::from_records(records, Vec::new());
                let filters = FilterState::for_dataset(&ds);
                prop_assert_eq!(filtered_indices(&ds, &filters).len(), ds.len());
            }

            #[test]
            fn subset_is_bounded_and_deterministic(
                records in proptest::collection::vec(arb_record(), 0..40),
                lo in 0.0f64..10_000.0,
                span in 0.0f64..5_000.0,
                keep_missing in any::<bool>(),
            ) {
                let ds = TrekDataset::from_records(records, Vec::new());
                let mut filters = FilterState::for_dataset(&ds);
                filters.cost_range = (lo, lo + span);
                if !keep_missing {
                    filters.grades.remove(&None);
                }
                let first = filtered_indices(&ds, &filters);
                let second = filtered_indices(&ds, &filters);
                prop_assert!(first.len() <= ds.len());
                prop_assert_eq!(&first, &second);
                for idx in first {
                    prop_assert!(filters.matches(&ds.records[idx]));
                }
            }
        }
    }
}
