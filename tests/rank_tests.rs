//! Tests for the per-row rank transform.
//!
//! ## Test Organization
//!
//! 1. **Permutation** - ordinal ranks are always `1..=K` once each
//! 2. **Direction** - ascending is the mirror of descending
//! 3. **Shape** - names, categories and row order survive
//! 4. **Errors** - missing columns and empty requests

use std::collections::BTreeSet;

use bumplot::{BumpError, Category, ObservationTable, RankOptions, TieMethod, rank};

fn league() -> ObservationTable {
    ObservationTable::new("x", 1..=10)
        .with_series("y1", [7.0, 2.0, 2.0, 5.0, 5.0, 6.0, 7.0, 2.0, 9.0, 1.0])
        .unwrap()
        .with_series("y2", [3.0, 2.0, 1.0, 10.0, 4.0, 8.0, 7.0, 2.0, 4.0, 2.0])
        .unwrap()
        .with_series("y3", [5.0, 4.0, 10.0, 1.0, 3.0, 6.0, 5.0, 2.0, 3.0, 7.0])
        .unwrap()
}

// ============================================================================
// Permutation
// ============================================================================

/// Every row is a permutation of 1..=K even with heavy ties.
#[test]
fn test_ordinal_rows_are_permutations() {
    let ranked = rank(&league(), "x", &["y1", "y2", "y3"], RankOptions::default()).unwrap();
    let want: BTreeSet<u32> = (1..=3).collect();
    for i in 0..ranked.len() {
        let row: BTreeSet<u32> = ranked.row(i).unwrap().into_iter().collect();
        assert_eq!(row, want, "row {i}");
    }
}

/// Three-way tie: request order decides.
#[test]
fn test_ordinal_three_way_tie() {
    let ranked = rank(&league(), "x", &["y3", "y1", "y2"], RankOptions::default()).unwrap();
    // row 8 (x = 8): all three equal 2
    assert_eq!(ranked.row(7).unwrap(), [1, 2, 3]);
}

/// Min and dense ties on the same data.
#[test]
fn test_min_and_dense_ties() {
    let t = league();
    let min = rank(&t, "x", &["y1", "y2", "y3"], RankOptions::default().ties(TieMethod::Min))
        .unwrap();
    let dense = rank(
        &t,
        "x",
        &["y1", "y2", "y3"],
        RankOptions::default().ties(TieMethod::Dense),
    )
    .unwrap();

    // x = 2: y1 = 2, y2 = 2, y3 = 4
    assert_eq!(min.row(1).unwrap(), [2, 2, 1]);
    assert_eq!(dense.row(1).unwrap(), [2, 2, 1]);
    // x = 8: all tied
    assert_eq!(min.row(7).unwrap(), [1, 1, 1]);
    assert_eq!(dense.row(7).unwrap(), [1, 1, 1]);
    // x = 7: y1 = 7, y2 = 7, y3 = 5
    assert_eq!(min.row(6).unwrap(), [1, 1, 3]);
    assert_eq!(dense.row(6).unwrap(), [1, 1, 2]);
}

// ============================================================================
// Direction
// ============================================================================

/// Without ties, ascending rank = K + 1 - descending rank.
#[test]
fn test_direction_inversion() {
    let t = ObservationTable::new("x", ["a", "b"])
        .with_series("p", [1.0, 9.0])
        .unwrap()
        .with_series("q", [4.0, 3.0])
        .unwrap()
        .with_series("r", [2.5, 6.0])
        .unwrap()
        .with_series("s", [8.0, -1.0])
        .unwrap();
    let names = ["p", "q", "r", "s"];
    let desc = rank(&t, "x", &names, RankOptions::descending()).unwrap();
    let asc = rank(&t, "x", &names, RankOptions::ascending()).unwrap();

    let k = names.len() as u32;
    for name in names {
        for (d, a) in desc.column(name).unwrap().iter().zip(asc.column(name).unwrap()) {
            assert_eq!(*a, k + 1 - d, "series {name}");
        }
    }
}

/// Two mirrored series: each row has one winner.
#[test]
fn test_end_to_end_mirrored_series() {
    let t = ObservationTable::new("x", 1..=5)
        .with_series("y1", [1.0, 2.0, 3.0, 4.0, 5.0])
        .unwrap()
        .with_series("y2", [5.0, 4.0, 3.0, 2.0, 1.0])
        .unwrap();
    let ranked = rank(&t, "x", &["y1", "y2"], RankOptions::default()).unwrap();
    // x = 3 is a tie, y1 is listed first and wins it
    assert_eq!(ranked.column("y1").unwrap(), [2, 2, 1, 1, 1]);
    assert_eq!(ranked.column("y2").unwrap(), [1, 1, 2, 2, 2]);
}

// ============================================================================
// Shape
// ============================================================================

/// Row order, categories and requested names are preserved.
#[test]
fn test_shape_is_preserved() {
    let t = ObservationTable::new("q", ["c", "a", "b", "a"])
        .with_series("m", [1.0, 2.0, 3.0, 4.0])
        .unwrap()
        .with_series("n", [4.0, 3.0, 2.0, 1.0])
        .unwrap()
        .with_series("unused", [0.0; 4])
        .unwrap();
    let ranked = rank(&t, "q", &["n", "m"], RankOptions::default()).unwrap();
    assert_eq!(ranked.category_key(), "q");
    assert_eq!(ranked.series_names(), ["n", "m"]);
    assert_eq!(ranked.series_count(), 2);
    assert_eq!(
        ranked.categories(),
        [
            Category::from("c"),
            Category::from("a"),
            Category::from("b"),
            Category::from("a")
        ]
    );
    assert!(ranked.column("unused").is_none());
    assert_eq!(ranked.column("n").unwrap(), [1, 1, 2, 2]);
}

/// An empty table ranks to an empty table.
#[test]
fn test_empty_table() {
    let t = ObservationTable::new("x", Vec::<f64>::new())
        .with_series("a", Vec::<f64>::new())
        .unwrap();
    let ranked = rank(&t, "x", &["a"], RankOptions::default()).unwrap();
    assert!(ranked.is_empty());
    assert_eq!(ranked.column("a").unwrap(), [] as [u32; 0]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_series_list() {
    let err = rank::<&str>(&league(), "x", &[], RankOptions::default()).unwrap_err();
    assert!(matches!(err, BumpError::EmptySeriesList));
}

#[test]
fn test_unknown_series() {
    let err = rank(&league(), "x", &["y1", "y9"], RankOptions::default()).unwrap_err();
    assert!(matches!(err, BumpError::ColumnNotFound(ref n) if n == "y9"));
    assert_eq!(err.to_string(), "column `y9` not found");
}

#[test]
fn test_unknown_category_key() {
    let err = rank(&league(), "year", &["y1"], RankOptions::default()).unwrap_err();
    assert!(matches!(err, BumpError::ColumnNotFound(ref n) if n == "year"));
}

#[test]
fn test_duplicate_series_request() {
    let err = rank(&league(), "x", &["y1", "y1"], RankOptions::default()).unwrap_err();
    assert!(matches!(err, BumpError::DuplicateSeries(ref n) if n == "y1"));
}
