//! Public-facing crate root – re-exports + one-shot helper.
//!
//! Turn wide per-category series into per-row ranks, then into cubic Bézier
//! geometry that passes through every `(x, rank)` anchor:
//!
//! ```rust
//! use bumplot::{ObservationTable, RankOptions, generate_curve, rank};
//!
//! let table = ObservationTable::new("year", [2021, 2022, 2023])
//!     .with_series("red", [7.0, 2.0, 9.0])?
//!     .with_series("blue", [3.0, 8.0, 4.0])?;
//!
//! let ranked = rank(&table, "year", &["red", "blue"], RankOptions::default())?;
//! assert_eq!(ranked.column("red"), Some(&[1, 2, 1][..]));
//!
//! let ys: Vec<f64> = ranked.column("blue").unwrap().iter().map(|&r| f64::from(r)).collect();
//! let curve = generate_curve(&[2021.0, 2022.0, 2023.0], &ys, 0.5)?;
//! assert_eq!(curve.len(), 1 + 3 * 2);
//! # Ok::<(), bumplot::BumpError>(())
//! ```

pub mod cli;
pub mod core;
pub mod layout;

pub use crate::core::{
    axis::{AxisTick, CategoryAxis},
    config::{ChartConfig, ChartConfigBuilder},
    curve::{CurveGeometry, PathCommand, Point, generate_curve, generate_curve_from_anchors},
    error::{BumpError, ConfigError, TableError},
    opts::{BumpOpts, OptValue, OptsError},
    ordinal::to_ordinal,
    palette::Palette,
    rank::{RankOptions, RankOrder, TieMethod, rank},
    table::{Category, ObservationTable, RankedTable},
};

pub use layout::{BumpChart, RankTick, SeriesLayout, SeriesSpec, layout};

/// Load a wide CSV and lay out every series in it, category key taken from
/// the first header column.
///
/// # Errors
/// CSV ingest failures plus everything [`layout`] reports.
pub fn chart_from_csv(path: &str, cfg: &ChartConfig) -> Result<BumpChart, BumpError> {
    let table = crate::core::data::read_csv_from_path(path)?;
    let names: Vec<String> = table.series_names().map(str::to_owned).collect();
    layout(&table, table.category_key(), &names, cfg)
}
