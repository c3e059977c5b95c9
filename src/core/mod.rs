//! Aggregates the ranking and geometry layer.

pub mod axis;
pub mod config;
pub mod constants;
pub mod curve;
pub mod data;
pub mod error;
pub mod opts;
pub mod ordinal;
pub mod palette;
pub mod rank;
pub mod table;

// re-export frequently-used items for convenience
pub use axis::{AxisTick, CategoryAxis};
pub use config::{ChartConfig, ChartConfigBuilder};
pub use constants::{DEFAULT_CURVE_FORCE, DEFAULT_PALETTE, FIRST_RANK};
pub use curve::{
    CubicSegment, CurveGeometry, PathCommand, Point, generate_curve, generate_curve_from_anchors,
};
pub use error::{BumpError, ConfigError, TableError};
pub use opts::{BackendArgs, BumpOpts, OptValue, OptsError};
pub use ordinal::to_ordinal;
pub use palette::Palette;
pub use rank::{RankOptions, RankOrder, TieMethod, rank};
pub use table::{Category, ObservationTable, RankedTable, Series};
