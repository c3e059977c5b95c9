//! Whole-chart composition: ranks, axes, curves and style maps for every series.
//!
//! ### Workflow
//! 1. rank the requested series row by row
//! 2. normalise the category column into x coordinates + tick labels
//! 3. one Bézier curve per series through `(x, rank)`
//! 4. resolve colours and styling into line / marker argument maps
//!
//! The output is plain data; drawing it is up to the caller's backend.

use crate::core::{
    axis::CategoryAxis,
    config::ChartConfig,
    constants::FIRST_RANK,
    curve::{CurveGeometry, Point, generate_curve},
    error::BumpError,
    opts::{BackendArgs, BumpOpts, OptValue},
    ordinal::to_ordinal,
    rank::rank,
    table::{ObservationTable, RankedTable},
};

/// A series to plot and its own styling (highest precedence).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSpec {
    pub name: String,
    pub opts: BumpOpts,
}

impl From<&str> for SeriesSpec {
    fn from(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            opts: BumpOpts::default(),
        }
    }
}
impl From<String> for SeriesSpec {
    fn from(name: String) -> Self {
        Self {
            name,
            opts: BumpOpts::default(),
        }
    }
}
impl From<&String> for SeriesSpec {
    fn from(name: &String) -> Self {
        Self::from(name.as_str())
    }
}
impl From<(&str, BumpOpts)> for SeriesSpec {
    fn from((name, opts): (&str, BumpOpts)) -> Self {
        Self {
            name: name.to_owned(),
            opts,
        }
    }
}

/// One y tick: a rank and its label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankTick {
    pub value: u32,
    pub label: String,
}

/// Everything needed to draw one series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesLayout {
    pub name: String,
    pub color: String,
    pub ranks: Vec<u32>,
    /// Marker positions, `(x coordinate, rank)` per row.
    pub markers: Vec<Point>,
    pub curve: CurveGeometry,
    pub line_args: BackendArgs,
    pub marker_args: BackendArgs,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BumpChart {
    pub ranked: RankedTable,
    pub x_axis: CategoryAxis,
    /// Top-to-bottom when `invert_y_axis` is set, bottom-to-top otherwise.
    pub y_ticks: Vec<RankTick>,
    pub invert_y_axis: bool,
    pub series: Vec<SeriesLayout>,
}

/// Lay out a bump chart of `y_columns` over category column `x`.
///
/// # Errors
/// Anything [`rank`] or [`generate_curve`] reports, plus
/// [`BumpError::InsufficientColors`] from an explicit palette.
pub fn layout<S, I>(
    table: &ObservationTable,
    x: &str,
    y_columns: I,
    cfg: &ChartConfig,
) -> Result<BumpChart, BumpError>
where
    S: Into<SeriesSpec>,
    I: IntoIterator<Item = S>,
{
    let specs: Vec<SeriesSpec> = y_columns.into_iter().map(Into::into).collect();
    let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();

    let ranked = rank(table, x, &names, cfg.rank)?;
    let colors = cfg.palette.assign(specs.len())?;
    let x_axis = CategoryAxis::from_categories(ranked.categories());
    let xs = x_axis.coordinates();

    let mut series = Vec::with_capacity(specs.len());
    for ((spec, color), (_, ranks)) in specs.into_iter().zip(colors).zip(ranked.columns()) {
        let ys: Vec<f64> = ranks.iter().map(|&r| f64::from(r)).collect();
        let curve = generate_curve(xs, &ys, cfg.curve_force)?;
        let markers = xs.iter().zip(&ys).map(|(&x, &y)| Point::new(x, y)).collect();

        let style = spec.opts.or(&cfg.defaults);
        let mut line_args = style.plot_args();
        line_args
            .entry("edgecolor")
            .or_insert_with(|| OptValue::Text(color.clone()));
        let mut marker_args = style.scatter_args();
        marker_args
            .entry("facecolor")
            .or_insert_with(|| OptValue::Text(color.clone()));

        series.push(SeriesLayout {
            name: spec.name,
            color,
            ranks: ranks.to_vec(),
            markers,
            curve,
            line_args,
            marker_args,
        });
    }

    let y_ticks = rank_ticks(ranked.series_count(), cfg.invert_y_axis, cfg.ordinal_labels);

    Ok(BumpChart {
        ranked,
        x_axis,
        y_ticks,
        invert_y_axis: cfg.invert_y_axis,
        series,
    })
}

/// Ticks `1..=k`, reversed when the axis is not inverted.
#[must_use]
pub fn rank_ticks(k: usize, invert_y_axis: bool, ordinal_labels: bool) -> Vec<RankTick> {
    let mut ticks: Vec<RankTick> = (FIRST_RANK..)
        .take(k)
        .map(|value| RankTick {
            value,
            label: if ordinal_labels {
                to_ordinal(value)
            } else {
                value.to_string()
            },
        })
        .collect();
    if !invert_y_axis {
        ticks.reverse();
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_follow_axis_direction() {
        let down = rank_ticks(3, true, false);
        let values: Vec<u32> = down.iter().map(|t| t.value).collect();
        assert_eq!(values, [1, 2, 3]);

        let up = rank_ticks(3, false, true);
        let labels: Vec<&str> = up.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["3rd", "2nd", "1st"]);
    }

    #[test]
    fn no_series_no_ticks() {
        assert!(rank_ticks(0, true, true).is_empty());
    }
}
