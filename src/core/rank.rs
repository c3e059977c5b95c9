//! Per-row rank transform.
//!
//! Each row of an [`ObservationTable`] is ranked on its own: the K requested
//! series values at that category are sorted and handed ranks `1..=K`.
//!
//! * [`TieMethod::Ordinal`] - ties broken by request order, always a permutation
//! * [`TieMethod::Min`]     - ties share the lowest rank, next rank skips (`1 1 3`)
//! * [`TieMethod::Dense`]   - ties share a rank, no gap afterwards (`1 1 2`)
//!
//! NaN never panics and always ranks last, whatever the direction.

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::core::{
    error::BumpError,
    table::{ObservationTable, RankedTable},
};

/// Which end of the value range gets rank 1.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RankOrder {
    /// Largest value is first place.
    #[default]
    Descending,
    /// Smallest value is first place.
    Ascending,
}

/// How equal values inside one row are ranked.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TieMethod {
    #[default]
    Ordinal,
    Min,
    Dense,
}

impl FromStr for TieMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ordinal" => Ok(Self::Ordinal),
            "min" => Ok(Self::Min),
            "dense" => Ok(Self::Dense),
            other => Err(format!(
                "unknown tie method `{other}` (expected ordinal, min or dense)"
            )),
        }
    }
}

impl fmt::Display for TieMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ordinal => "ordinal",
            Self::Min => "min",
            Self::Dense => "dense",
        })
    }
}

/// Knobs for [`rank`]. The default is descending order with ordinal ties.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RankOptions {
    pub order: RankOrder,
    pub ties: TieMethod,
}

impl RankOptions {
    #[must_use]
    pub const fn descending() -> Self {
        Self {
            order: RankOrder::Descending,
            ties: TieMethod::Ordinal,
        }
    }

    #[must_use]
    pub const fn ascending() -> Self {
        Self {
            order: RankOrder::Ascending,
            ties: TieMethod::Ordinal,
        }
    }

    #[inline]
    #[must_use]
    pub const fn ties(mut self, ties: TieMethod) -> Self {
        self.ties = ties;
        self
    }
}

/// Rank `series_names` against each other, row by row.
///
/// The returned table keeps the category column and row order of `table` and
/// lists the series in the order they were requested.
///
/// # Errors
/// * [`BumpError::ColumnNotFound`] - `category_key` or a series is not in `table`
/// * [`BumpError::EmptySeriesList`] - `series_names` is empty
/// * [`BumpError::DuplicateSeries`] - a name is requested twice
pub fn rank<S: AsRef<str>>(
    table: &ObservationTable,
    category_key: &str,
    series_names: &[S],
    opts: RankOptions,
) -> Result<RankedTable, BumpError> {
    if table.category_key() != category_key {
        return Err(BumpError::ColumnNotFound(category_key.to_owned()));
    }
    if series_names.is_empty() {
        return Err(BumpError::EmptySeriesList);
    }

    let mut names: Vec<String> = Vec::with_capacity(series_names.len());
    let mut columns: Vec<&[f64]> = Vec::with_capacity(series_names.len());
    for name in series_names.iter().map(AsRef::as_ref) {
        if names.iter().any(|n| n == name) {
            return Err(BumpError::DuplicateSeries(name.to_owned()));
        }
        let col = table
            .column(name)
            .ok_or_else(|| BumpError::ColumnNotFound(name.to_owned()))?;
        names.push(name.to_owned());
        columns.push(col);
    }

    let k = columns.len();
    let rows = table.len();
    let mut ranks = vec![vec![0u32; rows]; k];

    // scratch buffers reused across rows
    let mut values = vec![0.0_f64; k];
    let mut order: Vec<usize> = Vec::with_capacity(k);
    let mut row_ranks = vec![0u32; k];

    for r in 0..rows {
        for (slot, col) in values.iter_mut().zip(&columns) {
            *slot = col[r];
        }
        rank_row(&values, opts, &mut order, &mut row_ranks);
        for (col, &rk) in ranks.iter_mut().zip(&row_ranks) {
            col[r] = rk;
        }
    }

    Ok(RankedTable::from_parts(
        table.category_key().to_owned(),
        table.categories().to_vec(),
        names,
        ranks,
    ))
}

/// Rank one row of values into `out` (same length as `values`).
///
/// `order` is scratch space; its contents on entry are ignored.
pub fn rank_row(values: &[f64], opts: RankOptions, order: &mut Vec<usize>, out: &mut [u32]) {
    debug_assert_eq!(values.len(), out.len());

    order.clear();
    order.extend(0..values.len());
    // stable sort: equal values keep request order, which is the ordinal tie-break
    order.sort_by(|&a, &b| compare(values[a], values[b], opts.order));

    let mut prev: Option<(f64, u32)> = None;
    for (ordinal, &idx) in (1u32..).zip(order.iter()) {
        let v = values[idx];
        let rk = match (opts.ties, prev) {
            (TieMethod::Ordinal, _) | (_, None) => ordinal,
            (TieMethod::Min, Some((pv, pr))) => {
                if compare(pv, v, opts.order) == Ordering::Equal {
                    pr
                } else {
                    ordinal
                }
            }
            (TieMethod::Dense, Some((pv, pr))) => {
                if compare(pv, v, opts.order) == Ordering::Equal {
                    pr
                } else {
                    pr + 1
                }
            }
        };
        out[idx] = rk;
        prev = Some((v, rk));
    }
}

/// Sort key: better places first, NaN always last.
#[inline]
fn compare(a: f64, b: f64, order: RankOrder) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let asc = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match order {
                RankOrder::Ascending => asc,
                RankOrder::Descending => asc.reverse(),
            }
        }
    }
}
