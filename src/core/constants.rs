//! A collection of constants.

/// Default horizontal pull of Bézier control points, as a fraction of the gap
/// between neighbouring x positions.
pub const DEFAULT_CURVE_FORCE: f64 = 1.0;

/// The ten-colour category cycle used when the caller brings no palette.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Lowest rank; y ticks run `FIRST_RANK..=K`.
pub const FIRST_RANK: u32 = 1;
