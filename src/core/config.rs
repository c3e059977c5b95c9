//! Run-time configuration object + fluent builder.

use crate::core::{
    constants::DEFAULT_CURVE_FORCE,
    error::ConfigError,
    opts::BumpOpts,
    palette::Palette,
    rank::{RankOptions, RankOrder, TieMethod},
};

/// Immutable parameters handed to the chart layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub curve_force: f64,
    /// Rank 1 at the top of the chart.
    pub invert_y_axis: bool,
    pub ordinal_labels: bool,
    pub rank: RankOptions,
    pub palette: Palette,
    /// Chart-wide styling, below per-series options and above palette colours.
    pub defaults: BumpOpts,
}

impl ChartConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> ChartConfigBuilder {
        ChartConfigBuilder::new()
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            curve_force: DEFAULT_CURVE_FORCE,
            invert_y_axis: true,
            ordinal_labels: false,
            rank: RankOptions::default(),
            palette: Palette::Default,
            defaults: BumpOpts::default(),
        }
    }
}

/// Fluent builder; validation happens in `build`.
#[derive(Debug, Default)]
pub struct ChartConfigBuilder {
    curve_force: Option<f64>,
    invert_y_axis: Option<bool>,
    ordinal_labels: bool,
    order: RankOrder,
    ties: TieMethod,
    palette: Option<Palette>,
    defaults: Option<BumpOpts>,
}

impl ChartConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn curve_force(mut self, v: f64) -> Self {
        self.curve_force = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn invert_y_axis(mut self, v: bool) -> Self {
        self.invert_y_axis = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn ordinal_labels(mut self, v: bool) -> Self {
        self.ordinal_labels = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn order(mut self, order: RankOrder) -> Self {
        self.order = order;
        self
    }
    #[inline]
    #[must_use]
    pub fn ties(mut self, ties: TieMethod) -> Self {
        self.ties = ties;
        self
    }
    #[inline]
    #[must_use]
    pub fn palette(mut self, p: Palette) -> Self {
        self.palette = Some(p);
        self
    }
    /// `None` keeps the default palette.
    #[inline]
    #[must_use]
    pub fn colors_opt(mut self, colors: Option<Vec<String>>) -> Self {
        if let Some(c) = colors {
            self.palette = Some(Palette::Explicit(c));
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn defaults(mut self, opts: BumpOpts) -> Self {
        self.defaults = Some(opts);
        self
    }

    /// # Errors
    /// [`ConfigError::InvalidForce`] for a negative or non-finite curve force.
    pub fn build(self) -> Result<ChartConfig, ConfigError> {
        let curve_force = self.curve_force.unwrap_or(DEFAULT_CURVE_FORCE);
        if !curve_force.is_finite() || curve_force < 0.0 {
            return Err(ConfigError::InvalidForce(curve_force));
        }
        Ok(ChartConfig {
            curve_force,
            invert_y_axis: self.invert_y_axis.unwrap_or(true),
            ordinal_labels: self.ordinal_labels,
            rank: RankOptions {
                order: self.order,
                ties: self.ties,
            },
            palette: self.palette.unwrap_or_default(),
            defaults: self.defaults.unwrap_or_default(),
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ChartConfigBuilder> for Result<ChartConfig, ConfigError> {
    fn from(b: ChartConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        assert_eq!(ChartConfig::builder().build().unwrap(), ChartConfig::default());
    }

    #[test]
    fn negative_force_is_rejected() {
        let err = ChartConfig::builder().curve_force(-1.0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidForce(-1.0));
        assert!(ChartConfig::builder().curve_force(f64::INFINITY).build().is_err());
    }

    #[test]
    fn options_flow_through() {
        let cfg: Result<ChartConfig, ConfigError> = ChartConfig::builder()
            .curve_force(0.5)
            .invert_y_axis(false)
            .ordinal_labels(true)
            .order(RankOrder::Ascending)
            .ties(TieMethod::Dense)
            .colors_opt(Some(vec!["red".into()]))
            .into();
        let cfg = cfg.unwrap();
        assert_eq!(cfg.curve_force, 0.5);
        assert!(!cfg.invert_y_axis);
        assert!(cfg.ordinal_labels);
        assert_eq!(cfg.rank, RankOptions::ascending().ties(TieMethod::Dense));
        assert_eq!(cfg.palette, Palette::explicit(["red"]));
    }
}
