//! Backend-agnostic styling options and their translation to renderer arguments.
//!
//! [`BumpOpts`] is a record of optional fields. Keys prefixed `line_` style the
//! curve, keys prefixed `marker_` style the markers, `clip_on` and `zorder` go
//! to both. [`BumpOpts::plot_args`] and [`BumpOpts::scatter_args`] rename the set
//! fields to the argument names a matplotlib-like backend expects.

use std::{collections::BTreeMap, error::Error, fmt};

/// Every key [`BumpOpts::from_pairs`] accepts.
pub const OPT_KEYS: [&str; 12] = [
    "line_alpha",
    "line_color",
    "line_style",
    "line_width",
    "marker",
    "marker_size",
    "marker_alpha",
    "marker_facecolor",
    "marker_edgecolor",
    "marker_edgewidth",
    "clip_on",
    "zorder",
];

/// Option key -> line (path) argument.
pub const PLOT_MAPPINGS: [(&str, &str); 6] = [
    ("line_alpha", "alpha"),
    ("line_color", "edgecolor"),
    ("line_style", "linestyle"),
    ("line_width", "linewidth"),
    ("clip_on", "clip_on"),
    ("zorder", "zorder"),
];

/// Option key -> marker (scatter) argument.
pub const SCATTER_MAPPINGS: [(&str, &str); 8] = [
    ("marker", "marker"),
    ("marker_alpha", "alpha"),
    ("marker_edgecolor", "edgecolor"),
    ("marker_edgewidth", "linewidth"),
    ("marker_facecolor", "facecolor"),
    ("marker_size", "s"),
    ("clip_on", "clip_on"),
    ("zorder", "zorder"),
];

/// Backend argument map, sorted by argument name.
pub type BackendArgs = BTreeMap<&'static str, OptValue>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptsError {
    /// Sorted list of the offending keys.
    UnknownKeys(Vec<String>),
    WrongType {
        key: &'static str,
        expected: &'static str,
    },
}

impl fmt::Display for OptsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptsError::UnknownKeys(keys) => {
                f.write_str("BumpOpts got unexpected keyword argument(s): ")?;
                for (i, k) in keys.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{k}'")?;
                }
                Ok(())
            }
            OptsError::WrongType { key, expected } => {
                write!(f, "option `{key}` expects a {expected} value")
            }
        }
    }
}
impl Error for OptsError {}

/// Loosely typed option value, as handed over by callers and to backends.
#[derive(Clone, Debug, PartialEq)]
pub enum OptValue {
    Float(f64),
    Int(i64),
    Bool(bool),
    Text(String),
}

impl OptValue {
    /// Infer the type of a `key=value` right-hand side: bool, then int, then
    /// finite float, else text.
    #[must_use]
    pub fn parse_str(s: &str) -> Self {
        let s = s.trim();
        match s {
            "true" | "True" => return Self::Bool(true),
            "false" | "False" => return Self::Bool(false),
            _ => {}
        }
        if let Ok(i) = s.parse::<i64>() {
            return Self::Int(i);
        }
        match lexical_core::parse::<f64>(s.as_bytes()) {
            Ok(v) if v.is_finite() => Self::Float(v),
            _ => Self::Text(s.to_owned()),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl fmt::Display for OptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// --- convenience conversions ---
impl From<f64> for OptValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}
impl From<i64> for OptValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}
impl From<i32> for OptValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}
impl From<bool> for OptValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}
impl From<&str> for OptValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}
impl From<String> for OptValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Styling for one series (or chart-wide defaults). Unset fields defer to the
/// next layer down.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BumpOpts {
    pub line_alpha: Option<f64>,
    pub line_color: Option<String>,
    pub line_style: Option<String>,
    pub line_width: Option<f64>,

    pub marker: Option<String>,
    pub marker_size: Option<f64>,
    pub marker_alpha: Option<f64>,
    pub marker_facecolor: Option<String>,
    pub marker_edgecolor: Option<String>,
    pub marker_edgewidth: Option<f64>,

    pub clip_on: Option<bool>,
    pub zorder: Option<i64>,
}

macro_rules! setter {
    ($name:ident, String) => {
        #[inline]
        #[must_use]
        pub fn $name(mut self, v: impl Into<String>) -> Self {
            self.$name = Some(v.into());
            self
        }
    };
    ($name:ident, $ty:ty) => {
        #[inline]
        #[must_use]
        pub fn $name(mut self, v: $ty) -> Self {
            self.$name = Some(v);
            self
        }
    };
}

impl BumpOpts {
    setter!(line_alpha, f64);
    setter!(line_color, String);
    setter!(line_style, String);
    setter!(line_width, f64);
    setter!(marker, String);
    setter!(marker_size, f64);
    setter!(marker_alpha, f64);
    setter!(marker_facecolor, String);
    setter!(marker_edgecolor, String);
    setter!(marker_edgewidth, f64);
    setter!(clip_on, bool);
    setter!(zorder, i64);

    /// Build from untyped `(key, value)` pairs, rejecting unknown keys up front.
    ///
    /// # Errors
    /// [`OptsError::UnknownKeys`] lists every unsupported key (sorted);
    /// [`OptsError::WrongType`] reports the first mistyped value.
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self, OptsError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, OptValue)>,
    {
        let pairs: Vec<(K, OptValue)> = pairs.into_iter().collect();

        let mut unknown: Vec<String> = pairs
            .iter()
            .map(|(k, _)| k.as_ref())
            .filter(|k| !OPT_KEYS.contains(k))
            .map(str::to_owned)
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            unknown.dedup();
            return Err(OptsError::UnknownKeys(unknown));
        }

        let mut opts = Self::default();
        for (key, value) in pairs {
            opts.set(key.as_ref(), value)?;
        }
        Ok(opts)
    }

    /// Apply one color to the line and both marker colors; `overrides` wins
    /// wherever it sets a field.
    #[must_use]
    pub fn from_color(color: impl Into<String>, overrides: BumpOpts) -> Self {
        let color = color.into();
        let base = Self::default()
            .line_color(color.clone())
            .marker_facecolor(color.clone())
            .marker_edgecolor(color);
        overrides.or(&base)
    }

    /// Field-wise `self.or(fallback)`.
    #[must_use]
    pub fn or(self, fallback: &BumpOpts) -> Self {
        Self {
            line_alpha: self.line_alpha.or(fallback.line_alpha),
            line_color: self.line_color.or_else(|| fallback.line_color.clone()),
            line_style: self.line_style.or_else(|| fallback.line_style.clone()),
            line_width: self.line_width.or(fallback.line_width),
            marker: self.marker.or_else(|| fallback.marker.clone()),
            marker_size: self.marker_size.or(fallback.marker_size),
            marker_alpha: self.marker_alpha.or(fallback.marker_alpha),
            marker_facecolor: self
                .marker_facecolor
                .or_else(|| fallback.marker_facecolor.clone()),
            marker_edgecolor: self
                .marker_edgecolor
                .or_else(|| fallback.marker_edgecolor.clone()),
            marker_edgewidth: self.marker_edgewidth.or(fallback.marker_edgewidth),
            clip_on: self.clip_on.or(fallback.clip_on),
            zorder: self.zorder.or(fallback.zorder),
        }
    }

    /// Value of option `key`, `None` when unset or unknown.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<OptValue> {
        let text = |v: &Option<String>| v.clone().map(OptValue::Text);
        match key {
            "line_alpha" => self.line_alpha.map(OptValue::Float),
            "line_color" => text(&self.line_color),
            "line_style" => text(&self.line_style),
            "line_width" => self.line_width.map(OptValue::Float),
            "marker" => text(&self.marker),
            "marker_size" => self.marker_size.map(OptValue::Float),
            "marker_alpha" => self.marker_alpha.map(OptValue::Float),
            "marker_facecolor" => text(&self.marker_facecolor),
            "marker_edgecolor" => text(&self.marker_edgecolor),
            "marker_edgewidth" => self.marker_edgewidth.map(OptValue::Float),
            "clip_on" => self.clip_on.map(OptValue::Bool),
            "zorder" => self.zorder.map(OptValue::Int),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: OptValue) -> Result<(), OptsError> {
        fn float(key: &'static str, v: &OptValue) -> Result<f64, OptsError> {
            v.as_float().ok_or(OptsError::WrongType {
                key,
                expected: "number",
            })
        }
        fn text(key: &'static str, v: OptValue) -> Result<String, OptsError> {
            match v {
                OptValue::Text(s) => Ok(s),
                _ => Err(OptsError::WrongType {
                    key,
                    expected: "text",
                }),
            }
        }

        match key {
            "line_alpha" => self.line_alpha = Some(float("line_alpha", &value)?),
            "line_color" => self.line_color = Some(text("line_color", value)?),
            "line_style" => self.line_style = Some(text("line_style", value)?),
            "line_width" => self.line_width = Some(float("line_width", &value)?),
            "marker" => self.marker = Some(text("marker", value)?),
            "marker_size" => self.marker_size = Some(float("marker_size", &value)?),
            "marker_alpha" => self.marker_alpha = Some(float("marker_alpha", &value)?),
            "marker_facecolor" => {
                self.marker_facecolor = Some(text("marker_facecolor", value)?);
            }
            "marker_edgecolor" => {
                self.marker_edgecolor = Some(text("marker_edgecolor", value)?);
            }
            "marker_edgewidth" => {
                self.marker_edgewidth = Some(float("marker_edgewidth", &value)?);
            }
            "clip_on" => match value {
                OptValue::Bool(b) => self.clip_on = Some(b),
                _ => {
                    return Err(OptsError::WrongType {
                        key: "clip_on",
                        expected: "bool",
                    });
                }
            },
            "zorder" => match value {
                OptValue::Int(i) => self.zorder = Some(i),
                _ => {
                    return Err(OptsError::WrongType {
                        key: "zorder",
                        expected: "integer",
                    });
                }
            },
            // keys were validated by the caller
            _ => return Err(OptsError::UnknownKeys(vec![key.to_owned()])),
        }
        Ok(())
    }

    /// Arguments for the line (path) artist.
    #[must_use]
    pub fn plot_args(&self) -> BackendArgs {
        self.translate(&PLOT_MAPPINGS)
    }

    /// Arguments for the marker (scatter) artist.
    #[must_use]
    pub fn scatter_args(&self) -> BackendArgs {
        self.translate(&SCATTER_MAPPINGS)
    }

    fn translate(&self, table: &[(&'static str, &'static str)]) -> BackendArgs {
        table
            .iter()
            .filter_map(|&(ours, theirs)| self.get(ours).map(|v| (theirs, v)))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
