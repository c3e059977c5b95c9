//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{data::ParseCsvError, opts::OptsError};

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidForce(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidForce(v) => {
                write!(f, "curve force must be finite and >= 0, got {v}")
            }
        }
    }
}
impl Error for ConfigError {}

/// Faults detected while assembling an observation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    DuplicateColumn(String),
    RaggedColumn {
        name: String,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::DuplicateColumn(name) => write!(f, "column `{name}` appears twice"),
            TableError::RaggedColumn {
                name,
                expected,
                found,
            } => write!(
                f,
                "column `{name}` has {found} values, category column has {expected}"
            ),
        }
    }
}
impl Error for TableError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum BumpError {
    ColumnNotFound(String),
    EmptySeriesList,
    DuplicateSeries(String),
    LengthMismatch { xs: usize, ys: usize },
    EmptyInput,
    InvalidTightness(f64),
    InsufficientColors { needed: usize, found: usize },
    Table(TableError),
    Opts(OptsError),
    Config(ConfigError),
    Csv(ParseCsvError),
    Io(io::Error),
}

impl fmt::Display for BumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpError::ColumnNotFound(name) => write!(f, "column `{name}` not found"),
            BumpError::EmptySeriesList => write!(f, "at least one series is required"),
            BumpError::DuplicateSeries(name) => {
                write!(f, "series `{name}` requested more than once")
            }
            BumpError::LengthMismatch { xs, ys } => {
                write!(f, "x has {xs} values but y has {ys}")
            }
            BumpError::EmptyInput => write!(f, "a curve needs at least one anchor point"),
            BumpError::InvalidTightness(v) => {
                write!(f, "tightness must be finite and >= 0, got {v}")
            }
            BumpError::InsufficientColors { needed, found } => {
                write!(f, "not enough colors, expected >={needed}, found {found}")
            }
            BumpError::Table(e) => write!(f, "{e}"),
            BumpError::Opts(e) => write!(f, "{e}"),
            BumpError::Config(e) => write!(f, "{e}"),
            BumpError::Csv(e) => write!(f, "{e}"),
            BumpError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl Error for BumpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BumpError::Table(e) => Some(e),
            BumpError::Opts(e) => Some(e),
            BumpError::Config(e) => Some(e),
            BumpError::Csv(e) => Some(e),
            BumpError::Io(e) => Some(e),
            _ => None,
        }
    }
}

// automatic conversions
impl From<io::Error> for BumpError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseCsvError> for BumpError {
    fn from(e: ParseCsvError) -> Self {
        Self::Csv(e)
    }
}
impl From<TableError> for BumpError {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}
impl From<OptsError> for BumpError {
    fn from(e: OptsError) -> Self {
        Self::Opts(e)
    }
}
impl From<ConfigError> for BumpError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
