//! Series colours: an explicit caller list, or the default cycle.

use crate::core::{constants::DEFAULT_PALETTE, error::BumpError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Palette {
    /// [`DEFAULT_PALETTE`], repeated as often as needed.
    #[default]
    Default,
    /// Caller colours, one per series, no cycling.
    Explicit(Vec<String>),
}

impl Palette {
    pub fn explicit<S: Into<String>>(colors: impl IntoIterator<Item = S>) -> Self {
        Self::Explicit(colors.into_iter().map(Into::into).collect())
    }

    /// One colour per series.
    ///
    /// # Errors
    /// [`BumpError::InsufficientColors`] when an explicit palette is shorter
    /// than `series`.
    pub fn assign(&self, series: usize) -> Result<Vec<String>, BumpError> {
        match self {
            Self::Default => Ok(DEFAULT_PALETTE
                .iter()
                .cycle()
                .take(series)
                .map(|c| (*c).to_owned())
                .collect()),
            Self::Explicit(colors) => {
                if colors.len() < series {
                    return Err(BumpError::InsufficientColors {
                        needed: series,
                        found: colors.len(),
                    });
                }
                Ok(colors[..series].to_vec())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cycles() {
        let colors = Palette::Default.assign(12).unwrap();
        assert_eq!(colors.len(), 12);
        assert_eq!(colors[0], DEFAULT_PALETTE[0]);
        assert_eq!(colors[10], DEFAULT_PALETTE[0]);
        assert_eq!(colors[11], DEFAULT_PALETTE[1]);
    }

    #[test]
    fn explicit_must_cover_every_series() {
        let p = Palette::explicit(["black", "black"]);
        let err = p.assign(3).unwrap_err();
        assert!(matches!(
            err,
            BumpError::InsufficientColors {
                needed: 3,
                found: 2
            }
        ));
        assert_eq!(err.to_string(), "not enough colors, expected >=3, found 2");
    }

    #[test]
    fn explicit_extra_colors_are_ignored() {
        let p = Palette::explicit(["#ffbe0b", "#ff006e", "#3a86ff"]);
        assert_eq!(p.assign(2).unwrap(), ["#ffbe0b", "#ff006e"]);
    }
}
