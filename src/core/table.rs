//! Column store for observations (wide format) and the ranks derived from them.

use std::fmt;

use crate::core::error::TableError;

/// One raw value of the category (x) column.
#[derive(Clone, Debug, PartialEq)]
pub enum Category {
    Number(f64),
    Text(String),
}

impl Category {
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// --- convenience conversions ---
impl From<f64> for Category {
    #[inline]
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}
impl From<i32> for Category {
    #[inline]
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}
impl From<&str> for Category {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}
impl From<String> for Category {
    #[inline]
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A named numeric column.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// Wide-format observations: one category column plus N aligned numeric series.
///
/// Every series has exactly one value per category row; this is checked when a
/// series is added, so a constructed table is always rectangular.
#[derive(Clone, Debug, PartialEq)]
pub struct ObservationTable {
    category_key: String,
    categories: Vec<Category>,
    series: Vec<Series>,
}

impl ObservationTable {
    pub fn new<C: Into<Category>>(
        category_key: impl Into<String>,
        categories: impl IntoIterator<Item = C>,
    ) -> Self {
        Self {
            category_key: category_key.into(),
            categories: categories.into_iter().map(Into::into).collect(),
            series: Vec::new(),
        }
    }

    /// Builder flavour of [`push_series`](Self::push_series).
    pub fn with_series(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
    ) -> Result<Self, TableError> {
        self.push_series(name, values)?;
        Ok(self)
    }

    pub fn push_series(
        &mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
    ) -> Result<(), TableError> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(TableError::DuplicateColumn(name));
        }
        let values: Vec<f64> = values.into_iter().collect();
        if values.len() != self.categories.len() {
            return Err(TableError::RaggedColumn {
                name,
                expected: self.categories.len(),
                found: values.len(),
            });
        }
        self.series.push(Series { name, values });
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn category_key(&self) -> &str {
        &self.category_key
    }

    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[inline]
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.name.as_str())
    }

    /// Values of the series called `name`, if any.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.values.as_slice())
    }

    /// True for the category key and for every series name.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.category_key == name || self.series.iter().any(|s| s.name == name)
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Per-row ranks for a subset of series, same row order as the source table.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedTable {
    category_key: String,
    categories: Vec<Category>,
    names: Vec<String>,
    ranks: Vec<Vec<u32>>,
}

impl RankedTable {
    pub(crate) fn from_parts(
        category_key: String,
        categories: Vec<Category>,
        names: Vec<String>,
        ranks: Vec<Vec<u32>>,
    ) -> Self {
        debug_assert_eq!(names.len(), ranks.len());
        debug_assert!(ranks.iter().all(|r| r.len() == categories.len()));
        Self {
            category_key,
            categories,
            names,
            ranks,
        }
    }

    #[inline]
    #[must_use]
    pub fn category_key(&self) -> &str {
        &self.category_key
    }

    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Ranked series names, in the order they were requested.
    #[inline]
    #[must_use]
    pub fn series_names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[u32]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.ranks[i].as_slice())
    }

    /// `(name, ranks)` pairs in request order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.ranks.iter().map(Vec::as_slice))
    }

    /// Ranks of every series at row `index`, in request order.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<Vec<u32>> {
        if index >= self.categories.len() {
            return None;
        }
        Some(self.ranks.iter().map(|col| col[index]).collect())
    }

    /// Number of ranked series (K); ranks lie in `1..=K`.
    #[inline]
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.names.len()
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ObservationTable {
        ObservationTable::new("year", [2020, 2021, 2022])
            .with_series("a", [1.0, 2.0, 3.0])
            .unwrap()
            .with_series("b", [3.0, 2.0, 1.0])
            .unwrap()
    }

    #[test]
    fn columns_are_addressable_by_name() {
        let t = table();
        assert_eq!(t.len(), 3);
        assert_eq!(t.column("b"), Some(&[3.0, 2.0, 1.0][..]));
        assert!(t.column("year").is_none());
        assert!(t.has_column("year"));
        assert_eq!(t.series_names().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn ragged_series_is_rejected() {
        let err = table().with_series("c", [1.0]).unwrap_err();
        assert_eq!(
            err,
            TableError::RaggedColumn {
                name: "c".into(),
                expected: 3,
                found: 1
            }
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = table().with_series("a", [0.0; 3]).unwrap_err();
        assert_eq!(err, TableError::DuplicateColumn("a".into()));

        let err = table().with_series("year", [0.0; 3]).unwrap_err();
        assert_eq!(err, TableError::DuplicateColumn("year".into()));
    }

    #[test]
    fn category_display() {
        assert_eq!(Category::from(3).to_string(), "3");
        assert_eq!(Category::from(2.5).to_string(), "2.5");
        assert_eq!(Category::from("Q1").to_string(), "Q1");
    }
}
