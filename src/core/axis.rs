//! Category (x) axis normalisation: raw category values to plot coordinates.
//!
//! Numeric categories are used as-is. Anything else is mapped, distinct value by
//! distinct value in first-occurrence order, onto `0, 1, 2, ...`; the raw values
//! survive as tick labels.

use std::collections::HashMap;

use crate::core::table::Category;

/// Hashable identity of a category: numbers by value (`-0.0` folded into `0.0`),
/// text by content. `Number(1.0)` and `Text("1")` stay distinct.
#[derive(PartialEq, Eq, Hash)]
enum Key<'a> {
    Num(u64),
    Text(&'a str),
}

impl<'a> Key<'a> {
    fn of(cat: &'a Category) -> Self {
        match cat {
            Category::Number(v) if *v == 0.0 => Key::Num(0.0f64.to_bits()),
            Category::Number(v) => Key::Num(v.to_bits()),
            Category::Text(s) => Key::Text(s),
        }
    }
}

/// One labelled position on the category axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

/// Coordinates for every row plus the distinct ticks, both in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryAxis {
    coordinates: Vec<f64>,
    ticks: Vec<AxisTick>,
    categorical: bool,
}

impl CategoryAxis {
    #[must_use]
    pub fn from_categories(raw: &[Category]) -> Self {
        if let Some(values) = raw.iter().map(Category::as_number).collect::<Option<Vec<_>>>() {
            Self::numeric(raw, values)
        } else {
            Self::categorical(raw)
        }
    }

    fn numeric(raw: &[Category], coordinates: Vec<f64>) -> Self {
        let mut ticks: Vec<AxisTick> = Vec::new();
        for (cat, &value) in raw.iter().zip(&coordinates) {
            // linear scan: one tick per distinct x, x counts are small
            if !ticks.iter().any(|t| t.value == value) {
                ticks.push(AxisTick {
                    value,
                    label: cat.to_string(),
                });
            }
        }
        Self {
            coordinates,
            ticks,
            categorical: false,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn categorical(raw: &[Category]) -> Self {
        let mut index: HashMap<Key<'_>, usize> = HashMap::with_capacity(raw.len());
        let mut ticks: Vec<AxisTick> = Vec::new();
        let coordinates = raw
            .iter()
            .map(|cat| {
                let next = index.len();
                let i = *index.entry(Key::of(cat)).or_insert_with(|| {
                    ticks.push(AxisTick {
                        value: next as f64,
                        label: cat.to_string(),
                    });
                    next
                });
                i as f64
            })
            .collect();
        Self {
            coordinates,
            ticks,
            categorical: true,
        }
    }

    /// One x coordinate per input row.
    #[inline]
    #[must_use]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Distinct positions with their labels, first-occurrence order.
    #[inline]
    #[must_use]
    pub fn ticks(&self) -> &[AxisTick] {
        &self.ticks
    }

    /// True when the raw values were not all numeric and got remapped.
    #[inline]
    #[must_use]
    pub fn is_categorical(&self) -> bool {
        self.categorical
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats<C: Into<Category> + Clone>(v: &[C]) -> Vec<Category> {
        v.iter().cloned().map(Into::into).collect()
    }

    #[test]
    fn text_maps_to_first_occurrence_indices() {
        let axis = CategoryAxis::from_categories(&cats(&["a", "b", "a", "c"]));
        assert!(axis.is_categorical());
        assert_eq!(axis.coordinates(), [0.0, 1.0, 0.0, 2.0]);
        let labels: Vec<_> = axis.ticks().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["a", "b", "c"]);
        let values: Vec<_> = axis.ticks().iter().map(|t| t.value).collect();
        assert_eq!(values, [0.0, 1.0, 2.0]);
    }

    #[test]
    fn normalisation_is_stable_across_calls() {
        let raw = cats(&["q3", "q1", "q3", "q2", "q1"]);
        assert_eq!(
            CategoryAxis::from_categories(&raw),
            CategoryAxis::from_categories(&raw)
        );
    }

    #[test]
    fn numbers_pass_through() {
        let axis = CategoryAxis::from_categories(&cats(&[2019.0, 2020.0, 2022.5]));
        assert!(!axis.is_categorical());
        assert_eq!(axis.coordinates(), [2019.0, 2020.0, 2022.5]);
        assert_eq!(axis.ticks()[2].label, "2022.5");
    }

    #[test]
    fn mixed_column_is_categorical() {
        let raw = vec![Category::from(1), Category::from("two"), Category::from(3)];
        let axis = CategoryAxis::from_categories(&raw);
        assert!(axis.is_categorical());
        assert_eq!(axis.coordinates(), [0.0, 1.0, 2.0]);
        assert_eq!(axis.ticks()[0].label, "1");
    }

    #[test]
    fn number_and_text_with_same_label_stay_distinct() {
        let raw = vec![Category::from(1.0), Category::from("1"), Category::from("x")];
        let axis = CategoryAxis::from_categories(&raw);
        assert_eq!(axis.coordinates(), [0.0, 1.0, 2.0]);
        assert_eq!(axis.ticks().len(), 3);
    }

    #[test]
    fn signed_zeros_share_a_position() {
        let raw = vec![Category::from(-0.0), Category::from("x"), Category::from(0.0)];
        let axis = CategoryAxis::from_categories(&raw);
        assert_eq!(axis.coordinates(), [0.0, 1.0, 0.0]);
        assert_eq!(axis.ticks().len(), 2);
    }
}
