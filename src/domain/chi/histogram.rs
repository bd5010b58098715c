//! Per-element tallies of classified colors.

use super::Element;
use crate::domain::foundation::{Percentage, ValidationError};

/// Count of colors per element, always covering all five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementHistogram {
    counts: [usize; 5],
}

impl ElementHistogram {
    /// Tallies a non-empty sequence of elements.
    ///
    /// An empty input is rejected so that percentages are never computed
    /// against a zero total.
    pub fn from_elements<I>(elements: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = Element>,
    {
        let mut counts = [0usize; 5];
        for element in elements {
            counts[element.index()] += 1;
        }
        if counts.iter().all(|c| *c == 0) {
            return Err(ValidationError::empty_field("colors"));
        }
        Ok(Self { counts })
    }

    pub fn count(&self, element: Element) -> usize {
        self.counts[element.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Rounded share of `element`; shares are rounded independently.
    pub fn percentage(&self, element: Element) -> Percentage {
        Percentage::of(self.count(element), self.total())
    }

    /// All shares in canonical order.
    pub fn percentages(&self) -> [(Element, Percentage); 5] {
        Element::ALL.map(|e| (e, self.percentage(e)))
    }

    /// Most frequent element. Ties go to the earliest in canonical order.
    pub fn dominant(&self) -> Element {
        let mut best = Element::ALL[0];
        for element in Element::ALL.into_iter().skip(1) {
            if self.count(element) > self.count(best) {
                best = element;
            }
        }
        best
    }

    /// Elements with at least one color, in canonical order.
    pub fn present(&self) -> Vec<Element> {
        Element::ALL
            .into_iter()
            .filter(|e| self.count(*e) > 0)
            .collect()
    }

    /// Elements with no colors, in canonical order.
    pub fn absent(&self) -> Vec<Element> {
        Element::ALL
            .into_iter()
            .filter(|e| self.count(*e) == 0)
            .collect()
    }

    pub fn contains(&self, element: Element) -> bool {
        self.count(element) > 0
    }
}
