//! Buffer for integer-keyed values discovered while saving a table.
//!
//! One [`IndexCollector`] lives for exactly one save pass over one table.
//! It keeps the (index, value) pairs in the order they were discovered,
//! tracks the largest index seen, and is consumed exactly once by
//! [`IndexCollector::into_cell`], which materializes the entries into a
//! dense 1×count cell array.
//!
//! The cell is sized by the number of collected entries, not by the
//! largest index, and each entry targets slot `index - 1`. An index
//! outside `1..=count` therefore has no slot; such entries are dropped
//! with a warning, and any slot left unfilled stays absent.

use crate::container::MatArray;

/// Collects (index, container value) pairs in insertion order.
#[derive(Debug, Default)]
pub struct IndexCollector {
    entries: Vec<(u32, MatArray)>,
    max_index: u32,
}

impl IndexCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        IndexCollector {
            entries: Vec::new(),
            max_index: 0,
        }
    }

    /// Appends an entry, taking ownership of the value.
    pub fn push(&mut self, index: u32, value: MatArray) {
        if index > self.max_index {
            self.max_index = index;
        }
        self.entries.push((index, value));
    }

    /// Number of collected entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The largest index seen so far, 0 when empty.
    #[must_use]
    pub fn max_index(&self) -> u32 {
        self.max_index
    }

    /// Consumes the collector into a 1×count cell array.
    ///
    /// Entry ownership moves into the cell slots; entries whose index has
    /// no slot are dropped with a warning.
    #[must_use]
    pub fn into_cell(self) -> MatArray {
        let count = self.entries.len();
        let mut slots: Vec<Option<MatArray>> = std::iter::repeat_with(|| None).take(count).collect();
        for (index, value) in self.entries {
            match (index as usize).checked_sub(1) {
                Some(slot) if slot < count => slots[slot] = Some(value),
                _ => log::warn!(
                    "array index {} has no slot in a {}-entry array, value dropped",
                    index,
                    count
                ),
            }
        }
        MatArray::cell_row(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{ClassId, MatData};

    #[test]
    fn test_collects_in_insertion_order() {
        let mut collector = IndexCollector::new();
        collector.push(2, MatArray::text("y"));
        collector.push(1, MatArray::text("x"));
        assert_eq!(collector.len(), 2);
        assert_eq!(collector.max_index(), 2);

        let cell = collector.into_cell();
        assert_eq!(cell.class(), ClassId::Cell);
        assert_eq!(cell.dims(), &[1, 2]);
        match cell.data() {
            MatData::Cell(slots) => {
                assert_eq!(slots[0].as_ref().map(MatArray::class), Some(ClassId::Char));
                assert!(slots[1].is_some());
            }
            other => panic!("expected cell, got {:?}", other.class()),
        }
    }

    #[test]
    fn test_empty_collector_yields_empty_cell() {
        let cell = IndexCollector::new().into_cell();
        assert_eq!(cell.dims(), &[1, 0]);
        assert_eq!(cell.element_count(), 0);
    }

    #[test]
    fn test_sized_by_entry_count_not_max_index() {
        // Keys {1, 5}: two entries, so a two-slot cell. Index 5 has no
        // slot and is dropped; slot 1 stays absent.
        let mut collector = IndexCollector::new();
        collector.push(1, MatArray::text("a"));
        collector.push(5, MatArray::text("b"));
        assert_eq!(collector.max_index(), 5);

        let cell = collector.into_cell();
        assert_eq!(cell.dims(), &[1, 2]);
        match cell.data() {
            MatData::Cell(slots) => {
                assert!(slots[0].is_some());
                assert!(slots[1].is_none());
            }
            other => panic!("expected cell, got {:?}", other.class()),
        }
    }

    #[test]
    fn test_index_zero_has_no_slot() {
        let mut collector = IndexCollector::new();
        collector.push(0, MatArray::scalar_f64(1.0));
        let cell = collector.into_cell();
        match cell.data() {
            MatData::Cell(slots) => assert!(slots[0].is_none()),
            other => panic!("expected cell, got {:?}", other.class()),
        }
    }
}
