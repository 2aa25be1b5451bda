// Selection map - which cells are selected and when

use chrono::{DateTime, Local};
use std::collections::HashMap;

/// Wall-clock instant a cell was selected
pub type Timestamp = DateTime<Local>;

/// Outcome of a single toggle
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionChange {
    Selected { index: usize, at: Timestamp },
    Deselected { index: usize },
}

impl SelectionChange {
    pub fn index(&self) -> usize {
        match self {
            SelectionChange::Selected { index, .. } | SelectionChange::Deselected { index } => {
                *index
            }
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, SelectionChange::Selected { .. })
    }
}

/// A key is present iff the cell is selected
#[derive(Debug, Clone, Default)]
pub struct SelectionMap {
    entries: HashMap<usize, Timestamp>,
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `index` if present, otherwise insert it stamped with `at`
    pub fn toggle(&mut self, index: usize, at: Timestamp) -> SelectionChange {
        if self.entries.remove(&index).is_some() {
            SelectionChange::Deselected { index }
        } else {
            self.entries.insert(index, at);
            SelectionChange::Selected { index, at }
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn get(&self, index: usize) -> Option<&Timestamp> {
        self.entries.get(&index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Timestamp)> {
        self.entries.iter().map(|(index, at)| (*index, at))
    }

    /// Selected indices in ascending order
    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.entries.keys().copied().collect();
        indices.sort_unstable();
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stamp(minute: u32) -> Timestamp {
        Local
            .with_ymd_and_hms(2025, 3, 5, 14, minute, 0)
            .single()
            .unwrap()
    }

    #[test]
    fn test_toggle_inserts_then_removes() {
        let mut map = SelectionMap::new();
        assert_eq!(
            map.toggle(7, stamp(1)),
            SelectionChange::Selected {
                index: 7,
                at: stamp(1)
            }
        );
        assert_eq!(map.get(7), Some(&stamp(1)));

        assert_eq!(map.toggle(7, stamp(2)), SelectionChange::Deselected { index: 7 });
        assert!(!map.contains(7));
        assert!(map.is_empty());
    }

    #[test]
    fn test_reselect_takes_new_timestamp() {
        let mut map = SelectionMap::new();
        map.toggle(3, stamp(1));
        map.toggle(3, stamp(2));
        map.toggle(3, stamp(9));
        assert_eq!(map.get(3), Some(&stamp(9)));
    }

    #[test]
    fn test_indices_sorted() {
        let mut map = SelectionMap::new();
        for index in [57, 3, 12] {
            map.toggle(index, stamp(0));
        }
        assert_eq!(map.indices(), vec![3, 12, 57]);
        assert_eq!(map.len(), 3);
    }
}
