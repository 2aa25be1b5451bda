// Grid selector - owns the selection map and per-cell transitions

use crate::config::GridConfig;
use crate::display::cell::{CellAppearance, CellView};
use crate::grid::animation::{CellTransition, EasingType};
use crate::grid::selection::{SelectionChange, SelectionMap, Timestamp};
use crate::grid::traits::{GridResult, GridTrait};
use chrono::Local;
use log::debug;
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(200);

pub struct GridSelector {
    config: GridConfig,
    selection: SelectionMap,
    transitions: HashMap<usize, CellTransition>,
    transition_duration: Duration,
    easing: EasingType,
}

impl GridSelector {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            selection: SelectionMap::new(),
            transitions: HashMap::new(),
            transition_duration: DEFAULT_TRANSITION,
            easing: EasingType::EaseInOut,
        }
    }

    pub fn with_transition(mut self, duration: Duration, easing: EasingType) -> Self {
        self.transition_duration = duration;
        self.easing = easing;
        self
    }

    pub fn selection(&self) -> &SelectionMap {
        &self.selection
    }

    /// Select or deselect `index`, stamping a selection with the current time
    pub fn toggle(&mut self, index: usize) -> SelectionChange {
        self.toggle_at(index, Local::now())
    }

    /// Toggle an index that came from outside the render loop
    pub fn try_toggle(&mut self, index: usize) -> GridResult<SelectionChange> {
        self.validate_index(index)?;
        Ok(self.toggle(index))
    }

    /// Appearance of a cell at `now`, following any running transition
    pub fn appearance(&self, index: usize, now: Instant) -> CellAppearance {
        match self.transitions.get(&index) {
            Some(transition) => transition.appearance(now),
            None => CellAppearance::for_state(self.selection.contains(index)),
        }
    }

    pub fn has_active_transitions(&self, now: Instant) -> bool {
        self.transitions.values().any(|t| !t.is_completed(now))
    }

    /// Drop transitions that have reached their target
    pub fn settle(&mut self, now: Instant) {
        self.transitions.retain(|_, t| !t.is_completed(now));
    }

    /// Presentation for one cell at `now`
    pub fn cell_view(&self, index: usize, edge_length: f32, now: Instant) -> CellView {
        CellView {
            index,
            selected: self.selection.contains(index),
            timestamp: self.selection.get(index).copied(),
            edge_length,
            appearance: self.appearance(index, now),
            focused: false,
        }
    }

    /// Every cell in row-major order
    pub fn cell_views(&self, edge_length: f32, now: Instant) -> Vec<CellView> {
        (0..self.cell_count())
            .map(|index| self.cell_view(index, edge_length, now))
            .collect()
    }

    fn start_transition(
        &mut self,
        index: usize,
        from: CellAppearance,
        selected: bool,
        now: Instant,
    ) {
        let to = CellAppearance::for_state(selected);
        self.transitions.insert(
            index,
            CellTransition::new(from, to, now, self.transition_duration, self.easing),
        );
    }
}

impl GridTrait for GridSelector {
    fn config(&self) -> &GridConfig {
        &self.config
    }

    fn is_cell_selected(&self, index: usize) -> bool {
        self.selection.contains(index)
    }

    fn selected_at(&self, index: usize) -> Option<&Timestamp> {
        self.selection.get(index)
    }

    fn selected_count(&self) -> usize {
        self.selection.len()
    }

    fn toggle_at(&mut self, index: usize, at: Timestamp) -> SelectionChange {
        // sampled before the map changes; a second tap mid-flight starts
        // from wherever the cell currently is
        let now = Instant::now();
        let from = self.appearance(index, now);
        let change = self.selection.toggle(index, at);
        self.start_transition(index, from, change.is_selected(), now);
        debug!(
            "Cell {} {} ({} selected)",
            index,
            if change.is_selected() { "selected" } else { "deselected" },
            self.selection.len()
        );
        change
    }
}
