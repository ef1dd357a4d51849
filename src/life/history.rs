use log::debug;

use crate::traits_and_structs::Grid;

/// Boards recorded just before each step, plus a cursor into them.
///
/// `current_step == len()` means the live board is showing. Walking back
/// from there parks the live board in `head` so walking forward again can
/// return to it without recomputing anything.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<Grid>,
    current_step: usize,
    head: Option<Grid>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_step > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_step < self.entries.len()
    }

    /// Stores the board a step is about to replace.
    pub fn record_before_step(&mut self, grid: Grid) {
        self.entries.push(grid);
        self.current_step += 1;
    }

    /// Moves the cursor back one step and returns the board found there.
    ///
    /// `showing` is the board on screen right now; it is kept when leaving
    /// the live edge.
    pub fn go_to_previous(&mut self, showing: &Grid) -> Option<Grid> {
        if !self.can_go_previous() {
            return None;
        }
        if self.current_step == self.entries.len() {
            self.head = Some(showing.clone());
        }
        self.current_step -= 1;
        debug!("history back to step {}", self.current_step);
        Some(self.entries[self.current_step].clone())
    }

    /// Moves the cursor forward one step and returns the board that followed.
    pub fn go_to_next(&mut self) -> Option<Grid> {
        if !self.can_go_next() {
            return None;
        }
        self.current_step += 1;
        debug!("history forward to step {}", self.current_step);
        self.entries
            .get(self.current_step)
            .or(self.head.as_ref())
            .cloned()
    }

    /// Drops every entry from `at_step` on, keeping `[0, at_step)`.
    pub fn truncate(&mut self, at_step: usize) {
        if at_step < self.entries.len() {
            debug!("history truncated from {} to {}", self.entries.len(), at_step);
            self.entries.truncate(at_step);
            self.head = None;
        }
        self.current_step = self.current_step.min(self.entries.len());
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::engine::GridEngine;
    use crate::traits_and_structs::{Color, CycleColors};

    fn glider_engine() -> GridEngine<CycleColors> {
        let mut engine = GridEngine::new(8, CycleColors::new(vec![Color::rgb(1, 2, 3)]));
        for (row, col) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
            engine.toggle_cell(row, col);
        }
        engine
    }

    fn run(engine: &mut GridEngine<CycleColors>, history: &mut History, steps: usize) -> Vec<Grid> {
        let mut seen = vec![engine.grid().clone()];
        for _ in 0..steps {
            history.record_before_step(engine.step());
            seen.push(engine.grid().clone());
        }
        seen
    }

    #[test]
    fn starts_empty() {
        let history = History::new();
        assert_eq!(history.len(), 0);
        assert_eq!(history.current_step(), 0);
        assert!(!history.can_go_previous());
        assert!(!history.can_go_next());
    }

    #[test]
    fn records_each_step() {
        let mut engine = glider_engine();
        let mut history = History::new();
        let seen = run(&mut engine, &mut history, 4);
        assert_eq!(history.len(), 4);
        assert_eq!(history.current_step(), 4);
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn walks_back_to_start_and_replays_forward() {
        let k = 5;
        let mut engine = glider_engine();
        let mut history = History::new();
        let seen = run(&mut engine, &mut history, k);

        for expected_step in (0..k).rev() {
            let grid = history.go_to_previous(engine.grid()).expect("can go back");
            engine.replace(grid);
            assert_eq!(history.current_step(), expected_step);
            assert_eq!(engine.grid(), &seen[expected_step]);
        }
        assert_eq!(history.go_to_previous(engine.grid()), None);
        assert_eq!(history.current_step(), 0);

        for expected_step in 1..=k {
            let grid = history.go_to_next().expect("can go forward");
            engine.replace(grid);
            assert_eq!(history.current_step(), expected_step);
            assert_eq!(engine.grid(), &seen[expected_step]);
            // Replay hands back the stored boards, nothing is recomputed.
            assert!(engine.grid().shares_cells_with(&seen[expected_step]));
        }
        assert_eq!(history.go_to_next(), None);
        assert_eq!(history.current_step(), k);
        assert_eq!(engine.grid(), &seen[k]);
    }

    #[test]
    fn snapshots_survive_live_edits() {
        let mut engine = glider_engine();
        let mut history = History::new();
        let seen = run(&mut engine, &mut history, 1);
        engine.toggle_cell(7, 7);
        engine.toggle_cell(0, 1);
        let first = history.go_to_previous(engine.grid()).expect("one entry");
        assert_eq!(first, seen[0]);
    }

    #[test]
    fn truncate_drops_redo_branch() {
        let mut engine = glider_engine();
        let mut history = History::new();
        let seen = run(&mut engine, &mut history, 4);
        for _ in 0..2 {
            let grid = history.go_to_previous(engine.grid()).expect("can go back");
            engine.replace(grid);
        }
        assert_eq!(history.current_step(), 2);

        history.truncate(history.current_step());
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_step(), 2);
        assert!(!history.can_go_next());
        assert_eq!(engine.grid(), &seen[2]);

        history.record_before_step(engine.step());
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_step(), 3);
        assert_eq!(engine.grid(), &seen[3]);
    }

    #[test]
    fn truncate_past_end_is_noop() {
        let mut engine = glider_engine();
        let mut history = History::new();
        run(&mut engine, &mut history, 3);
        history.truncate(10);
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_step(), 3);
    }

    #[test]
    fn clear_resets_cursor() {
        let mut engine = glider_engine();
        let mut history = History::new();
        run(&mut engine, &mut history, 3);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.current_step(), 0);
        assert_eq!(history.go_to_previous(engine.grid()), None);
        assert_eq!(history.go_to_next(), None);
    }
}
