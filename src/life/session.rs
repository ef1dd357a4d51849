use std::time::Instant;

use log::info;

use super::engine::GridEngine;
use super::history::History;
use super::interaction::{InputEvent, InteractionController};
use super::playback::PlaybackScheduler;
use super::viewport::{Point, Viewport};
use crate::config::Config;
use crate::traits_and_structs::{ColorSource, Grid};

/// Everything one running board needs, behind a single `&mut self`.
///
/// The event loop hands every input event, command and timer wake-up to
/// this type one at a time, so each runs to completion before the next.
pub struct Session<C> {
    engine: GridEngine<C>,
    history: History,
    viewport: Viewport,
    controller: InteractionController,
    playback: PlaybackScheduler,
}

impl<C: ColorSource> Session<C> {
    pub fn new(config: &Config, colors: C) -> Self {
        let viewport = Viewport::new(
            config.canvas_width as f32,
            config.canvas_height as f32,
            config.size,
            config.cell_size(),
        )
        .with_zoom(config.initial_zoom());
        info!(
            "new {0}x{0} board, zoom {1:.2}, {2} ms per step",
            config.size,
            viewport.zoom(),
            config.speed_ms
        );
        Self {
            engine: GridEngine::new(config.size, colors),
            history: History::new(),
            viewport,
            controller: InteractionController::new(),
            playback: PlaybackScheduler::new(config.speed_ms),
        }
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn zoom(&self) -> f32 {
        self.viewport.zoom()
    }

    pub fn pan(&self) -> Point {
        self.viewport.pan()
    }

    pub fn current_step(&self) -> usize {
        self.history.current_step()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn speed_ms(&self) -> u64 {
        self.playback.speed_ms()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.playback.next_deadline()
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_playing() && self.history.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_playing() && self.history.can_go_next()
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        for (row, col) in self.controller.handle(event, &mut self.viewport) {
            self.engine.toggle_cell(row, col);
        }
    }

    /// Toggles whatever cell lies under a canvas point.
    pub fn toggle_at(&mut self, point: Point) {
        let (row, col) = self.viewport.screen_to_grid(point);
        self.engine.toggle_cell(row, col);
    }

    /// Advances one generation by hand. A stale redo branch is dropped first.
    pub fn step_once(&mut self) {
        self.history.truncate(self.history.current_step());
        self.advance();
    }

    pub fn go_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        match self.history.go_to_previous(self.engine.grid()) {
            Some(grid) => {
                self.engine.replace(grid);
                true
            }
            None => false,
        }
    }

    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        match self.history.go_to_next() {
            Some(grid) => {
                self.engine.replace(grid);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        info!("board cleared");
        self.engine.clear();
        self.history.clear();
    }

    pub fn toggle_play_pause(&mut self, now: Instant) -> bool {
        let history = &mut self.history;
        self.playback
            .toggle_play_pause(now, || history.truncate(history.current_step()))
    }

    pub fn set_speed(&mut self, speed_ms: u64, now: Instant) {
        self.playback.handle_speed_change(speed_ms, now);
    }

    pub fn zoom_by(&mut self, delta_y: f32) {
        self.viewport.zoom_by(delta_y);
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.viewport.pan_by(dx, dy);
    }

    /// Runs every playback step due by `now`; returns how many ran.
    pub fn tick(&mut self, now: Instant) -> u32 {
        let due = self.playback.poll(now);
        for _ in 0..due {
            self.advance();
        }
        due
    }

    fn advance(&mut self) {
        let before = self.engine.step();
        self.history.record_before_step(before);
    }
}
