//! Pointer, wheel and modifier handling.
//!
//! A press without the modifier starts painting: the cell under the pointer
//! is toggled, and every cell on the line from the last toggled cell to the
//! one under the pointer is toggled as the pointer moves, so a fast stroke
//! leaves no gaps. A press with the modifier held starts panning instead. Which
//! of the two a drag is gets decided at press time and stays fixed until
//! release, whatever happens to the modifier meanwhile.

use line_drawing::Bresenham;
use log::debug;

use super::viewport::{Point, Viewport};

/// `(row, col)` as produced by the viewport; may lie off the board.
pub type CellPos = (isize, isize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    PointerLeave,
    /// Wheel movement in pixels; positive scrolls down.
    Wheel { delta_y: f32 },
    ModifierDown,
    ModifierUp,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    DraggingToggle { last_toggled: CellPos },
    DraggingPan { last_point: Point },
}

#[derive(Debug)]
pub struct InteractionController {
    drag: DragState,
    modifier_held: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            drag: DragState::Idle,
            modifier_held: false,
        }
    }

    pub fn state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragState::Idle
    }

    pub fn modifier_held(&self) -> bool {
        self.modifier_held
    }

    pub fn last_toggled_cell(&self) -> Option<CellPos> {
        match self.drag {
            DragState::DraggingToggle { last_toggled } => Some(last_toggled),
            _ => None,
        }
    }

    /// Feeds one event through the state machine. Pan and zoom are applied
    /// to `viewport` directly; the cells that should be toggled are returned
    /// in stroke order.
    pub fn handle(&mut self, event: InputEvent, viewport: &mut Viewport) -> Vec<CellPos> {
        match (self.drag, event) {
            (_, InputEvent::ModifierDown) => {
                self.modifier_held = true;
                Vec::new()
            }
            (_, InputEvent::ModifierUp) => {
                self.modifier_held = false;
                Vec::new()
            }
            (_, InputEvent::PointerDown(point)) if self.modifier_held => {
                debug!("pan drag start at {:?}", point);
                self.drag = DragState::DraggingPan { last_point: point };
                Vec::new()
            }
            (_, InputEvent::PointerDown(point)) => {
                let cell = viewport.screen_to_grid(point);
                debug!("paint drag start at {:?}", cell);
                self.drag = DragState::DraggingToggle { last_toggled: cell };
                vec![cell]
            }
            (DragState::DraggingToggle { last_toggled }, InputEvent::PointerMove(point)) => {
                let cell = viewport.screen_to_grid(point);
                if cell == last_toggled {
                    return Vec::new();
                }
                self.drag = DragState::DraggingToggle { last_toggled: cell };
                // The line starts on the cell toggled last, which must not flip back.
                Bresenham::new(last_toggled, cell).skip(1).collect()
            }
            (DragState::DraggingPan { last_point }, InputEvent::PointerMove(point)) => {
                viewport.pan_by(point.x - last_point.x, point.y - last_point.y);
                self.drag = DragState::DraggingPan { last_point: point };
                Vec::new()
            }
            (DragState::Idle, InputEvent::PointerMove(_)) => Vec::new(),
            (_, InputEvent::PointerUp | InputEvent::PointerLeave) => {
                if self.is_dragging() {
                    debug!("drag end");
                }
                self.drag = DragState::Idle;
                Vec::new()
            }
            (_, InputEvent::Wheel { delta_y }) => {
                if self.modifier_held {
                    viewport.zoom_by(delta_y);
                }
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 10x10 board of 10px cells on a 100px canvas: one cell per 10 pixels.
    fn viewport() -> Viewport {
        Viewport::new(100.0, 100.0, 10, 10.0)
    }

    fn at(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn press_toggles_cell_under_pointer() {
        let mut vp = viewport();
        let mut ctl = InteractionController::new();
        assert_eq!(ctl.handle(InputEvent::PointerDown(at(25.0, 41.0)), &mut vp), vec![(4, 2)]);
        assert_eq!(ctl.last_toggled_cell(), Some((4, 2)));
        assert_eq!(ctl.state(), DragState::DraggingToggle { last_toggled: (4, 2) });
    }

    #[test]
    fn drag_toggles_each_new_cell_once() {
        let mut vp = viewport();
        let mut ctl = InteractionController::new();
        let mut toggled = Vec::new();
        let events = [
            InputEvent::PointerDown(at(5.0, 5.0)),
            InputEvent::PointerMove(at(6.0, 5.0)),
            InputEvent::PointerMove(at(9.0, 8.0)),
            InputEvent::PointerMove(at(12.0, 5.0)),
            InputEvent::PointerMove(at(15.0, 5.0)),
            InputEvent::PointerMove(at(25.0, 5.0)),
            InputEvent::PointerUp,
            InputEvent::PointerMove(at(35.0, 5.0)),
        ];
        for event in events {
            toggled.extend(ctl.handle(event, &mut vp));
        }
        assert_eq!(toggled, vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(ctl.state(), DragState::Idle);
        assert_eq!(ctl.last_toggled_cell(), None);
    }

    #[test]
    fn fast_move_fills_every_crossed_cell() {
        let mut vp = viewport();
        let mut ctl = InteractionController::new();
        assert_eq!(ctl.handle(InputEvent::PointerDown(at(5.0, 5.0)), &mut vp), vec![(0, 0)]);
        let crossed = ctl.handle(InputEvent::PointerMove(at(95.0, 5.0)), &mut vp);
        assert_eq!(crossed, (1..10).map(|col| (0, col)).collect::<Vec<_>>());
        assert_eq!(ctl.last_toggled_cell(), Some((0, 9)));

        // Straight down column 9 back from the end of the first stroke.
        let crossed = ctl.handle(InputEvent::PointerMove(at(95.0, 45.0)), &mut vp);
        assert_eq!(crossed, vec![(1, 9), (2, 9), (3, 9), (4, 9)]);
    }

    #[test]
    fn diagonal_move_has_no_repeats() {
        let mut vp = viewport();
        let mut ctl = InteractionController::new();
        ctl.handle(InputEvent::PointerDown(at(5.0, 5.0)), &mut vp);
        let crossed = ctl.handle(InputEvent::PointerMove(at(95.0, 35.0)), &mut vp);
        assert_eq!(crossed.first(), Some(&(0, 1)));
        assert_eq!(crossed.last(), Some(&(3, 9)));
        assert_eq!(crossed.len(), 9);
        let mut unique = crossed.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), crossed.len());
        assert!(!crossed.contains(&(0, 0)));
    }

    #[test]
    fn off_board_cells_are_reported_for_the_engine_to_ignore() {
        let mut vp = viewport();
        let mut ctl = InteractionController::new();
        ctl.handle(InputEvent::PointerDown(at(95.0, 95.0)), &mut vp);
        assert_eq!(ctl.handle(InputEvent::PointerMove(at(105.0, 95.0)), &mut vp), vec![(9, 10)]);
    }

    #[test]
    fn modifier_press_pans_without_toggling() {
        let mut vp = Viewport::new(100.0, 100.0, 10, 10.0).with_zoom(2.0);
        let mut ctl = InteractionController::new();
        ctl.handle(InputEvent::ModifierDown, &mut vp);
        assert!(ctl.handle(InputEvent::PointerDown(at(50.0, 50.0)), &mut vp).is_empty());
        assert!(ctl.handle(InputEvent::PointerMove(at(30.0, 40.0)), &mut vp).is_empty());
        // Movement is divided by zoom: (-20, -10) / 2.
        assert_eq!(vp.pan(), Point::new(-10.0, -5.0));

        // Releasing the modifier mid-drag keeps panning.
        ctl.handle(InputEvent::ModifierUp, &mut vp);
        assert!(ctl.handle(InputEvent::PointerMove(at(10.0, 40.0)), &mut vp).is_empty());
        assert_eq!(vp.pan(), Point::new(-20.0, -5.0));

        // Panning is clamped to the board.
        ctl.handle(InputEvent::PointerMove(at(-500.0, -500.0)), &mut vp);
        assert_eq!(vp.pan(), Point::new(-50.0, -50.0));

        ctl.handle(InputEvent::PointerLeave, &mut vp);
        assert_eq!(ctl.state(), DragState::Idle);
    }

    #[test]
    fn modifier_pressed_mid_paint_keeps_painting() {
        let mut vp = viewport();
        let mut ctl = InteractionController::new();
        ctl.handle(InputEvent::PointerDown(at(5.0, 5.0)), &mut vp);
        ctl.handle(InputEvent::ModifierDown, &mut vp);
        assert!(ctl.modifier_held());
        assert_eq!(ctl.handle(InputEvent::PointerMove(at(15.0, 5.0)), &mut vp), vec![(0, 1)]);
        assert_eq!(vp.pan(), Point::default());
    }

    #[test]
    fn wheel_needs_modifier() {
        let mut vp = viewport().with_zoom(5.0);
        let mut ctl = InteractionController::new();
        ctl.handle(InputEvent::Wheel { delta_y: -1000.0 }, &mut vp);
        assert_eq!(vp.zoom(), 5.0);

        ctl.handle(InputEvent::ModifierDown, &mut vp);
        ctl.handle(InputEvent::Wheel { delta_y: -1000.0 }, &mut vp);
        assert!((vp.zoom() - 6.0).abs() < 1e-4);

        ctl.handle(InputEvent::ModifierUp, &mut vp);
        ctl.handle(InputEvent::Wheel { delta_y: 3000.0 }, &mut vp);
        assert!((vp.zoom() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn move_while_idle_does_nothing() {
        let mut vp = viewport();
        let mut ctl = InteractionController::new();
        assert!(ctl.handle(InputEvent::PointerMove(at(5.0, 5.0)), &mut vp).is_empty());
        assert_eq!(ctl.state(), DragState::Idle);
        assert_eq!(vp.pan(), Point::default());
    }
}
