use std::time::Instant;

use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use crate::auxiliary::randomizer::{seed_from_u64, PcgColors};
use crate::auxiliary::render;
use crate::auxiliary::window::create_window;
use crate::config::{Config, ModifierKey};
use crate::error::AppError;
use crate::life::interaction::InputEvent;
use crate::life::playback::{MAX_SPEED_MS, MIN_SPEED_MS};
use crate::life::session::Session;
use crate::life::viewport::Point;

/// Wheel pixels per line reported by the OS.
const WHEEL_PIXELS_PER_LINE: f32 = 100.0;
const SPEED_STEP_MS: u64 = 100;

fn modifier_held(input: &WinitInputHelper, key: ModifierKey) -> bool {
    let (left, right) = match key {
        ModifierKey::Control => (VirtualKeyCode::LControl, VirtualKeyCode::RControl),
        ModifierKey::Shift => (VirtualKeyCode::LShift, VirtualKeyCode::RShift),
        ModifierKey::Alt => (VirtualKeyCode::LAlt, VirtualKeyCode::RAlt),
        ModifierKey::Logo => (VirtualKeyCode::LWin, VirtualKeyCode::RWin),
    };
    input.key_held(left) || input.key_held(right)
}

fn title(session: &Session<PcgColors>) -> String {
    format!(
        "Life | step {}/{} | {} ms | {}",
        session.current_step(),
        session.history_len(),
        session.speed_ms(),
        if session.is_playing() { "playing" } else { "paused" },
    )
}

pub fn run(config: Config) -> Result<(), AppError> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height, mut _hidpi_factor) = create_window(
        "Life",
        config.canvas_width,
        config.canvas_height,
        &event_loop,
    )?;

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);
    let mut pixels = Pixels::new(config.canvas_width, config.canvas_height, surface_texture)?;

    let colors = match config.seed {
        Some(seed) => PcgColors::from_seed(seed_from_u64(seed)),
        None => PcgColors::from_entropy(),
    };
    let mut session = Session::new(&config, colors);
    let frame_width = config.canvas_width as usize;
    let modifier = config.modifier;
    let mut modifier_was_held = false;
    let mut pointer_inside = false;
    window.set_title(&title(&session));

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            render::draw(session.grid(), session.viewport(), pixels.get_frame(), frame_width);
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            let now = Instant::now();

            let held = modifier_held(&input, modifier);
            if held != modifier_was_held {
                session.handle_input(if held {
                    InputEvent::ModifierDown
                } else {
                    InputEvent::ModifierUp
                });
                modifier_was_held = held;
            }

            if input.key_pressed(VirtualKeyCode::P) {
                session.toggle_play_pause(now);
            }
            if input.key_pressed(VirtualKeyCode::Space) {
                session.step_once();
            }
            if input.key_pressed(VirtualKeyCode::Left) {
                session.go_previous();
            }
            if input.key_pressed(VirtualKeyCode::Right) {
                session.go_next();
            }
            if input.key_pressed(VirtualKeyCode::C) {
                session.clear();
            }
            if input.key_pressed(VirtualKeyCode::Up) {
                let speed = (session.speed_ms() + SPEED_STEP_MS).min(MAX_SPEED_MS);
                session.set_speed(speed, now);
            }
            if input.key_pressed(VirtualKeyCode::Down) {
                let speed = session.speed_ms().saturating_sub(SPEED_STEP_MS).max(MIN_SPEED_MS);
                session.set_speed(speed, now);
            }

            // Window coordinates to canvas pixels; positions off the canvas
            // are kept so the board can ignore them.
            match input.mouse() {
                Some((mx, my)) => {
                    pointer_inside = true;
                    let (px, py) = match pixels.window_pos_to_pixel((mx, my)) {
                        Ok((x, y)) => (x as f32, y as f32),
                        Err((x, y)) => (x as f32, y as f32),
                    };
                    let point = Point::new(px, py);
                    if input.mouse_pressed(0) {
                        debug!("mouse down at {:?}", point);
                        session.handle_input(InputEvent::PointerDown(point));
                    } else if input.mouse_held(0) && input.mouse_diff() != (0.0, 0.0) {
                        session.handle_input(InputEvent::PointerMove(point));
                    }
                    if input.mouse_released(0) {
                        session.handle_input(InputEvent::PointerUp);
                    }
                }
                None if pointer_inside => {
                    pointer_inside = false;
                    session.handle_input(InputEvent::PointerLeave);
                }
                None => {}
            }

            let scroll = input.scroll_diff();
            if scroll != 0.0 {
                session.handle_input(InputEvent::Wheel {
                    delta_y: -scroll * WHEEL_PIXELS_PER_LINE,
                });
            }

            if let Some(factor) = input.scale_factor_changed() {
                _hidpi_factor = factor;
            }
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }

            let steps = session.tick(now);
            if steps > 1 {
                info!("ran {} overdue steps", steps);
            }

            window.set_title(&title(&session));
            window.request_redraw();

            *control_flow = match session.next_deadline() {
                Some(deadline) => ControlFlow::WaitUntil(deadline),
                None => ControlFlow::Wait,
            };
        }
    });
}
