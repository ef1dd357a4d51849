use winit::dpi::LogicalSize;
use winit::error::OsError;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

/// Create a window sized to the canvas, centered on the current monitor.
///
/// Returns the window, its physical size, and the scale factor.
pub fn create_window(
    title: &str,
    canvas_width: u32,
    canvas_height: u32,
    event_loop: &EventLoop<()>,
) -> Result<(Window, u32, u32, f64), OsError> {
    let window = WindowBuilder::new()
        .with_visible(false)
        .with_title(title)
        .with_inner_size(LogicalSize::new(canvas_width as f64, canvas_height as f64))
        .with_min_inner_size(LogicalSize::new(canvas_width as f64, canvas_height as f64))
        .build(event_loop)?;
    let hidpi_factor = window.scale_factor();

    if let Some(monitor) = window.current_monitor() {
        let monitor_size = monitor.size().to_logical::<f64>(hidpi_factor);
        let center = winit::dpi::LogicalPosition::new(
            ((monitor_size.width - canvas_width as f64) / 2.0).max(0.0),
            ((monitor_size.height - canvas_height as f64) / 2.0).max(0.0),
        );
        window.set_outer_position(center);
    }

    let physical = window.inner_size();
    window.set_visible(true);

    Ok((window, physical.width, physical.height, hidpi_factor))
}
