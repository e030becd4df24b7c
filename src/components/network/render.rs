//! Canvas rendering for the particle network.
//!
//! Replays a [`Frame`] onto a 2D context. The context transform is expected to
//! already carry the device pixel ratio (see [`apply_pixel_ratio`]), so all
//! coordinates here are logical pixels.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{DrawCommand, Frame};
use super::viewport::ViewportParameters;

/// Size the backing buffer for the viewport and scale the context so drawing
/// code keeps using logical coordinates.
pub fn apply_pixel_ratio(
	canvas: &web_sys::HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	viewport: &ViewportParameters,
) {
	let (bw, bh) = viewport.backing_size();
	canvas.set_width(bw);
	canvas.set_height(bh);
	let ratio = viewport.pixel_ratio;
	let _ = ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
}

/// Draws one frame. Nothing carries over from the previous frame except
/// what the leading clear leaves behind.
pub fn render(frame: &Frame, ctx: &CanvasRenderingContext2d) {
	for command in &frame.commands {
		match command {
			DrawCommand::Clear { width, height } => {
				ctx.clear_rect(0.0, 0.0, *width, *height);
			}
			DrawCommand::Disk {
				x,
				y,
				radius,
				color,
			} => {
				ctx.begin_path();
				let _ = ctx.arc(*x, *y, *radius, 0.0, PI * 2.0);
				ctx.set_fill_style_str(color);
				ctx.fill();
			}
			DrawCommand::Line {
				from,
				to,
				color,
				width,
			} => {
				ctx.begin_path();
				ctx.move_to(from.0, from.1);
				ctx.line_to(to.0, to.1);
				ctx.set_stroke_style_str(color);
				ctx.set_line_width(*width);
				ctx.stroke();
			}
		}
	}
}
