//! Drawing surface the field paints onto.
//!
//! [`Surface`] is the small set of 2D operations a frame needs. The browser
//! implementation wraps an HTML canvas and its 2D context; tests substitute a
//! recorder.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::Color;

/// 2D drawing capability used by the frame renderer.
pub trait Surface {
	/// False once the surface has been detached from the page.
	fn is_attached(&self) -> bool;
	/// Resize the backing store to `width` x `height` pixels.
	fn set_size(&mut self, width: u32, height: u32);
	fn clear(&mut self, width: f64, height: f64);
	/// Fill the area with a top-to-bottom two-stop gradient.
	fn fill_vertical_gradient(&mut self, width: f64, height: f64, top: Color, bottom: Color);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
}

/// An HTML canvas with an acquired 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquire the 2D context, or `None` if the canvas cannot provide one.
	pub fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
		Some(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn is_attached(&self) -> bool {
		self.canvas.is_connected()
	}

	fn set_size(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_vertical_gradient(&mut self, width: f64, height: f64, top: Color, bottom: Color) {
		let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
		let _ = gradient.add_color_stop(0.0, &top.to_css());
		let _ = gradient.add_color_stop(1.0, &bottom.to_css());

		#[allow(deprecated)]
		self.ctx.set_fill_style(&gradient);
		self.ctx.fill_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.ctx.begin_path();
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}
}
