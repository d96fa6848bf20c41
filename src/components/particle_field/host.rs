//! Frame scheduling and viewport access.
//!
//! The renderer never talks to `window` directly; it asks a [`Host`] for the
//! next frame, the viewport size, and resize notifications. [`WindowHost`]
//! backs these with `requestAnimationFrame` and the window `resize` event.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Identifies a requested frame so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Scheduling and viewport capabilities supplied by the page.
pub trait Host {
	/// Run `callback` before the next repaint. `None` if scheduling failed.
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle>;
	fn cancel_frame(&self, handle: FrameHandle);
	/// Current viewport size in CSS pixels.
	fn viewport_size(&self) -> (f64, f64);
	/// Install the resize listener, replacing any previous one.
	fn watch_resize(&self, callback: Box<dyn FnMut()>);
	fn unwatch_resize(&self);
}

/// [`Host`] backed by the browser window.
#[derive(Default)]
pub struct WindowHost {
	resize_cb: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl WindowHost {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Host for WindowHost {
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle> {
		let window = web_sys::window()?;
		let closure = Closure::once_into_js(move || callback());
		let function: &js_sys::Function = closure.unchecked_ref();
		window
			.request_animation_frame(function)
			.ok()
			.map(FrameHandle)
	}

	fn cancel_frame(&self, handle: FrameHandle) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(handle.0);
		}
	}

	fn viewport_size(&self) -> (f64, f64) {
		let Some(window) = web_sys::window() else {
			return (0.0, 0.0);
		};
		let measure = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		(measure(window.inner_width()), measure(window.inner_height()))
	}

	fn watch_resize(&self, callback: Box<dyn FnMut()>) {
		self.unwatch_resize();
		let closure = Closure::wrap(callback);
		if let Some(window) = web_sys::window() {
			let _ =
				window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
		}
		*self.resize_cb.borrow_mut() = Some(closure);
	}

	fn unwatch_resize(&self) {
		if let Some(closure) = self.resize_cb.borrow_mut().take() {
			if let Some(window) = web_sys::window() {
				let _ = window
					.remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
			}
		}
	}
}
