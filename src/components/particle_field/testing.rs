//! Deterministic stand-ins for the browser used by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::host::{FrameHandle, Host};
use super::surface::Surface;
use super::theme::Color;

type ResizeCallback = Rc<RefCell<Box<dyn FnMut()>>>;

/// A [`Host`] whose frames only run when the test steps them.
pub struct ManualHost {
	queue: RefCell<Vec<(FrameHandle, Box<dyn FnOnce()>)>>,
	next_handle: Cell<i32>,
	viewport: Cell<(f64, f64)>,
	resize: RefCell<Option<ResizeCallback>>,
	callbacks_run: Cell<usize>,
}

impl ManualHost {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			queue: RefCell::new(Vec::new()),
			next_handle: Cell::new(1),
			viewport: Cell::new((width, height)),
			resize: RefCell::new(None),
			callbacks_run: Cell::new(0),
		}
	}

	/// Run the frames that were pending when the tick began.
	pub fn step(&self) -> usize {
		let due = std::mem::take(&mut *self.queue.borrow_mut());
		let ran = due.len();
		for (_, callback) in due {
			self.callbacks_run.set(self.callbacks_run.get() + 1);
			callback();
		}
		ran
	}

	pub fn step_n(&self, ticks: usize) {
		for _ in 0..ticks {
			self.step();
		}
	}

	pub fn pending(&self) -> usize {
		self.queue.borrow().len()
	}

	pub fn callbacks_run(&self) -> usize {
		self.callbacks_run.get()
	}

	pub fn is_watching_resize(&self) -> bool {
		self.resize.borrow().is_some()
	}

	/// Change the viewport and notify the resize listener, if any.
	pub fn resize_viewport(&self, width: f64, height: f64) {
		self.viewport.set((width, height));
		let callback = self.resize.borrow().clone();
		if let Some(callback) = callback {
			let mut f = callback.borrow_mut();
			(&mut *f)();
		}
	}
}

impl Host for ManualHost {
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle> {
		let handle = FrameHandle(self.next_handle.get());
		self.next_handle.set(handle.0 + 1);
		self.queue.borrow_mut().push((handle, callback));
		Some(handle)
	}

	fn cancel_frame(&self, handle: FrameHandle) {
		self.queue.borrow_mut().retain(|(h, _)| *h != handle);
	}

	fn viewport_size(&self) -> (f64, f64) {
		self.viewport.get()
	}

	fn watch_resize(&self, callback: Box<dyn FnMut()>) {
		*self.resize.borrow_mut() = Some(Rc::new(RefCell::new(callback)));
	}

	fn unwatch_resize(&self) {
		self.resize.borrow_mut().take();
	}
}

/// One recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Resize { width: u32, height: u32 },
	Clear { width: f64, height: f64 },
	Gradient { height: f64, top: Color, bottom: Color },
	Circle { x: f64, y: f64, radius: f64, color: Color },
	Line { from: (f64, f64), to: (f64, f64), color: Color, width: f64 },
}

/// A [`Surface`] that records every call. Clones share one log.
#[derive(Clone)]
pub struct RecordingSurface {
	log: Rc<RefCell<Vec<DrawCommand>>>,
	attached: Rc<Cell<bool>>,
}

impl RecordingSurface {
	pub fn new() -> Self {
		Self {
			log: Rc::new(RefCell::new(Vec::new())),
			attached: Rc::new(Cell::new(true)),
		}
	}

	pub fn commands(&self) -> Vec<DrawCommand> {
		self.log.borrow().clone()
	}

	pub fn clear_log(&self) {
		self.log.borrow_mut().clear();
	}

	pub fn detach(&self) {
		self.attached.set(false);
	}

	pub fn frames_drawn(&self) -> usize {
		self.count(|c| matches!(c, DrawCommand::Clear { .. }))
	}

	pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
		self.log.borrow().iter().filter(|c| pred(c)).count()
	}

	fn push(&self, command: DrawCommand) {
		self.log.borrow_mut().push(command);
	}
}

impl Surface for RecordingSurface {
	fn is_attached(&self) -> bool {
		self.attached.get()
	}

	fn set_size(&mut self, width: u32, height: u32) {
		self.push(DrawCommand::Resize { width, height });
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.push(DrawCommand::Clear { width, height });
	}

	fn fill_vertical_gradient(&mut self, _width: f64, height: f64, top: Color, bottom: Color) {
		self.push(DrawCommand::Gradient {
			height,
			top,
			bottom,
		});
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.push(DrawCommand::Circle {
			x,
			y,
			radius,
			color,
		});
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.push(DrawCommand::Line {
			from,
			to,
			color,
			width,
		});
	}
}
