//! Render loop lifecycle.
//!
//! A [`ParticleRenderer`] owns one particle field, the surface it draws on, and
//! a chain of frame callbacks requested from its [`Host`]. Each callback
//! updates and paints one full frame, then requests the next. Callbacks carry
//! the epoch they were scheduled under, so a stop or restart strands any frame
//! the host still delivers.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::host::{FrameHandle, Host};
use super::particles::ParticleSystem;
use super::render;
use super::state::{ColorMode, SurfaceState};
use super::surface::Surface;
use super::theme::FieldStyle;

struct RendererState<S> {
	style: FieldStyle,
	rng: StdRng,
	mode: ColorMode,
	system: Option<ParticleSystem>,
	surface: Option<S>,
	running: bool,
	epoch: u64,
	pending: Option<FrameHandle>,
	frames: u64,
}

impl<S: Surface> RendererState<S> {
	fn regenerate(&mut self, dims: SurfaceState) {
		self.system = Some(ParticleSystem::new(&self.style, dims, &mut self.rng));
	}

	fn particle_count(&self) -> usize {
		self.system.as_ref().map_or(0, ParticleSystem::len)
	}
}

/// Drives a particle field on a surface, one frame per host tick.
pub struct ParticleRenderer<H: Host + 'static, S: Surface + 'static> {
	host: Rc<H>,
	state: Rc<RefCell<RendererState<S>>>,
}

impl<H: Host + 'static, S: Surface + 'static> Clone for ParticleRenderer<H, S> {
	fn clone(&self) -> Self {
		Self {
			host: self.host.clone(),
			state: self.state.clone(),
		}
	}
}

impl<H: Host + 'static, S: Surface + 'static> ParticleRenderer<H, S> {
	/// Create an idle renderer seeded from the platform's entropy source.
	pub fn new(host: H, style: FieldStyle) -> Self {
		Self::with_rng(host, style, StdRng::from_entropy())
	}

	/// Create an idle renderer with a deterministic particle layout.
	pub fn with_seed(host: H, style: FieldStyle, seed: u64) -> Self {
		Self::with_rng(host, style, StdRng::seed_from_u64(seed))
	}

	fn with_rng(host: H, style: FieldStyle, rng: StdRng) -> Self {
		Self {
			host: Rc::new(host),
			state: Rc::new(RefCell::new(RendererState {
				style,
				rng,
				mode: ColorMode::default(),
				system: None,
				surface: None,
				running: false,
				epoch: 0,
				pending: None,
				frames: 0,
			})),
		}
	}

	/// Begin animating on `surface`. A missing surface leaves the renderer idle.
	///
	/// Restarting an active renderer stops the previous loop first.
	pub fn start(&self, surface: Option<S>, mode: ColorMode) {
		let Some(mut surface) = surface else {
			debug!("particle-field: no drawing surface, staying idle");
			return;
		};
		self.stop();

		let (vw, vh) = self.host.viewport_size();
		let dims = SurfaceState::from_viewport(vw, vh, mode);
		surface.set_size(dims.width, dims.height);

		let count = {
			let mut st = self.state.borrow_mut();
			st.mode = mode;
			st.regenerate(dims);
			st.surface = Some(surface);
			st.running = true;
			st.epoch += 1;
			st.particle_count()
		};

		let (state, host) = (self.state.clone(), self.host.clone());
		self.host
			.watch_resize(Box::new(move || handle_resize(&state, &host)));
		schedule_frame(&self.state, &self.host);

		info!(
			"particle-field: started {}x{} with {} particles ({})",
			dims.width,
			dims.height,
			count,
			mode.as_str()
		);
	}

	/// Cancel the loop and detach the resize listener. Safe to call repeatedly.
	pub fn stop(&self) {
		let pending = {
			let mut st = self.state.borrow_mut();
			if !st.running {
				return;
			}
			st.running = false;
			st.pending.take()
		};
		if let Some(handle) = pending {
			self.host.cancel_frame(handle);
		}
		self.host.unwatch_resize();
		debug!("particle-field: stopped");
	}

	/// Re-read the viewport and resize the surface. Particles are kept.
	pub fn on_resize(&self) {
		handle_resize(&self.state, &self.host);
	}

	/// Use `mode` for the background and lines from the next frame on.
	pub fn on_mode_change(&self, mode: ColorMode) {
		let mut st = self.state.borrow_mut();
		st.mode = mode;
		if let Some(system) = st.system.as_mut() {
			system.set_mode(mode);
		}
	}

	/// Throw away the particles and spawn a fresh set for the current viewport.
	pub fn reinitialize(&self) {
		let (vw, vh) = self.host.viewport_size();
		let mut guard = self.state.borrow_mut();
		let st = &mut *guard;
		if !st.running {
			return;
		}
		let dims = SurfaceState::from_viewport(vw, vh, st.mode);
		if let Some(surface) = st.surface.as_mut() {
			surface.set_size(dims.width, dims.height);
		}
		st.regenerate(dims);
		info!(
			"particle-field: reinitialized {}x{} with {} particles",
			dims.width,
			dims.height,
			st.particle_count()
		);
	}

	pub fn is_running(&self) -> bool {
		self.state.borrow().running
	}

	pub fn mode(&self) -> ColorMode {
		self.state.borrow().mode
	}

	pub fn particle_count(&self) -> usize {
		self.state.borrow().particle_count()
	}

	/// Frames painted since creation.
	pub fn frames_rendered(&self) -> u64 {
		self.state.borrow().frames
	}

	/// Read access to the current particle system, if one exists.
	pub fn with_system<R>(&self, f: impl FnOnce(&ParticleSystem) -> R) -> Option<R> {
		self.state.borrow().system.as_ref().map(f)
	}
}

fn schedule_frame<H: Host + 'static, S: Surface + 'static>(
	state: &Rc<RefCell<RendererState<S>>>,
	host: &Rc<H>,
) {
	let epoch = state.borrow().epoch;
	let (state_cb, host_cb) = (state.clone(), host.clone());
	let handle = host.request_frame(Box::new(move || run_frame(&state_cb, &host_cb, epoch)));
	state.borrow_mut().pending = handle;
}

fn run_frame<H: Host + 'static, S: Surface + 'static>(
	state: &Rc<RefCell<RendererState<S>>>,
	host: &Rc<H>,
	epoch: u64,
) {
	{
		let mut guard = state.borrow_mut();
		let st = &mut *guard;
		if !st.running || st.epoch != epoch {
			return;
		}
		st.pending = None;

		let (Some(system), Some(surface)) = (st.system.as_mut(), st.surface.as_mut()) else {
			return;
		};
		if !surface.is_attached() {
			debug!("particle-field: surface detached, ending loop");
			st.running = false;
			drop(guard);
			host.unwatch_resize();
			return;
		}
		if system.surface().is_drawable() {
			system.update();
			render::render(system, &st.style, surface);
			st.frames += 1;
		}
	}
	schedule_frame(state, host);
}

fn handle_resize<H: Host + 'static, S: Surface + 'static>(
	state: &Rc<RefCell<RendererState<S>>>,
	host: &Rc<H>,
) {
	let (vw, vh) = host.viewport_size();
	let mut guard = state.borrow_mut();
	let st = &mut *guard;
	if !st.running {
		return;
	}
	let dims = SurfaceState::from_viewport(vw, vh, st.mode);
	if let Some(surface) = st.surface.as_mut() {
		surface.set_size(dims.width, dims.height);
	}

	// a field born at zero area has nothing to stretch
	let grow_from_empty = st.particle_count() == 0 && dims.is_drawable();
	if grow_from_empty || st.system.is_none() {
		st.regenerate(dims);
	} else if let Some(system) = st.system.as_mut() {
		system.resize(dims.width, dims.height);
	}
	debug!(
		"particle-field: resized to {}x{} ({} particles)",
		dims.width,
		dims.height,
		st.particle_count()
	);
}
