//! Drifting particles that make up the field.

use rand::Rng;

use super::state::{ColorMode, SurfaceState};
use super::theme::{Color, FieldStyle};

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub alpha: f64,
	/// Assigned once at spawn; later mode changes leave it alone.
	pub color: Color,
}

impl Particle {
	fn spawn(style: &FieldStyle, surface: &SurfaceState, rng: &mut impl Rng) -> Self {
		let palette = style.palette(surface.mode);
		let alpha = style.alpha_min + unit(rng) * style.alpha_span;

		Self {
			x: unit(rng) * surface.width as f64,
			y: unit(rng) * surface.height as f64,
			vx: (unit(rng) - 0.5) * style.speed,
			vy: (unit(rng) - 0.5) * style.speed,
			size: style.size_min + unit(rng) * style.size_span,
			alpha,
			color: palette.particle_color(unit(rng)).with_alpha(alpha),
		}
	}
}

fn unit(rng: &mut impl Rng) -> f64 {
	rng.gen_range(0.0..1.0)
}

/// Wrap a coordinate onto `[0, extent)`.
fn wrap(value: f64, extent: f64) -> f64 {
	let wrapped = value.rem_euclid(extent);
	// rem_euclid can round up to `extent` for tiny negative inputs
	if wrapped >= extent { 0.0 } else { wrapped }
}

/// Number of particles for a surface: one per `area_per_particle`, capped.
pub fn particle_count(style: &FieldStyle, width: u32, height: u32) -> usize {
	if style.area_per_particle <= 0.0 {
		return 0;
	}
	let area = width as f64 * height as f64;
	let by_area = (area / style.area_per_particle).floor() as usize;
	by_area.min(style.max_particles)
}

/// Owns the particle collection and the surface it lives on.
pub struct ParticleSystem {
	pub particles: Vec<Particle>,
	surface: SurfaceState,
	/// Last drawable size; positions are laid out against it.
	extent: (u32, u32),
}

impl ParticleSystem {
	pub fn new(style: &FieldStyle, surface: SurfaceState, rng: &mut impl Rng) -> Self {
		let count = particle_count(style, surface.width, surface.height);
		let particles = (0..count)
			.map(|_| Particle::spawn(style, &surface, rng))
			.collect();

		Self {
			particles,
			surface,
			extent: (surface.width, surface.height),
		}
	}

	pub fn surface(&self) -> &SurfaceState {
		&self.surface
	}

	pub fn mode(&self) -> ColorMode {
		self.surface.mode
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Switch the mode used for background and line colors.
	pub fn set_mode(&mut self, mode: ColorMode) {
		self.surface.mode = mode;
	}

	/// Advance every particle by its velocity, wrapping across edges.
	pub fn update(&mut self) {
		if !self.surface.is_drawable() {
			return;
		}
		let (w, h) = (self.surface.width as f64, self.surface.height as f64);

		for p in &mut self.particles {
			p.x = wrap(p.x + p.vx, w);
			p.y = wrap(p.y + p.vy, h);
		}
	}

	/// Resize the bounds, scaling particle positions proportionally.
	///
	/// Passing through a zero-area size leaves positions alone; the next
	/// drawable size scales them from the last drawable one.
	pub fn resize(&mut self, width: u32, height: u32) {
		self.surface.width = width;
		self.surface.height = height;

		if !self.surface.is_drawable() {
			return;
		}
		let (old_w, old_h) = std::mem::replace(&mut self.extent, (width, height));
		if old_w == 0 || old_h == 0 {
			return;
		}

		let (w, h) = (width as f64, height as f64);
		let scale_x = w / old_w as f64;
		let scale_y = h / old_h as f64;

		for p in &mut self.particles {
			p.x = wrap(p.x * scale_x, w);
			p.y = wrap(p.y * scale_y, h);
		}
	}
}
