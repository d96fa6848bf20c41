//! Frame rendering for the particle field.
//!
//! Each frame is painted in three passes:
//! 1. Clear, then the vertical background gradient for the current mode
//! 2. Particles as filled circles in their spawn color
//! 3. Connection lines between every pair closer than the link distance

use super::particles::ParticleSystem;
use super::surface::Surface;
use super::theme::FieldStyle;

/// Paints the complete field onto the surface.
pub fn render<S: Surface + ?Sized>(system: &ParticleSystem, style: &FieldStyle, surface: &mut S) {
	let state = system.surface();
	let (w, h) = (state.width as f64, state.height as f64);

	surface.clear(w, h);
	draw_background(style, system, surface, w, h);
	draw_particles(system, surface);
	draw_connections(system, style, surface);
}

fn draw_background<S: Surface + ?Sized>(
	style: &FieldStyle,
	system: &ParticleSystem,
	surface: &mut S,
	w: f64,
	h: f64,
) {
	let (top, bottom) = style.palette(system.mode()).background;
	surface.fill_vertical_gradient(w, h, top, bottom);
}

fn draw_particles<S: Surface + ?Sized>(system: &ParticleSystem, surface: &mut S) {
	for p in &system.particles {
		surface.fill_circle(p.x, p.y, p.size, p.color);
	}
}

/// O(n²) over unordered pairs; self pairs have zero length and are skipped.
fn draw_connections<S: Surface + ?Sized>(
	system: &ParticleSystem,
	style: &FieldStyle,
	surface: &mut S,
) {
	let palette = style.palette(system.mode());
	let threshold = style.link_distance;
	let particles = &system.particles;

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if distance >= threshold {
				continue;
			}
			surface.stroke_line(
				(a.x, a.y),
				(b.x, b.y),
				palette.line_color(distance, threshold),
				style.link_width,
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::super::particles::Particle;
	use super::super::state::{ColorMode, SurfaceState};
	use super::super::testing::{DrawCommand, RecordingSurface};
	use super::super::theme::Color;
	use super::*;

	fn particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 1.5,
			alpha: 0.4,
			color: Color::rgba(82, 82, 224, 0.4),
		}
	}

	fn system_with(mode: ColorMode, particles: Vec<Particle>) -> ParticleSystem {
		let mut rng = StdRng::seed_from_u64(0);
		let mut system = ParticleSystem::new(
			&FieldStyle::observatory(),
			SurfaceState::new(400, 300, mode),
			&mut rng,
		);
		system.particles = particles;
		system
	}

	#[test]
	fn frame_order_is_clear_background_particles_lines() {
		let system = system_with(
			ColorMode::Light,
			vec![particle(10.0, 10.0), particle(40.0, 50.0)],
		);
		let mut surface = RecordingSurface::new();
		render(&system, &FieldStyle::observatory(), &mut surface);

		let commands = surface.commands();
		assert_eq!(commands.len(), 5);
		assert_eq!(
			commands[0],
			DrawCommand::Clear {
				width: 400.0,
				height: 300.0
			}
		);
		assert!(matches!(commands[1], DrawCommand::Gradient { height, .. } if height == 300.0));
		assert!(matches!(commands[2], DrawCommand::Circle { x, y, .. } if (x, y) == (10.0, 10.0)));
		assert!(matches!(commands[3], DrawCommand::Circle { x, y, .. } if (x, y) == (40.0, 50.0)));
		assert!(matches!(commands[4], DrawCommand::Line { width, .. } if width == 0.5));
	}

	#[test]
	fn line_opacity_follows_distance() {
		let system = system_with(
			ColorMode::Dark,
			vec![particle(0.0, 0.0), particle(30.0, 40.0)],
		);
		let mut surface = RecordingSurface::new();
		render(&system, &FieldStyle::observatory(), &mut surface);

		let line = surface
			.commands()
			.into_iter()
			.find_map(|c| match c {
				DrawCommand::Line { color, .. } => Some(color),
				_ => None,
			})
			.unwrap();
		// distance 50 of 120 on the dark palette
		assert_eq!((line.r, line.g, line.b), (100, 120, 255));
		assert!((line.a - 0.15 * (1.0 - 50.0 / 120.0)).abs() < 1e-12);
	}

	#[test]
	fn distant_pairs_are_not_connected() {
		let system = system_with(
			ColorMode::Dark,
			vec![particle(0.0, 0.0), particle(120.0, 0.0), particle(300.0, 200.0)],
		);
		let mut surface = RecordingSurface::new();
		render(&system, &FieldStyle::observatory(), &mut surface);
		assert_eq!(surface.count(|c| matches!(c, DrawCommand::Line { .. })), 0);
	}

	#[test]
	fn every_close_pair_is_drawn_once() {
		let cluster = (0..6).map(|i| particle(100.0 + i as f64, 100.0)).collect();
		let system = system_with(ColorMode::Light, cluster);
		let mut surface = RecordingSurface::new();
		render(&system, &FieldStyle::observatory(), &mut surface);
		assert_eq!(surface.count(|c| matches!(c, DrawCommand::Line { .. })), 15);
	}

	#[test]
	fn background_follows_mode() {
		let style = FieldStyle::observatory();
		for (mode, top, bottom) in [
			(ColorMode::Light, Color::rgb(255, 255, 255), Color::rgb(240, 245, 250)),
			(ColorMode::Dark, Color::rgb(15, 23, 42), Color::rgb(30, 41, 59)),
		] {
			let system = system_with(mode, Vec::new());
			let mut surface = RecordingSurface::new();
			render(&system, &style, &mut surface);
			assert_eq!(
				surface.commands()[1],
				DrawCommand::Gradient {
					height: 300.0,
					top,
					bottom
				}
			);
		}
	}
}
