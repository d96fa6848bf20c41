//! Visual theming for the particle field.
//!
//! Provides colors, per-mode palettes, and the style presets that decide how
//! many particles spawn, how they look, and how connection lines fade.

use super::state::ColorMode;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Build an opaque color from hue (degrees), saturation and lightness (0.0..=1.0).
	pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
		let h = hue.rem_euclid(360.0) / 60.0;
		let s = saturation.clamp(0.0, 1.0);
		let l = lightness.clamp(0.0, 1.0);

		let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
		let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
		let (r, g, b) = match h as u32 {
			0 => (chroma, x, 0.0),
			1 => (x, chroma, 0.0),
			2 => (0.0, chroma, x),
			3 => (0.0, x, chroma),
			4 => (x, 0.0, chroma),
			_ => (chroma, 0.0, x),
		};
		let m = l - chroma / 2.0;
		let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

		Self::rgb(channel(r), channel(g), channel(b))
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colors used by one color mode.
#[derive(Clone, Debug, PartialEq)]
pub struct ModePalette {
	/// Vertical background gradient, top stop then bottom stop.
	pub background: (Color, Color),
	/// Lowest particle hue in degrees.
	pub hue_min: f64,
	/// Width of the hue band particles are drawn from.
	pub hue_span: f64,
	pub saturation: f64,
	pub lightness: f64,
	/// Connection line color; its alpha is replaced per line.
	pub line: Color,
	/// Line opacity for two coincident particles.
	pub line_alpha: f64,
}

impl ModePalette {
	/// Hue band particles are colored from, as `(min, max)`.
	pub fn hue_range(&self) -> (f64, f64) {
		(self.hue_min, self.hue_min + self.hue_span)
	}

	/// Line color for two particles `distance` apart.
	pub fn line_color(&self, distance: f64, threshold: f64) -> Color {
		self.line
			.with_alpha(connection_alpha(distance, threshold, self.line_alpha))
	}

	/// Particle color for a position `t` (0.0..1.0) inside the hue band.
	pub fn particle_color(&self, t: f64) -> Color {
		Color::hsl(
			self.hue_min + t * self.hue_span,
			self.saturation,
			self.lightness,
		)
	}
}

/// Opacity of a connection line.
///
/// `max_alpha` at distance 0, falling linearly to 0 at `threshold`. Distances at
/// or past the threshold (and degenerate thresholds) yield 0.
pub fn connection_alpha(distance: f64, threshold: f64, max_alpha: f64) -> f64 {
	if threshold <= 0.0 || distance >= threshold {
		return 0.0;
	}
	max_alpha * (1.0 - distance.max(0.0) / threshold)
}

/// Complete visual and density configuration for a particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyle {
	pub name: &'static str,
	/// Surface area (px²) that earns one particle.
	pub area_per_particle: f64,
	/// Upper bound on the particle count.
	pub max_particles: usize,
	pub size_min: f64,
	pub size_span: f64,
	/// Per-axis velocity is drawn from `(-speed / 2, speed / 2)`.
	pub speed: f64,
	pub alpha_min: f64,
	pub alpha_span: f64,
	/// Particles closer than this are connected by a line.
	pub link_distance: f64,
	pub link_width: f64,
	pub light: ModePalette,
	pub dark: ModePalette,
}

impl FieldStyle {
	/// The lab's home page field: sparse, slow, mode-aware (default)
	pub fn observatory() -> Self {
		Self {
			name: "observatory",
			area_per_particle: 15_000.0,
			max_particles: 80,
			size_min: 0.5,
			size_span: 2.0,
			speed: 0.3,
			alpha_min: 0.1,
			alpha_span: 0.5,
			link_distance: 120.0,
			link_width: 0.5,
			light: ModePalette {
				background: (Color::rgb(255, 255, 255), Color::rgb(240, 245, 250)),
				hue_min: 220.0,
				hue_span: 40.0,
				saturation: 0.7,
				lightness: 0.4,
				line: Color::rgb(70, 90, 180),
				line_alpha: 0.1,
			},
			dark: night_palette(0.15),
		}
	}

	/// Denser, brighter field that always renders on the night palette
	pub fn quantum() -> Self {
		Self {
			name: "quantum",
			area_per_particle: 10_000.0,
			max_particles: 100,
			size_min: 1.0,
			size_span: 3.0,
			speed: 0.5,
			alpha_min: 0.2,
			alpha_span: 0.8,
			link_distance: 150.0,
			link_width: 0.5,
			light: night_palette(0.2),
			dark: night_palette(0.2),
		}
	}

	/// Look up a preset by name.
	pub fn preset(name: &str) -> Option<Self> {
		match name {
			"observatory" => Some(Self::observatory()),
			"quantum" => Some(Self::quantum()),
			_ => None,
		}
	}

	/// Palette for a color mode.
	pub fn palette(&self, mode: ColorMode) -> &ModePalette {
		match mode {
			ColorMode::Light => &self.light,
			ColorMode::Dark => &self.dark,
		}
	}
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self::observatory()
	}
}

fn night_palette(line_alpha: f64) -> ModePalette {
	ModePalette {
		background: (Color::rgb(15, 23, 42), Color::rgb(30, 41, 59)),
		hue_min: 220.0,
		hue_span: 40.0,
		saturation: 0.7,
		lightness: 0.6,
		line: Color::rgb(100, 120, 255),
		line_alpha,
	}
}
