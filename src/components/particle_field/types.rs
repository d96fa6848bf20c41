//! Page-supplied configuration for the particle field.

use log::warn;
use serde::Deserialize;

use super::state::ColorMode;
use super::theme::FieldStyle;

/// Optional overrides read from the host page. Every field may be omitted.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Style preset name ("observatory" or "quantum").
	pub preset: Option<String>,
	/// Initial color mode. Falls back to the system preference when absent.
	pub mode: Option<ColorMode>,
	pub max_particles: Option<usize>,
	/// Surface area (px²) per particle.
	pub area_per_particle: Option<f64>,
	/// Connection threshold in pixels.
	pub link_distance: Option<f64>,
	/// Fixed RNG seed for a reproducible layout.
	pub seed: Option<u64>,
}

impl FieldConfig {
	/// Resolve the preset and apply overrides. Non-positive numbers are ignored.
	pub fn to_style(&self) -> FieldStyle {
		let mut style = match self.preset.as_deref() {
			None => FieldStyle::default(),
			Some(name) => FieldStyle::preset(name).unwrap_or_else(|| {
				warn!("particle-field: unknown preset {name:?}, using default");
				FieldStyle::default()
			}),
		};

		if let Some(max) = self.max_particles {
			style.max_particles = max;
		}
		if let Some(area) = self.area_per_particle.filter(|a| *a > 0.0) {
			style.area_per_particle = area;
		}
		if let Some(distance) = self.link_distance.filter(|d| *d > 0.0) {
			style.link_distance = distance;
		}
		style
	}
}
