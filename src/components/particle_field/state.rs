//! Surface dimensions and color mode tracked by the renderer.

use serde::Deserialize;

/// Light or dark page theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
	#[default]
	Light,
	Dark,
}

impl ColorMode {
	pub fn toggled(self) -> Self {
		match self {
			ColorMode::Light => ColorMode::Dark,
			ColorMode::Dark => ColorMode::Light,
		}
	}

	pub fn is_dark(self) -> bool {
		self == ColorMode::Dark
	}

	pub fn as_str(self) -> &'static str {
		match self {
			ColorMode::Light => "light",
			ColorMode::Dark => "dark",
		}
	}
}

/// Current drawing area and mode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceState {
	pub width: u32,
	pub height: u32,
	pub mode: ColorMode,
}

impl SurfaceState {
	pub fn new(width: u32, height: u32, mode: ColorMode) -> Self {
		Self {
			width,
			height,
			mode,
		}
	}

	/// Build from viewport measurements. Negative or non-finite sizes collapse to 0.
	pub fn from_viewport(width: f64, height: f64, mode: ColorMode) -> Self {
		Self::new(to_pixels(width), to_pixels(height), mode)
	}

	/// Whether there is any area to update and paint.
	pub fn is_drawable(&self) -> bool {
		self.width > 0 && self.height > 0
	}
}

fn to_pixels(value: f64) -> u32 {
	if value.is_finite() && value > 0.0 {
		value.floor().min(u32::MAX as f64) as u32
	} else {
		0
	}
}
