//! Animated particle-field background.
//!
//! Draws a drifting set of points on a canvas behind the page, with:
//! - Particle count derived from the surface area, capped per style
//! - Toroidal wraparound so density stays constant
//! - Connection lines that fade out with distance
//! - Light and dark palettes switchable at runtime
//!
//! The render loop is decoupled from the browser through the [`Host`] and
//! [`Surface`] traits, so it can be stepped frame by frame.
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{ColorMode, FieldStyle, ParticleFieldCanvas};
//!
//! let (mode, set_mode) = signal(ColorMode::Dark);
//! view! { <ParticleFieldCanvas mode=mode style=FieldStyle::quantum() /> }
//! ```

mod component;
mod host;
mod particles;
mod render;
mod renderer;
mod state;
mod surface;
#[cfg(test)]
mod testing;
pub mod theme;
mod types;

pub use component::ParticleFieldCanvas;
pub use host::{FrameHandle, Host, WindowHost};
pub use particles::{Particle, ParticleSystem, particle_count};
pub use renderer::ParticleRenderer;
pub use state::{ColorMode, SurfaceState};
pub use surface::{CanvasSurface, Surface};
pub use theme::{Color, FieldStyle, ModePalette};
pub use types::FieldConfig;
