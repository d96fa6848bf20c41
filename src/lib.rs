//! particle-field: Animated particle backdrop for the SPARC lab website.
//!
//! This crate provides a WASM canvas component that renders drifting particles
//! joined by distance-faded lines, with light and dark palettes and a small
//! host page that toggles between them.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Only needed to enable the `js` entropy backend on wasm32.
use getrandom as _;

pub mod components;

pub use components::particle_field::{
	ColorMode, FieldConfig, FieldStyle, ParticleFieldCanvas, ParticleRenderer,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Load field configuration from a script element with id="particle-config".
/// Expected format: JSON matching [`FieldConfig`], every key optional.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			debug!("particle-field: loaded config {:?}", config);
			Some(config)
		}
		Err(e) => {
			warn!("particle-field: failed to parse config: {}", e);
			None
		}
	}
}

/// The system color scheme, light when it cannot be determined.
fn preferred_mode() -> ColorMode {
	let prefers_dark = web_sys::window()
		.and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
		.is_some_and(|query| query.matches());
	if prefers_dark {
		ColorMode::Dark
	} else {
		ColorMode::Light
	}
}

/// Mirror the mode onto `<html class="dark">` so page styles can follow it.
fn apply_document_mode(mode: ColorMode) {
	let Some(root) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
	else {
		return;
	};
	let _ = root.class_list().toggle_with_force("dark", mode.is_dark());
}

/// Main application component.
/// Loads configuration from the DOM and renders the particle background with a
/// color mode toggle.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();
	let (mode, set_mode) = signal(config.mode.unwrap_or_else(preferred_mode));
	let style = config.to_style();

	Effect::new(move |_| apply_document_mode(mode.get()));

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="SPARC: Simulations in Plasma, Astrophysics, and Relativistic Cosmology" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas mode=mode style=style seed=config.seed />
		<button
			class="theme-toggle"
			aria-label="Toggle color mode"
			on:click=move |_| set_mode.update(|m| *m = m.toggled())
		>
			{move || if mode.get().is_dark() { "Light mode" } else { "Dark mode" }}
		</button>
	}
}
