//! Leptos component hosting the particle field canvas.
//!
//! The component renders a fixed, full-viewport canvas behind the page content.
//! Once the canvas is mounted it starts a [`ParticleRenderer`] driven by
//! `requestAnimationFrame`, forwards every change of the `mode` signal to it,
//! and stops it when the component is cleaned up.

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::host::WindowHost;
use super::renderer::ParticleRenderer;
use super::state::ColorMode;
use super::surface::CanvasSurface;
use super::theme::FieldStyle;

type CanvasRenderer = ParticleRenderer<WindowHost, CanvasSurface>;

/// Renders the animated particle background.
///
/// `mode` drives the background gradient and line colors. Pass `seed` for a
/// reproducible layout; otherwise particles are placed from platform entropy.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(into)] mode: Signal<ColorMode>,
	#[prop(optional)] style: Option<FieldStyle>,
	#[prop(optional_no_strip)] seed: Option<u64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let style = style.unwrap_or_default();
	let renderer: CanvasRenderer = match seed {
		Some(seed) => ParticleRenderer::with_seed(WindowHost::new(), style, seed),
		None => ParticleRenderer::new(WindowHost::new(), style),
	};

	let renderer_start = renderer.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		renderer_start.start(CanvasSurface::from_canvas(canvas), mode.get_untracked());
	});

	let renderer_mode = renderer.clone();
	Effect::new(move |_| {
		renderer_mode.on_mode_change(mode.get());
	});

	let stored = StoredValue::new_local(renderer);
	on_cleanup(move || {
		stored.try_with_value(|r| r.stop());
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			aria-hidden="true"
			style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: -10; display: block;"
		/>
	}
}
