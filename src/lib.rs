//! net-canvas: pointer-reactive particle network background.
//!
//! This crate provides a WASM canvas component that renders a drifting network
//! of linked particles, tinted by the page theme and perturbed by ripples
//! triggered from the rest of the UI.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, MouseEvent, Window};

pub mod components;

pub use components::network::{
	NetworkCanvas, NetworkConfig, NetworkState, RippleHandle, ThemeColors, ThemeName,
};

use components::network::theme;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("net-canvas: logging initialized");
}

/// Load configuration overrides from a script element with id="net-config".
/// Falls back to defaults when the element is absent or malformed.
fn load_config() -> NetworkConfig {
	let Some(json_text) = config_text() else {
		return NetworkConfig::default();
	};

	match NetworkConfig::from_json(&json_text) {
		Ok(config) => {
			info!("net-canvas: loaded config overrides");
			config.sanitized()
		}
		Err(e) => {
			warn!("net-canvas: failed to parse config: {}", e);
			NetworkConfig::default()
		}
	}
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("net-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Applies the initial theme and renders the network behind a small control
/// overlay: mode toggle, accent selector and a ripple button.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let initial = web_sys::window().map(|window| {
		let initial = theme::current_theme(&window)
			.unwrap_or_else(|| ThemeName::initial(theme::prefers_dark(&window)));
		theme::apply_theme(&window, &initial);
		initial
	});
	let (accent, set_accent) = signal(
		initial
			.as_ref()
			.map(|t| t.accent.as_str().to_string())
			.unwrap_or_else(|| "classic".to_string()),
	);

	let ripple = RippleHandle::new();

	let on_toggle = move |_: MouseEvent| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let current = theme::current_theme(&window).unwrap_or_else(|| ThemeName::initial(false));
		theme::apply_theme(&window, &current.toggled());
	};

	let on_accent = move |ev: web_sys::Event| {
		let value = event_target_value(&ev);
		let Some(window) = web_sys::window() else {
			return;
		};
		let current = theme::current_theme(&window).unwrap_or_else(|| ThemeName::initial(false));
		theme::apply_theme(&window, &current.select_accent(&value));
		set_accent.set(value);
	};

	let ripple_click = ripple.clone();
	let on_ripple = move |ev: MouseEvent| {
		ripple_click.trigger_at_client(ev.client_x() as f64, ev.client_y() as f64);
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Particle Network" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<NetworkCanvas config=load_config() ripple=ripple />
		<div class="net-overlay">
			<button class="theme-toggle" on:click=on_toggle>"Toggle theme"</button>
			<select class="accent-select" prop:value=move || accent.get() on:change=on_accent>
				{theme::ACCENTS
					.into_iter()
					.map(|name| view! { <option value=name>{name}</option> })
					.collect_view()}
			</select>
			<button class="ripple" on:click=on_ripple>"Ripple"</button>
		</div>
	}
}
