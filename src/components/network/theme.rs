//! Theme names, theme-change notification, and reading theme colors from the
//! document's computed style.
//!
//! A theme name encodes a mode and an accent: `light`, `dark`,
//! `light-<accent>` or `dark-<accent>`. The bare names carry the classic accent.

use std::fmt;

use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, Window};

use super::color::ThemeColors;
use super::config::ColorConfig;

/// Window event dispatched whenever the active theme changes.
pub const THEME_CHANGE_EVENT: &str = "themechange";

/// Root element attribute holding the theme name.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Light or dark base scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	/// Light background.
	Light,
	/// Dark background.
	Dark,
}

impl Mode {
	fn as_str(self) -> &'static str {
		match self {
			Mode::Light => "light",
			Mode::Dark => "dark",
		}
	}
}

/// Accent color family layered over the mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Accent {
	/// The mode's own palette.
	Classic,
	/// A named accent such as `purple`.
	Named(String),
}

/// Accents offered by the demo selector, `classic` first.
pub const ACCENTS: [&str; 6] = ["classic", "purple", "blue", "green", "orange", "pink"];

impl Accent {
	/// Read an accent name; `classic` is the unnamed default accent.
	pub fn parse(name: &str) -> Self {
		if name == "classic" {
			Accent::Classic
		} else {
			Accent::Named(name.to_string())
		}
	}

	/// Name as shown in the accent selector.
	pub fn as_str(&self) -> &str {
		match self {
			Accent::Classic => "classic",
			Accent::Named(name) => name,
		}
	}
}

/// A parsed theme name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeName {
	/// Light or dark.
	pub mode: Mode,
	/// Accent layered over the mode.
	pub accent: Accent,
}

impl ThemeName {
	/// Parse a theme name. Never fails; text without a mode prefix is read as
	/// a light theme with that text as its accent.
	pub fn parse(name: &str) -> Self {
		let mode = if name.starts_with("dark") {
			Mode::Dark
		} else {
			Mode::Light
		};
		let accent = match name {
			"light" | "dark" => Accent::Classic,
			_ => {
				let rest = name
					.strip_prefix("dark-")
					.or_else(|| name.strip_prefix("light-"))
					.unwrap_or(name);
				Accent::parse(rest)
			}
		};
		Self { mode, accent }
	}

	/// Theme used when nothing has been chosen yet.
	pub fn initial(prefers_dark: bool) -> Self {
		if prefers_dark {
			Self {
				mode: Mode::Dark,
				accent: Accent::Named("purple".into()),
			}
		} else {
			Self {
				mode: Mode::Light,
				accent: Accent::Classic,
			}
		}
	}

	/// Whether the mode is dark.
	pub fn is_dark(&self) -> bool {
		self.mode == Mode::Dark
	}

	/// Same accent, opposite mode.
	pub fn toggled(&self) -> Self {
		let mode = match self.mode {
			Mode::Light => Mode::Dark,
			Mode::Dark => Mode::Light,
		};
		Self {
			mode,
			accent: self.accent.clone(),
		}
	}

	/// Same mode, different accent.
	pub fn with_accent(&self, accent: Accent) -> Self {
		Self {
			mode: self.mode,
			accent,
		}
	}

	/// Same mode, accent picked by name from a selector.
	pub fn select_accent(&self, name: &str) -> Self {
		self.with_accent(Accent::parse(name))
	}
}

impl fmt::Display for ThemeName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.accent {
			Accent::Classic => f.write_str(self.mode.as_str()),
			Accent::Named(accent) => write!(f, "{}-{}", self.mode.as_str(), accent),
		}
	}
}

/// Read the network colors from the root element's computed style.
pub fn read_theme_colors(window: &Window, config: &ColorConfig) -> ThemeColors {
	let style = window
		.document()
		.and_then(|d| d.document_element())
		.and_then(|root| window.get_computed_style(&root).ok().flatten());

	match style {
		Some(style) => {
			ThemeColors::resolve(config, |property| style.get_property_value(property).ok())
		}
		None => {
			log::warn!("net-canvas: no computed style available, using fallback colors");
			ThemeColors::fallback(config)
		}
	}
}

/// Whether the system color scheme prefers dark.
pub fn prefers_dark(window: &Window) -> bool {
	window
		.match_media("(prefers-color-scheme: dark)")
		.ok()
		.flatten()
		.map(|query| query.matches())
		.unwrap_or(false)
}

/// The theme currently set on the root element, if any.
pub fn current_theme(window: &Window) -> Option<ThemeName> {
	let root = window.document()?.document_element()?;
	root.get_attribute(THEME_ATTRIBUTE).map(|name| ThemeName::parse(&name))
}

/// Set the theme on the root element and announce the change.
pub fn apply_theme(window: &Window, theme: &ThemeName) {
	let name = theme.to_string();
	let Some(root) = window.document().and_then(|d| d.document_element()) else {
		log::warn!("net-canvas: no document element to apply theme {}", name);
		return;
	};
	let _ = root.set_attribute(THEME_ATTRIBUTE, &name);

	let init = CustomEventInit::new();
	init.set_detail(&JsValue::from_str(&name));
	match CustomEvent::new_with_event_init_dict(THEME_CHANGE_EVENT, &init) {
		Ok(event) => {
			let _ = window.dispatch_event(&event);
			log::info!("net-canvas: theme set to {}", name);
		}
		Err(e) => log::warn!(
			"net-canvas: failed to create {} event: {:?}",
			THEME_CHANGE_EVENT,
			e
		),
	}
}
