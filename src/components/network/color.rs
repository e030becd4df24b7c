//! Theme color values and alpha tinting of CSS `rgb()`/`rgba()` strings.

use super::config::ColorConfig;

/// The three colors the network draws with, as CSS color strings.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeColors {
	/// Fill for particle disks, used as-is.
	pub node: String,
	/// Base color for particle-to-particle links.
	pub link: String,
	/// Base color for pointer-to-particle links.
	pub cursor: String,
}

impl ThemeColors {
	/// Build colors from a property lookup. A property that is missing or
	/// blank after trimming falls back to the configured default.
	pub fn resolve<F>(config: &ColorConfig, mut lookup: F) -> Self
	where
		F: FnMut(&str) -> Option<String>,
	{
		let mut pick = |property: &str, fallback: &str| {
			lookup(property)
				.map(|v| v.trim().to_string())
				.filter(|v| !v.is_empty())
				.unwrap_or_else(|| fallback.to_string())
		};

		Self {
			node: pick(&config.node_property, &config.node_fallback),
			link: pick(&config.link_property, &config.link_fallback),
			cursor: pick(&config.cursor_property, &config.cursor_fallback),
		}
	}

	/// The configured fallback colors.
	pub fn fallback(config: &ColorConfig) -> Self {
		Self::resolve(config, |_| None)
	}
}

impl Default for ThemeColors {
	fn default() -> Self {
		Self::fallback(&ColorConfig::default())
	}
}

/// Extract the first three components of the first `rgb(...)` or `rgba(...)`
/// group in `color`. Components are returned as trimmed text.
fn rgb_components(color: &str) -> Option<[&str; 3]> {
	let lower = color.to_ascii_lowercase();
	let mut search = 0;

	while let Some(found) = lower[search..].find("rgb") {
		let start = search + found;
		let mut rest = &color[start + 3..];
		if rest.starts_with(['a', 'A']) {
			rest = &rest[1..];
		}
		let rest = rest.trim_start();

		if let Some(inner) = rest.strip_prefix('(') {
			if let Some(end) = inner.find(')') {
				let mut parts = inner[..end].split(',').map(str::trim);
				if let (Some(r), Some(g), Some(b)) = (parts.next(), parts.next(), parts.next()) {
					return Some([r, g, b]);
				}
				return None;
			}
		}
		search = start + 3;
	}

	None
}

/// Replace the alpha channel of an `rgb()`/`rgba()` color.
///
/// Any existing alpha is discarded and `alpha` is clamped to `[0, 1]`. Input
/// that does not contain an rgb group is returned unchanged.
pub fn with_alpha(color: &str, alpha: f64) -> String {
	match rgb_components(color) {
		Some([r, g, b]) => format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0)),
		None => color.to_string(),
	}
}
