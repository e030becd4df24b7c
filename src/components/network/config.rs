//! Tunable parameters for the particle network.
//!
//! Every value has a default, so a config document only needs to name the
//! fields it overrides:
//!
//! ```json
//! { "particles": { "density": 0.0002 }, "ripple": { "strength": 2.0 } }
//! ```

use log::warn;
use serde::Deserialize;

/// Particle population and motion.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
	/// Particles per square logical pixel.
	pub density: f64,
	/// Initial velocity components are drawn from `[-speed, speed]`.
	pub speed: f64,
	/// Smallest disk radius.
	pub radius_min: f64,
	/// Largest disk radius.
	pub radius_max: f64,
	/// Distance outside the visible bounds before a particle wraps.
	pub wrap_margin: f64,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			density: 0.00012,
			speed: 0.2,
			radius_min: 1.15,
			radius_max: 2.25,
			wrap_margin: 10.0,
		}
	}
}

/// Proximity link thresholds and appearance.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
	/// Link distance as a fraction of the viewport diagonal, before clamping.
	pub distance_factor: f64,
	/// Lower bound on the link distance.
	pub distance_min: f64,
	/// Upper bound on the link distance.
	pub distance_max: f64,
	/// Cursor link distance relative to the particle link distance.
	pub cursor_ratio: f64,
	/// Alpha of a particle link at zero length.
	pub alpha: f64,
	/// Alpha of a cursor link at zero length.
	pub cursor_alpha: f64,
	/// Particle link stroke width.
	pub width: f64,
	/// Cursor link stroke width.
	pub cursor_width: f64,
}

impl Default for LinkConfig {
	fn default() -> Self {
		Self {
			distance_factor: 0.06,
			distance_min: 80.0,
			distance_max: 140.0,
			cursor_ratio: 0.9,
			alpha: 0.28,
			cursor_alpha: 0.35,
			width: 1.0,
			cursor_width: 1.2,
		}
	}
}

/// Continuous attraction toward an active pointer.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
	/// Particles beyond this distance feel no pull.
	pub attract_radius: f64,
	/// Pull at zero distance, before the gain.
	pub attract_strength: f64,
	/// Fraction of the pull applied to velocity each frame.
	pub attract_gain: f64,
}

impl Default for PointerConfig {
	fn default() -> Self {
		Self {
			attract_radius: 120.0,
			attract_strength: 0.6,
			attract_gain: 0.03,
		}
	}
}

/// Default shape of a triggered ripple.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
	/// Reach of a ripple.
	pub radius: f64,
	/// Velocity change at the ripple origin.
	pub strength: f64,
}

impl Default for RippleConfig {
	fn default() -> Self {
		Self {
			radius: 100.0,
			strength: 1.5,
		}
	}
}

/// Backing buffer resolution.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
	/// Upper bound for the device pixel ratio. The lower bound is always 1.
	pub max_pixel_ratio: f64,
}

impl Default for ViewportConfig {
	fn default() -> Self {
		Self {
			max_pixel_ratio: 2.0,
		}
	}
}

/// Names of the style custom properties holding theme colors, and the values
/// used when a property is absent or empty.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
	/// Custom property for the node fill.
	pub node_property: String,
	/// Custom property for the link base color.
	pub link_property: String,
	/// Custom property for the cursor link base color.
	pub cursor_property: String,
	/// Node fill when the property is unset.
	pub node_fallback: String,
	/// Link color when the property is unset.
	pub link_fallback: String,
	/// Cursor link color when the property is unset.
	pub cursor_fallback: String,
}

impl Default for ColorConfig {
	fn default() -> Self {
		Self {
			node_property: "--net-node".into(),
			link_property: "--net-link".into(),
			cursor_property: "--net-cursor".into(),
			node_fallback: "rgba(255,255,255,0.55)".into(),
			link_fallback: "rgba(180,200,255,0.28)".into(),
			cursor_fallback: "rgba(130,200,255,0.40)".into(),
		}
	}
}

/// Complete configuration for the network background.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
	/// Population and motion.
	pub particles: ParticleConfig,
	/// Link thresholds and appearance.
	pub links: LinkConfig,
	/// Pointer attraction.
	pub pointer: PointerConfig,
	/// Ripple defaults.
	pub ripple: RippleConfig,
	/// Backing buffer resolution.
	pub viewport: ViewportConfig,
	/// Theme color sources.
	pub colors: ColorConfig,
}

impl NetworkConfig {
	/// Parse a (possibly partial) JSON config document.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Repair values the simulation cannot run with.
	///
	/// Inverted bounds are swapped. A section holding a negative, non-finite or
	/// out-of-range number is replaced by its defaults with a warning.
	pub fn sanitized(mut self) -> Self {
		let p = &mut self.particles;
		order(&mut p.radius_min, &mut p.radius_max);
		if !all_usable(&[p.density, p.speed, p.radius_min, p.radius_max, p.wrap_margin])
			|| p.density > MAX_DENSITY
			|| p.speed > MAX_SPEED
		{
			warn!("net-canvas: invalid particle config {:?}, using defaults", p);
			*p = ParticleConfig::default();
		}

		let l = &mut self.links;
		order(&mut l.distance_min, &mut l.distance_max);
		if !all_usable(&[
			l.distance_factor,
			l.distance_min,
			l.distance_max,
			l.cursor_ratio,
			l.alpha,
			l.cursor_alpha,
			l.width,
			l.cursor_width,
		]) {
			warn!("net-canvas: invalid link config {:?}, using defaults", l);
			*l = LinkConfig::default();
		}

		let a = &self.pointer;
		if !all_usable(&[a.attract_radius, a.attract_strength, a.attract_gain]) {
			warn!("net-canvas: invalid pointer config {:?}, using defaults", a);
			self.pointer = PointerConfig::default();
		}

		let r = &self.ripple;
		if !all_usable(&[r.radius, r.strength]) {
			warn!("net-canvas: invalid ripple config {:?}, using defaults", r);
			self.ripple = RippleConfig::default();
		}

		let v = &self.viewport;
		if !v.max_pixel_ratio.is_finite() || v.max_pixel_ratio < 1.0 {
			warn!("net-canvas: invalid viewport config {:?}, using defaults", v);
			self.viewport = ViewportConfig::default();
		}

		self
	}
}

/// Densities above this would allocate one particle per few pixels.
const MAX_DENSITY: f64 = 0.01;

/// Speeds above this leave the viewport in a single frame.
const MAX_SPEED: f64 = 1000.0;

fn all_usable(values: &[f64]) -> bool {
	values.iter().all(|v| v.is_finite() && *v >= 0.0)
}

fn order(min: &mut f64, max: &mut f64) {
	if *min > *max {
		std::mem::swap(min, max);
	}
}
