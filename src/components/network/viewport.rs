//! Size-derived parameters, recomputed on every resize.
//!
//! Physics runs in logical (CSS pixel) coordinates. The backing buffer is
//! `logical * pixel_ratio` and the renderer scales the context by the same
//! ratio, so nothing downstream of this module sees physical pixels.

use super::config::NetworkConfig;

/// Everything that depends on the drawable surface's size.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportParameters {
	/// Logical width.
	pub width: f64,
	/// Logical height.
	pub height: f64,
	/// Device pixel ratio clamped to `[1, max_pixel_ratio]`.
	pub pixel_ratio: f64,
	/// Particles closer than this are linked.
	pub link_distance: f64,
	/// Particles closer than this to the pointer are linked to it.
	pub cursor_link_distance: f64,
	/// Field size for this surface.
	pub particle_count: usize,
}

impl ViewportParameters {
	/// Derive parameters for a logical surface size and reported pixel ratio.
	pub fn compute(
		config: &NetworkConfig,
		width: f64,
		height: f64,
		device_pixel_ratio: f64,
	) -> Self {
		let links = &config.links;
		let link_distance = (width.hypot(height) * links.distance_factor)
			.max(links.distance_min)
			.min(links.distance_max);
		let particle_count =
			(width * height * config.particles.density).floor().max(0.0) as usize;

		Self {
			width,
			height,
			pixel_ratio: clamp_pixel_ratio(device_pixel_ratio, config.viewport.max_pixel_ratio),
			link_distance,
			cursor_link_distance: link_distance * links.cursor_ratio,
			particle_count,
		}
	}

	/// Backing buffer size in physical pixels.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.width * self.pixel_ratio).floor().max(0.0) as u32,
			(self.height * self.pixel_ratio).floor().max(0.0) as u32,
		)
	}
}

/// Clamp a reported device pixel ratio. Missing or nonsensical values count as 1.
pub fn clamp_pixel_ratio(ratio: f64, max: f64) -> f64 {
	if !ratio.is_finite() || ratio <= 0.0 {
		return 1.0;
	}
	ratio.clamp(1.0, max.max(1.0))
}
