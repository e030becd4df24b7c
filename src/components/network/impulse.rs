//! One-shot radial impulses ("ripples") pushed into the field from outside
//! the frame loop.

use super::config::RippleConfig;
use super::particles::ParticleField;

/// A localized outward velocity kick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
	/// Origin x in surface coordinates.
	pub x: f64,
	/// Origin y in surface coordinates.
	pub y: f64,
	/// Particles at or beyond this distance are untouched.
	pub radius: f64,
	/// Velocity change applied at the origin, falling linearly to zero at `radius`.
	pub strength: f64,
}

impl Ripple {
	/// A ripple at `(x, y)` with the configured radius and strength.
	pub fn at(x: f64, y: f64, config: &RippleConfig) -> Self {
		Self {
			x,
			y,
			radius: config.radius,
			strength: config.strength,
		}
	}

	/// Push every particle within `radius` away from the origin.
	///
	/// Each particle's velocity is fully updated before the next one is
	/// visited. Does nothing on a field that was never initialized.
	pub fn apply(&self, field: &mut ParticleField) -> usize {
		if !field.is_initialized() || self.radius <= 0.0 {
			return 0;
		}

		let mut touched = 0;
		for p in field.iter_mut() {
			let (dx, dy) = (self.x - p.x, self.y - p.y);
			let dist = dx.hypot(dy);
			if dist < self.radius {
				let pull = (1.0 - dist / self.radius) * self.strength;
				let norm = dist.max(1.0);
				p.vx -= (dx / norm) * pull;
				p.vy -= (dy / norm) * pull;
				touched += 1;
			}
		}

		log::trace!(
			"ripple at ({:.1}, {:.1}) moved {} particles",
			self.x,
			self.y,
			touched
		);
		touched
	}
}
