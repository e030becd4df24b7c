//! The particle population and its kinematic state.

use rand::Rng;

use super::config::ParticleConfig;

/// A single drifting node of the network.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in logical pixels.
	pub x: f64,
	/// Vertical position in logical pixels.
	pub y: f64,
	/// Horizontal velocity, pixels per frame.
	pub vx: f64,
	/// Vertical velocity, pixels per frame.
	pub vy: f64,
	/// Disk radius, fixed at creation.
	pub r: f64,
}

impl Particle {
	/// A particle at rest.
	pub fn at(x: f64, y: f64, r: f64) -> Self {
		Self {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			r,
		}
	}
}

/// Owns every particle. The collection is only ever replaced wholesale.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	particles: Vec<Particle>,
	initialized: bool,
}

impl ParticleField {
	/// Wrap an explicit set of particles.
	pub fn from_particles(particles: Vec<Particle>) -> Self {
		Self {
			particles,
			initialized: true,
		}
	}

	/// Replace the collection with `count` freshly randomized particles
	/// spread uniformly over `[0, width) x [0, height)`.
	pub fn initialize<R: Rng>(
		&mut self,
		rng: &mut R,
		style: &ParticleConfig,
		count: usize,
		width: f64,
		height: f64,
	) {
		let mut particles = Vec::with_capacity(count);

		for _ in 0..count {
			particles.push(Particle {
				x: unit(rng) * width,
				y: unit(rng) * height,
				vx: symmetric(rng, style.speed),
				vy: symmetric(rng, style.speed),
				r: style.radius_min + unit(rng) * (style.radius_max - style.radius_min),
			});
		}

		self.particles = particles;
		self.initialized = true;
	}

	/// Whether the field has been populated at least once.
	pub fn is_initialized(&self) -> bool {
		self.initialized
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether there are no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Particles in creation order.
	pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
		self.particles.iter()
	}

	/// Mutable particles in creation order.
	pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
		self.particles.iter_mut()
	}

	/// All particles as a slice.
	pub fn as_slice(&self) -> &[Particle] {
		&self.particles
	}
}

/// Uniform sample in `[0, 1)`.
fn unit<R: Rng>(rng: &mut R) -> f64 {
	rng.gen_range(0.0..1.0)
}

/// Uniform sample in `[-half, half]`.
fn symmetric<R: Rng>(rng: &mut R, half: f64) -> f64 {
	if !(half > 0.0 && (half * 2.0).is_finite()) {
		return 0.0;
	}
	rng.gen_range(-half..=half)
}
