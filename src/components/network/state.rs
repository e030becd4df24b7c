//! Simulation context: owns the field, pointer, viewport and colors, and turns
//! each frame into a list of draw commands.
//!
//! The context is driven from outside. The canvas component calls [`NetworkState::step`]
//! once per animation frame and hands the resulting [`Frame`] to the renderer;
//! stopping is simply not calling it again.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::color::{ThemeColors, with_alpha};
use super::config::NetworkConfig;
use super::impulse::Ripple;
use super::particles::ParticleField;
use super::pointer::PointerState;
use super::viewport::ViewportParameters;

/// One drawing operation on the 2D surface, in logical coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	/// Clear the whole surface.
	Clear {
		/// Logical width.
		width: f64,
		/// Logical height.
		height: f64,
	},
	/// Filled circle.
	Disk {
		/// Center x.
		x: f64,
		/// Center y.
		y: f64,
		/// Disk radius.
		radius: f64,
		/// CSS fill color.
		color: String,
	},
	/// Stroked segment.
	Line {
		/// Start point.
		from: (f64, f64),
		/// End point.
		to: (f64, f64),
		/// CSS stroke color, alpha already applied.
		color: String,
		/// Stroke width.
		width: f64,
	},
}

/// Which pass produced a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
	/// Between two particles.
	Particle,
	/// From the pointer to a particle.
	Cursor,
}

/// Everything to draw for one tick, in paint order.
#[derive(Clone, Debug, Default)]
pub struct Frame {
	/// Commands in paint order.
	pub commands: Vec<DrawCommand>,
	/// Number of particle-to-particle links in `commands`.
	pub particle_links: usize,
	/// Number of pointer-to-particle links in `commands`.
	pub cursor_links: usize,
}

impl Frame {
	/// Lines of one kind, in paint order. Particle links precede cursor links.
	pub fn lines(&self, kind: LinkKind) -> impl Iterator<Item = &DrawCommand> {
		let lines = self
			.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::Line { .. }));
		let (skip, take) = match kind {
			LinkKind::Particle => (0, self.particle_links),
			LinkKind::Cursor => (self.particle_links, self.cursor_links),
		};
		lines.skip(skip).take(take)
	}
}

/// The network simulation.
pub struct NetworkState {
	/// Tunables, sanitized on creation.
	pub config: NetworkConfig,
	/// Parameters for the current surface size.
	pub viewport: ViewportParameters,
	/// The particles.
	pub field: ParticleField,
	/// Pointer tracking.
	pub pointer: PointerState,
	/// Current draw colors.
	pub colors: ThemeColors,
	/// Client-space offset of the drawable surface's top-left corner.
	pub origin: (f64, f64),
	rng: SmallRng,
}

impl NetworkState {
	/// Create a context for a surface of the given logical size and populate it.
	pub fn new(
		config: NetworkConfig,
		width: f64,
		height: f64,
		device_pixel_ratio: f64,
		colors: ThemeColors,
		seed: u64,
	) -> Self {
		let config = config.sanitized();
		let viewport = ViewportParameters::compute(&config, width, height, device_pixel_ratio);
		let mut state = Self {
			config,
			viewport,
			field: ParticleField::default(),
			pointer: PointerState::default(),
			colors,
			origin: (0.0, 0.0),
			rng: SmallRng::seed_from_u64(seed),
		};
		state.repopulate();
		state
	}

	/// Recompute size-derived parameters and discard all particles in favour
	/// of a fresh field.
	pub fn resize(
		&mut self,
		width: f64,
		height: f64,
		device_pixel_ratio: f64,
	) -> &ViewportParameters {
		self.viewport =
			ViewportParameters::compute(&self.config, width, height, device_pixel_ratio);
		self.repopulate();
		log::debug!(
			"net-canvas: resized to {}x{} @{}x, {} particles, link {:.1}px, cursor link {:.1}px",
			width,
			height,
			self.viewport.pixel_ratio,
			self.viewport.particle_count,
			self.viewport.link_distance,
			self.viewport.cursor_link_distance
		);
		&self.viewport
	}

	fn repopulate(&mut self) {
		let vp = &self.viewport;
		self.field.initialize(
			&mut self.rng,
			&self.config.particles,
			vp.particle_count,
			vp.width,
			vp.height,
		);
	}

	/// Swap in colors re-read after a theme change.
	pub fn set_theme_colors(&mut self, colors: ThemeColors) {
		self.colors = colors;
	}

	/// Pointer moved to client coordinates.
	pub fn pointer_move(&mut self, client_x: f64, client_y: f64) {
		self.pointer.on_move(client_x, client_y, self.origin);
	}

	/// Pointer left the page.
	pub fn pointer_leave(&mut self) {
		self.pointer.on_leave();
	}

	/// Ripple at surface coordinates with the configured radius and strength.
	pub fn trigger_ripple(&mut self, x: f64, y: f64) -> usize {
		let ripple = Ripple::at(x, y, &self.config.ripple);
		self.trigger_ripple_with(ripple)
	}

	/// Apply an explicit ripple. Returns how many particles it moved.
	pub fn trigger_ripple_with(&mut self, ripple: Ripple) -> usize {
		ripple.apply(&mut self.field)
	}

	/// Advance one tick and describe what to draw.
	///
	/// All motion is integrated before any distance is measured, so every
	/// command in the frame sees the same post-integration positions.
	pub fn step(&mut self) -> Frame {
		self.integrate();
		self.draw()
	}

	fn integrate(&mut self) {
		let (w, h) = (self.viewport.width, self.viewport.height);
		let margin = self.config.particles.wrap_margin;
		let pointer = self.pointer.active_position();
		let attract = &self.config.pointer;

		for p in self.field.iter_mut() {
			if let Some((mx, my)) = pointer {
				let (dx, dy) = (mx - p.x, my - p.y);
				let dist = dx.hypot(dy);
				if dist < attract.attract_radius {
					let pull = (1.0 - dist / attract.attract_radius) * attract.attract_strength;
					let norm = dist.max(1.0);
					p.vx += (dx / norm) * pull * attract.attract_gain;
					p.vy += (dy / norm) * pull * attract.attract_gain;
				}
			}

			p.x += p.vx;
			p.y += p.vy;

			// Toroidal wrap just outside the visible bounds
			if p.x < -margin {
				p.x = w + margin;
			}
			if p.x > w + margin {
				p.x = -margin;
			}
			if p.y < -margin {
				p.y = h + margin;
			}
			if p.y > h + margin {
				p.y = -margin;
			}
		}
	}

	fn draw(&self) -> Frame {
		let particles = self.field.as_slice();
		let links = &self.config.links;
		let link_distance = self.viewport.link_distance;
		let mut frame = Frame {
			commands: Vec::with_capacity(1 + particles.len() * 2),
			..Frame::default()
		};

		frame.commands.push(DrawCommand::Clear {
			width: self.viewport.width,
			height: self.viewport.height,
		});

		for p in particles {
			frame.commands.push(DrawCommand::Disk {
				x: p.x,
				y: p.y,
				radius: p.r,
				color: self.colors.node.clone(),
			});
		}

		// Exhaustive pair scan, no spatial index
		for (i, a) in particles.iter().enumerate() {
			for b in &particles[i + 1..] {
				let dist = (a.x - b.x).hypot(a.y - b.y);
				if dist < link_distance {
					let alpha = links.alpha * (1.0 - dist / link_distance);
					frame.commands.push(DrawCommand::Line {
						from: (a.x, a.y),
						to: (b.x, b.y),
						color: with_alpha(&self.colors.link, alpha),
						width: links.width,
					});
					frame.particle_links += 1;
				}
			}
		}

		if let Some((mx, my)) = self.pointer.active_position() {
			let reach = self.viewport.cursor_link_distance;
			for p in particles {
				let dist = (mx - p.x).hypot(my - p.y);
				if dist < reach {
					let alpha = links.cursor_alpha * (1.0 - dist / reach);
					frame.commands.push(DrawCommand::Line {
						from: (mx, my),
						to: (p.x, p.y),
						color: with_alpha(&self.colors.cursor, alpha),
						width: links.cursor_width,
					});
					frame.cursor_links += 1;
				}
			}
		}

		frame
	}
}
