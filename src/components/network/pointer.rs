//! Single-pointer tracking in surface-local coordinates.

/// Last known pointer position and whether it is currently over the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerState {
	/// `None` until the first move. Kept after leaving, but ignored.
	pub position: Option<(f64, f64)>,
	/// Whether the pointer is over the page.
	pub active: bool,
}

impl PointerState {
	/// Record a move given client coordinates and the surface's client origin.
	/// No clamping: the pointer may lie outside the surface.
	pub fn on_move(&mut self, client_x: f64, client_y: f64, origin: (f64, f64)) {
		self.position = Some((client_x - origin.0, client_y - origin.1));
		self.active = true;
	}

	/// Mark the pointer inactive, keeping its last position.
	pub fn on_leave(&mut self) {
		self.active = false;
	}

	/// The position, only while the pointer is active.
	pub fn active_position(&self) -> Option<(f64, f64)> {
		if self.active { self.position } else { None }
	}
}
