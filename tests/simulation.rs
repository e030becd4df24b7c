#![allow(unused_crate_dependencies)]

use net_canvas::components::network::{
	DrawCommand, LinkKind, NetworkConfig, NetworkState, Particle, ParticleField, Ripple,
	ThemeColors, ViewportParameters, clamp_pixel_ratio,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// 800x600 context at 1x with default colors and a fixed seed
pub fn test_state() -> NetworkState {
	NetworkState::new(NetworkConfig::default(), 800.0, 600.0, 1.0, ThemeColors::default(), 7)
}

/// Replace the field with particles at rest at the given points
pub fn with_particles(state: &mut NetworkState, points: &[(f64, f64)]) {
	let particles = points.iter().map(|&(x, y)| Particle::at(x, y, 1.5)).collect();
	state.field = ParticleField::from_particles(particles);
}

fn line_alpha(command: &DrawCommand) -> f64 {
	let DrawCommand::Line { color, .. } = command else {
		panic!("expected a line, got {:?}", command);
	};
	let inner = color.trim_start_matches("rgba(").trim_end_matches(')');
	inner.rsplit(',').next().unwrap().trim().parse().unwrap()
}

// ==================================================================================
// Viewport
// ==================================================================================

#[test]
fn viewport_800_by_600() {
	let vp = ViewportParameters::compute(&NetworkConfig::default(), 800.0, 600.0, 1.0);
	assert_eq!(vp.particle_count, 57);
	assert_eq!(vp.link_distance, 80.0);
	assert!((vp.cursor_link_distance - 72.0).abs() < 1e-9);
}

#[test]
fn viewport_formulas_hold_across_sizes() {
	let config = NetworkConfig::default();
	let sizes = [
		(0.0, 0.0),
		(320.0, 480.0),
		(1280.0, 720.0),
		(1920.0, 1080.0),
		(3840.0, 2160.0),
	];
	for (w, h) in sizes {
		let vp = ViewportParameters::compute(&config, w, h, 1.0);
		assert_eq!(vp.particle_count, (w * h * 0.00012_f64).floor() as usize);
		assert!(vp.link_distance >= 80.0 && vp.link_distance <= 140.0);
		assert_eq!(vp.cursor_link_distance, vp.link_distance * 0.9);
	}
}

#[test]
fn link_distance_between_bounds_follows_diagonal() {
	let vp = ViewportParameters::compute(&NetworkConfig::default(), 1600.0, 1200.0, 1.0);
	assert!((vp.link_distance - 120.0).abs() < 1e-9);
	let vp = ViewportParameters::compute(&NetworkConfig::default(), 3840.0, 2160.0, 1.0);
	assert_eq!(vp.link_distance, 140.0);
}

#[test]
fn pixel_ratio_is_clamped() {
	assert_eq!(clamp_pixel_ratio(0.5, 2.0), 1.0);
	assert_eq!(clamp_pixel_ratio(1.5, 2.0), 1.5);
	assert_eq!(clamp_pixel_ratio(3.0, 2.0), 2.0);
	assert_eq!(clamp_pixel_ratio(f64::NAN, 2.0), 1.0);
	assert_eq!(clamp_pixel_ratio(0.0, 2.0), 1.0);

	let vp = ViewportParameters::compute(&NetworkConfig::default(), 800.0, 600.0, 3.0);
	assert_eq!(vp.backing_size(), (1600, 1200));
	// Physics stays in logical pixels
	assert_eq!(vp.width, 800.0);
}

#[test]
fn resize_replaces_the_field() {
	let mut state = test_state();
	assert_eq!(state.field.len(), 57);

	let vp = state.resize(1000.0, 1000.0, 1.0).clone();
	assert_eq!(vp.particle_count, 120);
	assert_eq!(state.field.len(), 120);
	for p in state.field.iter() {
		assert!(p.x >= 0.0 && p.x < 1000.0);
		assert!(p.y >= 0.0 && p.y < 1000.0);
	}
}

// ==================================================================================
// Field initialization
// ==================================================================================

#[test]
fn initialize_respects_ranges() {
	let config = NetworkConfig::default();
	let mut rng = SmallRng::seed_from_u64(42);
	let mut field = ParticleField::default();
	assert!(!field.is_initialized());

	field.initialize(&mut rng, &config.particles, 500, 640.0, 480.0);
	assert!(field.is_initialized());
	assert_eq!(field.len(), 500);
	for p in field.iter() {
		assert!(p.x >= 0.0 && p.x < 640.0);
		assert!(p.y >= 0.0 && p.y < 480.0);
		assert!(p.vx.abs() <= 0.2 && p.vy.abs() <= 0.2);
		assert!(p.r >= 1.15 && p.r <= 2.25);
	}
}

#[test]
fn same_seed_same_field() {
	let a = test_state();
	let b = test_state();
	assert_eq!(a.field.as_slice(), b.field.as_slice());
}

// ==================================================================================
// Integration and wrap
// ==================================================================================

#[test]
fn positions_stay_within_wrap_margin() {
	let mut state = test_state();
	for p in state.field.iter_mut() {
		p.vx *= 40.0;
		p.vy *= 40.0;
	}
	for _ in 0..500 {
		state.step();
		for p in state.field.iter() {
			assert!(p.x >= -10.0 && p.x <= 810.0, "x out of range: {}", p.x);
			assert!(p.y >= -10.0 && p.y <= 610.0, "y out of range: {}", p.y);
		}
	}
}

#[test]
fn wrap_moves_to_opposite_edge() {
	let mut state = test_state();
	state.field = ParticleField::from_particles(vec![
		Particle {
			x: -9.5,
			y: 300.0,
			vx: -1.0,
			vy: 0.0,
			r: 1.5,
		},
		Particle {
			x: 400.0,
			y: 609.5,
			vx: 0.0,
			vy: 1.0,
			r: 1.5,
		},
	]);
	state.step();
	let p = state.field.as_slice();
	assert_eq!(p[0].x, 810.0);
	assert_eq!(p[1].y, -10.0);
}

// ==================================================================================
// Links
// ==================================================================================

#[test]
fn link_threshold_is_strict() {
	let mut state = test_state();
	with_particles(&mut state, &[(100.0, 100.0), (180.0, 100.0)]);
	let frame = state.step();
	assert_eq!(frame.particle_links, 0);

	with_particles(&mut state, &[(100.0, 100.0), (179.999, 100.0)]);
	let frame = state.step();
	assert_eq!(frame.particle_links, 1);
	let alpha = line_alpha(frame.lines(LinkKind::Particle).next().unwrap());
	assert!(alpha > 0.0 && alpha < 1e-3);
}

#[test]
fn link_alpha_falls_with_distance() {
	let mut state = test_state();
	with_particles(&mut state, &[(100.0, 100.0), (140.0, 100.0)]);
	let frame = state.step();
	let alpha = line_alpha(frame.lines(LinkKind::Particle).next().unwrap());
	assert!((alpha - 0.14).abs() < 1e-9);
}

#[test]
fn every_close_pair_is_linked_once() {
	let mut state = test_state();
	with_particles(&mut state, &[(100.0, 100.0), (110.0, 100.0), (100.0, 110.0), (500.0, 500.0)]);
	let frame = state.step();
	assert_eq!(frame.particle_links, 3);
	assert_eq!(frame.lines(LinkKind::Particle).count(), 3);
}

#[test]
fn frame_order_is_clear_disks_links() {
	let mut state = test_state();
	with_particles(&mut state, &[(100.0, 100.0), (110.0, 100.0)]);
	state.pointer_move(105.0, 105.0);
	let frame = state.step();

	assert_eq!(
		frame.commands[0],
		DrawCommand::Clear {
			width: 800.0,
			height: 600.0,
		}
	);
	assert!(matches!(frame.commands[1], DrawCommand::Disk { .. }));
	assert!(matches!(frame.commands[2], DrawCommand::Disk { .. }));
	let widths: Vec<f64> = frame.commands[3..]
		.iter()
		.filter_map(|c| match c {
			DrawCommand::Line { width, .. } => Some(*width),
			_ => None,
		})
		.collect();
	assert_eq!(widths, [1.0, 1.2, 1.2]);
	assert_eq!(frame.commands.len(), 6);
}

// ==================================================================================
// Pointer
// ==================================================================================

#[test]
fn inactive_pointer_has_no_effect() {
	let mut state = test_state();
	with_particles(&mut state, &[(100.0, 100.0), (300.0, 300.0)]);
	state.pointer_move(110.0, 100.0);
	state.pointer_leave();

	let frame = state.step();
	assert_eq!(frame.cursor_links, 0);
	for p in state.field.iter() {
		assert_eq!((p.vx, p.vy), (0.0, 0.0));
	}
}

#[test]
fn active_pointer_attracts_and_links() {
	let mut state = test_state();
	with_particles(&mut state, &[(100.0, 100.0), (400.0, 400.0)]);
	state.pointer_move(160.0, 100.0);

	let frame = state.step();
	let near = &state.field.as_slice()[0];
	// pull = (1 - 60/120) * 0.6 = 0.3, scaled by 0.03
	assert!((near.vx - 0.009).abs() < 1e-12);
	assert_eq!(near.vy, 0.0);
	let far = &state.field.as_slice()[1];
	assert_eq!((far.vx, far.vy), (0.0, 0.0));

	assert_eq!(frame.cursor_links, 1);
	let alpha = line_alpha(frame.lines(LinkKind::Cursor).next().unwrap());
	let dist = 60.0 - 0.009;
	assert!((alpha - 0.35 * (1.0 - dist / 72.0)).abs() < 1e-9);
}

#[test]
fn pointer_uses_surface_origin() {
	let mut state = test_state();
	state.origin = (20.0, 30.0);
	state.pointer_move(120.0, 130.0);
	assert_eq!(state.pointer.active_position(), Some((100.0, 100.0)));
}

#[test]
fn pointer_on_particle_does_not_divide_by_zero() {
	let mut state = test_state();
	with_particles(&mut state, &[(100.0, 100.0)]);
	state.pointer_move(100.0, 100.0);
	state.step();
	let p = &state.field.as_slice()[0];
	assert!(p.vx.is_finite() && p.vy.is_finite());
	assert_eq!((p.vx, p.vy), (0.0, 0.0));
}

// ==================================================================================
// Ripples
// ==================================================================================

#[test]
fn ripple_pushes_nearby_particles_away() {
	let mut state = test_state();
	with_particles(&mut state, &[(150.0, 100.0), (100.0, 40.0), (250.0, 100.0), (200.0, 100.0)]);
	let touched = state.trigger_ripple(100.0, 100.0);
	assert_eq!(touched, 2);

	let p = state.field.as_slice();
	// pull = (1 - 50/100) * 1.5
	assert!((p[0].vx - 0.75).abs() < 1e-12);
	assert_eq!(p[0].vy, 0.0);
	assert!(p[1].vy < 0.0);
	assert_eq!((p[2].vx, p[2].vy), (0.0, 0.0));
	// Exactly at the radius is outside
	assert_eq!((p[3].vx, p[3].vy), (0.0, 0.0));
}

#[test]
fn ripple_at_particle_is_finite() {
	let mut state = test_state();
	with_particles(&mut state, &[(100.0, 100.0)]);
	state.trigger_ripple(100.0, 100.0);
	let p = &state.field.as_slice()[0];
	assert_eq!((p.vx, p.vy), (0.0, 0.0));
}

#[test]
fn ripple_on_uninitialized_field_is_ignored() {
	let mut field = ParticleField::default();
	let ripple = Ripple {
		x: 0.0,
		y: 0.0,
		radius: 100.0,
		strength: 1.5,
	};
	assert_eq!(ripple.apply(&mut field), 0);
	assert!(field.is_empty());
}

#[test]
fn ripple_uses_explicit_radius_and_strength() {
	let mut state = test_state();
	with_particles(&mut state, &[(100.0, 150.0)]);
	state.trigger_ripple_with(Ripple {
		x: 100.0,
		y: 100.0,
		radius: 200.0,
		strength: 2.0,
	});
	let p = &state.field.as_slice()[0];
	// pull = (1 - 50/200) * 2
	assert!((p.vy - 1.5).abs() < 1e-12);
}

#[test]
fn theme_colors_flow_into_frame() {
	let mut state = test_state();
	with_particles(&mut state, &[(100.0, 100.0), (120.0, 100.0)]);
	state.set_theme_colors(ThemeColors {
		node: "rgb(1, 2, 3)".into(),
		link: "rgba(4, 5, 6, 0.9)".into(),
		cursor: "rgb(7, 8, 9)".into(),
	});
	let frame = state.step();
	let DrawCommand::Disk { color, .. } = &frame.commands[1] else {
		panic!("expected a disk, got {:?}", frame.commands[1]);
	};
	assert_eq!(color, "rgb(1, 2, 3)");
	let DrawCommand::Line { color, .. } = frame.lines(LinkKind::Particle).next().unwrap() else {
		unreachable!()
	};
	assert!(color.starts_with("rgba(4, 5, 6, "));
}
