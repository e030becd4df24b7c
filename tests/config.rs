#![allow(unused_crate_dependencies)]

use net_canvas::components::network::{
	NetworkConfig, NetworkState, ThemeColors, ViewportParameters,
};

#[test]
fn empty_document_gives_defaults() {
	let config = NetworkConfig::from_json("{}").unwrap();
	assert_eq!(config.particles.density, 0.00012);
	assert_eq!(config.links.distance_min, 80.0);
	assert_eq!(config.links.distance_max, 140.0);
	assert_eq!(config.links.cursor_ratio, 0.9);
	assert_eq!(config.pointer.attract_radius, 120.0);
	assert_eq!(config.ripple.radius, 100.0);
	assert_eq!(config.ripple.strength, 1.5);
	assert_eq!(config.viewport.max_pixel_ratio, 2.0);
	assert_eq!(config.colors.node_property, "--net-node");
}

#[test]
fn partial_overrides_keep_other_defaults() {
	let config = NetworkConfig::from_json(
		r#"{
			"particles": { "density": 0.0002 },
			"ripple": { "strength": 3.0 },
			"colors": { "link_property": "--accent" }
		}"#,
	)
	.unwrap();
	assert_eq!(config.particles.density, 0.0002);
	assert_eq!(config.particles.wrap_margin, 10.0);
	assert_eq!(config.ripple.strength, 3.0);
	assert_eq!(config.ripple.radius, 100.0);
	assert_eq!(config.colors.link_property, "--accent");
	assert_eq!(config.colors.cursor_property, "--net-cursor");
}

#[test]
fn malformed_document_is_an_error() {
	assert!(NetworkConfig::from_json("{ particles: }").is_err());
	assert!(NetworkConfig::from_json(r#"{ "ripple": { "radius": "big" } }"#).is_err());
}

#[test]
fn overrides_drive_the_simulation() {
	let config = NetworkConfig::from_json(
		r#"{ "particles": { "density": 0.001 }, "links": { "distance_min": 50.0 } }"#,
	)
	.unwrap();
	let vp = ViewportParameters::compute(&config, 200.0, 100.0, 1.0);
	assert_eq!(vp.particle_count, 20);
	assert_eq!(vp.link_distance, 50.0);

	let state = NetworkState::new(config, 200.0, 100.0, 1.0, ThemeColors::default(), 1);
	assert_eq!(state.field.len(), 20);
}

// ==================================================================================
// Sanitizing
// ==================================================================================

#[test]
fn inverted_link_bounds_are_swapped() {
	let config = NetworkConfig::from_json(r#"{ "links": { "distance_min": 200.0 } }"#).unwrap();
	let state = NetworkState::new(config, 800.0, 600.0, 1.0, ThemeColors::default(), 3);
	assert_eq!(state.config.links.distance_min, 140.0);
	assert_eq!(state.config.links.distance_max, 200.0);
	assert_eq!(state.viewport.link_distance, 140.0);
}

#[test]
fn unsanitized_bounds_do_not_panic_viewport() {
	let config = NetworkConfig::from_json(r#"{ "links": { "distance_min": 200.0 } }"#).unwrap();
	let vp = ViewportParameters::compute(&config, 800.0, 600.0, 1.0);
	assert_eq!(vp.link_distance, 140.0);
}

#[test]
fn overflowing_speed_falls_back_to_defaults() {
	let config = NetworkConfig::from_json(r#"{ "particles": { "speed": 1e308 } }"#).unwrap();
	let state = NetworkState::new(config, 800.0, 600.0, 1.0, ThemeColors::default(), 3);
	assert_eq!(state.config.particles.speed, 0.2);
	assert_eq!(state.field.len(), 57);
	for p in state.field.iter() {
		assert!(p.vx.abs() <= 0.2 && p.vy.abs() <= 0.2);
	}
}

#[test]
fn negative_or_huge_density_falls_back_to_defaults() {
	for json in [
		r#"{ "particles": { "density": -1.0 } }"#,
		r#"{ "particles": { "density": 1e300 } }"#,
	] {
		let config = NetworkConfig::from_json(json).unwrap().sanitized();
		assert_eq!(config.particles.density, 0.00012);
	}
}

#[test]
fn inverted_radius_bounds_are_swapped() {
	let config = NetworkConfig::from_json(r#"{ "particles": { "radius_min": 3.0 } }"#)
		.unwrap()
		.sanitized();
	assert_eq!(config.particles.radius_min, 2.25);
	assert_eq!(config.particles.radius_max, 3.0);
}

#[test]
fn bad_sections_reset_independently() {
	let config = NetworkConfig::from_json(
		r#"{
			"ripple": { "radius": -5.0 },
			"pointer": { "attract_radius": 60.0 },
			"viewport": { "max_pixel_ratio": 0.5 }
		}"#,
	)
	.unwrap()
	.sanitized();
	assert_eq!(config.ripple.radius, 100.0);
	assert_eq!(config.pointer.attract_radius, 60.0);
	assert_eq!(config.viewport.max_pixel_ratio, 2.0);
}

#[test]
fn valid_config_is_left_alone() {
	let config = NetworkConfig::from_json(
		r#"{
			"particles": { "density": 0.0003, "speed": 1.0 },
			"links": { "distance_max": 200.0 }
		}"#,
	)
	.unwrap()
	.sanitized();
	assert_eq!(config.particles.density, 0.0003);
	assert_eq!(config.particles.speed, 1.0);
	assert_eq!(config.links.distance_max, 200.0);
}
