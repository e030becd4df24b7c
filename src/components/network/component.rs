//! Leptos component wrapping the particle network canvas.
//!
//! The component creates a full-page canvas and wires window events (pointer
//! moves, resize, theme changes) into a [`NetworkState`]. An animation loop runs
//! via `requestAnimationFrame`, stepping the simulation and rendering each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window,
};

use super::config::NetworkConfig;
use super::render;
use super::state::NetworkState;
use super::theme::{self, THEME_CHANGE_EVENT};

type SharedState = Rc<RefCell<Option<NetworkState>>>;

/// Full-page layer behind all content that never receives pointer events.
const CANVAS_STYLE: &str = "position: fixed; inset: 0; width: 100%; height: 100%; \
	display: block; pointer-events: none; z-index: -1;";
type Listener = Closure<dyn FnMut(Event)>;

/// Cloneable capability to ripple the network from any event handler.
///
/// Create one, pass it to [`NetworkCanvas`], and hand clones to whatever UI
/// needs to perturb the background. Calls made before the canvas mounts are
/// ignored.
#[derive(Clone, Default)]
pub struct RippleHandle {
	state: SharedState,
}

impl RippleHandle {
	/// A handle not yet attached to a canvas.
	pub fn new() -> Self {
		Self::default()
	}

	/// Ripple at surface coordinates.
	pub fn trigger(&self, x: f64, y: f64) {
		self.with_state(|s| {
			s.trigger_ripple(x, y);
		});
	}

	/// Ripple at client (viewport) coordinates, e.g. from a click event.
	pub fn trigger_at_client(&self, client_x: f64, client_y: f64) {
		self.with_state(|s| {
			let (ox, oy) = s.origin;
			s.trigger_ripple(client_x - ox, client_y - oy);
		});
	}

	fn with_state(&self, f: impl FnOnce(&mut NetworkState)) {
		match self.state.try_borrow_mut() {
			Ok(mut guard) => {
				if let Some(state) = guard.as_mut() {
					f(state);
				}
			}
			Err(_) => log::debug!("net-canvas: state busy, ripple dropped"),
		}
	}
}

/// Logical size of the canvas, falling back to the window when the canvas has
/// not been laid out yet.
fn surface_size(canvas: &HtmlCanvasElement, window: &Window) -> (f64, f64) {
	let (w, h) = (canvas.client_width() as f64, canvas.client_height() as f64);
	if w > 0.0 && h > 0.0 {
		return (w, h);
	}
	let inner = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(inner(window.inner_width()), inner(window.inner_height()))
}

fn surface_origin(canvas: &HtmlCanvasElement) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(rect.left(), rect.top())
}

fn listen(
	target: &EventTarget,
	event: &str,
	handler: impl FnMut(Event) + 'static,
) -> Listener {
	let closure: Listener = Closure::new(handler);
	if target
		.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
		.is_err()
	{
		log::warn!("net-canvas: could not listen for {}", event);
	}
	closure
}

/// Renders the particle network as a fixed, full-page background canvas.
///
/// Pointer input is read from the window so the canvas can sit behind other
/// content with `pointer-events: none`.
#[component]
pub fn NetworkCanvas(
	#[prop(default = NetworkConfig::default())] config: NetworkConfig,
	#[prop(default = RippleHandle::default())] ripple: RippleHandle,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = ripple.state.clone();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let listeners: Rc<RefCell<Vec<Listener>>> = Rc::new(RefCell::new(Vec::new()));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			log::warn!("net-canvas: 2d context unavailable, background disabled");
			return;
		};

		let (w, h) = surface_size(&canvas, &window);
		let colors = theme::read_theme_colors(&window, &config.colors);
		let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
		let mut initial = NetworkState::new(
			config.clone(),
			w,
			h,
			window.device_pixel_ratio(),
			colors,
			seed,
		);
		initial.origin = surface_origin(&canvas);
		render::apply_pixel_ratio(&canvas, &ctx, &initial.viewport);
		log::info!(
			"net-canvas: started with {} particles on {}x{}",
			initial.viewport.particle_count,
			w,
			h
		);
		*state.borrow_mut() = Some(initial);

		let mut registered = listeners.borrow_mut();
		let window_target: &EventTarget = window.as_ref();

		let (state_mm, canvas_mm) = (state.clone(), canvas.clone());
		registered.push(listen(window_target, "mousemove", move |ev: Event| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			if let Some(ref mut s) = *state_mm.borrow_mut() {
				s.origin = surface_origin(&canvas_mm);
				s.pointer_move(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));

		if let Some(root) = window.document().and_then(|d| d.document_element()) {
			let state_ml = state.clone();
			registered.push(listen(root.as_ref(), "mouseleave", move |_| {
				if let Some(ref mut s) = *state_ml.borrow_mut() {
					s.pointer_leave();
				}
			}));
		}

		let (state_rs, canvas_rs, ctx_rs) = (state.clone(), canvas.clone(), ctx.clone());
		registered.push(listen(window_target, "resize", move |_| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = surface_size(&canvas_rs, &win);
			if let Some(ref mut s) = *state_rs.borrow_mut() {
				s.origin = surface_origin(&canvas_rs);
				let viewport = s.resize(nw, nh, win.device_pixel_ratio());
				render::apply_pixel_ratio(&canvas_rs, &ctx_rs, viewport);
			}
		}));

		let state_tc = state.clone();
		registered.push(listen(window_target, THEME_CHANGE_EVENT, move |_| {
			let Some(win) = web_sys::window() else {
				return;
			};
			if let Some(ref mut s) = *state_tc.borrow_mut() {
				let colors = theme::read_theme_colors(&win, &s.config.colors);
				log::debug!("net-canvas: theme colors reloaded: {:?}", colors);
				s.set_theme_colors(colors);
			}
		}));

		let (state_anim, animate_inner) = (state.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				let frame = s.step();
				render::render(&frame, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="net-canvas"
			style=CANVAS_STYLE
		/>
	}
}
