//! Animated particle network background.
//!
//! Renders a drifting "cobweb" of particles on an HTML canvas with:
//! - Links between particles closer than a size-derived threshold
//! - Attraction toward, and links to, the pointer
//! - One-shot ripples triggered from other UI through a [`RippleHandle`]
//! - Colors read from theme custom properties and reloaded on `themechange`
//!
//! # Example
//!
//! ```ignore
//! use net_canvas::{NetworkCanvas, RippleHandle};
//!
//! let ripple = RippleHandle::new();
//! let on_click = {
//!     let ripple = ripple.clone();
//!     move |ev: MouseEvent| ripple.trigger_at_client(ev.client_x() as f64, ev.client_y() as f64)
//! };
//!
//! view! {
//!     <NetworkCanvas ripple=ripple />
//!     <button on:click=on_click>"="</button>
//! }
//! ```
//!
//! The simulation itself ([`NetworkState`]) has no browser dependencies and can
//! be stepped directly; each [`NetworkState::step`] returns a [`Frame`] of draw
//! commands.

pub mod color;
mod component;
pub mod config;
mod impulse;
mod particles;
mod pointer;
mod render;
mod state;
pub mod theme;
mod viewport;

pub use color::{ThemeColors, with_alpha};
pub use component::{NetworkCanvas, RippleHandle};
pub use config::NetworkConfig;
pub use impulse::Ripple;
pub use particles::{Particle, ParticleField};
pub use pointer::PointerState;
pub use state::{DrawCommand, Frame, LinkKind, NetworkState};
pub use theme::{Accent, Mode, ThemeName};
pub use viewport::{ViewportParameters, clamp_pixel_ratio};
