//! The keyboard-driven navigation engine.
//!
//! A single-threaded, cooperative read-key / apply / render loop over a
//! fixed set of views. The engine owns the current [`View`] and a per-view
//! selection index, pulls all displayed data fresh from the capability,
//! registry, and prompt-store components on every render, and is the only
//! component that initiates view transitions.

mod driver;
mod view;

pub use driver::{Confirmer, DialogConfirmer, Engine, Flow};
pub use view::{action_for, Action, View};
