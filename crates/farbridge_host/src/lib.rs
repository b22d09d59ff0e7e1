//! # FARBRIDGE Host
//!
//! The seam between the bridge and its host environment.
//!
//! Everything the host can do for us crosses a trust boundary, so every
//! capability is a trait: [`HostActions`] for the mini-app runtime and
//! [`Notifier`] for the server-side push endpoint. The bridge core holds
//! trait objects and never knows whether it is talking to a live host or a
//! test double.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod actions;
pub mod notify;

pub use actions::{HapticIntensity, HostActions, HostContext, HostError, HostUser};
pub use notify::{HttpNotifier, Notifier, NotifyError, NotifyRequest, NotifyStatus};
