//! Checks whether the current browser can run a WebGL map renderer, without
//! loading the renderer itself.
//!
//! The browser is checked for ES5 language features, `JSON`, working Web
//! Workers, typed arrays and finally a WebGL context. Checks run cheapest
//! first and stop at the first failure. Acquiring a WebGL context is
//! expensive, so its result is cached per value of
//! [`Options::fail_if_major_performance_caveat()`].
//!
//! On the Web use the free functions:
//!
//! ```no_run
//! # #[cfg(all(target_family = "wasm", target_os = "unknown"))]
//! # fn main() {
//! use gl_supported::Options;
//!
//! if !gl_supported::is_supported(&Options::new()) {
//! 	// Fall back to a static map.
//! }
//! # }
//! # #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
//! # fn main() {}
//! ```
//!
//! Everywhere else, or to substitute the host in tests, implement
//! [`Platform`] and use a [`Detector`].

mod capability;
mod context;
mod detector;
mod error;
mod options;
mod platform;
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub mod web;
mod worker;

pub use self::capability::{Capability, Check, Requirement};
pub use self::context::{context_support, ContextSupport};
pub use self::detector::Detector;
pub use self::error::{NotSupported, PlatformError};
pub use self::options::{ContextAttributes, ContextRequest, Options};
pub use self::platform::{ContextApi, ContextStrategy, Platform, Surface};
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub use self::web::{
	context_attributes, is_supported, not_supported_reason, set_context_attributes,
};
pub use self::worker::{worker_support, WorkerSupport};
