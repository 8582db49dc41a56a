//! Access to the host environment.
//!
//! Every check goes through [`Platform`], so the detection logic never reads
//! globals directly. On the Web this is `web::WebPlatform`.

use crate::capability::Capability;
use crate::error::PlatformError;
use crate::options::ContextRequest;

/// The host environment being probed.
pub trait Platform {
	/// An object URL to a script.
	type ObjectUrl;
	/// A running worker.
	type Worker;
	/// A detached drawing surface.
	type Surface: Surface;

	/// Returns `true` if `capability` satisfies its
	/// [`Requirement`](crate::Requirement).
	///
	/// Must only test for existence and never call into the capability.
	fn has_capability(&self, capability: Capability) -> bool;

	/// Creates an object URL to an empty `text/javascript` script.
	///
	/// # Errors
	///
	/// If the blob or the URL can't be created.
	fn create_script_url(&self) -> Result<Self::ObjectUrl, PlatformError>;

	/// Revokes an object URL created by
	/// [`create_script_url()`](Self::create_script_url).
	fn revoke_url(&self, url: Self::ObjectUrl);

	/// Instantiates a worker from `url`.
	///
	/// # Errors
	///
	/// If instantiation raised an error.
	fn spawn_worker(&self, url: &Self::ObjectUrl) -> Result<Self::Worker, PlatformError>;

	/// Terminates a worker created by
	/// [`spawn_worker()`](Self::spawn_worker).
	fn terminate_worker(&self, worker: Self::Worker);

	/// Creates a surface that is never attached to the layout.
	///
	/// # Errors
	///
	/// If the surface can't be created.
	fn create_surface(&self) -> Result<Self::Surface, PlatformError>;
}

/// Context APIs to request, in order of preference.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ContextApi {
	/// `webgl`.
	WebGl,
	/// `experimental-webgl`.
	ExperimentalWebGl,
}

impl ContextApi {
	/// All APIs, in order of preference.
	pub const ALL: [Self; 2] = [Self::WebGl, Self::ExperimentalWebGl];

	/// The context identifier.
	#[must_use]
	pub const fn id(self) -> &'static str {
		match self {
			Self::WebGl => "webgl",
			Self::ExperimentalWebGl => "experimental-webgl",
		}
	}
}

/// Ways a [`Surface`] can answer a context request, in order of preference.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ContextStrategy {
	/// `probablySupportsContext()`, never allocates.
	ProbablySupports,
	/// `supportsContext()`, may allocate.
	Supports,
	/// `getContext()`, allocates the context.
	GetContext,
}

/// A drawing surface able to create WebGL contexts.
pub trait Surface {
	/// Returns `true` if the surface exposes `strategy`.
	///
	/// [`ContextStrategy::GetContext`] is expected to always be available.
	fn has_strategy(&self, strategy: ContextStrategy) -> bool;

	/// Requests `api` with `strategy`. Returns `true` on a truthy answer or a
	/// non-null context.
	///
	/// # Errors
	///
	/// If the request raised an error.
	fn request(
		&self,
		strategy: ContextStrategy,
		api: ContextApi,
		request: &ContextRequest,
	) -> Result<bool, PlatformError>;
}
