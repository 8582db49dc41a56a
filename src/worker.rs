//! Checks that workers can actually be instantiated.
//!
//! Some hosts advertise `Worker` but throw on construction, e.g. pages
//! loaded from `file://` or locked down browser configurations.

use crate::capability::{Capability, Check};
use crate::error::PlatformError;
use crate::platform::Platform;

/// Result of [`worker_support()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WorkerSupport {
	/// A worker was created and terminated.
	Available,
	/// A required global is missing, nothing was attempted.
	Missing(Capability),
	/// Instantiation raised an error.
	InstantiationFailed(PlatformError),
}

impl WorkerSupport {
	/// Returns `true` if a worker could be created.
	#[must_use]
	pub const fn is_available(&self) -> bool {
		matches!(self, Self::Available)
	}
}

impl From<WorkerSupport> for bool {
	fn from(support: WorkerSupport) -> Self {
		support.is_available()
	}
}

/// Spawns a worker from an empty script and terminates it again.
///
/// The object URL is revoked and the worker terminated on every path.
pub fn worker_support<P: Platform>(platform: &P) -> WorkerSupport {
	if let Some(capability) = Check::Worker
		.capabilities()
		.iter()
		.copied()
		.find(|capability| !platform.has_capability(*capability))
	{
		return WorkerSupport::Missing(capability);
	}

	let url = match platform.create_script_url() {
		Ok(url) => UrlGuard {
			platform,
			url: Some(url),
		},
		Err(error) => return WorkerSupport::InstantiationFailed(error),
	};

	match platform.spawn_worker(url.as_raw()) {
		Ok(worker) => {
			drop(WorkerGuard {
				platform,
				worker: Some(worker),
			});

			WorkerSupport::Available
		}
		Err(error) => WorkerSupport::InstantiationFailed(error),
	}
}

/// Revokes the object URL when dropped.
struct UrlGuard<'platform, P: Platform> {
	/// Owner of the URL.
	platform: &'platform P,
	/// Only [`None`] while dropping.
	url: Option<P::ObjectUrl>,
}

impl<P: Platform> UrlGuard<'_, P> {
	/// Returns the object URL.
	fn as_raw(&self) -> &P::ObjectUrl {
		self.url
			.as_ref()
			.unwrap_or_else(|| unreachable!("only taken in `Drop`"))
	}
}

impl<P: Platform> Drop for UrlGuard<'_, P> {
	fn drop(&mut self) {
		if let Some(url) = self.url.take() {
			self.platform.revoke_url(url);
		}
	}
}

/// Terminates the worker when dropped.
struct WorkerGuard<'platform, P: Platform> {
	/// Owner of the worker.
	platform: &'platform P,
	/// Only [`None`] while dropping.
	worker: Option<P::Worker>,
}

impl<P: Platform> Drop for WorkerGuard<'_, P> {
	fn drop(&mut self) {
		if let Some(worker) = self.worker.take() {
			self.platform.terminate_worker(worker);
		}
	}
}
