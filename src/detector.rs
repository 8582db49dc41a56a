//! The aggregate support check.

use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};

use crate::capability::Check;
use crate::context::{self, ContextCache, ContextSupport};
use crate::error::NotSupported;
use crate::options::{ContextAttributes, ContextRequest, Options};
use crate::platform::Platform;
use crate::worker::{self, WorkerSupport};

/// Checks run before the worker check.
const LANGUAGE_CHECKS: [Check; 5] = [
	Check::Environment,
	Check::Array,
	Check::Function,
	Check::Object,
	Check::Json,
];

/// Checks run after the worker check.
const TYPED_DATA_CHECKS: [Check; 2] = [Check::Uint8ClampedArray, Check::ArrayBuffer];

/// Determines if a [`Platform`] can run the renderer.
///
/// Owns the WebGL probe cache: each `failIfMajorPerformanceCaveat` value is
/// probed at most once for the lifetime of the [`Detector`].
pub struct Detector<P> {
	/// Host environment.
	platform: P,
	/// Base attributes for context requests.
	attributes: Cell<ContextAttributes>,
	/// WebGL probe results.
	cache: ContextCache,
}

impl<P> Debug for Detector<P> {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter
			.debug_struct("Detector")
			.field("attributes", &self.attributes)
			.field("cache", &self.cache)
			.finish_non_exhaustive()
	}
}

impl<P: Platform> Detector<P> {
	/// Creates a new [`Detector`] with [`ContextAttributes::DEFAULT`].
	pub fn new(platform: P) -> Self {
		Self {
			platform,
			attributes: Cell::new(ContextAttributes::DEFAULT),
			cache: ContextCache::default(),
		}
	}

	/// The probed platform.
	pub const fn platform(&self) -> &P {
		&self.platform
	}

	/// Base attributes used for future context requests.
	pub fn context_attributes(&self) -> ContextAttributes {
		self.attributes.get()
	}

	/// Overrides the base attributes used for future context requests.
	///
	/// Results already cached are kept.
	pub fn set_context_attributes(&self, attributes: ContextAttributes) {
		self.attributes.set(attributes);
	}

	/// Returns `true` if every check passes.
	pub fn is_supported(&self, options: &Options) -> bool {
		self.check(options).is_ok()
	}

	/// Returns the first failing check, if any.
	pub fn not_supported_reason(&self, options: &Options) -> Option<NotSupported> {
		self.check(options).err()
	}

	/// Runs all checks in order, stopping at the first failure.
	///
	/// # Errors
	///
	/// The first check that failed.
	pub fn check(&self, options: &Options) -> Result<(), NotSupported> {
		for check in LANGUAGE_CHECKS {
			self.check_capabilities(check)?;
		}

		match self.worker_support() {
			WorkerSupport::Available => (),
			WorkerSupport::Missing(capability) => {
				return Err(NotSupported::Capability(capability))
			}
			WorkerSupport::InstantiationFailed(error) => {
				tracing::warn!(%error, "creating a worker failed");
				return Err(NotSupported::Worker(error));
			}
		}

		for check in TYPED_DATA_CHECKS {
			self.check_capabilities(check)?;
		}

		let fail_if_major_performance_caveat = options.fail_if_major_performance_caveat;

		match self.context_support(fail_if_major_performance_caveat) {
			ContextSupport::Supported => Ok(()),
			ContextSupport::Unsupported => Err(NotSupported::Context {
				fail_if_major_performance_caveat,
				error: None,
			}),
			ContextSupport::Failed(error) => Err(NotSupported::Context {
				fail_if_major_performance_caveat,
				error: Some(error),
			}),
		}
	}

	/// Spawns and terminates a worker, see [`worker::worker_support()`].
	pub fn worker_support(&self) -> WorkerSupport {
		worker::worker_support(&self.platform)
	}

	/// Probes for a WebGL context, cached per
	/// `fail_if_major_performance_caveat`.
	pub fn context_support(&self, fail_if_major_performance_caveat: bool) -> ContextSupport {
		let request = ContextRequest::new(self.attributes.get(), fail_if_major_performance_caveat);

		self.cache.get_or_init(&request, || {
			let support = context::context_support(&self.platform, &request);

			if let ContextSupport::Failed(error) = &support {
				tracing::warn!(%error, "requesting a WebGL context failed");
			}

			support
		})
	}

	/// Fails with the first missing capability of `check`.
	///
	/// A missing window or document is reported as
	/// [`NotSupported::Environment`].
	fn check_capabilities(&self, check: Check) -> Result<(), NotSupported> {
		match check
			.capabilities()
			.iter()
			.copied()
			.find(|capability| !self.platform.has_capability(*capability))
		{
			Some(capability) => {
				tracing::debug!(%capability, %check, "missing capability");

				if let Check::Environment = check {
					Err(NotSupported::Environment)
				} else {
					Err(NotSupported::Capability(capability))
				}
			}
			None => Ok(()),
		}
	}
}
