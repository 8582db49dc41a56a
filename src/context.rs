//! WebGL context probing.

use std::cell::OnceCell;

use crate::error::PlatformError;
use crate::options::ContextRequest;
use crate::platform::{ContextApi, ContextStrategy, Platform, Surface};

/// Result of [`context_support()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContextSupport {
	/// A context is available.
	Supported,
	/// No context is available.
	Unsupported,
	/// Creating the surface or requesting a context raised an error.
	Failed(PlatformError),
}

impl ContextSupport {
	/// Returns `true` if a context is available.
	#[must_use]
	pub const fn is_supported(&self) -> bool {
		matches!(self, Self::Supported)
	}
}

/// Creates a throwaway surface and requests a context with the first
/// strategy it exposes.
pub fn context_support<P: Platform>(platform: &P, request: &ContextRequest) -> ContextSupport {
	let surface = match platform.create_surface() {
		Ok(surface) => surface,
		Err(error) => return ContextSupport::Failed(error),
	};

	let strategy = [ContextStrategy::ProbablySupports, ContextStrategy::Supports]
		.into_iter()
		.find(|strategy| surface.has_strategy(*strategy))
		.unwrap_or(ContextStrategy::GetContext);

	for api in ContextApi::ALL {
		match surface.request(strategy, api, request) {
			Ok(true) => return ContextSupport::Supported,
			Ok(false) => (),
			Err(error) => return ContextSupport::Failed(error),
		}
	}

	ContextSupport::Unsupported
}

/// Probe results keyed by `failIfMajorPerformanceCaveat`.
///
/// Each slot is written at most once and never cleared.
#[derive(Debug, Default)]
pub(crate) struct ContextCache([OnceCell<ContextSupport>; 2]);

impl ContextCache {
	/// Returns the cached result for `request` or computes it with `probe`.
	pub(crate) fn get_or_init(
		&self,
		request: &ContextRequest,
		probe: impl FnOnce() -> ContextSupport,
	) -> ContextSupport {
		let [allow_caveat, fail_on_caveat] = &self.0;
		let slot = if request.fail_if_major_performance_caveat {
			fail_on_caveat
		} else {
			allow_caveat
		};

		slot.get_or_init(|| {
			tracing::debug!(
				fail_if_major_performance_caveat = request.fail_if_major_performance_caveat,
				"probing WebGL context"
			);
			probe()
		})
		.clone()
	}
}
