//! Error types.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::capability::Capability;

/// An error raised by the platform while probing.
///
/// On the Web this carries the message of the thrown JS value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformError(String);

impl PlatformError {
	/// Creates a new [`PlatformError`] from a message.
	pub fn new(message: impl Into<String>) -> Self {
		Self(message.into())
	}

	/// The error message.
	#[must_use]
	pub fn message(&self) -> &str {
		&self.0
	}
}

impl Display for PlatformError {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str(&self.0)
	}
}

impl Error for PlatformError {}

/// The first check that failed, see
/// [`Detector::check()`](crate::Detector::check).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NotSupported {
	/// Not running in a window with a document.
	Environment,
	/// A required global is missing.
	Capability(Capability),
	/// Creating a worker raised an error.
	Worker(PlatformError),
	/// No WebGL context could be acquired.
	Context {
		/// Whether low-performance contexts were rejected.
		fail_if_major_performance_caveat: bool,
		/// The error raised while acquiring the context, if any.
		error: Option<PlatformError>,
	},
}

impl Display for NotSupported {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Environment => write!(formatter, "not a browser"),
			Self::Capability(capability) => write!(
				formatter,
				"insufficient {} support: `{}` is missing",
				capability.check(),
				capability
			),
			Self::Worker(error) => write!(formatter, "web workers can't be created: {error}"),
			Self::Context {
				fail_if_major_performance_caveat: true,
				error: None,
			} => write!(
				formatter,
				"insufficient WebGL support without a major performance caveat"
			),
			Self::Context { error: None, .. } => write!(formatter, "insufficient WebGL support"),
			Self::Context {
				error: Some(error), ..
			} => write!(formatter, "WebGL context creation failed: {error}"),
		}
	}
}

impl Error for NotSupported {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::Worker(error)
			| Self::Context {
				error: Some(error), ..
			} => Some(error),
			Self::Environment | Self::Capability(_) | Self::Context { error: None, .. } => None,
		}
	}
}
