//! Probe configuration.

/// Options for [`Detector::is_supported()`](crate::Detector::is_supported).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[must_use]
pub struct Options {
	/// See [`Options::fail_if_major_performance_caveat()`].
	pub(crate) fail_if_major_performance_caveat: bool,
}

impl Options {
	/// Creates a new [`Options`] with the defaults.
	pub const fn new() -> Self {
		Self {
			fail_if_major_performance_caveat: false,
		}
	}

	/// Report the browser as unsupported if the only WebGL context available
	/// is dramatically slower than expected, e.g. a software renderer.
	///
	/// Defaults to `false`.
	pub const fn fail_if_major_performance_caveat(mut self, value: bool) -> Self {
		self.fail_if_major_performance_caveat = value;
		self
	}
}

/// Base attributes used to request every WebGL context.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ContextAttributes {
	/// `antialias`.
	pub antialias: bool,
	/// `alpha`.
	pub alpha: bool,
	/// `stencil`.
	pub stencil: bool,
	/// `depth`.
	pub depth: bool,
}

impl ContextAttributes {
	/// The attributes used unless overridden.
	pub const DEFAULT: Self = Self {
		antialias: false,
		alpha: true,
		stencil: true,
		depth: true,
	};
}

impl Default for ContextAttributes {
	fn default() -> Self {
		Self::DEFAULT
	}
}

/// A single context request: the base attributes plus
/// `failIfMajorPerformanceCaveat`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ContextRequest {
	/// Base attributes.
	pub attributes: ContextAttributes,
	/// `failIfMajorPerformanceCaveat`.
	pub fail_if_major_performance_caveat: bool,
}

impl ContextRequest {
	/// Layers `fail_if_major_performance_caveat` over `attributes`.
	#[must_use]
	pub const fn new(attributes: ContextAttributes, fail_if_major_performance_caveat: bool) -> Self {
		Self {
			attributes,
			fail_if_major_performance_caveat,
		}
	}
}
