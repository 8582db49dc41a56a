//! [`Platform`] implementation for the Web.

mod js;

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Url, Worker};

use self::js::{Canvas, ContextAttributesInit};
use crate::capability::{Capability, Requirement};
use crate::context::ContextSupport;
use crate::detector::Detector;
use crate::error::{NotSupported, PlatformError};
use crate::options::{ContextAttributes, ContextRequest, Options};
use crate::platform::{ContextApi, ContextStrategy, Platform, Surface};
use crate::worker::WorkerSupport;

thread_local! {
	/// Process-wide detector, holds the WebGL probe cache until the page is
	/// reloaded.
	static DETECTOR: Detector<WebPlatform> = Detector::new(WebPlatform);
}

/// Returns `true` if the current browser can run the renderer.
///
/// The WebGL probe is only run once per value of
/// [`Options::fail_if_major_performance_caveat()`].
pub fn is_supported(options: &Options) -> bool {
	DETECTOR.with(|detector| detector.is_supported(options))
}

/// Returns why the current browser can't run the renderer, or [`None`] if it
/// can.
pub fn not_supported_reason(options: &Options) -> Option<NotSupported> {
	DETECTOR.with(|detector| detector.not_supported_reason(options))
}

/// See [`Detector::worker_support()`].
pub fn worker_support() -> WorkerSupport {
	DETECTOR.with(Detector::worker_support)
}

/// See [`Detector::context_support()`].
pub fn context_support(fail_if_major_performance_caveat: bool) -> ContextSupport {
	DETECTOR.with(|detector| detector.context_support(fail_if_major_performance_caveat))
}

/// Base attributes used for future WebGL probes.
pub fn context_attributes() -> ContextAttributes {
	DETECTOR.with(Detector::context_attributes)
}

/// Overrides the base attributes used for future WebGL probes.
///
/// Probes that already ran are not repeated.
pub fn set_context_attributes(attributes: ContextAttributes) {
	DETECTOR.with(|detector| detector.set_context_attributes(attributes));
}

/// The browser's global scope.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform;

/// Object URL created by [`WebPlatform`].
#[derive(Debug)]
pub struct ObjectUrl(String);

/// Detached `<canvas>` created by [`WebPlatform`].
#[derive(Debug)]
pub struct CanvasSurface(Canvas);

impl Platform for WebPlatform {
	type ObjectUrl = ObjectUrl;
	type Worker = Worker;
	type Surface = CanvasSurface;

	fn has_capability(&self, capability: Capability) -> bool {
		let Some((property, parents)) = capability.path().split_last() else {
			return false;
		};

		let mut target: JsValue = js_sys::global().into();

		for parent in parents {
			target = match Reflect::get(&target, &JsValue::from_str(parent)) {
				Ok(value) if value.is_object() || value.is_function() => value,
				Ok(_) | Err(_) => return false,
			};
		}

		let property = JsValue::from_str(property);

		match capability.requirement() {
			Requirement::Present => Reflect::has(&target, &property).unwrap_or(false),
			Requirement::Truthy => {
				Reflect::get(&target, &property).map_or(false, |value| value.is_truthy())
			}
		}
	}

	fn create_script_url(&self) -> Result<Self::ObjectUrl, PlatformError> {
		let sequence = Array::of1(&JsValue::from_str(""));
		let property = BlobPropertyBag::new();
		property.set_type("text/javascript");
		let blob =
			Blob::new_with_str_sequence_and_options(&sequence, &property).map_err(js_error)?;

		Url::create_object_url_with_blob(&blob)
			.map(ObjectUrl)
			.map_err(js_error)
	}

	fn revoke_url(&self, url: Self::ObjectUrl) {
		if let Err(error) = Url::revoke_object_url(&url.0) {
			tracing::warn!(error = %js_error(error), "`URL.revokeObjectURL()` failed");
		}
	}

	fn spawn_worker(&self, url: &Self::ObjectUrl) -> Result<Self::Worker, PlatformError> {
		Worker::new(&url.0).map_err(js_error)
	}

	fn terminate_worker(&self, worker: Self::Worker) {
		worker.terminate();
	}

	fn create_surface(&self) -> Result<Self::Surface, PlatformError> {
		let document = web_sys::window()
			.and_then(|window| window.document())
			.ok_or_else(|| PlatformError::new("no `document` found"))?;
		let canvas = document.create_element("canvas").map_err(js_error)?;

		Ok(CanvasSurface(canvas.unchecked_into()))
	}
}

impl Surface for CanvasSurface {
	fn has_strategy(&self, strategy: ContextStrategy) -> bool {
		match strategy {
			ContextStrategy::ProbablySupports => {
				self.0.has_probably_supports_context().is_truthy()
			}
			ContextStrategy::Supports => self.0.has_supports_context().is_truthy(),
			ContextStrategy::GetContext => true,
		}
	}

	fn request(
		&self,
		strategy: ContextStrategy,
		api: ContextApi,
		request: &ContextRequest,
	) -> Result<bool, PlatformError> {
		let attributes = context_attributes_init(request);

		let answer = match strategy {
			ContextStrategy::ProbablySupports => {
				self.0.probably_supports_context(api.id(), &attributes)
			}
			ContextStrategy::Supports => self.0.supports_context(api.id(), &attributes),
			ContextStrategy::GetContext => self.0.get_context(api.id(), &attributes),
		};

		answer.map(|answer| answer.is_truthy()).map_err(js_error)
	}
}

/// Builds the JS attributes object for `request`.
fn context_attributes_init(request: &ContextRequest) -> ContextAttributesInit {
	let init: ContextAttributesInit = Object::new().unchecked_into();
	init.set_antialias(request.attributes.antialias);
	init.set_alpha(request.attributes.alpha);
	init.set_stencil(request.attributes.stencil);
	init.set_depth(request.attributes.depth);
	init.set_fail_if_major_performance_caveat(request.fail_if_major_performance_caveat);

	init
}

/// Converts a thrown JS value into a [`PlatformError`].
fn js_error(error: JsValue) -> PlatformError {
	PlatformError::new(
		error
			.dyn_ref::<js_sys::Error>()
			.map_or_else(|| format!("{error:?}"), |error| error.message().into()),
	)
}
