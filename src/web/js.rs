//! Bindings to the JS API.

use js_sys::Object;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

#[wasm_bindgen]
extern "C" {
	/// `HTMLCanvasElement` including non-standard context methods.
	pub(super) type Canvas;

	/// Returns `probablySupportsContext` to test for its presence.
	#[wasm_bindgen(method, getter, js_name = probablySupportsContext)]
	pub(super) fn has_probably_supports_context(this: &Canvas) -> JsValue;

	/// `HTMLCanvasElement.probablySupportsContext()`, never allocates.
	#[wasm_bindgen(method, catch, js_name = probablySupportsContext)]
	pub(super) fn probably_supports_context(
		this: &Canvas,
		context_id: &str,
		attributes: &ContextAttributesInit,
	) -> Result<JsValue, JsValue>;

	/// Returns `supportsContext` to test for its presence.
	#[wasm_bindgen(method, getter, js_name = supportsContext)]
	pub(super) fn has_supports_context(this: &Canvas) -> JsValue;

	/// `HTMLCanvasElement.supportsContext()`, may allocate.
	#[wasm_bindgen(method, catch, js_name = supportsContext)]
	pub(super) fn supports_context(
		this: &Canvas,
		context_id: &str,
		attributes: &ContextAttributesInit,
	) -> Result<JsValue, JsValue>;

	/// `HTMLCanvasElement.getContext()`.
	#[wasm_bindgen(method, catch, js_name = getContext)]
	pub(super) fn get_context(
		this: &Canvas,
		context_id: &str,
		attributes: &ContextAttributesInit,
	) -> Result<JsValue, JsValue>;

	/// `WebGLContextAttributes`.
	#[wasm_bindgen(extends = Object)]
	pub(super) type ContextAttributesInit;

	/// Sets `antialias`.
	#[wasm_bindgen(method, setter, js_name = antialias)]
	pub(super) fn set_antialias(this: &ContextAttributesInit, value: bool);

	/// Sets `alpha`.
	#[wasm_bindgen(method, setter, js_name = alpha)]
	pub(super) fn set_alpha(this: &ContextAttributesInit, value: bool);

	/// Sets `stencil`.
	#[wasm_bindgen(method, setter, js_name = stencil)]
	pub(super) fn set_stencil(this: &ContextAttributesInit, value: bool);

	/// Sets `depth`.
	#[wasm_bindgen(method, setter, js_name = depth)]
	pub(super) fn set_depth(this: &ContextAttributesInit, value: bool);

	/// Sets `failIfMajorPerformanceCaveat`.
	#[wasm_bindgen(method, setter, js_name = failIfMajorPerformanceCaveat)]
	pub(super) fn set_fail_if_major_performance_caveat(this: &ContextAttributesInit, value: bool);
}
