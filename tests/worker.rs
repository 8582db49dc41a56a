#![cfg(test)]

mod util;

use gl_supported::{Capability, PlatformError, WorkerSupport};
#[cfg(target_family = "wasm")]
use wasm_bindgen_test::wasm_bindgen_test;

use self::util::FakePlatform;

#[cfg_attr(not(target_family = "wasm"), test)]
#[cfg_attr(target_family = "wasm", wasm_bindgen_test)]
fn available() {
	let platform = FakePlatform::default();
	let support = gl_supported::worker_support(&platform);

	assert_eq!(support, WorkerSupport::Available);
	assert!(bool::from(support), "expected support");
	assert_eq!(platform.calls.workers_spawned.get(), 1);
	assert_eq!(platform.calls.workers_terminated.get(), 1);
	assert_eq!(platform.calls.urls_created.get(), 1);
	assert_eq!(platform.calls.urls_revoked.get(), 1);
}

#[cfg_attr(not(target_family = "wasm"), test)]
#[cfg_attr(target_family = "wasm", wasm_bindgen_test)]
fn instantiation_failed() {
	let platform = FakePlatform::default().worker_throws();
	let support = gl_supported::worker_support(&platform);

	assert_eq!(
		support,
		WorkerSupport::InstantiationFailed(PlatformError::new("SecurityError"))
	);
	assert!(!support.is_available(), "expected no support");
	assert_eq!(platform.calls.workers_terminated.get(), 0);
	assert_eq!(
		platform.calls.urls_revoked.get(),
		1,
		"URL not revoked after failure"
	);
}

#[cfg_attr(not(target_family = "wasm"), test)]
#[cfg_attr(target_family = "wasm", wasm_bindgen_test)]
fn missing_globals() {
	for capability in [Capability::Worker, Capability::Blob, Capability::Url] {
		let platform = FakePlatform::default().without(capability);

		assert_eq!(
			gl_supported::worker_support(&platform),
			WorkerSupport::Missing(capability)
		);
		assert_eq!(
			platform.calls.urls_created.get(),
			0,
			"attempted without `{capability}`"
		);
	}
}
