use std::error::Error;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use gl_supported::{
	Capability, Check, ContextApi, ContextAttributes, ContextRequest, ContextStrategy,
	ContextSupport, Detector, NotSupported, Options, PlatformError, WorkerSupport,
};
use static_assertions::{assert_impl_all, assert_not_impl_any};
#[cfg(target_family = "wasm")]
use wasm_bindgen_test::wasm_bindgen_test;

#[cfg_attr(not(target_family = "wasm"), test)]
#[cfg_attr(target_family = "wasm", wasm_bindgen_test)]
const fn basic() {
	assert_impl_all!(Options: Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Send, Sync, Unpin);
	assert_not_impl_any!(Options: Ord, PartialOrd);

	assert_impl_all!(ContextAttributes: Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Send, Sync);
	assert_impl_all!(ContextRequest: Clone, Copy, Debug, Hash, Eq, PartialEq, Send, Sync);
	assert_not_impl_any!(ContextRequest: Default, Ord, PartialOrd);

	assert_impl_all!(Capability: Clone, Copy, Debug, Display, Hash, Eq, PartialEq, Send, Sync);
	assert_impl_all!(Check: Clone, Copy, Debug, Display, Hash, Eq, PartialEq, Send, Sync);
	assert_impl_all!(ContextApi: Clone, Copy, Debug, Hash, Eq, PartialEq, Send, Sync);
	assert_impl_all!(ContextStrategy: Clone, Copy, Debug, Hash, Eq, PartialEq, Send, Sync);

	assert_impl_all!(PlatformError: Clone, Debug, Error, Eq, PartialEq, Send, Sync, Unpin);
	assert_not_impl_any!(PlatformError: Copy);
	assert_impl_all!(NotSupported: Clone, Debug, Error, Eq, PartialEq, Send, Sync, Unpin);
	assert_not_impl_any!(NotSupported: Copy);

	assert_impl_all!(WorkerSupport: Clone, Debug, Eq, PartialEq, Send, Sync);
	assert_impl_all!(ContextSupport: Clone, Debug, Eq, PartialEq, Send, Sync);

	assert_impl_all!(Detector<()>: Debug, Send, Unpin);
	assert_not_impl_any!(Detector<()>: Clone, Sync);
}
