//! Globals required from the host.

use std::fmt::{self, Display, Formatter};

/// A global the host has to provide, named by its JS path.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Capability {
	/// `window`.
	Window,
	/// `document`.
	Document,
	/// `Array.prototype`.
	ArrayPrototype,
	/// `Array.prototype.every`.
	ArrayEvery,
	/// `Array.prototype.filter`.
	ArrayFilter,
	/// `Array.prototype.forEach`.
	ArrayForEach,
	/// `Array.prototype.indexOf`.
	ArrayIndexOf,
	/// `Array.prototype.lastIndexOf`.
	ArrayLastIndexOf,
	/// `Array.prototype.map`.
	ArrayMap,
	/// `Array.prototype.some`.
	ArraySome,
	/// `Array.prototype.reduce`.
	ArrayReduce,
	/// `Array.prototype.reduceRight`.
	ArrayReduceRight,
	/// `Array.isArray`.
	ArrayIsArray,
	/// `Function.prototype`.
	FunctionPrototype,
	/// `Function.prototype.bind`.
	FunctionBind,
	/// `Object.keys`.
	ObjectKeys,
	/// `Object.create`.
	ObjectCreate,
	/// `Object.getPrototypeOf`.
	ObjectGetPrototypeOf,
	/// `Object.getOwnPropertyNames`.
	ObjectGetOwnPropertyNames,
	/// `Object.isSealed`.
	ObjectIsSealed,
	/// `Object.isFrozen`.
	ObjectIsFrozen,
	/// `Object.isExtensible`.
	ObjectIsExtensible,
	/// `Object.getOwnPropertyDescriptor`.
	ObjectGetOwnPropertyDescriptor,
	/// `Object.defineProperty`.
	ObjectDefineProperty,
	/// `Object.defineProperties`.
	ObjectDefineProperties,
	/// `Object.seal`.
	ObjectSeal,
	/// `Object.freeze`.
	ObjectFreeze,
	/// `Object.preventExtensions`.
	ObjectPreventExtensions,
	/// `JSON`.
	Json,
	/// `JSON.parse`.
	JsonParse,
	/// `JSON.stringify`.
	JsonStringify,
	/// `Worker`.
	Worker,
	/// `Blob`.
	Blob,
	/// `URL`.
	Url,
	/// `Uint8ClampedArray`.
	Uint8ClampedArray,
	/// `ArrayBuffer.isView`.
	ArrayBufferIsView,
}

/// How a [`Capability`] is tested.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Requirement {
	/// The value has to be truthy.
	Truthy,
	/// The property only has to exist, like the JS `in` operator.
	Present,
}

/// A group of capabilities tested together.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Check {
	/// Window and document.
	Environment,
	/// ES5 array methods.
	Array,
	/// `Function.prototype.bind`.
	Function,
	/// ES5 object introspection.
	Object,
	/// The `JSON` global.
	Json,
	/// Globals needed to spawn a worker.
	Worker,
	/// `Uint8ClampedArray`.
	Uint8ClampedArray,
	/// `ArrayBuffer.isView`.
	ArrayBuffer,
}

impl Check {
	/// The capabilities making up this check.
	#[must_use]
	pub const fn capabilities(self) -> &'static [Capability] {
		match self {
			Self::Environment => &[Capability::Window, Capability::Document],
			Self::Array => &[
				Capability::ArrayPrototype,
				Capability::ArrayEvery,
				Capability::ArrayFilter,
				Capability::ArrayForEach,
				Capability::ArrayIndexOf,
				Capability::ArrayLastIndexOf,
				Capability::ArrayMap,
				Capability::ArraySome,
				Capability::ArrayReduce,
				Capability::ArrayReduceRight,
				Capability::ArrayIsArray,
			],
			Self::Function => &[Capability::FunctionPrototype, Capability::FunctionBind],
			Self::Object => &[
				Capability::ObjectKeys,
				Capability::ObjectCreate,
				Capability::ObjectGetPrototypeOf,
				Capability::ObjectGetOwnPropertyNames,
				Capability::ObjectIsSealed,
				Capability::ObjectIsFrozen,
				Capability::ObjectIsExtensible,
				Capability::ObjectGetOwnPropertyDescriptor,
				Capability::ObjectDefineProperty,
				Capability::ObjectDefineProperties,
				Capability::ObjectSeal,
				Capability::ObjectFreeze,
				Capability::ObjectPreventExtensions,
			],
			Self::Json => &[
				Capability::Json,
				Capability::JsonParse,
				Capability::JsonStringify,
			],
			Self::Worker => &[Capability::Worker, Capability::Blob, Capability::Url],
			Self::Uint8ClampedArray => &[Capability::Uint8ClampedArray],
			Self::ArrayBuffer => &[Capability::ArrayBufferIsView],
		}
	}
}

impl Display for Check {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str(match self {
			Self::Environment => "browser environment",
			Self::Array => "Array",
			Self::Function => "Function",
			Self::Object => "Object",
			Self::Json => "JSON",
			Self::Worker => "Web Worker",
			Self::Uint8ClampedArray => "Uint8ClampedArray",
			Self::ArrayBuffer => "ArrayBuffer",
		})
	}
}

impl Capability {
	/// Every capability, in the order they are checked.
	pub const ALL: [Self; 36] = [
		Self::Window,
		Self::Document,
		Self::ArrayPrototype,
		Self::ArrayEvery,
		Self::ArrayFilter,
		Self::ArrayForEach,
		Self::ArrayIndexOf,
		Self::ArrayLastIndexOf,
		Self::ArrayMap,
		Self::ArraySome,
		Self::ArrayReduce,
		Self::ArrayReduceRight,
		Self::ArrayIsArray,
		Self::FunctionPrototype,
		Self::FunctionBind,
		Self::ObjectKeys,
		Self::ObjectCreate,
		Self::ObjectGetPrototypeOf,
		Self::ObjectGetOwnPropertyNames,
		Self::ObjectIsSealed,
		Self::ObjectIsFrozen,
		Self::ObjectIsExtensible,
		Self::ObjectGetOwnPropertyDescriptor,
		Self::ObjectDefineProperty,
		Self::ObjectDefineProperties,
		Self::ObjectSeal,
		Self::ObjectFreeze,
		Self::ObjectPreventExtensions,
		Self::Json,
		Self::JsonParse,
		Self::JsonStringify,
		Self::Worker,
		Self::Blob,
		Self::Url,
		Self::Uint8ClampedArray,
		Self::ArrayBufferIsView,
	];

	/// Property path starting at the global object.
	#[must_use]
	pub const fn path(self) -> &'static [&'static str] {
		match self {
			Self::Window => &["window"],
			Self::Document => &["document"],
			Self::ArrayPrototype => &["Array", "prototype"],
			Self::ArrayEvery => &["Array", "prototype", "every"],
			Self::ArrayFilter => &["Array", "prototype", "filter"],
			Self::ArrayForEach => &["Array", "prototype", "forEach"],
			Self::ArrayIndexOf => &["Array", "prototype", "indexOf"],
			Self::ArrayLastIndexOf => &["Array", "prototype", "lastIndexOf"],
			Self::ArrayMap => &["Array", "prototype", "map"],
			Self::ArraySome => &["Array", "prototype", "some"],
			Self::ArrayReduce => &["Array", "prototype", "reduce"],
			Self::ArrayReduceRight => &["Array", "prototype", "reduceRight"],
			Self::ArrayIsArray => &["Array", "isArray"],
			Self::FunctionPrototype => &["Function", "prototype"],
			Self::FunctionBind => &["Function", "prototype", "bind"],
			Self::ObjectKeys => &["Object", "keys"],
			Self::ObjectCreate => &["Object", "create"],
			Self::ObjectGetPrototypeOf => &["Object", "getPrototypeOf"],
			Self::ObjectGetOwnPropertyNames => &["Object", "getOwnPropertyNames"],
			Self::ObjectIsSealed => &["Object", "isSealed"],
			Self::ObjectIsFrozen => &["Object", "isFrozen"],
			Self::ObjectIsExtensible => &["Object", "isExtensible"],
			Self::ObjectGetOwnPropertyDescriptor => &["Object", "getOwnPropertyDescriptor"],
			Self::ObjectDefineProperty => &["Object", "defineProperty"],
			Self::ObjectDefineProperties => &["Object", "defineProperties"],
			Self::ObjectSeal => &["Object", "seal"],
			Self::ObjectFreeze => &["Object", "freeze"],
			Self::ObjectPreventExtensions => &["Object", "preventExtensions"],
			Self::Json => &["JSON"],
			Self::JsonParse => &["JSON", "parse"],
			Self::JsonStringify => &["JSON", "stringify"],
			Self::Worker => &["Worker"],
			Self::Blob => &["Blob"],
			Self::Url => &["URL"],
			Self::Uint8ClampedArray => &["Uint8ClampedArray"],
			Self::ArrayBufferIsView => &["ArrayBuffer", "isView"],
		}
	}

	/// How this capability is tested.
	#[must_use]
	pub const fn requirement(self) -> Requirement {
		match self {
			Self::Window
			| Self::Document
			| Self::Json
			| Self::JsonParse
			| Self::JsonStringify
			| Self::Worker
			| Self::Blob
			| Self::Url
			| Self::Uint8ClampedArray => Requirement::Present,
			_ => Requirement::Truthy,
		}
	}

	/// The [`Check`] this capability belongs to.
	#[must_use]
	pub const fn check(self) -> Check {
		match self {
			Self::Window | Self::Document => Check::Environment,
			Self::ArrayPrototype
			| Self::ArrayEvery
			| Self::ArrayFilter
			| Self::ArrayForEach
			| Self::ArrayIndexOf
			| Self::ArrayLastIndexOf
			| Self::ArrayMap
			| Self::ArraySome
			| Self::ArrayReduce
			| Self::ArrayReduceRight
			| Self::ArrayIsArray => Check::Array,
			Self::FunctionPrototype | Self::FunctionBind => Check::Function,
			Self::ObjectKeys
			| Self::ObjectCreate
			| Self::ObjectGetPrototypeOf
			| Self::ObjectGetOwnPropertyNames
			| Self::ObjectIsSealed
			| Self::ObjectIsFrozen
			| Self::ObjectIsExtensible
			| Self::ObjectGetOwnPropertyDescriptor
			| Self::ObjectDefineProperty
			| Self::ObjectDefineProperties
			| Self::ObjectSeal
			| Self::ObjectFreeze
			| Self::ObjectPreventExtensions => Check::Object,
			Self::Json | Self::JsonParse | Self::JsonStringify => Check::Json,
			Self::Worker | Self::Blob | Self::Url => Check::Worker,
			Self::Uint8ClampedArray => Check::Uint8ClampedArray,
			Self::ArrayBufferIsView => Check::ArrayBuffer,
		}
	}
}

impl Display for Capability {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		for (index, segment) in self.path().iter().enumerate() {
			if index != 0 {
				formatter.write_str(".")?;
			}

			formatter.write_str(segment)?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::{Capability, Check};

	#[test]
	fn groups_cover_all() {
		let grouped: Vec<Capability> = [
			Check::Environment,
			Check::Array,
			Check::Function,
			Check::Object,
			Check::Json,
			Check::Worker,
			Check::Uint8ClampedArray,
			Check::ArrayBuffer,
		]
		.iter()
		.flat_map(|check| check.capabilities().iter().copied())
		.collect();

		assert_eq!(grouped, Capability::ALL, "groups out of order");

		for capability in Capability::ALL {
			assert!(
				capability.check().capabilities().contains(&capability),
				"`{capability}` not in its own check"
			);
		}
	}

	#[test]
	fn display() {
		assert_eq!(Capability::ArrayReduceRight.to_string(), "Array.prototype.reduceRight");
		assert_eq!(Capability::Url.to_string(), "URL");
	}
}
