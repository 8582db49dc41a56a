#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use gl_supported::{
	Capability, ContextApi, ContextRequest, ContextStrategy, Platform, PlatformError, Surface,
};

/// What the fake surface answers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Answer {
	Yes,
	No,
	Throw,
}

/// Call counters, shared with every [`FakeSurface`].
#[derive(Debug, Default)]
pub struct Calls {
	pub urls_created: Cell<usize>,
	pub urls_revoked: Cell<usize>,
	pub workers_spawned: Cell<usize>,
	pub workers_terminated: Cell<usize>,
	pub surfaces: Cell<usize>,
	pub requests: RefCell<Vec<(ContextStrategy, ContextApi, ContextRequest)>>,
}

/// A browser with every capability present unless removed.
#[derive(Debug)]
pub struct FakePlatform {
	pub missing: HashSet<Capability>,
	pub worker_throws: bool,
	pub strategies: Vec<ContextStrategy>,
	pub answers: Vec<(ContextApi, Answer)>,
	pub calls: Rc<Calls>,
}

impl Default for FakePlatform {
	fn default() -> Self {
		Self {
			missing: HashSet::new(),
			worker_throws: false,
			strategies: vec![
				ContextStrategy::ProbablySupports,
				ContextStrategy::Supports,
				ContextStrategy::GetContext,
			],
			answers: vec![
				(ContextApi::WebGl, Answer::Yes),
				(ContextApi::ExperimentalWebGl, Answer::Yes),
			],
			calls: Rc::default(),
		}
	}
}

impl FakePlatform {
	pub fn without(mut self, capability: Capability) -> Self {
		self.missing.insert(capability);
		self
	}

	pub fn worker_throws(mut self) -> Self {
		self.worker_throws = true;
		self
	}

	pub fn strategies(mut self, strategies: &[ContextStrategy]) -> Self {
		self.strategies = strategies.to_vec();
		self
	}

	pub fn answer(mut self, api: ContextApi, answer: Answer) -> Self {
		for (known, old) in &mut self.answers {
			if *known == api {
				*old = answer;
			}
		}

		self
	}
}

#[derive(Debug)]
pub struct FakeUrl;

#[derive(Debug)]
pub struct FakeWorker;

#[derive(Debug)]
pub struct FakeSurface {
	strategies: Vec<ContextStrategy>,
	answers: Vec<(ContextApi, Answer)>,
	calls: Rc<Calls>,
}

impl Platform for FakePlatform {
	type ObjectUrl = FakeUrl;
	type Worker = FakeWorker;
	type Surface = FakeSurface;

	fn has_capability(&self, capability: Capability) -> bool {
		!self.missing.contains(&capability)
	}

	fn create_script_url(&self) -> Result<Self::ObjectUrl, PlatformError> {
		self.calls.urls_created.set(self.calls.urls_created.get() + 1);
		Ok(FakeUrl)
	}

	fn revoke_url(&self, _: Self::ObjectUrl) {
		self.calls.urls_revoked.set(self.calls.urls_revoked.get() + 1);
	}

	fn spawn_worker(&self, _: &Self::ObjectUrl) -> Result<Self::Worker, PlatformError> {
		if self.worker_throws {
			Err(PlatformError::new("SecurityError"))
		} else {
			self.calls
				.workers_spawned
				.set(self.calls.workers_spawned.get() + 1);
			Ok(FakeWorker)
		}
	}

	fn terminate_worker(&self, _: Self::Worker) {
		self.calls
			.workers_terminated
			.set(self.calls.workers_terminated.get() + 1);
	}

	fn create_surface(&self) -> Result<Self::Surface, PlatformError> {
		self.calls.surfaces.set(self.calls.surfaces.get() + 1);

		Ok(FakeSurface {
			strategies: self.strategies.clone(),
			answers: self.answers.clone(),
			calls: Rc::clone(&self.calls),
		})
	}
}

impl Surface for FakeSurface {
	fn has_strategy(&self, strategy: ContextStrategy) -> bool {
		self.strategies.contains(&strategy)
	}

	fn request(
		&self,
		strategy: ContextStrategy,
		api: ContextApi,
		request: &ContextRequest,
	) -> Result<bool, PlatformError> {
		self.calls
			.requests
			.borrow_mut()
			.push((strategy, api, *request));

		let answer = self
			.answers
			.iter()
			.find(|(known, _)| *known == api)
			.map_or(Answer::No, |(_, answer)| *answer);

		match answer {
			Answer::Yes => Ok(true),
			Answer::No => Ok(false),
			Answer::Throw => Err(PlatformError::new("context creation denied")),
		}
	}
}
