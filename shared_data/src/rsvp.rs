//! The RSVP form, as a state machine that doesn't know anything about the DOM.
//!
//! ```text
//! Editing ──submit(blank)──> ValidationError ──type / dismiss──> Editing
//! Editing ──submit(name)───> Submitting ──ok──> Confirmed ──add another──> Editing
//!                                       └─err─> Editing (name kept, alert)
//! ```
//!
//! Anything that doesn't have an arrow out of the current phase is ignored.

use crate::{GuestName, GuestStore, NewGuest, StoreError};

/// What the guest sees when the insert fails. Deliberately says nothing about why.
pub const FAILURE_MESSAGE: &str = "Couldn't reach the park. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
	#[default]
	Editing,
	Submitting,
	Confirmed,
	ValidationError
}

/// Things the page should do once, right when they happen, and never again on re-render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
	/// The guest was added: confetti time
	Celebrate,
	/// The insert failed, block on an alert with this text
	Alert(&'static str)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RsvpForm {
	name: String,
	phase: Phase
}

impl RsvpForm {
	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[must_use]
	pub fn phase(&self) -> Phase {
		self.phase
	}

	#[must_use]
	pub fn is_submitting(&self) -> bool {
		self.phase == Phase::Submitting
	}

	#[must_use]
	pub fn is_confirmed(&self) -> bool {
		self.phase == Phase::Confirmed
	}

	#[must_use]
	pub fn is_error_visible(&self) -> bool {
		self.phase == Phase::ValidationError
	}

	/// The guest typed something. If they were staring at the 'you need a name' modal, that's
	/// them fixing it, so the modal goes away.
	pub fn set_name(&mut self, name: impl Into<String>) {
		self.name = name.into();
		if self.phase == Phase::ValidationError {
			self.phase = Phase::Editing;
		}
	}

	/// Returns the guest to insert if this submission should actually go out. Exactly one insert
	/// should be issued per `Some`, and [`Self::finish`] called with how it went.
	pub fn submit(&mut self) -> Option<NewGuest> {
		match self.phase {
			Phase::Editing | Phase::ValidationError => match GuestName::parse(&self.name) {
				Some(name) => {
					self.phase = Phase::Submitting;
					Some(name.into())
				},
				None => {
					self.phase = Phase::ValidationError;
					None
				}
			},
			// already sent one off (or already done), don't send another
			Phase::Submitting | Phase::Confirmed => None,
		}
	}

	/// The insert handed out by [`Self::submit`] came back.
	pub fn finish(&mut self, result: Result<(), StoreError>) -> Option<Notice> {
		if self.phase != Phase::Submitting {
			return None;
		}

		match result {
			Ok(()) => {
				self.name.clear();
				self.phase = Phase::Confirmed;
				Some(Notice::Celebrate)
			},
			Err(_) => {
				self.phase = Phase::Editing;
				Some(Notice::Alert(FAILURE_MESSAGE))
			}
		}
	}

	pub fn dismiss_error(&mut self) {
		if self.phase == Phase::ValidationError {
			self.phase = Phase::Editing;
		}
	}

	/// Back to a blank form from the 'confirmed!' view
	pub fn add_another(&mut self) {
		if self.phase == Phase::Confirmed {
			*self = Self::default();
		}
	}
}

/// Runs a whole submission against `store`: validate, insert once, settle.
///
/// The page can't hold `&mut RsvpForm` across an await so it does these steps itself through its
/// reducer, but anything that can (like the tests) should just use this.
pub async fn submit_with<S: GuestStore>(form: &mut RsvpForm, store: &S) -> Option<Notice> {
	let guest = form.submit()?;
	let result = store.insert(&guest).await;
	form.finish(result)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::RefCell;

	struct RecordingStore {
		calls: RefCell<Vec<NewGuest>>,
		result: Result<(), StoreError>
	}

	impl RecordingStore {
		fn ok() -> Self {
			Self { calls: RefCell::new(Vec::new()), result: Ok(()) }
		}

		fn failing() -> Self {
			Self {
				calls: RefCell::new(Vec::new()),
				result: Err(StoreError::Network("connection refused".into()))
			}
		}
	}

	impl GuestStore for RecordingStore {
		async fn insert(&self, guest: &NewGuest) -> Result<(), StoreError> {
			self.calls.borrow_mut().push(guest.clone());
			self.result.clone()
		}
	}

	fn typed(name: &str) -> RsvpForm {
		let mut form = RsvpForm::default();
		form.set_name(name);
		form
	}

	#[test]
	fn starts_out_editing() {
		let form = RsvpForm::default();
		assert_eq!(form.phase(), Phase::Editing);
		assert_eq!(form.name(), "");
		assert!(!form.is_submitting() && !form.is_confirmed() && !form.is_error_visible());
	}

	#[tokio::test]
	async fn blank_names_never_reach_the_store() {
		for name in ["", "   ", "\t \n", "\u{feff}"] {
			let store = RecordingStore::ok();
			let mut form = typed(name);

			assert_eq!(submit_with(&mut form, &store).await, None);
			assert!(store.calls.borrow().is_empty());
			assert!(form.is_error_visible());
			assert!(!form.is_confirmed());
		}
	}

	#[tokio::test]
	async fn a_name_is_inserted_exactly_once() {
		let store = RecordingStore::ok();
		let mut form = typed("  Dona Rex ");

		let notice = submit_with(&mut form, &store).await;

		assert_eq!(*store.calls.borrow(), vec![NewGuest { name: "Dona Rex".into() }]);
		assert_eq!(notice, Some(Notice::Celebrate));
		assert!(form.is_confirmed());
		assert_eq!(form.name(), "");
	}

	#[tokio::test]
	async fn failures_go_back_to_editing_with_the_name() {
		let store = RecordingStore::failing();
		let mut form = typed("Tio Bronto");

		let notice = submit_with(&mut form, &store).await;

		assert_eq!(store.calls.borrow().len(), 1);
		assert_eq!(notice, Some(Notice::Alert(FAILURE_MESSAGE)));
		assert_eq!(form.phase(), Phase::Editing);
		assert_eq!(form.name(), "Tio Bronto");
		assert!(!form.is_confirmed());
	}

	#[test]
	fn cant_submit_twice_while_waiting() {
		let mut form = typed("Zyon");
		assert!(form.submit().is_some());
		assert!(form.is_submitting());
		assert_eq!(form.submit(), None);
		assert!(form.is_submitting());
	}

	#[test]
	fn typing_while_waiting_is_what_gets_kept() {
		let mut form = typed("Zyon");
		_ = form.submit();
		form.set_name("Zyon e família");
		form.finish(Err(StoreError::Rejected { status: 500, body: "oops".into() }));
		assert_eq!(form.name(), "Zyon e família");
		assert_eq!(form.phase(), Phase::Editing);
	}

	#[test]
	fn typing_dismisses_the_validation_modal() {
		let mut form = RsvpForm::default();
		assert_eq!(form.submit(), None);
		assert!(form.is_error_visible());

		form.set_name("M");
		assert_eq!(form.phase(), Phase::Editing);
		assert_eq!(form.name(), "M");
	}

	#[test]
	fn modal_can_be_closed_without_typing() {
		let mut form = RsvpForm::default();
		_ = form.submit();
		form.dismiss_error();
		assert_eq!(form.phase(), Phase::Editing);
	}

	#[test]
	fn add_another_gives_a_blank_form() {
		let mut form = typed("Zyon");
		_ = form.submit();
		form.finish(Ok(()));
		assert!(form.is_confirmed());

		form.add_another();
		assert_eq!(form, RsvpForm::default());
	}

	#[test]
	fn stray_events_are_ignored() {
		let mut form = typed("Zyon");
		assert_eq!(form.finish(Ok(())), None);
		assert_eq!(form.phase(), Phase::Editing);

		form.add_another();
		assert_eq!(form.name(), "Zyon");

		_ = form.submit();
		form.finish(Ok(()));
		assert_eq!(form.submit(), None);
		assert!(form.is_confirmed());
	}
}
