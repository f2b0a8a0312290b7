use std::{fmt, future::Future};
use crate::NewGuest;

/// Somewhere we can put a guest. In the browser this is the backend's `/api/guests`; in tests it's
/// whatever we want it to be.
pub trait GuestStore {
	fn insert(&self, guest: &NewGuest) -> impl Future<Output = Result<(), StoreError>>;
}

// none of this is ever shown to the guest, it only ends up in the console. they just get
// `rsvp::FAILURE_MESSAGE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
	Network(String),
	Rejected {
		status: u16,
		body: String
	}
}

impl fmt::Display for StoreError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(err) => write!(f, "Couldn't reach the guest list: {err}"),
			Self::Rejected { status, body } => write!(f, "Guest list returned {status}: {body}"),
		}
	}
}

impl std::error::Error for StoreError {}
