use gloo_net::http::Request;
use shared_data::{GuestStore, NewGuest, StoreError};

// Set at build time if the backend lives somewhere other than right next to the page
pub const GUESTS_ENDPOINT: &str = match option_env!("GUESTS_ENDPOINT") {
	Some(endpoint) => endpoint,
	None => "/api/guests",
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HttpGuestStore {
	endpoint: &'static str
}

impl Default for HttpGuestStore {
	fn default() -> Self {
		Self { endpoint: GUESTS_ENDPOINT }
	}
}

impl GuestStore for HttpGuestStore {
	async fn insert(&self, guest: &NewGuest) -> Result<(), StoreError> {
		let req = Request::post(self.endpoint)
			.json(guest)
			.map_err(|e| StoreError::Network(format!("Couldn't build request: {e:?}")))?;

		// Can't have await in the closures so this is a match instead of a nice map_or_else chain
		match req.send().await {
			Ok(res) => if res.ok() {
				Ok(())
			} else {
				let body = res.text().await.unwrap_or_else(|e| format!("{e:?}"));
				Err(StoreError::Rejected { status: res.status(), body })
			},
			Err(err) => Err(StoreError::Network(format!("{err:?}")))
		}
	}
}
