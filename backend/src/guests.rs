use axum::{http::StatusCode, Json};
use axum_sqlx_tx::Tx;
use const_format::concatcp;
use shared_data::{Guest, GuestName, NewGuest};
use sqlx::{query_as, Postgres};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

use crate::print_and_ret;

pub const GUESTS_TABLE: &str = "guests";

pub const CREATE_TABLE: &str = concatcp!(
	"CREATE TABLE IF NOT EXISTS ", GUESTS_TABLE, " (
		id serial PRIMARY KEY,
		name text NOT NULL,
		created_at BIGINT NOT NULL
	);"
);

type ApiResult<T> = Result<T, (StatusCode, String)>;

// the page already checks this, but anybody can POST to us
fn validate(guest: &NewGuest) -> ApiResult<GuestName> {
	GuestName::parse(&guest.name)
		.ok_or_else(|| (StatusCode::BAD_REQUEST, "Please include a name".into()))
}

pub async fn add_guest(
	mut tx: Tx<Postgres>,
	Json(guest): Json<NewGuest>
) -> ApiResult<(StatusCode, Json<Guest>)> {
	let name = validate(&guest)?;

	// Same as everywhere else, this is UTC 'cause UNIX_EPOCH is
	let Ok(created_at) = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs() as i64) else {
		print_and_ret!("Time has gone backwards?? what");
	};

	let res = query_as::<_, Guest>(concatcp!(
		"INSERT INTO ", GUESTS_TABLE,
		" (name, created_at) VALUES ($1, $2)
		RETURNING id, name, created_at"
	))
		.bind(name.as_str())
		.bind(created_at)
		.fetch_one(&mut tx)
		.await;

	match res {
		Ok(guest) => {
			info!("Added guest {} as #{}", guest.name, guest.id);
			Ok((StatusCode::CREATED, Json(guest)))
		},
		Err(e) => print_and_ret!("Couldn't add guest: {e:?}"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_names_are_bad_requests() {
		for name in ["", "  ", "\n"] {
			let err = validate(&NewGuest { name: name.into() }).unwrap_err();
			assert_eq!(err.0, StatusCode::BAD_REQUEST);
		}
	}

	#[test]
	fn names_are_stored_trimmed() {
		let name = validate(&NewGuest { name: " Zyon  ".into() }).unwrap();
		assert_eq!(name.as_str(), "Zyon");
	}

	#[test]
	fn table_allows_duplicate_names() {
		assert!(CREATE_TABLE.contains("CREATE TABLE IF NOT EXISTS guests"));
		assert!(!CREATE_TABLE.to_lowercase().contains("unique"));
	}
}
