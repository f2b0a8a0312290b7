pub mod countdown;
pub mod decor;
pub mod rsvp;
pub mod store;

pub use rsvp::{Notice, Phase, RsvpForm};
pub use store::{GuestStore, StoreError};

/// A row of the guests table, as handed back by the backend after an insert.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Guest {
	#[cfg_attr(feature = "sqlx", sqlx(try_from = "i32"))]
	pub id: u32,
	pub name: String,
	#[cfg_attr(feature = "sqlx", sqlx(try_from = "i64"))]
	pub created_at: u64
}

/// What gets sent to the backend to add someone to the list. The backend doesn't trust this to be
/// valid, so it runs it back through [`GuestName::parse`] before inserting.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NewGuest {
	pub name: String
}

impl From<GuestName> for NewGuest {
	fn from(name: GuestName) -> Self {
		Self { name: name.0 }
	}
}

/// A name that's been trimmed and is known to not be empty. This is the only validation we do,
/// on either side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuestName(String);

impl GuestName {
	#[must_use]
	pub fn parse(input: &str) -> Option<Self> {
		// same set as js' `String.prototype.trim`, which also strips the BOM
		let trimmed = input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
		(!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_names_are_rejected() {
		assert_eq!(GuestName::parse(""), None);
		assert_eq!(GuestName::parse("   "), None);
		assert_eq!(GuestName::parse("\t\n "), None);
		assert_eq!(GuestName::parse("\u{feff}"), None);
		assert_eq!(GuestName::parse(" \u{feff}\u{a0}\u{3000}"), None);
	}

	#[test]
	fn names_get_trimmed() {
		let name = GuestName::parse("  Ana Clara ").unwrap();
		assert_eq!(name.as_str(), "Ana Clara");
		assert_eq!(NewGuest::from(name), NewGuest { name: "Ana Clara".into() });
		assert_eq!(GuestName::parse("\u{feff}Zyon\u{feff}").unwrap().as_str(), "Zyon");
	}

	#[test]
	fn new_guest_wire_format_is_just_a_name() {
		let json = serde_json::to_string(&NewGuest { name: "Zyon".into() }).unwrap();
		assert_eq!(json, r#"{"name":"Zyon"}"#);
	}
}
