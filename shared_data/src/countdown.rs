use chrono::{NaiveDate, NaiveDateTime};

const SECOND_MS: u64 = 1000;
const MINUTE_MS: u64 = SECOND_MS * 60;
const HOUR_MS: u64 = MINUTE_MS * 60;
const DAY_MS: u64 = HOUR_MS * 24;

/// December 21st, 2025 at 18:00, in whatever timezone the guest is in (it's a house party, they're
/// all in the same one anyways)
#[must_use]
pub fn party_date() -> NaiveDateTime {
	NaiveDate::from_ymd_opt(2025, 12, 21)
		.and_then(|d| d.and_hms_opt(18, 0, 0))
		.unwrap_or_default()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
	pub days: u64,
	pub hours: u64,
	pub minutes: u64,
	pub seconds: u64
}

impl TimeLeft {
	/// How long from `now` until `target`, each unit floored. `None` once `target` has passed,
	/// which is the signal to stop ticking.
	#[must_use]
	pub fn until(target: NaiveDateTime, now: NaiveDateTime) -> Option<Self> {
		Self::from_millis((target - now).num_milliseconds())
	}

	/// Same as [`Self::until`], for when you've already got the gap as two absolute timestamps
	/// subtracted (which is what you want if a DST change might be in between)
	#[must_use]
	pub fn from_millis(ms: i64) -> Option<Self> {
		let ms = u64::try_from(ms).ok()?;

		Some(Self {
			days: ms / DAY_MS,
			hours: (ms % DAY_MS) / HOUR_MS,
			minutes: (ms % HOUR_MS) / MINUTE_MS,
			seconds: (ms % MINUTE_MS) / SECOND_MS,
		})
	}

	/// In display order, with their labels
	#[must_use]
	pub fn units(&self) -> [(u64, &'static str); 4] {
		[
			(self.days, "Days"),
			(self.hours, "Hrs"),
			(self.minutes, "Min"),
			(self.seconds, "Sec"),
		]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeDelta;

	#[test]
	fn floors_every_unit() {
		let target = party_date();
		let now = target
			- TimeDelta::days(3)
			- TimeDelta::hours(4)
			- TimeDelta::minutes(5)
			- TimeDelta::seconds(6)
			- TimeDelta::milliseconds(999);

		assert_eq!(TimeLeft::until(target, now), Some(TimeLeft { days: 3, hours: 4, minutes: 5, seconds: 6 }));
	}

	#[test]
	fn right_on_time_is_all_zeroes() {
		let target = party_date();
		assert_eq!(TimeLeft::until(target, target), Some(TimeLeft::default()));
	}

	#[test]
	fn stops_once_the_party_started() {
		let target = party_date();
		assert_eq!(TimeLeft::until(target, target + TimeDelta::milliseconds(1)), None);
	}

	#[test]
	fn millis_split_into_units() {
		let ms = ((2 * 24 + 23) * 60 + 59) * 60_000 + 59_999;
		assert_eq!(TimeLeft::from_millis(ms), Some(TimeLeft { days: 2, hours: 23, minutes: 59, seconds: 59 }));
		assert_eq!(TimeLeft::from_millis(0), Some(TimeLeft::default()));
		assert_eq!(TimeLeft::from_millis(-1), None);
	}

	#[test]
	fn party_is_on_the_right_day() {
		assert_eq!(party_date().to_string(), "2025-12-21 18:00:00");
	}
}
