use chrono::{Datelike, Timelike};
use gloo_timers::callback::Interval;
use shared_data::countdown::{party_date, TimeLeft};
use yew::prelude::*;

// The party date on the guest's own wall clock, as an absolute timestamp. Subtracting two of
// these (instead of two wall-clock readings) keeps a DST change in between from skewing it.
fn party_millis() -> f64 {
	let party = party_date();
	js_sys::Date::new_with_year_month_day_hr_min_sec(
		party.year() as u32,
		party.month0() as i32,
		party.day() as i32,
		party.hour() as i32,
		party.minute() as i32,
		party.second() as i32
	)
	.get_time()
}

fn time_left() -> Option<TimeLeft> {
	TimeLeft::from_millis((party_millis() - js_sys::Date::now()) as i64)
}

#[function_component(CountdownTimer)]
pub fn countdown_timer() -> Html {
	let left = use_state(time_left);

	// Once the party's started there's nothing left to count, so the interval goes away
	{
		let left = left.clone();
		let done = left.is_none();
		use_effect_with(done, move |done| {
			let interval = (!*done).then(|| Interval::new(1000, move || left.set(time_left())));
			move || drop(interval)
		});
	}

	html! {
		<div id="countdown" class="dino-font">
			{
				left.unwrap_or_default()
					.units()
					.into_iter()
					.map(|(value, label)| html! {
						<div class="countdown-unit" key={ label }>
							<span class="countdown-value">{ format!("{value:02}") }</span>
							<span class="countdown-label">{ label }</span>
						</div>
					})
					.collect::<Html>()
			}
		</div>
	}
}
