use std::rc::Rc;
use gloo_console::log;
use gloo_timers::callback::Timeout;
use js_sys::{Array, Math};
use shared_data::decor::{
	ConfettiPiece,
	Firefly,
	Footprint,
	CELEBRATE_VIBRATION_MS,
	CONFETTI_COUNT,
	CONFETTI_LIFETIME,
	FIREFLY_COUNT,
	ROAR_AUDIO,
	ROAR_VIBRATION_MS,
	ROAR_VOLUME,
};
use wasm_bindgen::JsValue;
use web_sys::HtmlAudioElement;
use yew::prelude::*;

fn samples<const N: usize>() -> [f64; N] {
	std::array::from_fn(|_| Math::random())
}

pub fn millis(d: std::time::Duration) -> u32 {
	u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

/// Everything that comes and goes on its own: footprints where people clicked, and the confetti
/// burst after someone's confirmed
#[derive(Default, PartialEq)]
pub struct Overlays {
	pub footprints: Vec<Footprint>,
	pub confetti: Option<(String, Vec<ConfettiPiece>)>
}

pub enum OverlayAction {
	Step(Footprint),
	Fade(String),
	Burst(String, Vec<ConfettiPiece>),
	Settle(String)
}

impl Reducible for Overlays {
	type Action = OverlayAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut footprints = self.footprints.clone();
		let mut confetti = self.confetti.clone();

		match action {
			OverlayAction::Step(print) => footprints.push(print),
			OverlayAction::Fade(id) => footprints.retain(|f| f.id != id),
			OverlayAction::Burst(id, pieces) => confetti = Some((id, pieces)),
			// only clear it if it's still the same burst, someone else may have confirmed since
			OverlayAction::Settle(id) => if confetti.as_ref().is_some_and(|(c, _)| *c == id) {
				confetti = None;
			},
		}

		Self { footprints, confetti }.into()
	}
}

fn vibrate(pattern: &[u32]) {
	let Some(window) = web_sys::window() else { return };
	let pattern = pattern.iter().copied().map(JsValue::from).collect::<Array>();
	// not every browser has this (looking at you, safari), and that's fine
	_ = window.navigator().vibrate_with_pattern(&pattern);
}

/// Throws a fresh burst of confetti and gives a little buzz
pub fn celebrate(overlays: &UseReducerDispatcher<Overlays>) {
	let id = uuid::Uuid::new_v4().to_string();
	let pieces = (0..CONFETTI_COUNT).map(|_| ConfettiPiece::from_samples(samples())).collect();
	overlays.dispatch(OverlayAction::Burst(id.clone(), pieces));
	vibrate(&[CELEBRATE_VIBRATION_MS]);

	let overlays = overlays.clone();
	Timeout::new(millis(CONFETTI_LIFETIME), move || overlays.dispatch(OverlayAction::Settle(id)))
		.forget();
}

/// Shaking is handled by whoever calls this; this is just the noise and the buzzing
pub fn roar() {
	vibrate(&ROAR_VIBRATION_MS);

	let audio = match HtmlAudioElement::new_with_src("/roar.mp3") {
		Ok(audio) => audio,
		Err(e) => {
			log!("Couldn't create roar audio", e);
			return;
		}
	};
	audio.set_volume(ROAR_VOLUME);

	match audio.play() {
		Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
			// autoplay can get blocked, nothing to do about that but shrug
			if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
				log!("Audio blocked", e);
			}
		}),
		Err(e) => log!("Audio blocked", e),
	}

	Timeout::new(millis(ROAR_AUDIO), move || {
		_ = audio.pause();
		audio.set_current_time(0.0);
	}).forget();
}

#[function_component(Fireflies)]
pub fn fireflies() -> Html {
	// rolled once, otherwise they'd all jump around every time anything re-rendered
	let flies = use_memo((), |_| (0..FIREFLY_COUNT)
		.map(|_| Firefly::from_samples(samples()))
		.collect::<Vec<_>>()
	);

	flies.iter()
		.map(|fly| html! { <div class="firefly" style={ fly.style() }></div> })
		.collect::<Html>()
}

pub fn overlay_view(overlays: &Overlays) -> Html {
	let prints = overlays.footprints.iter().map(|print| html! {
		<span class="footprint" key={ print.id.clone() } style={ print.style() }>{ "🐾" }</span>
	});

	let confetti = overlays.confetti.iter().map(|(id, pieces)| html! {
		<div class="confetti" key={ id.clone() }>
			{ pieces.iter().map(|p| html! { <i style={ p.style() }></i> }).collect::<Html>() }
		</div>
	});

	html! {
		<>
			{ prints.collect::<Html>() }
			{ confetti.collect::<Html>() }
		</>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn print(id: &str) -> Footprint {
		Footprint::at_click(id.into(), 10.0, 10.0, 0.0)
	}

	fn piece() -> ConfettiPiece {
		ConfettiPiece::from_samples([0.5; 5])
	}

	fn run(actions: impl IntoIterator<Item = OverlayAction>) -> Rc<Overlays> {
		actions.into_iter()
			.fold(Rc::new(Overlays::default()), Overlays::reduce)
	}

	#[test]
	fn fade_only_removes_its_own_footprint() {
		let overlays = run([
			OverlayAction::Step(print("a")),
			OverlayAction::Step(print("b")),
			OverlayAction::Step(print("c")),
			OverlayAction::Fade("b".into()),
		]);

		let ids = overlays.footprints.iter().map(|f| f.id.as_str()).collect::<Vec<_>>();
		assert_eq!(ids, ["a", "c"]);
	}

	#[test]
	fn old_settle_keeps_the_newer_burst() {
		let overlays = run([
			OverlayAction::Burst("first".into(), vec![piece()]),
			OverlayAction::Burst("second".into(), vec![piece(), piece()]),
			OverlayAction::Settle("first".into()),
		]);

		let (id, pieces) = overlays.confetti.as_ref().unwrap();
		assert_eq!(id, "second");
		assert_eq!(pieces.len(), 2);
	}

	#[test]
	fn settle_clears_its_own_burst() {
		let overlays = run([
			OverlayAction::Burst("only".into(), vec![piece()]),
			OverlayAction::Step(print("a")),
			OverlayAction::Settle("only".into()),
		]);

		assert_eq!(overlays.confetti, None);
		assert_eq!(overlays.footprints.len(), 1);
	}
}
