use gloo_timers::callback::Timeout;
use shared_data::decor::{leaves_footprint, Footprint, FOOTPRINT_LIFETIME, ROAR_SHAKE};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::{
	countdown::CountdownTimer,
	decor::{celebrate, millis, overlay_view, roar, Fireflies, OverlayAction, Overlays},
	rsvp::RsvpManager,
	style::SharedStyle,
};

#[function_component(App)]
pub fn app() -> Html {
	let overlays = use_reducer(Overlays::default);
	let shaking = use_state(|| false);

	let dispatcher = overlays.dispatcher();
	let on_click = Callback::from(move |e: MouseEvent| {
		let tag = e.target()
			.and_then(|t| t.dyn_into::<Element>().ok())
			.map(|el| el.tag_name());

		if !tag.is_some_and(|t| leaves_footprint(&t)) {
			return;
		}

		let scroll_y = web_sys::window()
			.and_then(|w| w.scroll_y().ok())
			.unwrap_or_default();

		let print = Footprint::at_click(
			uuid::Uuid::new_v4().to_string(),
			f64::from(e.client_x()),
			f64::from(e.client_y()),
			scroll_y
		);
		let id = print.id.clone();
		dispatcher.dispatch(OverlayAction::Step(print));

		let dispatcher = dispatcher.clone();
		Timeout::new(millis(FOOTPRINT_LIFETIME), move || dispatcher.dispatch(OverlayAction::Fade(id)))
			.forget();
	});

	let shake = shaking.clone();
	let on_roar = Callback::from(move |e: MouseEvent| {
		// roaring shouldn't also leave a footprint
		e.stop_propagation();
		shake.set(true);
		roar();

		let shake = shake.clone();
		Timeout::new(millis(ROAR_SHAKE), move || shake.set(false)).forget();
	});

	let dispatcher = overlays.dispatcher();
	let on_celebrate = Callback::from(move |()| celebrate(&dispatcher));

	html! {
		<div id="page" class={ classes!(shaking.then_some("shake-screen")) } onclick={ on_click }>
			<SharedStyle />
			{ overlay_view(&overlays) }

			<div id="background">
				<div id="background-image"></div>
				<div id="background-shade"></div>
				<Fireflies />
			</div>

			<div id="content">
				<header>
					<div id="summoned">
						<h2 class="dino-font">{ "You've been summoned" }</h2>
					</div>
					<h1 class="dino-font">{ "Zyon's Dino Party" }</h1>
					<div id="age">
						<span class="rule"></span>
						<span>{ "4 years" }</span>
						<span class="rule"></span>
					</div>
					<CountdownTimer />
				</header>

				<div id="roar">
					<div id="roar-glow"></div>
					<button id="roar-button" onclick={ on_roar }>
						<span id="roar-label">
							<span>{ "🔊" }</span>
							<span class="dino-font">{ "ROAR!" }</span>
						</span>
						<span id="roar-dino">{ "🦖" }</span>
					</button>
				</div>

				<div id="supplies">
					<h3 class="dino-font">{ "⚠️ Survival kit:" }</h3>
					<div class="supply">
						<span class="supply-icon">{ "🥂" }</span>
						<div>
							<p class="supply-name">{ "1 alcoholic drink of your choice" }</p>
							<p class="supply-note">{ "(to stay hydrated during the expedition)" }</p>
						</div>
					</div>
					<div class="supply">
						<span class="supply-icon">{ "🍖" }</span>
						<div>
							<p class="supply-name">{ "1kg of meat" }</p>
							<p class="supply-note">{ "(so the T-Rex doesn't eat you!)" }</p>
						</div>
					</div>
				</div>

				<RsvpManager { on_celebrate } />

				<footer>
					<p class="dino-font" id="when">{ "📅 December 21st • 18:00" }</p>
					<p>{ "📍 Zyon's house" }<br/>{ "Travessa Cinco de Outubro - SC, 122" }</p>
				</footer>
			</div>
		</div>
	}
}
