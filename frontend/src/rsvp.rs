use std::rc::Rc;
use gloo_console::error;
use shared_data::{GuestStore, NewGuest, Notice, RsvpForm, StoreError};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::HttpGuestStore;

// `RsvpForm` is all the real state. The rest is just so the effects below can tell when there's
// something new to do: every insert to send and every notice to show gets its own `seq`, and the
// effects are keyed on it so each one fires exactly once.
#[derive(Clone, Default, PartialEq)]
struct RsvpModel {
	form: RsvpForm,
	outgoing: Option<(u32, NewGuest)>,
	notice: Option<(u32, Notice)>,
	seq: u32
}

enum RsvpAction {
	Type(String),
	Submit,
	Finished(Result<(), StoreError>),
	DismissError,
	AddAnother
}

impl Reducible for RsvpModel {
	type Action = RsvpAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut next = (*self).clone();

		match action {
			RsvpAction::Type(name) => next.form.set_name(name),
			RsvpAction::Submit => if let Some(guest) = next.form.submit() {
				next.seq += 1;
				next.outgoing = Some((next.seq, guest));
			},
			RsvpAction::Finished(res) => if let Some(notice) = next.form.finish(res) {
				next.seq += 1;
				next.notice = Some((next.seq, notice));
			},
			RsvpAction::DismissError => next.form.dismiss_error(),
			RsvpAction::AddAnother => next.form.add_another(),
		}

		next.into()
	}
}

#[derive(Properties, PartialEq)]
pub struct RsvpProps {
	/// Called once every time someone's successfully added
	pub on_celebrate: Callback<()>
}

#[function_component(RsvpManager)]
pub fn rsvp_manager(props: &RsvpProps) -> Html {
	let model = use_reducer(RsvpModel::default);

	// Send off whatever the form decided to send, once
	{
		let outgoing = model.outgoing.clone();
		let dispatcher = model.dispatcher();
		use_effect_with(outgoing.as_ref().map(|(seq, _)| *seq), move |_| {
			if let Some((_, guest)) = outgoing {
				wasm_bindgen_futures::spawn_local(async move {
					let res = HttpGuestStore::default().insert(&guest).await;
					if let Err(ref e) = res {
						error!(format!("Couldn't add {}: {e}", guest.name));
					}
					dispatcher.dispatch(RsvpAction::Finished(res));
				});
			}

			|| ()
		});
	}

	// And show whatever it wants shown, also once
	{
		let notice = model.notice.clone();
		let on_celebrate = props.on_celebrate.clone();
		use_effect_with(notice.as_ref().map(|(seq, _)| *seq), move |_| {
			match notice.map(|(_, n)| n) {
				Some(Notice::Celebrate) => on_celebrate.emit(()),
				Some(Notice::Alert(msg)) => if let Some(window) = web_sys::window() {
					if let Err(e) = window.alert_with_message(msg) {
						error!(e);
					}
				},
				None => ()
			}

			|| ()
		});
	}

	let dispatcher = model.dispatcher();
	let on_input = Callback::from(move |e: InputEvent|
		if let Some(input) = e.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
				dispatcher.dispatch(RsvpAction::Type(input.value()));
			}
	);

	let dispatcher = model.dispatcher();
	let on_submit = Callback::from(move |e: SubmitEvent| {
		e.prevent_default();
		dispatcher.dispatch(RsvpAction::Submit);
	});

	let dispatcher = model.dispatcher();
	let add_another = Callback::from(move |_: MouseEvent| dispatcher.dispatch(RsvpAction::AddAnother));

	let dispatcher = model.dispatcher();
	let on_dismiss = Callback::from(move |()| dispatcher.dispatch(RsvpAction::DismissError));

	let form = &model.form;

	let card = if form.is_confirmed() {
		html! {
			<div id="rsvp-confirmed">
				<div class="check-badge">{ "✓" }</div>
				<h3 class="dino-font">{ "Confirmed!" }</h3>
				<p>{ "Your name is on our list." }</p>
				<button class="link-button" onclick={ add_another }>{ "Add another guest" }</button>
			</div>
		}
	} else {
		let input_class = classes!("name-input", form.is_error_visible().then_some("input-error"));
		html! {
			<form id="rsvp-form" onsubmit={ on_submit }>
				<div>
					<label for="guest-name">{ "Guest name" }</label>
					<input
						id="guest-name"
						type="text"
						class={ input_class }
						placeholder="Type your name..."
						value={ form.name().to_string() }
						oninput={ on_input }
					/>
				</div>
				<button type="submit" id="confirm-button" disabled={ form.is_submitting() }>
					if form.is_submitting() {
						{ "Processing..." }
					} else {
						{ "Confirm attendance →" }
					}
				</button>
			</form>
		}
	};

	html! {
		<div id="rsvp">
			<img src="/dino-head.png" alt="Dino" id="rsvp-dino" />
			<div id="rsvp-card">{ card }</div>
			if form.is_error_visible() {
				<ErrorModal { on_dismiss } />
			}
		</div>
	}
}

#[derive(Properties, PartialEq)]
struct ErrorModalProps {
	on_dismiss: Callback<()>
}

#[function_component(ErrorModal)]
fn error_modal(props: &ErrorModalProps) -> Html {
	let dismiss = props.on_dismiss.reform(|_: MouseEvent| ());
	// clicking the backdrop closes it, clicking the box itself shouldn't
	let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

	html! {
		<div id="modal-backdrop" onclick={ dismiss.clone() }>
			<div id="modal" onclick={ swallow }>
				<button class="modal-close" onclick={ dismiss.clone() }>{ "✕" }</button>
				<div class="warning-badge">{ "⚠" }</div>
				<h3 class="dino-font">{ "ROAAAR! 🦖" }</h3>
				<p>
					{ "A dinosaur is blocking the way!" }
					<br/>
					<span class="warning-text">{ "You need to tell us your name" }</span>
					{ " to get into the park." }
				</p>
				<button class="modal-ok" onclick={ dismiss }>{ "Got it!" }</button>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn run(actions: impl IntoIterator<Item = RsvpAction>) -> Rc<RsvpModel> {
		actions.into_iter()
			.fold(Rc::new(RsvpModel::default()), RsvpModel::reduce)
	}

	#[test]
	fn double_submit_sends_one_insert() {
		let model = run([
			RsvpAction::Type("Zyon".into()),
			RsvpAction::Submit,
			RsvpAction::Submit,
		]);

		assert_eq!(model.outgoing, Some((1, NewGuest { name: "Zyon".into() })));
		assert_eq!(model.seq, 1);
		assert!(model.form.is_submitting());
	}

	#[test]
	fn blank_submit_sends_nothing() {
		let model = run([RsvpAction::Type("  ".into()), RsvpAction::Submit]);
		assert_eq!(model.outgoing, None);
		assert!(model.form.is_error_visible());
	}

	#[test]
	fn every_notice_gets_its_own_seq() {
		let first = run([
			RsvpAction::Type("A".into()),
			RsvpAction::Submit,
			RsvpAction::Finished(Ok(())),
		]);
		assert_eq!(first.notice, Some((2, Notice::Celebrate)));

		let second = [
			RsvpAction::AddAnother,
			RsvpAction::Type("B".into()),
			RsvpAction::Submit,
			RsvpAction::Finished(Err(StoreError::Network("down".into()))),
		].into_iter().fold(first, RsvpModel::reduce);

		assert_eq!(second.outgoing, Some((3, NewGuest { name: "B".into() })));
		assert_eq!(second.notice, Some((4, Notice::Alert(shared_data::rsvp::FAILURE_MESSAGE))));
		assert_eq!(second.form.name(), "B");
	}

	#[test]
	fn stray_finish_shows_nothing() {
		let model = run([RsvpAction::Finished(Ok(()))]);
		assert_eq!(model.notice, None);
		assert_eq!(model.seq, 0);
	}

	#[test]
	fn dismissing_closes_the_modal() {
		let model = run([RsvpAction::Submit, RsvpAction::DismissError]);
		assert!(!model.form.is_error_visible());
		assert_eq!(model.outgoing, None);
	}
}
