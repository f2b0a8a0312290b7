use app::App;

mod api;
mod app;
mod countdown;
mod decor;
mod rsvp;
mod style;

fn main() {
	yew::Renderer::<App>::new().render();
}
