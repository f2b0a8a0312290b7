//! Maths for the purely decorative stuff on the page. Everything takes uniform samples in `[0, 1)`
//! instead of pulling in an rng so the page can just hand it `Math.random()`.

use std::time::Duration;

pub const FIREFLY_COUNT: usize = 20;

pub const CONFETTI_COUNT: usize = 150;
pub const CONFETTI_SPREAD_DEG: f64 = 70.0;
pub const CONFETTI_COLORS: [&str; 3] = ["#4ade80", "#ffffff", "#facc15"];
/// Long enough for the slowest piece (max delay + max flight) to have landed
pub const CONFETTI_LIFETIME: Duration = Duration::from_millis(3200);

pub const FOOTPRINT_LIFETIME: Duration = Duration::from_secs(1);
/// Half the size of the footprint icon, so it's centered on the click
pub const FOOTPRINT_OFFSET: f64 = 20.0;

pub const ROAR_SHAKE: Duration = Duration::from_secs(5);
pub const ROAR_AUDIO: Duration = Duration::from_secs(7);
pub const ROAR_VOLUME: f64 = 0.6;
pub const ROAR_VIBRATION_MS: [u32; 11] = [400, 50, 400, 50, 400, 50, 400, 50, 400, 50, 200];
/// Just a little buzz when someone's confirmed
pub const CELEBRATE_VIBRATION_MS: u32 = 120;

#[derive(Clone, Debug, PartialEq)]
pub struct Firefly {
	pub left_pct: f64,
	pub size_px: f64,
	pub duration_s: f64,
	pub delay_s: f64
}

impl Firefly {
	#[must_use]
	pub fn from_samples([left, size, duration, delay]: [f64; 4]) -> Self {
		Self {
			left_pct: left * 100.0,
			size_px: size * 4.0 + 3.0,
			duration_s: duration * 15.0 + 10.0,
			delay_s: delay * 5.0,
		}
	}

	#[must_use]
	pub fn style(&self) -> String {
		format!(
			"left: {:.2}%; width: {:.2}px; height: {:.2}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
			self.left_pct, self.size_px, self.size_px, self.duration_s, self.delay_s
		)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
	/// Sideways distance travelled, negative is left
	pub dx_px: f64,
	/// How far up it gets thrown before falling
	pub rise_px: f64,
	pub spin_deg: f64,
	pub color: &'static str,
	pub delay_ms: u32
}

impl ConfettiPiece {
	#[must_use]
	pub fn from_samples([angle, speed, color, spin, delay]: [f64; 5]) -> Self {
		let angle = ((angle - 0.5) * CONFETTI_SPREAD_DEG).to_radians();
		let velocity = 250.0 + speed * 300.0;
		// `color` is < 1, but just in case something hands us exactly 1.0
		let idx = ((color * CONFETTI_COLORS.len() as f64) as usize).min(CONFETTI_COLORS.len() - 1);

		Self {
			dx_px: velocity * angle.sin(),
			rise_px: velocity * angle.cos(),
			spin_deg: spin * 720.0 - 360.0,
			color: CONFETTI_COLORS[idx],
			delay_ms: (delay * 400.0) as u32,
		}
	}

	#[must_use]
	pub fn style(&self) -> String {
		format!(
			"--dx: {:.1}px; --rise: {:.1}px; --spin: {:.0}deg; background-color: {}; animation-delay: {}ms;",
			self.dx_px, self.rise_px, self.spin_deg, self.color, self.delay_ms
		)
	}
}

/// Where a click landed, in page coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct Footprint {
	pub id: String,
	pub x: f64,
	pub y: f64
}

impl Footprint {
	#[must_use]
	pub fn at_click(id: String, client_x: f64, client_y: f64, scroll_y: f64) -> Self {
		Self { id, x: client_x, y: client_y + scroll_y }
	}

	#[must_use]
	pub fn style(&self) -> String {
		format!("left: {:.0}px; top: {:.0}px;", self.x - FOOTPRINT_OFFSET, self.y - FOOTPRINT_OFFSET)
	}
}

/// Footprints only show up when you click on the background, not on the things you're supposed to
/// click on
#[must_use]
pub fn leaves_footprint(tag_name: &str) -> bool {
	!tag_name.eq_ignore_ascii_case("button") && !tag_name.eq_ignore_ascii_case("input")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fireflies_stay_in_range() {
		let low = Firefly::from_samples([0.0; 4]);
		assert_eq!(low, Firefly { left_pct: 0.0, size_px: 3.0, duration_s: 10.0, delay_s: 0.0 });

		let high = Firefly::from_samples([0.999; 4]);
		assert!(high.left_pct < 100.0);
		assert!(high.size_px < 7.0);
		assert!(high.duration_s < 25.0);
		assert!(high.delay_s < 5.0);
	}

	#[test]
	fn confetti_stays_inside_the_spread() {
		let half_spread = (CONFETTI_SPREAD_DEG / 2.0).to_radians();

		for sample in [0.0, 0.25, 0.5, 0.75, 0.999] {
			let piece = ConfettiPiece::from_samples([sample; 5]);
			let angle = piece.dx_px.atan2(piece.rise_px);
			assert!(angle.abs() <= half_spread + 1e-9);
			assert!(piece.rise_px > 0.0);
			assert!(CONFETTI_COLORS.contains(&piece.color));
		}
	}

	#[test]
	fn straight_up_in_the_middle() {
		let piece = ConfettiPiece::from_samples([0.5, 0.0, 0.0, 0.5, 0.0]);
		assert!(piece.dx_px.abs() < 1e-9);
		assert!((piece.rise_px - 250.0).abs() < 1e-9);
		assert_eq!(piece.spin_deg, 0.0);
	}

	#[test]
	fn confetti_color_handles_the_top_edge() {
		assert_eq!(ConfettiPiece::from_samples([0.0, 0.0, 1.0, 0.0, 0.0]).color, "#facc15");
	}

	#[test]
	fn footprints_account_for_scroll() {
		let print = Footprint::at_click("a".into(), 100.0, 50.0, 400.0);
		assert_eq!(print.y, 450.0);
		assert_eq!(print.style(), "left: 80px; top: 430px;");
	}

	#[test]
	fn no_footprints_on_controls() {
		assert!(!leaves_footprint("BUTTON"));
		assert!(!leaves_footprint("INPUT"));
		assert!(leaves_footprint("DIV"));
		assert!(leaves_footprint("SPAN"));
	}
}
