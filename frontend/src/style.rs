use yew::prelude::*;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! { <style>{ BASE_STYLE }</style> }
}

pub static BASE_STYLE: &str = r#"
* {
	--night: #0f172a;
	--night-deep: #020617;
	--leaf: #4ade80;
	--leaf-dark: #16a34a;
	--amber: #facc15;
	--ember: #f97316;
	--danger: #ef4444;
	--mist: #94a3b8;
	box-sizing: border-box;
	font-family: Inter, system-ui, sans-serif;
}
body {
	margin: 0;
	background-color: var(--night);
	color: white;
}
p {
	margin: 0;
}
.dino-font {
	font-family: Bangers, system-ui;
	letter-spacing: 0.05em;
}
#page {
	min-height: 100vh;
	position: relative;
	overflow-x: hidden;
	touch-action: manipulation;
}
#background {
	position: fixed;
	inset: 0;
	z-index: 0;
	pointer-events: none;
}
#background-image {
	position: absolute;
	inset: 0;
	background: url('/bg-dino.jpg') center / cover;
	opacity: 0.7;
	transform: scale(1.05);
}
#background-shade {
	position: absolute;
	inset: 0;
	background: linear-gradient(to top, var(--night-deep), rgba(15, 23, 42, 0.6), rgba(15, 23, 42, 0.3));
}
#content {
	position: relative;
	z-index: 10;
	min-height: 100vh;
	max-width: 1024px;
	margin: 0 auto;
	padding: 32px 16px 0 16px;
	display: flex;
	flex-direction: column;
	align-items: center;
	justify-content: center;
}
header {
	text-align: center;
	margin-bottom: 24px;
	width: 100%;
}
#summoned {
	display: inline-block;
	margin-bottom: 12px;
	padding: 4px 16px;
	border-radius: 999px;
	background-color: rgba(20, 83, 45, 0.4);
	border: 1px solid rgba(74, 222, 128, 0.3);
}
#summoned > h2 {
	margin: 0;
	color: #86efac;
	font-size: 18px;
	letter-spacing: 0.2em;
	text-transform: uppercase;
}
header > h1 {
	margin: 0;
	font-size: clamp(48px, 10vw, 96px);
	line-height: 1.2;
}
#age {
	display: flex;
	align-items: center;
	justify-content: center;
	gap: 16px;
	margin: 8px 0 24px 0;
	color: var(--leaf);
	font-weight: bold;
	font-size: 24px;
	text-transform: uppercase;
	letter-spacing: 0.1em;
}
#age > .rule {
	height: 2px;
	width: 32px;
	background-color: rgba(74, 222, 128, 0.5);
	border-radius: 999px;
}
#countdown {
	display: flex;
	gap: 12px;
	justify-content: center;
}
.countdown-unit {
	display: flex;
	flex-direction: column;
	min-width: 64px;
	padding: 8px;
	border-radius: 12px;
	background-color: rgba(15, 23, 42, 0.6);
	border: 1px solid rgba(74, 222, 128, 0.4);
}
.countdown-value {
	font-size: 28px;
	color: var(--leaf);
}
.countdown-label {
	font-size: 11px;
	text-transform: uppercase;
	opacity: 0.7;
	letter-spacing: 0.1em;
}
#roar {
	position: relative;
	margin-bottom: 24px;
	z-index: 20;
}
#roar-glow {
	position: absolute;
	inset: -4px;
	border-radius: 999px;
	background: linear-gradient(to right, #ea580c, #dc2626);
	filter: blur(6px);
	opacity: 0.4;
	animation: pulse 2s infinite;
}
#roar-button {
	position: relative;
	display: flex;
	align-items: center;
	gap: 16px;
	padding: 12px 24px;
	border-radius: 999px;
	border: 1px solid rgba(255, 255, 255, 0.1);
	background-color: var(--night);
	color: var(--ember);
	font-size: 18px;
	cursor: pointer;
}
#roar-button:active {
	transform: scale(0.95);
}
#roar-label {
	display: flex;
	gap: 8px;
}
#supplies {
	width: 100%;
	max-width: 448px;
	margin-bottom: 32px;
	padding: 20px;
	border-radius: 12px;
	background-color: rgba(113, 63, 18, 0.4);
	border: 1px solid rgba(202, 138, 4, 0.3);
}
#supplies > h3 {
	margin: 0 0 16px 0;
	padding-bottom: 8px;
	color: #eab308;
	font-size: 18px;
	border-bottom: 1px solid rgba(202, 138, 4, 0.2);
}
.supply {
	display: flex;
	gap: 12px;
	align-items: flex-start;
	padding: 12px;
	margin-top: 12px;
	border-radius: 8px;
	background-color: rgba(0, 0, 0, 0.2);
}
.supply-name {
	color: #fef08a;
	font-weight: bold;
}
.supply-note {
	margin-top: 4px;
	color: rgba(234, 179, 8, 0.6);
	font-size: 12px;
	font-style: italic;
}
#rsvp {
	position: relative;
	width: 100%;
	max-width: 448px;
	margin: 32px auto 0 auto;
	z-index: 30;
}
#rsvp-dino {
	position: absolute;
	top: -100px;
	right: -40px;
	width: 160px;
	z-index: 20;
	pointer-events: none;
	animation: rise-in 0.8s ease-out 0.3s both;
}
#rsvp-card {
	position: relative;
	z-index: 10;
	padding: 32px;
	border-radius: 16px;
	background-color: rgba(15, 23, 42, 0.6);
	backdrop-filter: blur(24px);
	border: 1px solid rgba(255, 255, 255, 0.1);
	box-shadow: 0 0 50px rgba(0, 0, 0, 0.5);
}
#rsvp-form {
	display: flex;
	flex-direction: column;
	gap: 24px;
}
#rsvp-form label {
	display: block;
	margin: 0 0 8px 4px;
	color: var(--leaf);
	font-size: 12px;
	font-weight: bold;
	text-transform: uppercase;
	letter-spacing: 0.1em;
}
.name-input {
	width: 100%;
	padding: 16px;
	border-radius: 8px;
	border: 1px solid #334155;
	background-color: rgba(30, 41, 59, 0.5);
	color: white;
	outline: none;
}
.name-input.input-error {
	border-color: var(--danger);
	animation: pulse 1s infinite;
}
#confirm-button {
	width: 100%;
	padding: 16px;
	border: none;
	border-radius: 8px;
	background-color: var(--leaf-dark);
	color: white;
	font-weight: bold;
	text-transform: uppercase;
	letter-spacing: 0.15em;
	cursor: pointer;
}
#confirm-button:disabled {
	opacity: 0.6;
	cursor: wait;
}
#rsvp-confirmed {
	text-align: center;
	padding: 32px 0;
}
.check-badge, .warning-badge {
	display: inline-flex;
	align-items: center;
	justify-content: center;
	width: 64px;
	height: 64px;
	margin-bottom: 16px;
	border-radius: 999px;
	font-size: 32px;
}
.check-badge {
	color: var(--leaf);
	background-color: rgba(34, 197, 94, 0.2);
	border: 1px solid rgba(34, 197, 94, 0.5);
}
#rsvp-confirmed > p {
	color: var(--mist);
	font-size: 14px;
}
.link-button {
	margin-top: 24px;
	border: none;
	background: none;
	color: var(--leaf-dark);
	font-size: 12px;
	text-decoration: underline;
	cursor: pointer;
}
#modal-backdrop {
	position: fixed;
	inset: 0;
	z-index: 50;
	display: flex;
	align-items: center;
	justify-content: center;
	padding: 16px;
	background-color: rgba(0, 0, 0, 0.6);
	backdrop-filter: blur(4px);
	animation: fade-in 0.2s;
}
#modal {
	position: relative;
	width: 100%;
	max-width: 384px;
	padding: 24px;
	border-radius: 16px;
	text-align: center;
	background-color: var(--night);
	border: 2px solid var(--danger);
	box-shadow: 0 0 50px rgba(239, 68, 68, 0.4);
	animation: pop-in 0.3s ease-out;
}
.modal-close {
	position: absolute;
	top: 12px;
	right: 12px;
	border: none;
	background: none;
	color: var(--mist);
	font-size: 20px;
	cursor: pointer;
}
.warning-badge {
	color: var(--danger);
	background-color: rgba(239, 68, 68, 0.2);
}
#modal > p {
	margin-bottom: 24px;
	color: #cbd5e1;
}
.warning-text {
	color: #f87171;
	font-weight: bold;
}
.modal-ok {
	width: 100%;
	padding: 12px;
	border: none;
	border-radius: 12px;
	background-color: #dc2626;
	color: white;
	font-weight: bold;
	text-transform: uppercase;
	cursor: pointer;
}
footer {
	width: 100%;
	margin-top: 48px;
	padding: 32px 16px;
	text-align: center;
	color: var(--mist);
	font-size: 14px;
	background-color: rgba(2, 6, 23, 0.6);
	border-top: 1px solid rgba(255, 255, 255, 0.1);
	border-radius: 24px 24px 0 0;
}
#when {
	margin-bottom: 8px;
	color: var(--leaf);
	font-size: 20px;
}
.firefly {
	position: absolute;
	bottom: -10px;
	border-radius: 50%;
	background-color: #fef08a;
	box-shadow: 0 0 10px 2px rgba(250, 204, 21, 0.6);
	animation-name: drift;
	animation-timing-function: linear;
	animation-iteration-count: infinite;
}
.footprint {
	position: absolute;
	z-index: 40;
	font-size: 32px;
	pointer-events: none;
	animation: fade-out 1s forwards;
}
.confetti {
	position: fixed;
	left: 50%;
	top: 60%;
	z-index: 60;
	pointer-events: none;
}
.confetti > i {
	position: absolute;
	width: 8px;
	height: 12px;
	opacity: 0;
	animation: confetti 2.8s cubic-bezier(0.2, 0.6, 0.4, 1) forwards;
}
.shake-screen {
	animation: shake 0.15s infinite;
}
@keyframes pulse {
	50% { opacity: 0.5; }
}
@keyframes fade-in {
	from { opacity: 0; }
}
@keyframes fade-out {
	from { opacity: 0.8; transform: scale(1); }
	to { opacity: 0; transform: scale(1.2); }
}
@keyframes pop-in {
	from { transform: scale(0.5) translateY(100px); }
}
@keyframes rise-in {
	from { transform: translateY(50px); opacity: 0; }
	to { transform: translateY(0); opacity: 1; }
}
@keyframes drift {
	0% { transform: translateY(0) translateX(0); opacity: 0; }
	10% { opacity: 1; }
	50% { transform: translateY(-50vh) translateX(20px); }
	90% { opacity: 1; }
	100% { transform: translateY(-100vh) translateX(-20px); opacity: 0; }
}
@keyframes confetti {
	0% { transform: translate(0, 0) rotate(0); opacity: 1; }
	40% { transform: translate(calc(var(--dx) * 0.8), calc(var(--rise) * -1)) rotate(calc(var(--spin) * 0.4)); opacity: 1; }
	100% { transform: translate(var(--dx), 60vh) rotate(var(--spin)); opacity: 0; }
}
@keyframes shake {
	0% { transform: translate(2px, 1px) rotate(0deg); }
	25% { transform: translate(-2px, -2px) rotate(-1deg); }
	50% { transform: translate(-3px, 2px) rotate(1deg); }
	75% { transform: translate(2px, -1px) rotate(0deg); }
	100% { transform: translate(1px, 2px) rotate(-1deg); }
}
@media (min-width: 768px) {
	#countdown {
		gap: 16px;
	}
	.countdown-value {
		font-size: 36px;
	}
}
@media (max-width: 767px) {
	#rsvp-dino {
		display: none;
	}
}
"#;
