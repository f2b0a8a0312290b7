use axum::{
	extract::FromRef,
	routing::post,
	Router,
};
use axum_sqlx_tx::{State, Tx};
use sqlx::{query, Postgres, postgres::PgPoolOptions};
use std::net::SocketAddr;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

mod guests;

#[macro_export]
macro_rules! print_and_ret{
	($ret_str:literal) => {
		print_and_ret!(axum::http::StatusCode::INTERNAL_SERVER_ERROR, $ret_str)
	};
	($err:expr, $ret_str:literal) => {{
		let msg = format!($ret_str);
		tracing::error!("{msg}");
		return Err(($err, msg));
	}};
}

#[derive(Clone)]
pub struct AppState {
	pub tx_state: State<Postgres>
}

impl FromRef<AppState> for State<Postgres> {
	fn from_ref(input: &AppState) -> Self {
		input.tx_state.clone()
	}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt::init();

	macro_rules! dotenv_num{
		($key:expr, $default:expr, $type:ident) => {
			dotenv::var($key).ok()
				.and_then(|v| v.parse::<$type>().ok())
				.unwrap_or($default)
		}
	}

	let backend_port = dotenv_num!("BACKEND_PORT", 8080, u16);
	let num_connections = dotenv_num!("DB_CONNECTIONS", 10, u32);

	let db_name = dotenv::var("DB_NAME").unwrap_or_else(|_| "dino_party".into());
	let db_host = dotenv::var("DB_HOST").unwrap_or_else(|_| "localhost".into());
	let db_user = dotenv::var("DB_USER")?;
	let frontend_dir = dotenv::var("FRONTEND_DIR").unwrap_or_else(|_| "frontend/dist".into());

	if std::fs::metadata(&frontend_dir).is_err() {
		warn!("FRONTEND_DIR ({frontend_dir}) doesn't exist; only /api will work until it's built");
	}

	info!("Read .env...");

	let pool = PgPoolOptions::new()
		.max_connections(num_connections)
		.connect(&format!("postgresql://{db_user}@{db_host}/{db_name}"))
		.await?;

	info!("Connected to postgres...");

	// No unique constraint on name: if two people are both called 'Ana', they both get to come
	query(guests::CREATE_TABLE)
		.execute(&pool)
		.await?;

	info!("Set up {} table in DB...", guests::GUESTS_TABLE);

	let (tx_state, tx_layer) = Tx::<Postgres>::setup(pool);

	// anything that isn't the api is the page itself, and it's all one page, so unknown paths just
	// get index.html
	let index = format!("{frontend_dir}/index.html");
	let site = ServeDir::new(&frontend_dir)
		.fallback(ServeFile::new(index));

	let app = Router::new()
		.route("/api/guests", post(guests::add_guest))
		.fallback_service(site)
		.layer(tx_layer)
		.with_state(AppState { tx_state });

	let addr = SocketAddr::from(([127, 0, 0, 1], backend_port));
	let listener = tokio::net::TcpListener::bind(addr).await?;

	info!("Serving axum on {addr}...");

	axum::serve(listener, app).await?;

	Ok(())
}
