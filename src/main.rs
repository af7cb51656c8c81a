use rusty_cricket::args;
use rusty_cricket::controller::http_handlers;
use rusty_cricket::state::AppState;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = args::args_checks()?;
    let state = AppState::from_args(&args)?;
    let static_dir = args.static_dir.clone();

    info!(
        host = %args.host,
        port = args.port,
        timeout_secs = args.timeout.as_secs(),
        retries = args.retries,
        "starting server"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(state.clone()))
            .configure(http_handlers::configure)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
