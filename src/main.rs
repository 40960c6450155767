use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use chaharbarg_backend::notify::telegram::TelegramNotifier;
use chaharbarg_backend::notify::{MatchNotifier, NoopNotifier};
use chaharbarg_backend::state::app_state::AppState;
use chaharbarg_backend::{routes, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let notifier: Arc<dyn MatchNotifier> = match TelegramNotifier::from_env() {
        Some(telegram) => {
            tracing::info!("telegram match notifications enabled");
            Arc::new(telegram)
        }
        None => Arc::new(NoopNotifier),
    };

    tracing::info!(host = %host, port, "starting chaharbarg backend");

    let data = web::Data::new(AppState::new(notifier));

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
