use actix_web::{web, App, HttpServer};
use backend::config::AppConfig;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::token_auth::TokenAuth;
use backend::routes;
use backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting backend on http://{}:{}",
        config.host, config.port
    );

    // The signing secret is loaded once here and shared read-only with
    // every request through AppState.
    let data = web::Data::new(AppState::new(config.security.clone()));

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .service(
                web::scope("/api/v1")
                    .wrap(TokenAuth)
                    .configure(routes::api_v1),
            )
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
