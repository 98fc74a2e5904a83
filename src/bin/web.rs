//! Single binary web server: HTML page at /, static assets from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT,
//! SESSION_TTL_HOURS, CLEANUP_INTERVAL_MINUTES.

use actix_files::Files;
use actix_web::{web::Data, App, HttpServer};
use volley_draft_web::{web, AppConfig, SessionStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(SessionStore::new());

    // Background task: periodically remove sessions past the inactivity timeout
    let state_cleanup = state.clone();
    let (interval_every, ttl) = (config.cleanup_interval, config.session_ttl);
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(interval_every);
        loop {
            interval.tick().await;
            match state_cleanup.remove_inactive(ttl) {
                Ok(0) => {}
                Ok(removed) => log::info!(
                    "Cleaned up {} inactive session(s) (no activity for {}h)",
                    removed,
                    ttl.as_secs() / 3600
                ),
                Err(e) => log::warn!("Session cleanup skipped: {}", e),
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(web::configure)
            .service(Files::new("/static", "static"))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
