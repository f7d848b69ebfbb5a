//! HTTP backend for the alpha-beta visualizer.
//!
//! Clients submit a tree, get back the full trace, and then move a
//! per-session cursor through it. All state lives in an in-memory
//! [`abv_hosting::Lobby`].
//!
//! ## Submodules
//!
//! - [`handlers`] — One async handler per route
//! - [`Config`] — Bind address, worker count and session cap from the environment
pub mod handlers;

mod config;
pub use config::*;

use abv_dto::ApiError;
use abv_hosting::Lobby;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::error::InternalError;
use actix_web::middleware::Logger;
use actix_web::web;

/// Malformed JSON bodies get the same error shape as every other failure.
fn json() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _| {
        let body = HttpResponse::BadRequest().json(ApiError::new(&err));
        InternalError::from_response(err, body).into()
    })
}

/// Mounts every route. Shared by [`run`] and the route tests.
#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(json())
        .route("/health", web::get().to(handlers::health))
        .service(
            web::scope("/sessions")
                .route("", web::post().to(handlers::open))
                .route("/{id}", web::get().to(handlers::cursor))
                .route("/{id}", web::put().to(handlers::replace))
                .route("/{id}", web::delete().to(handlers::close))
                .route("/{id}/trace", web::get().to(handlers::trace))
                .route("/{id}/snapshot", web::get().to(handlers::snapshot))
                .route("/{id}/tree", web::get().to(handlers::tree))
                .route("/{id}/forward", web::post().to(handlers::forward))
                .route("/{id}/backward", web::post().to(handlers::backward))
                .route("/{id}/reset", web::post().to(handlers::reset))
                .route("/{id}/jump/{index}", web::post().to(handlers::jump)),
        );
}

pub async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let lobby = web::Data::new(Lobby::new(config.sessions));
    log::info!(
        "starting {} {} on {} ({} workers, {} sessions max)",
        abv_core::SERVICE_NAME,
        abv_core::SERVICE_VERSION,
        config.bind,
        config.workers,
        config.sessions,
    );
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(lobby.clone())
            .configure(routes)
            .default_service(web::to(handlers::missing))
    })
    .workers(config.workers)
    .bind(&config.bind)?
    .run()
    .await?;
    Ok(())
}
