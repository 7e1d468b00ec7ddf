use crate::app::App;
use crate::config::Config;
use crate::responses::json_error_response;
use crate::router::{handle, is_api_path};
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod app;
mod auth;
mod catalog;
mod config;
mod db;
mod domain;
mod engine;
mod errors;
mod handlers;
mod params;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let app = match App::start(config) {
        Ok(app) => app,
        Err(e) => {
            error!("Startup failed: {e}");
            std::process::exit(1);
        }
    };

    let addr = app.config.addr;
    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(app.config.workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status() >= 500 {
                    error!(%method, %path, "{err}");
                } else {
                    warn!(%method, %path, "{err}");
                }
                if is_api_path(&path) {
                    json_error_response(&err)
                } else {
                    templates::html_error_response(err)
                }
            }
        };

        info!(%method, %path, status = resp.status().as_u16(), "request");
        resp
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
