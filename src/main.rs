use crate::app_state::AppState;
use crate::config::load_settings;
use crate::handoff::LogSink;
use crate::router::handle;
use crate::seed::SeedData;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod domain;
mod errors;
mod forms;
mod handlers;
mod handoff;
mod responses;
mod router;
mod seed;
mod sessions;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = match load_settings() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "configuration failed");
            std::process::exit(1);
        }
    };

    let seed = match SeedData::load() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "seed data failed to load");
            std::process::exit(1);
        }
    };

    let addr = settings.bind_addr;
    let workers = settings.max_workers;
    let state = AppState::new(settings, seed, Box::new(LogSink), Box::new(LogSink));

    tracing::info!(%addr, workers, "starting server");

    let server = Server::bind(&addr).max_workers(workers);
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                tracing::error!(error = %err, "request failed");
            }
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down");
}
