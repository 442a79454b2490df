//! Helpdesk entry-point: loads settings, seeds example users and serves the
//! REST API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use helpdesk::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use helpdesk::inbound::http::health::HealthState;
use helpdesk::inbound::http::state::HttpState;
use server::{ServerSettings, create_server};

fn config_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("configuration error: {err}"))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os()).map_err(config_error)?;
    // Example data is configured through the environment and config file only.
    let example_data = ExampleDataSettings::load_from_iter([OsString::from("helpdesk")])
        .map_err(config_error)?;

    let http_state = HttpState::in_memory(settings.shape_policy());
    if let Err(err) =
        seed_example_data_on_startup(&example_data, http_state.users_command.clone()).await
    {
        error!(error = %err, "example data seeding failed");
        return Err(std::io::Error::other(err));
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), http_state, &settings)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
