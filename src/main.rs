use dotenvy::dotenv;
use tracing::{error, info};

use edunav::router::init_router;
use edunav::state::init_app_state;
use edunav_config::{LoggingConfig, ServerConfig};
use edunav_observability::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_logging(&LoggingConfig::from_env());

    let state = match init_app_state() {
        Ok(state) => state,
        Err(err) => {
            error!(error = %format!("{:#}", err), "Failed to initialize application state");
            return Err(err);
        }
    };
    let app = init_router(state);

    let server = ServerConfig::from_env();
    let address = server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);
    axum::serve(listener, app).await?;

    Ok(())
}
