use offside_club::configuration::get_configuration;
use offside_club::startup::Application;
use offside_club::telemetry::get_subscriber;
use offside_club::telemetry::init_subscriber;

/// Initialise telemetry, load config, and start the server
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("offside-club", "info", std::io::stdout);
    init_subscriber(subscriber);

    let cfg = get_configuration()?;
    let app = Application::build(cfg).await?;
    tracing::info!("listening on port {}", app.get_port());
    app.run_until_stopped().await?;

    Ok(())
}
