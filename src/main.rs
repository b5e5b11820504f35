use fortisure_site::configuration::get_configuration;
use fortisure_site::startup::Application;
use fortisure_site::telemetry::get_subscriber;
use fortisure_site::telemetry::init_subscriber;

/// Initialise telemetry, load config, and start the server
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("fortisure-site", "info", std::io::stdout);
    init_subscriber(subscriber)?;

    let cfg = get_configuration()?;

    let app = Application::build(cfg).await?;
    tracing::info!("listening on port {}", app.get_port());
    app.run_until_stopped().await?;

    Ok(())
}
