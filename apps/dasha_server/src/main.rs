use dasha_server::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = jyotish_config::load_server_settings()?;
    match &settings.source {
        Some(path) => log::info!("Loaded settings from {}", path.display()),
        None => log::info!("No server.toml found, using defaults"),
    }
    log::debug!("{:?}", settings);

    server::run(settings).await
}
