use pdflens::app;
use pdflens::config::Config;
use std::env;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if env::args().len() > 1 {
        eprintln!(
            "PdfLens es interactivo y no acepta argumentos. Ejecuta solo `cargo run` o el binario sin parámetros."
        );
        std::process::exit(1);
    }

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // RUST_LOG tiene prioridad sobre PDFLENS_LOG.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    config.color.apply();

    app::run(config).await
}
