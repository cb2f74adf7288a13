use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use healthbot::shell::{Console, Session};
use healthbot::{BotConfig, ResponseSelector};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so replies on stdout stay clean
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("healthbot=info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting tracing subscriber")?;

    let config = BotConfig::from_env()?;
    tracing::info!("HealthBot booting: {:?}", config);

    let knowledge = config
        .load_knowledge()
        .context("loading knowledge base")?;
    tracing::info!(
        "Knowledge ready: {} conditions, {} weighted phrases",
        knowledge.conditions.len(),
        knowledge.weights.len()
    );

    let selector = ResponseSelector::new(Arc::new(knowledge));
    let session = Session::new(config.signed_in, config.history_limit);
    let mut console = Console::new(selector, session, config.picker());

    console.run(tokio::io::stdin(), tokio::io::stdout()).await?;

    tracing::info!("HealthBot stopped.");
    Ok(())
}
