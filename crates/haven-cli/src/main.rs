use std::sync::Arc;

use eyre::Result;
use haven_bedrock::converse::BedrockGenerator;
use haven_cli::{aws, config, session};
use haven_engine::controller::ConversationController;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, created) = if config::has_config() {
        (config::load_config()?, false)
    } else {
        (config::HavenConfig::default(), true)
    };

    init_tracing(config.log_json);

    if created {
        let path = config::save_config(&config)?;
        tracing::info!(path = %path.display(), "wrote default config");
    }

    tracing::info!(
        region = %config.region,
        model_id = %config.model_id,
        credentials = %config.credentials.describe(),
        "starting intake"
    );

    let sdk_config = aws::build_aws_config(&config.region, &config.credentials).await;
    let generator = Arc::new(BedrockGenerator::new(&sdk_config, config.model_id.clone()));
    let mut controller = ConversationController::new(generator, config.engine.clone());

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    session::run(&mut controller, input, &mut out).await
}

/// Logs go to stderr so they never interleave with the conversation.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
