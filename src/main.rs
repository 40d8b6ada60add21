use clap::Parser;
use limerick_gen::domain::ports::ConfigProvider;
use limerick_gen::utils::{logger, validation::Validate};
use limerick_gen::{CliConfig, Console, DatamuseClient, HttpNounList, RhymeClient, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let rhymes = DatamuseClient::from_config(&settings)?;
    let nouns = HttpNounList::from_config(&settings)?;
    let client = RhymeClient::from_config(rhymes, nouns, &settings);

    let rng = match settings.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let console = Console::new(std::io::stdin().lock(), std::io::stdout());
    let session = Session::new(client, console, rng);

    match session.run().await {
        Ok(state) => {
            tracing::info!("Session finished after {} limerick(s)", state.rounds_played);
        }
        Err(e) => {
            tracing::error!("❌ Session failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
