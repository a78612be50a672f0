use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(
    name = "pubmed-affil",
    version,
    about = "Fetch research papers from the PubMed API",
    long_about = "Search PubMed and list the articles that have at least one author \
                  affiliated with a pharmaceutical or biotech organisation"
)]
struct Cli {
    #[command(flatten)]
    find: commands::find::Find,

    /// Enable debug outputs
    #[arg(short, long)]
    debug: bool,

    /// API key for NCBI E-utilities (increases rate limit)
    #[arg(long, env = "NCBI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "pubmed-affil")]
    tool: String,
}

fn init_tracing(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    cli.find
        .execute_with_config(
            cli.api_key.as_deref(),
            cli.email.as_deref(),
            &cli.tool,
            cli.debug,
        )
        .await
}
