/// Command line options shared by binaries that load `TicketingConfig`
#[derive(clap::Args, Debug, Clone)]
pub struct Args {
    /// Path to .env file (e.g., .env.testnet)
    #[arg(short, long, default_value = ".env", global = true)]
    pub env_file: String,
}
