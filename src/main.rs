use worklogger::commands::Cli;
use worklogger::libs::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::menu().await
}
