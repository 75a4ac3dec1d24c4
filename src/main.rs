use anyhow::Result;
use converse::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
