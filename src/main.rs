use anyhow::Result;
use banter::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
