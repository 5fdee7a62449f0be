use anyhow::Result;
use bubbletea_rs::Program;
use tracing_subscriber::EnvFilter;

use pomotea::App;

#[tokio::main]
async fn main() -> Result<()> {
    // Silent unless RUST_LOG asks for output; events go to stderr so they
    // never mix into the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let program = Program::<App>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()?;

    program.run().await?;
    Ok(())
}
