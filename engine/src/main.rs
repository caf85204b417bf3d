use anyhow::Result;
use engine::config::{Cli, PipelineSettings};
use engine::pipeline;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Arguments are checked before anything touches the filesystem.
    let cli = Cli::parse_args(std::env::args_os())?;

    // stdout carries the script, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level())
        .init();

    let settings = PipelineSettings::from(cli);
    tracing::info!("Client: {}", settings.client);

    let script = pipeline::run(&settings).await?;
    println!("{}", script);

    Ok(())
}
