use artisave_cli::{ArtisaveCli, CliArgs};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let cli = ArtisaveCli::from_args("artisave", &args)?;
    cli.run(args).await?;
    Ok(())
}
