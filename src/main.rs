use anyhow::Result;
use clap::Parser;

mod cli;
mod extractor;
mod fetcher;
mod localizer;
mod normalizer;
mod rewriter;
mod store;

use cli::LocalizeCommand;
use localizer::CdnLocalizer;

#[tokio::main]
async fn main() -> Result<()> {
    let args = match LocalizeCommand::try_parse() {
        Ok(args) => args,
        Err(e)
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            e.exit()
        }
        Err(e) => {
            // Usage and parse errors exit with code 1
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let localizer = CdnLocalizer::new(
        &args.host_prefix,
        &args.asset_dir,
        &args.user_agent,
        args.timeout,
    )?;

    localizer.localize_file(&args.html_file).await?;

    println!("✅ HTML file updated successfully!");
    Ok(())
}
