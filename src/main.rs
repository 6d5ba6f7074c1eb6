use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    pagetoc::logging::init().context("init logging")?;

    let cli = pagetoc::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        pagetoc::cli::Command::Annotate(args) => {
            pagetoc::commands::annotate(args).context("annotate")?;
        }
        pagetoc::cli::Command::Headings(args) => {
            pagetoc::commands::headings(args).context("headings")?;
        }
        pagetoc::cli::Command::Toc(args) => {
            pagetoc::commands::toc(args).context("toc")?;
        }
    }

    Ok(())
}
