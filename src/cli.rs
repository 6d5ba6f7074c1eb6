use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Anchor every heading and splice a table of contents before the first one.
    Annotate(AnnotateArgs),
    /// Print the heading records of a document.
    Headings(HeadingsArgs),
    /// Print only the rendered table of contents.
    Toc(TocArgs),
}

#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Input HTML file (`-` for stdin).
    #[arg(long)]
    pub input: String,

    /// Output HTML file.
    #[arg(long)]
    pub out: String,

    /// YAML file with table of contents options.
    #[arg(long)]
    pub config: Option<String>,

    /// Overwrite the output file if it already exists.
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct HeadingsArgs {
    /// Input HTML file (`-` for stdin).
    #[arg(long)]
    pub input: String,

    /// YAML file with table of contents options.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value_t = HeadingsFormat::Json)]
    pub format: HeadingsFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeadingsFormat {
    /// Pretty-printed JSON array.
    Json,
    /// One JSON record per line.
    Jsonl,
}

#[derive(Debug, Args)]
pub struct TocArgs {
    /// Input HTML file (`-` for stdin).
    #[arg(long)]
    pub input: String,

    /// YAML file with table of contents options.
    #[arg(long)]
    pub config: Option<String>,
}
