use std::fs::OpenOptions;
use std::io::{Read as _, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::cli::{AnnotateArgs, HeadingsArgs, HeadingsFormat, TocArgs};
use crate::config::TocOptions;
use crate::formats::HeadingRecord;

pub fn annotate(args: AnnotateArgs) -> anyhow::Result<()> {
    let out_path = PathBuf::from(&args.out);
    if out_path.exists() && !args.force {
        anyhow::bail!("annotated output already exists: {}", out_path.display());
    }

    let options = load_options(args.config.as_deref())?;
    let html = read_input(&args.input)?;

    let annotated = crate::annotate::annotate(&html, &options);
    tracing::info!(
        input = %args.input,
        headings = annotated.headings.len(),
        "annotated"
    );

    if let Some(parent) = out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }

    let mut file_options = OpenOptions::new();
    file_options.write(true);
    if args.force {
        file_options.create(true).truncate(true);
    } else {
        file_options.create_new(true);
    }
    let mut out = file_options
        .open(&out_path)
        .with_context(|| format!("open annotated output: {}", out_path.display()))?;
    out.write_all(annotated.html.as_bytes())
        .with_context(|| format!("write annotated output: {}", out_path.display()))?;
    out.flush().context("flush annotated output")?;

    Ok(())
}

pub fn headings(args: HeadingsArgs) -> anyhow::Result<()> {
    let options = load_options(args.config.as_deref())?;
    let html = read_input(&args.input)?;
    let records = crate::annotate::headings(&html, &options);
    tracing::debug!(headings = records.len(), "collected headings");

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    write_headings(&mut stdout, &records, args.format)?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

pub fn toc(args: TocArgs) -> anyhow::Result<()> {
    let options = load_options(args.config.as_deref())?;
    let html = read_input(&args.input)?;
    let annotated = crate::annotate::annotate(&html, &options);

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    stdout
        .write_all(annotated.toc.as_bytes())
        .context("write toc to stdout")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

fn write_headings(
    out: &mut impl std::io::Write,
    records: &[HeadingRecord],
    format: HeadingsFormat,
) -> anyhow::Result<()> {
    match format {
        HeadingsFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records).context("serialize headings")?;
            out.write_all(b"\n").context("write newline")?;
        }
        HeadingsFormat::Jsonl => {
            for record in records {
                serde_json::to_writer(&mut *out, record).context("serialize heading record")?;
                out.write_all(b"\n").context("write newline")?;
            }
        }
    }
    Ok(())
}

fn load_options(config: Option<&str>) -> anyhow::Result<TocOptions> {
    TocOptions::load_or_default(config.map(Path::new)).context("load toc options")
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("read html from stdin")?;
        return Ok(html);
    }
    std::fs::read_to_string(input).with_context(|| format!("read html: {input}"))
}
