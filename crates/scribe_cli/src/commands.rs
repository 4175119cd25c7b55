use std::fs;
use std::path::Path;

use anyhow::Context;
use scribe_engine::{
    decode_page, extract_article_html, puzzle_url, write_atomic, BlockingFetcher, ConvertError,
    Converter, FetchSettings, MdxConverter, ReqwestFetcher,
};
use scribe_logging::scribe_info;

/// Fetches the puzzle page for `year`/`day`, stages its article element as
/// HTML, and converts the staged file to MDX.
pub fn run_fetch(
    year: u16,
    day: u8,
    base_url: &str,
    staging: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let url = puzzle_url(base_url, year, day)?;
    scribe_info!("fetching {url}");

    let fetcher = BlockingFetcher::new(ReqwestFetcher::new(FetchSettings::default()));
    let page = fetcher.fetch(url.as_str())?;

    let decoded = decode_page(&page.bytes, page.content_type.as_deref())?;
    let article = extract_article_html(&decoded.text).ok_or(ConvertError::NoArticle)?;
    write_atomic(staging, &article)
        .with_context(|| format!("failed to stage article at `{}`", staging.display()))?;
    scribe_info!("staged article at {}", staging.display());

    run_convert(staging, output)
}

/// Converts a staged article HTML file to MDX and removes the staging file
/// once the output is safely written.
pub fn run_convert(input: &Path, output: &Path) -> anyhow::Result<()> {
    let html = fs::read_to_string(input)
        .with_context(|| format!("failed to read input file `{}`", input.display()))?;
    let markdown = MdxConverter.convert(&html)?;
    write_atomic(output, &markdown)
        .with_context(|| format!("failed to write output file `{}`", output.display()))?;
    fs::remove_file(input)
        .with_context(|| format!("failed to remove staging file `{}`", input.display()))?;

    println!(
        "Successfully converted {} to {}",
        input.display(),
        output.display()
    );
    Ok(())
}
