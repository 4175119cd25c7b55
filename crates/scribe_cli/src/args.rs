use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Fetch Advent of Code puzzle pages and convert them to MDX.
#[derive(Debug, Parser)]
#[command(name = "advent-scribe", version, about)]
pub struct Cli {
    /// Log at debug level instead of info.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a puzzle page, stage its article, and convert it to MDX.
    Fetch {
        /// Event year of the puzzle.
        #[arg(long)]
        year: u16,

        /// Day of the puzzle, 1 through 25.
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,

        /// Origin to fetch from.
        #[arg(long, default_value = "https://adventofcode.com")]
        base_url: String,

        /// Path for the staged article HTML.
        #[arg(long, default_value = "article.html")]
        staging: PathBuf,

        /// Path for the converted MDX document.
        #[arg(short, long, default_value = "output.mdx")]
        output: PathBuf,
    },
    /// Convert a staged article HTML file to MDX.
    Convert {
        /// Path of the source HTML file.
        #[arg(short, long, default_value = "article.html")]
        input: PathBuf,

        /// Path for the converted MDX document.
        #[arg(short, long, default_value = "output.mdx")]
        output: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_defaults_match_contract() {
        let cli = Cli::try_parse_from(["advent-scribe", "convert"]).expect("parses");
        let Command::Convert { input, output } = cli.command else {
            panic!("expected convert subcommand");
        };
        assert_eq!(input, PathBuf::from("article.html"));
        assert_eq!(output, PathBuf::from("output.mdx"));
    }

    #[test]
    fn fetch_parses_year_day_and_defaults() {
        let cli = Cli::try_parse_from([
            "advent-scribe",
            "fetch",
            "--year",
            "2019",
            "--day",
            "18",
        ])
        .expect("parses");
        let Command::Fetch {
            year,
            day,
            base_url,
            staging,
            output,
        } = cli.command
        else {
            panic!("expected fetch subcommand");
        };
        assert_eq!(year, 2019);
        assert_eq!(day, 18);
        assert_eq!(base_url, "https://adventofcode.com");
        assert_eq!(staging, PathBuf::from("article.html"));
        assert_eq!(output, PathBuf::from("output.mdx"));
    }

    #[test]
    fn fetch_rejects_out_of_range_day() {
        let result = Cli::try_parse_from([
            "advent-scribe",
            "fetch",
            "--year",
            "2019",
            "--day",
            "26",
        ]);
        assert!(result.is_err());
    }
}
