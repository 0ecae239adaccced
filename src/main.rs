// Chunk: docs/chunks/host_binary - Command-line host for the editor core
//!
//! yeet: load a file into the editor core and report what it sees.
//!
//! ```text
//! yeet [--config FILE] [--log-level LEVEL] <FILE> [--spans] [--lexemes] [--line N] [--pick X,Y]
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use yeet::{report, Config, Dump};
use yeet_buffer::{Editor, Point};
use yeet_syntax::SyntaxTheme;

#[derive(Debug, Parser)]
#[command(name = "yeet", version, about = "Inspect how the yeet core buffers and lexes a file")]
struct Cli {
    /// Config file (default: <config dir>/yeet/config.json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `yeet_buffer=trace`. RUST_LOG wins.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// File to open
    file: PathBuf,

    /// Print every lexeme breakpoint
    #[arg(long)]
    lexemes: bool,

    /// Print every span with its token kind
    #[arg(long)]
    spans: bool,

    /// Print the styled spans of line N (1-based)
    #[arg(long, value_name = "N")]
    line: Option<usize>,

    /// Resolve a pixel position in an unscrolled view to an offset
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    pick: Option<Point>,
}

fn parse_point(arg: &str) -> Result<Point, String> {
    let (x, y) = arg
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", arg))?;
    let coord = |s: &str| {
        s.trim()
            .parse::<f32>()
            .map_err(|err| format!("bad coordinate '{}': {}", s, err))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    init_logging(cli.log_level.as_deref().unwrap_or(&config.log_level));

    let mut theme = SyntaxTheme::catppuccin_mocha();
    theme
        .apply_overrides(&config.theme)
        .context("invalid theme in config")?;

    let mut editor = Editor::with_options(config.buffer_options());
    let id = editor
        .open(&cli.file)
        .with_context(|| format!("could not open {}", cli.file.display()))?;
    editor.tick();

    let dump = Dump {
        lexemes: cli.lexemes,
        spans: cli.spans,
        line: cli.line,
        pick: cli.pick,
    };
    let stdout = io::stdout();
    report(&editor, id, &theme, &config.metrics(), &dump, &mut stdout.lock())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("yeet: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("12.5, 30"), Ok(Point::new(12.5, 30.0)));
        assert_eq!(parse_point("-4,0"), Ok(Point::new(-4.0, 0.0)));
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,1").is_err());
    }
}
