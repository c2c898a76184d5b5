use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use block_splitter::{split_file, strip_whitespace, SplitOptions, SplitOutput, Strategy, SPLIT_DEFAULTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Split a PDF or text document into copyable blocks.
#[derive(Parser, Debug)]
#[command(name = "split_cli", version, about)]
struct Cli {
    /// Document to split (.pdf or a text file).
    path: String,

    /// auto, blank_lines, sentences, paragraphs or length.
    #[arg(long, short, env = "SPLIT_STRATEGY", default_value = "auto")]
    strategy: Strategy,

    /// Encoding hint for text files (utf-8, shift_jis, windows-1252, utf-16le, utf-16be).
    #[arg(long, env = "SPLIT_ENCODING")]
    encoding: Option<String>,

    /// Remove all whitespace and line breaks from every block.
    #[arg(long)]
    strip_whitespace: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Target chunk size of the `length` strategy.
    #[arg(long, default_value_t = SPLIT_DEFAULTS.chunk_chars)]
    chunk_chars: usize,

    /// Lines shorter than this are merged by the `paragraphs` strategy.
    #[arg(long, default_value_t = SPLIT_DEFAULTS.continuation_chars)]
    continuation_chars: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut options = SplitOptions { encoding: cli.encoding.clone(), ..Default::default() };
    options.params.chunk_chars = cli.chunk_chars;
    options.params.continuation_chars = cli.continuation_chars;

    let mut output = split_file(&cli.path, cli.strategy, &options)
        .with_context(|| format!("failed to split {}", cli.path))?;
    if cli.strip_whitespace {
        for block in &mut output.blocks {
            block.text = strip_whitespace(&block.text);
            block.char_count = block.text.chars().count();
        }
    }

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Text => print_text(&output),
    }
    Ok(())
}

fn print_text(output: &SplitOutput) {
    if output.blocks.is_empty() {
        eprintln!("no text blocks found; try another --strategy");
    }
    for block in &output.blocks {
        println!("--- {}", block.header());
        println!("{}", block.text);
    }
    let stats = &output.document.stats;
    println!("---");
    println!("blocks: {}  chars: {}  lines: {}", stats.block_count, stats.char_count, stats.line_count);
}
