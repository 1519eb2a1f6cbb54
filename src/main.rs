// ABOUTME: Main entry point for the deck-outline program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use deck_outline::config::parse_list;
use deck_outline::{output, utils, Config, OutputFormat, ParserConfig};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse markdown decks into structured slide records
    Parse(ParseArgs),

    /// List the layout chosen for every slide
    Layouts(LayoutsArgs),
}

#[derive(Args)]
struct ParserArgs {
    /// Bullet count above which a slide is split into two columns
    #[arg(long)]
    bullet_threshold: Option<usize>,

    /// Title keywords marking section dividers (comma separated)
    #[arg(long, value_delimiter = ',')]
    section_keywords: Option<Vec<String>>,

    /// Line prefix that starts speaker notes
    #[arg(long)]
    notes_marker: Option<String>,

    /// Treat leading YAML or `%` lines as ordinary slide content
    #[arg(long)]
    no_front_matter: bool,
}

impl ParserArgs {
    fn parser_config(&self, config: &Config) -> anyhow::Result<ParserConfig> {
        let keywords = self
            .section_keywords
            .as_ref()
            .map(|list| parse_list(&list.join(",")));
        let parser_config = config.get_parser_config(
            self.bullet_threshold,
            keywords,
            self.notes_marker.clone(),
            self.no_front_matter.then_some(false),
        );
        parser_config.validate()?;
        Ok(parser_config)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Outline,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Outline => OutputFormat::Outline,
        }
    }
}

#[derive(Args)]
struct ParseArgs {
    /// Markdown file or glob pattern
    #[arg(short, long)]
    input: String,

    /// Output file (single input) or directory (several inputs); stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: FormatArg,

    /// Emit JSON on a single line
    #[arg(long)]
    compact: bool,

    #[command(flatten)]
    parser: ParserArgs,
}

#[derive(Args)]
struct LayoutsArgs {
    /// Markdown file or glob pattern
    #[arg(short, long)]
    input: String,

    #[command(flatten)]
    parser: ParserArgs,
}

fn run_parse(args: &ParseArgs, config: &Config) -> anyhow::Result<()> {
    let parser_config = args.parser.parser_config(config)?;
    let inputs = utils::resolve_inputs(&args.input)?;
    let format = OutputFormat::from(args.format);
    let into_dir = inputs.len() > 1;

    let Some(out_path) = &args.output else {
        return print_decks(&inputs, &parser_config, format, !args.compact);
    };

    if into_dir {
        utils::ensure_directory_exists(out_path)?;
    }

    for input in &inputs {
        let deck = deck_outline::parse_file(input, &parser_config)?;
        let rendered = output::render(&deck, format, !args.compact)?;
        let path = if into_dir {
            utils::output_path_for(input, out_path, format.extension())
        } else {
            out_path.clone()
        };
        output::write_output(&rendered, &path)?;
        println!("Wrote {} slides to {:?}", deck.slides.len(), path);
    }

    Ok(())
}

/// Print decks to stdout. Several JSON decks are wrapped in one array.
fn print_decks(
    inputs: &[PathBuf],
    parser_config: &ParserConfig,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<()> {
    let decks = inputs
        .iter()
        .map(|input| deck_outline::parse_file(input, parser_config))
        .collect::<deck_outline::Result<Vec<_>>>()?;

    match (format, decks.as_slice()) {
        (OutputFormat::Json, [deck]) => println!("{}", output::to_json(deck, pretty)?),
        (OutputFormat::Json, decks) => println!("{}", output::to_json_array(decks, pretty)?),
        (OutputFormat::Outline, decks) => {
            for deck in decks {
                println!("{}", output::to_outline(deck));
            }
        }
    }

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn run_layouts(args: &LayoutsArgs, config: &Config) -> anyhow::Result<()> {
    let parser_config = args.parser.parser_config(config)?;
    let inputs = utils::resolve_inputs(&args.input)?;

    for input in &inputs {
        let deck = deck_outline::parse_file(input, &parser_config)
            .with_context(|| format!("Failed to parse {}", display_name(input)))?;
        for (i, slide) in deck.slides.iter().enumerate() {
            println!(
                "{}:{} {} {}",
                display_name(input),
                i + 1,
                slide.layout(),
                slide.title()
            );
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let result = match &cli.command {
        Some(Commands::Parse(args)) => run_parse(args, &config),
        Some(Commands::Layouts(args)) => run_layouts(args, &config),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
