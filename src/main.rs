use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use multitool::cli::output::{self, OutputFormat};
use multitool::config::Overrides;
use multitool::processor::{is_stdin, STDIN_LABEL};
use multitool::{tokenize, CaseStyle, Config, LineOp, Operation, Processor, TransformResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "multitool")]
#[command(version, about = "Case conversion and line transforms for developers", long_about = None)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, global = true)]
    format: Option<OutputFormat>,

    /// Transform the text exactly as read, including a final newline
    #[arg(long, global = true)]
    raw: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert text to a naming convention
    Case {
        /// camel, snake, kebab, title, upper or lower
        style: CaseStyle,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Sort, reverse, trim or deduplicate lines
    Lines {
        /// sort-az, sort-za, reverse, remove-empty, trim or dedup
        op: LineOp,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Apply any operation by id (see `list`)
    Run {
        operation: Operation,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Show the words snake_case and kebab-case would use
    Tokens {
        /// Files to read (stdin when omitted)
        #[arg(value_name = "FILES")]
        files: Vec<PathBuf>,
    },
    /// List available operations
    List,
}

#[derive(clap::Args, Debug)]
struct InputArgs {
    /// Files to transform (stdin when omitted or `-`)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Rewrite the files in place
    #[arg(short, long)]
    write: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "multitool", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = Config::load(Overrides {
        format: cli.format,
        no_color: cli.no_color,
        raw: cli.raw,
    })?;
    if !config.color {
        colored::control::set_override(false);
    }

    match command {
        Commands::Case { style, input } => run(Operation::Case(style), input, &config),
        Commands::Lines { op, input } => run(Operation::Lines(op), input, &config),
        Commands::Run { operation, input } => run(operation, input, &config),
        Commands::Tokens { files } => show_tokens(&files, &config),
        Commands::List => output::print_operations(&Operation::all(), config.color, config.format),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(operation: Operation, input: InputArgs, config: &Config) -> Result<()> {
    let processor = Processor::new(operation, config);

    if input.write && (input.files.is_empty() || input.files.iter().any(|p| is_stdin(p))) {
        anyhow::bail!("--write needs at least one file to rewrite, and stdin cannot be rewritten");
    }

    let outcomes = if input.files.is_empty() {
        vec![processor.process_reader(io::stdin().lock(), STDIN_LABEL)]
    } else {
        processor.process_files(&input.files, input.write)
    };

    let mut results: Vec<TransformResult> = Vec::new();
    let mut failed = 0;
    for outcome in outcomes {
        match outcome {
            Ok(result) => results.push(result),
            Err(e) => {
                eprintln!("Error: {:#}", e);
                failed += 1;
            }
        }
    }

    if input.write && config.format == OutputFormat::Text {
        let changed = results.iter().filter(|r| r.changed).count();
        output::print_write_summary(changed, &input.files, config.color);
    } else {
        output::print_results(&results, config.color, config.format)?;
    }

    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn show_tokens(files: &[PathBuf], config: &Config) -> Result<()> {
    let mut sources = Vec::new();
    let mut failed = 0;

    if files.is_empty() {
        let text = read_source(Path::new("-"))?;
        sources.push((STDIN_LABEL.to_string(), words(&text)));
    }

    for path in files {
        match read_source(path) {
            Ok(text) => {
                let label = if is_stdin(path) {
                    STDIN_LABEL.to_string()
                } else {
                    path.display().to_string()
                };
                sources.push((label, words(&text)));
            }
            Err(e) => {
                eprintln!("Error: {:#}", e);
                failed += 1;
            }
        }
    }

    output::print_tokens(&sources, config.color, config.format)?;

    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        return io::read_to_string(io::stdin().lock())
            .with_context(|| format!("Failed to read {}", STDIN_LABEL));
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

fn words(text: &str) -> Vec<String> {
    tokenize(text).iter().map(|t| t.as_str().to_string()).collect()
}
