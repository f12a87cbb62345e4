use crate::error::MultitoolError;
use crate::ops::Operation;
use crate::TransformResult;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = MultitoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(MultitoolError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonTokens<'a> {
    source: &'a str,
    tokens: &'a [String],
}

pub fn print_results(
    results: &[TransformResult],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_results(results, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json(&results),
    }
}

fn print_text_results(results: &[TransformResult], colored_output: bool) {
    // A single source is piped straight through, byte for byte.
    if let [only] = results {
        print!("{}", only.output);
        return;
    }

    for result in results {
        print_header(&result.source, colored_output);
        if result.output.ends_with('\n') {
            print!("{}", result.output);
        } else {
            println!("{}", result.output);
        }
    }
}

pub fn print_tokens(
    sources: &[(String, Vec<String>)],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (source, tokens) in sources {
                if sources.len() > 1 {
                    print_header(source, colored_output);
                }
                for (i, token) in tokens.iter().enumerate() {
                    if colored_output {
                        println!("{} {}", format!("{:>4}", i).dimmed(), token.cyan());
                    } else {
                        println!("{:>4} {}", i, token);
                    }
                }
            }
            Ok(())
        }
        OutputFormat::Json => {
            let json: Vec<JsonTokens> = sources
                .iter()
                .map(|(source, tokens)| JsonTokens { source, tokens })
                .collect();
            print_json(&json)
        }
    }
}

pub fn print_operations(
    operations: &[Operation],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        let infos: Vec<_> = operations.iter().map(Operation::info).collect();
        return print_json(&infos);
    }

    let mut current = None;
    for op in operations {
        let info = op.info();
        if current != Some(info.category) {
            current = Some(info.category);
            if colored_output {
                println!("\n{}", info.category.to_string().bold().underline());
            } else {
                println!("\n{}", info.category);
            }
        }

        if colored_output {
            println!(
                "  {:<24} {}",
                info.id.green().bold(),
                info.description.dimmed()
            );
        } else {
            println!("  {:<24} {}", info.id, info.description);
        }
    }
    Ok(())
}

fn print_header(source: &str, colored_output: bool) {
    if colored_output {
        println!("\n{}", source.bold().underline());
    } else {
        println!("\n{}", source);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_write_summary(total_changed: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_changed == 0 {
        if colored {
            println!("{}", "No changes needed!".green().bold());
        } else {
            println!("No changes needed!");
        }
    } else {
        let file_word = if total_changed == 1 { "file" } else { "files" };
        if colored {
            println!(
                "{} {} {} rewritten ({} checked)",
                "✓".green().bold(),
                total_changed.to_string().green().bold(),
                file_word,
                files.len()
            );
        } else {
            println!(
                "✓ {} {} rewritten ({} checked)",
                total_changed,
                file_word,
                files.len()
            );
        }
    }
}
