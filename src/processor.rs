use crate::ops::Operation;
use crate::{Config, TransformResult};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub const STDIN_LABEL: &str = "<stdin>";

/// `-` on the command line stands for stdin.
pub fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// Applies one operation to text from files or a reader.
pub struct Processor {
    operation: Operation,
    preserve_trailing_newline: bool,
}

impl Processor {
    pub fn new(operation: Operation, config: &Config) -> Self {
        Self {
            operation,
            preserve_trailing_newline: config.preserve_trailing_newline,
        }
    }

    pub fn transform_text(&self, input: &str) -> String {
        if self.preserve_trailing_newline {
            if let Some(body) = input.strip_suffix('\n') {
                let mut output = self.operation.apply(body);
                output.push('\n');
                return output;
            }
        }
        self.operation.apply(input)
    }

    pub fn process_file(&self, path: &Path, write: bool) -> Result<TransformResult> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let result = self.transform_source(path.display().to_string(), &content);

        if write && result.changed {
            fs::write(path, &result.output)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            log::info!("Rewrote {} ({})", path.display(), self.operation);
        }

        Ok(result)
    }

    /// Process every path in parallel; results keep the order of `paths`.
    /// A `-` entry is read from stdin and never written back.
    pub fn process_files(&self, paths: &[PathBuf], write: bool) -> Vec<Result<TransformResult>> {
        paths
            .par_iter()
            .map(|path| {
                if is_stdin(path) {
                    self.process_reader(io::stdin().lock(), STDIN_LABEL)
                } else {
                    self.process_file(path, write)
                }
            })
            .collect()
    }

    pub fn process_reader<R: Read>(&self, mut reader: R, label: &str) -> Result<TransformResult> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .with_context(|| format!("Failed to read {}", label))?;

        Ok(self.transform_source(label.to_string(), &content))
    }

    fn transform_source(&self, source: String, content: &str) -> TransformResult {
        log::debug!(
            "Applying {} to {} ({} bytes)",
            self.operation,
            source,
            content.len()
        );

        let output = self.transform_text(content);
        let changed = output != content;

        TransformResult {
            source,
            operation: self.operation,
            output,
            changed,
        }
    }
}
