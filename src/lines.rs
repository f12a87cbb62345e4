use crate::error::MultitoolError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Whole-document operations over `\n`-separated lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineOp {
    SortAscending,
    SortDescending,
    Reverse,
    RemoveEmpty,
    Trim,
    RemoveDuplicates,
}

impl LineOp {
    pub const ALL: [LineOp; 6] = [
        LineOp::SortAscending,
        LineOp::SortDescending,
        LineOp::Reverse,
        LineOp::RemoveEmpty,
        LineOp::Trim,
        LineOp::RemoveDuplicates,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LineOp::SortAscending => "sort-az",
            LineOp::SortDescending => "sort-za",
            LineOp::Reverse => "reverse",
            LineOp::RemoveEmpty => "remove-empty",
            LineOp::Trim => "trim",
            LineOp::RemoveDuplicates => "dedup",
        }
    }
}

impl FromStr for LineOp {
    type Err = MultitoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "sort-az" | "sort" | "sort-asc" => Ok(LineOp::SortAscending),
            "sort-za" | "sort-desc" => Ok(LineOp::SortDescending),
            "reverse" | "reverse-lines" => Ok(LineOp::Reverse),
            "remove-empty" | "remove-empty-lines" | "strip-empty" => Ok(LineOp::RemoveEmpty),
            "trim" | "trim-lines" => Ok(LineOp::Trim),
            "dedup" | "unique" | "remove-duplicates" | "remove-duplicate-lines" => {
                Ok(LineOp::RemoveDuplicates)
            }
            _ => Err(MultitoolError::UnknownLineOp(s.to_string())),
        }
    }
}

impl fmt::Display for LineOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Split `input` on `\n`, apply `op`, and join the result with `\n`.
///
/// A trailing newline shows up as a trailing empty line and is treated like
/// any other line.
pub fn transform_lines(input: &str, op: LineOp) -> String {
    let mut lines: Vec<&str> = input.split('\n').collect();

    match op {
        LineOp::SortAscending => lines.sort(),
        LineOp::SortDescending => {
            // Reverse of the stable ascending order, so equal lines come out
            // in reverse input order too.
            lines.sort();
            lines.reverse();
        }
        LineOp::Reverse => lines.reverse(),
        LineOp::RemoveEmpty => lines.retain(|line| !line.trim().is_empty()),
        LineOp::Trim => lines = lines.into_iter().map(str::trim).collect(),
        LineOp::RemoveDuplicates => {
            let mut seen = HashSet::with_capacity(lines.len());
            lines.retain(|line| seen.insert(*line));
        }
    }

    lines.join("\n")
}

pub fn sort_lines_az(input: &str) -> String {
    transform_lines(input, LineOp::SortAscending)
}

pub fn sort_lines_za(input: &str) -> String {
    transform_lines(input, LineOp::SortDescending)
}

pub fn reverse_lines(input: &str) -> String {
    transform_lines(input, LineOp::Reverse)
}

pub fn remove_empty_lines(input: &str) -> String {
    transform_lines(input, LineOp::RemoveEmpty)
}

pub fn trim_lines(input: &str) -> String {
    transform_lines(input, LineOp::Trim)
}

pub fn remove_duplicate_lines(input: &str) -> String {
    transform_lines(input, LineOp::RemoveDuplicates)
}
