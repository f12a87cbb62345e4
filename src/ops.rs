use crate::case::{self, CaseStyle};
use crate::error::MultitoolError;
use crate::lines::{self, LineOp};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Text,
    Converters,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Text => write!(f, "Text"),
            Category::Converters => write!(f, "Converters"),
        }
    }
}

/// Descriptive metadata shown by `multitool list`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

/// A single text transform: a case conversion or a line operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Case(CaseStyle),
    Lines(LineOp),
}

impl Operation {
    /// Every operation, case conversions first.
    pub fn all() -> Vec<Operation> {
        CaseStyle::ALL
            .into_iter()
            .map(Operation::Case)
            .chain(LineOp::ALL.into_iter().map(Operation::Lines))
            .collect()
    }

    pub fn id(&self) -> &'static str {
        self.info().id
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            Operation::Case(style) => case::convert(input, *style),
            Operation::Lines(op) => lines::transform_lines(input, *op),
        }
    }

    pub fn info(&self) -> ToolInfo {
        match self {
            Operation::Case(CaseStyle::Upper) => tool(
                "upper-case",
                "UPPERCASE",
                Category::Converters,
                "Uppercase the whole text.",
                &["upper", "uppercase", "caps", "case"],
            ),
            Operation::Case(CaseStyle::Lower) => tool(
                "lower-case",
                "lowercase",
                Category::Converters,
                "Lowercase the whole text.",
                &["lower", "lowercase", "case"],
            ),
            Operation::Case(CaseStyle::Title) => tool(
                "title-case",
                "Title Case",
                Category::Converters,
                "Capitalize every whitespace-separated word.",
                &["title", "capitalize", "headline", "case"],
            ),
            Operation::Case(CaseStyle::Camel) => tool(
                "camel-case",
                "camelCase",
                Category::Converters,
                "Join words into lower camel case.",
                &["camel", "camelCase", "identifier", "case"],
            ),
            Operation::Case(CaseStyle::Snake) => tool(
                "snake-case",
                "snake_case",
                Category::Converters,
                "Split words (acronym aware) and join them with underscores.",
                &["snake", "underscore", "identifier", "case"],
            ),
            Operation::Case(CaseStyle::Kebab) => tool(
                "kebab-case",
                "kebab-case",
                Category::Converters,
                "Split words (acronym aware) and join them with hyphens.",
                &["kebab", "dash", "hyphen", "slug", "case"],
            ),
            Operation::Lines(LineOp::SortAscending) => tool(
                "sort-az",
                "Sort Lines (A-Z)",
                Category::Text,
                "Sort lines in ascending code point order.",
                &["sort", "lines", "ascending", "order"],
            ),
            Operation::Lines(LineOp::SortDescending) => tool(
                "sort-za",
                "Sort Lines (Z-A)",
                Category::Text,
                "Sort lines ascending, then reverse them.",
                &["sort", "lines", "descending", "order"],
            ),
            Operation::Lines(LineOp::Reverse) => tool(
                "reverse-lines",
                "Reverse Lines",
                Category::Text,
                "Reverse the order of lines.",
                &["reverse", "lines", "flip", "order"],
            ),
            Operation::Lines(LineOp::RemoveEmpty) => tool(
                "remove-empty-lines",
                "Remove Empty Lines",
                Category::Text,
                "Drop lines that are empty or whitespace only.",
                &["empty", "blank", "lines", "remove"],
            ),
            Operation::Lines(LineOp::Trim) => tool(
                "trim-lines",
                "Trim Lines",
                Category::Text,
                "Strip leading and trailing whitespace from every line.",
                &["trim", "whitespace", "lines", "strip"],
            ),
            Operation::Lines(LineOp::RemoveDuplicates) => tool(
                "remove-duplicate-lines",
                "Remove Duplicate Lines",
                Category::Text,
                "Keep the first occurrence of every line.",
                &["duplicate", "dedup", "unique", "lines"],
            ),
        }
    }
}

fn tool(
    id: &'static str,
    name: &'static str,
    category: Category,
    description: &'static str,
    keywords: &'static [&'static str],
) -> ToolInfo {
    ToolInfo {
        id,
        name,
        category,
        description,
        keywords,
    }
}

impl FromStr for Operation {
    type Err = MultitoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(op) = Operation::all()
            .into_iter()
            .find(|op| op.id().eq_ignore_ascii_case(s))
        {
            return Ok(op);
        }

        s.parse::<CaseStyle>()
            .map(Operation::Case)
            .or_else(|_| s.parse::<LineOp>().map(Operation::Lines))
            .map_err(|_| MultitoolError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let all = Operation::all();
        let ids: HashSet<_> = all.iter().map(Operation::id).collect();
        assert_eq!(ids.len(), all.len());
        assert_eq!(all.len(), 12);
    }

    #[test]
    fn test_ids_parse_back() {
        for op in Operation::all() {
            assert_eq!(op.id().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(
            "camelCase".parse::<Operation>().unwrap(),
            Operation::Case(CaseStyle::Camel)
        );
        assert_eq!(
            "dedup".parse::<Operation>().unwrap(),
            Operation::Lines(LineOp::RemoveDuplicates)
        );
        assert!(matches!(
            "base64".parse::<Operation>(),
            Err(MultitoolError::UnknownOperation(_))
        ));
    }

    #[test]
    fn test_apply_dispatches() {
        assert_eq!(
            Operation::Case(CaseStyle::Snake).apply("XMLParser"),
            "xml_parser"
        );
        assert_eq!(
            Operation::Lines(LineOp::SortAscending).apply("b\na"),
            "a\nb"
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(Operation::Case(CaseStyle::Kebab).info().category, Category::Converters);
        assert_eq!(Operation::Lines(LineOp::Trim).info().category, Category::Text);
    }
}
