pub mod tokenizer;

use crate::error::MultitoolError;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
pub use tokenizer::{tokenize, Token, Tokens};

lazy_static! {
    static ref NON_WHITESPACE_RUN: Regex = Regex::new(r"\S+").unwrap();
}

/// Naming conventions a string can be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Camel,
    Snake,
    Kebab,
    Title,
    Upper,
    Lower,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 6] = [
        CaseStyle::Upper,
        CaseStyle::Lower,
        CaseStyle::Title,
        CaseStyle::Camel,
        CaseStyle::Snake,
        CaseStyle::Kebab,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Snake => "snake",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Title => "title",
            CaseStyle::Upper => "upper",
            CaseStyle::Lower => "lower",
        }
    }
}

impl FromStr for CaseStyle {
    type Err = MultitoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "snake" | "snakecase" => Ok(CaseStyle::Snake),
            "kebab" | "kebabcase" => Ok(CaseStyle::Kebab),
            "title" | "titlecase" => Ok(CaseStyle::Title),
            "upper" | "uppercase" => Ok(CaseStyle::Upper),
            "lower" | "lowercase" => Ok(CaseStyle::Lower),
            _ => Err(MultitoolError::UnknownCaseStyle(s.to_string())),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert `input` to the given naming convention.
pub fn convert(input: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Camel => to_camel_case(input),
        CaseStyle::Snake => to_snake_case(input),
        CaseStyle::Kebab => to_kebab_case(input),
        CaseStyle::Title => to_title_case(input),
        CaseStyle::Upper => to_upper_case(input),
        CaseStyle::Lower => to_lower_case(input),
    }
}

/// Lower-camel case from a raw scan of `input`.
///
/// A boundary is the first word character of the string, any uppercase
/// letter, or the first word character after a run of separators. The first
/// boundary is lowercased and every later one uppercased. Whitespace, `_` and
/// `-` are then dropped; other characters are kept as they are.
///
/// This does not go through [`tokenize`]: acronyms keep their capitals, so
/// `"XMLParser"` becomes `"xMLParser"`.
pub fn to_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_word = false;
    let mut seen_boundary = false;

    for c in input.chars() {
        let word = c.is_ascii_alphanumeric();
        let boundary = (word && !prev_word) || c.is_ascii_uppercase();
        prev_word = word;

        if is_camel_joiner(c) {
            continue;
        }
        if boundary {
            if seen_boundary {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c.to_ascii_lowercase());
                seen_boundary = true;
            }
        } else {
            out.push(c);
        }
    }

    out
}

fn is_camel_joiner(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}

pub fn to_snake_case(input: &str) -> String {
    join_tokens(input, "_")
}

pub fn to_kebab_case(input: &str) -> String {
    join_tokens(input, "-")
}

fn join_tokens(input: &str, sep: &str) -> String {
    let tokens = tokenize(input);
    if tokens.is_empty() {
        return input.to_string();
    }

    tokens
        .iter()
        .map(|t| t.as_str().to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Capitalize every whitespace-delimited run, lowercasing the rest of it.
pub fn to_title_case(input: &str) -> String {
    NON_WHITESPACE_RUN
        .replace_all(input, |caps: &Captures| {
            let mut chars = caps[0].chars();
            let mut word = String::with_capacity(caps[0].len());
            if let Some(first) = chars.next() {
                word.extend(first.to_uppercase());
                word.push_str(&chars.as_str().to_lowercase());
            }
            word
        })
        .into_owned()
}

pub fn to_upper_case(input: &str) -> String {
    input.to_uppercase()
}

pub fn to_lower_case(input: &str) -> String {
    input.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("hello world"), "helloWorld");
        assert_eq!(to_camel_case("Hello_World"), "helloWorld");
        assert_eq!(to_camel_case("hello-world-test"), "helloWorldTest");
        assert_eq!(to_camel_case("  leading space"), "leadingSpace");
    }

    #[test]
    fn test_camel_case_is_idempotent_on_camel_input() {
        assert_eq!(to_camel_case("helloWorld"), "helloWorld");
        assert_eq!(to_camel_case(&to_camel_case("some words here")), "someWordsHere");
    }

    #[test]
    fn test_camel_case_keeps_acronym_capitals() {
        assert_eq!(to_camel_case("XMLParser"), "xMLParser");
        assert_eq!(to_camel_case("HELLO_WORLD"), "hELLOWORLD");
    }

    #[test]
    fn test_camel_case_keeps_other_punctuation() {
        assert_eq!(to_camel_case("foo.bar"), "foo.Bar");
        assert_eq!(to_camel_case("version 2 beta"), "version2Beta");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("helloWorld"), "hello_world");
        assert_eq!(to_snake_case("Hello World"), "hello_world");
        assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
        assert_eq!(to_snake_case("sha256"), "sha256");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("helloWorld"), "hello-world");
        assert_eq!(to_kebab_case("Hello World"), "hello-world");
        assert_eq!(to_kebab_case("sha256Hash"), "sha256-hash");
        assert_eq!(to_kebab_case("some_snake_name"), "some-snake-name");
    }

    #[test]
    fn test_separated_cases_fall_back_to_input() {
        assert_eq!(to_snake_case("!!! ???"), "!!! ???");
        assert_eq!(to_kebab_case("   "), "   ");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(to_title_case("hello world"), "Hello World");
        assert_eq!(to_title_case("hELLO   wORLD\nagain"), "Hello   World\nAgain");
        assert_eq!(to_title_case("snake_case value"), "Snake_case Value");
    }

    #[test]
    fn test_upper_lower_idempotent() {
        let s = "Mixed Case 123 _x";
        assert_eq!(to_upper_case(&to_upper_case(s)), to_upper_case(s));
        assert_eq!(to_lower_case(&to_lower_case(s)), to_lower_case(s));
    }

    #[test]
    fn test_empty_input() {
        for style in CaseStyle::ALL {
            assert_eq!(convert("", style), "", "{} on empty input", style);
        }
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("camelCase".parse::<CaseStyle>().unwrap(), CaseStyle::Camel);
        assert_eq!("snake_case".parse::<CaseStyle>().unwrap(), CaseStyle::Snake);
        assert_eq!("KEBAB".parse::<CaseStyle>().unwrap(), CaseStyle::Kebab);
        assert_eq!("Title Case".parse::<CaseStyle>().unwrap(), CaseStyle::Title);
        assert!(matches!(
            "pascal".parse::<CaseStyle>(),
            Err(MultitoolError::UnknownCaseStyle(_))
        ));
    }
}
