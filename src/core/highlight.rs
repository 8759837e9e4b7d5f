use crate::utils::error::{Result, ServiceError};
use regex::{Regex, RegexBuilder};

pub const EMPHASIS_OPEN: &str = "<em>";
pub const EMPHASIS_CLOSE: &str = "</em>";

/// 解析以逗號分隔的 highlight 參數，去除前後空白並忽略空項目
pub fn parse_terms(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Wraps whole-word, case-insensitive occurrences of each term in `<em>` tags.
///
/// Terms are applied one after another, each pass running over the text the
/// previous pass produced. Overlapping terms can therefore nest tags.
#[derive(Debug, Default)]
pub struct Highlighter {
    patterns: Vec<Regex>,
}

impl Highlighter {
    pub fn new(raw: Option<&str>) -> Result<Self> {
        let patterns = parse_terms(raw)
            .iter()
            .map(|term| {
                RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| ServiceError::ProcessingError {
                        message: format!("Cannot highlight '{}': {}", term, e),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn highlight(&self, text: &str) -> String {
        if self.is_empty() || text.trim().is_empty() {
            return text.to_string();
        }

        let replacement = format!("{}$0{}", EMPHASIS_OPEN, EMPHASIS_CLOSE);
        self.patterns.iter().fold(text.to_string(), |current, pattern| {
            pattern
                .replace_all(&current, replacement.as_str())
                .into_owned()
        })
    }
}
