//! Catalog-wide statistics: price range, available sizes and common words.
//!
//! The summary is always computed over the complete catalog so clients can
//! show which filters exist, not which products matched.

use crate::domain::model::{Product, Summary};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Characters a description is split on, in addition to whitespace.
const SEPARATORS: [char; 13] = [',', '.', '!', '?', ';', ':', '-', '(', ')', '[', ']', '{', '}'];

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{P}").expect("punctuation class is a valid pattern"));

/// Which slice of the frequency ranking becomes `commonWords`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRanking {
    /// Most frequent words dropped as noise.
    pub skip_most_common: usize,
    pub common_word_count: usize,
}

impl Default for WordRanking {
    fn default() -> Self {
        Self {
            skip_most_common: 5,
            common_word_count: 10,
        }
    }
}

pub fn summarize(products: &[Product], ranking: WordRanking) -> Summary {
    if products.is_empty() {
        return Summary::default();
    }

    let (min_price, max_price) = products.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), p| (min.min(p.price), max.max(p.price)),
    );

    Summary {
        min_price,
        max_price,
        sizes: distinct_sizes(products),
        common_words: common_words(products.iter().map(|p| p.description.as_str()), ranking),
    }
}

/// 依目錄順序收集所有尺寸，保留第一次出現的位置
pub fn distinct_sizes(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .flat_map(|p| p.sizes.iter())
        .filter(|size| seen.insert(size.as_str()))
        .cloned()
        .collect()
}

/// Normalized words of one description: split, stripped of punctuation,
/// lower-cased, single characters dropped.
pub fn tokenize(description: &str) -> impl Iterator<Item = String> + '_ {
    description
        .split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| PUNCTUATION.replace_all(fragment, "").to_lowercase())
        .filter(|word| word.chars().count() > 1)
}

pub fn common_words<'a>(
    descriptions: impl IntoIterator<Item = &'a str>,
    ranking: WordRanking,
) -> Vec<String> {
    // 以出現順序記錄每個字，排序時同分者維持原順序
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for description in descriptions {
        for word in tokenize(description) {
            match index.get(&word) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(word.clone(), counts.len());
                    counts.push((word, 1));
                }
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .skip(ranking.skip_most_common)
        .take(ranking.common_word_count)
        .map(|(word, _)| word)
        .collect()
}
