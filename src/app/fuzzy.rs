//! Scorer used for the table-name and row filters.
//!
//! Exact, prefix and substring matches score 1000, 900 and 800. Anything
//! else is scored as a subsequence: every matched pattern character earns
//! 10, a match at the start of a word earns 20 more, and the second and
//! later characters of a consecutive run earn five times the run length.
//! Shorter candidates win ties via `100 - len`.

const MATCH_SCORE: i64 = 10;
const WORD_START_BONUS: i64 = 20;
const CONSECUTIVE_MULTIPLIER: i64 = 5;
const LENGTH_BASE: i64 = 100;
const EMPTY_PATTERN_SCORE: u32 = 1;
const EXACT_MATCH_SCORE: u32 = 1000;
const PREFIX_MATCH_SCORE: u32 = 900;
const SUBSTRING_MATCH_SCORE: u32 = 800;

/// Scores `candidate` against `pattern`, ignoring case. Returns 0 when the
/// pattern is not a subsequence of the candidate.
pub fn score(candidate: &str, pattern: &str) -> u32 {
    if pattern.is_empty() {
        return EMPTY_PATTERN_SCORE;
    }

    let candidate_text = candidate.to_lowercase();
    let pattern_text = pattern.to_lowercase();
    let candidate: Vec<char> = candidate_text.chars().collect();
    let pattern: Vec<char> = pattern_text.chars().collect();

    if pattern.len() > candidate.len() {
        return 0;
    }
    if candidate_text == pattern_text {
        return EXACT_MATCH_SCORE;
    }
    if candidate_text.starts_with(&pattern_text) {
        return PREFIX_MATCH_SCORE;
    }
    if candidate_text.contains(&pattern_text) {
        return SUBSTRING_MATCH_SCORE;
    }

    let mut total: i64 = 0;
    let mut pattern_idx = 0;
    let mut run = 0_i64;

    for (i, &c) in candidate.iter().enumerate() {
        if pattern_idx == pattern.len() {
            break;
        }
        if c == pattern[pattern_idx] {
            total += MATCH_SCORE;
            if i == 0 || is_word_separator(candidate[i - 1]) {
                total += WORD_START_BONUS;
            }
            run += 1;
            if run > 1 {
                total += run * CONSECUTIVE_MULTIPLIER;
            }
            pattern_idx += 1;
        } else {
            run = 0;
        }
    }

    if pattern_idx < pattern.len() {
        return 0;
    }

    // Very long candidates can push the total below zero; treat that as no match.
    let total = total + LENGTH_BASE - candidate.len() as i64;
    u32::try_from(total.max(0)).unwrap_or(u32::MAX)
}

fn is_word_separator(c: char) -> bool {
    matches!(c, '_' | '-' | ' ')
}

/// Filters names by `pattern`, best score first. Equal scores keep their
/// original order. An empty pattern returns every name unchanged.
pub fn filter_names(names: &[String], pattern: &str) -> Vec<String> {
    filter_by(names, pattern, |name, pattern| score(name, pattern))
}

/// Filters rows by `pattern`; a row scores as its best-scoring cell.
pub fn filter_rows(rows: &[Vec<String>], pattern: &str) -> Vec<Vec<String>> {
    filter_by(rows, pattern, |row, pattern| {
        row.iter()
            .map(|cell| score(cell, pattern))
            .max()
            .unwrap_or(0)
    })
}

fn filter_by<T: Clone>(items: &[T], pattern: &str, score_of: impl Fn(&T, &str) -> u32) -> Vec<T> {
    if pattern.is_empty() {
        return items.to_vec();
    }

    let mut scored: Vec<(u32, &T)> = items
        .iter()
        .map(|item| (score_of(item, pattern), item))
        .filter(|(s, _)| *s > 0)
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, item)| item.clone()).collect()
}
