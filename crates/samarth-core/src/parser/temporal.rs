//! Year extraction.
//!
//! Four stages tried in order; the first stage that yields any year wins
//! and later stages are never consulted, even when they would have found
//! something more specific.

use std::sync::LazyLock;

use regex::Regex;

/// Window used for "recent years" with no explicit count.
pub const RECENT_YEARS: i32 = 3;

/// Largest relative window honoured ("last 200 years" is ignored).
const MAX_RELATIVE_YEARS: i32 = 150;

static YEAR_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("static regex"));

static YEAR_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])((?:19|20)\d{2})\s*(?:to|-|–|and)\s*[a-z]*((?:19|20)\d{2})(?:[^0-9]|$)")
        .expect("static regex")
});

static RELATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:last|past|previous)\s+([a-z0-9]+)\s+years?\b").expect("static regex")
});

static RECENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\brecent\s+years?\b").expect("static regex"));

/// Years mentioned in `lower` (already lowercase), unsorted.
///
/// `current_year` anchors relative phrases like "last 5 years".
pub fn extract_years(lower: &str, current_year: i32) -> Vec<i32> {
    let stages: [fn(&str, i32) -> Vec<i32>; 4] = [
        |s, _| year_words(s),
        |s, _| explicit_range(s),
        |s, _| embedded_years(s),
        relative_window,
    ];
    stages
        .iter()
        .map(|stage| stage(lower, current_year))
        .find(|years| !years.is_empty())
        .unwrap_or_default()
}

/// Stage 1: standalone 19xx/20xx tokens.
fn year_words(lower: &str) -> Vec<i32> {
    YEAR_WORD
        .find_iter(lower)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Stage 2: "2010 to 2015", "2010-2015", "between 2010 and 2015", also
/// when the years are glued to a prefix like "fy2010-fy2015".
fn explicit_range(lower: &str) -> Vec<i32> {
    YEAR_RANGE
        .captures(lower)
        .map(|caps| {
            [caps.get(1), caps.get(2)]
                .into_iter()
                .flatten()
                .filter_map(|m| m.as_str().parse().ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Stage 3: any run of exactly four digits in 1900..=2099, word boundary
/// or not.
fn embedded_years(lower: &str) -> Vec<i32> {
    lower
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| run.len() == 4)
        .filter_map(|run| run.parse::<i32>().ok())
        .filter(|y| (1900..=2099).contains(y))
        .collect()
}

/// Stage 4: "last/past/previous N years" or "recent years".
fn relative_window(lower: &str, current_year: i32) -> Vec<i32> {
    let span = RELATIVE
        .captures_iter(lower)
        .filter_map(|caps| caps.get(1).and_then(|m| count(m.as_str())))
        .find(|n| (1..=MAX_RELATIVE_YEARS).contains(n))
        .or_else(|| RECENT.is_match(lower).then_some(RECENT_YEARS));

    match span {
        Some(n) => (current_year - n + 1..=current_year).collect(),
        None => Vec::new(),
    }
}

/// Digits or an English number word.
fn count(word: &str) -> Option<i32> {
    if let Ok(n) = word.parse() {
        return Some(n);
    }
    const WORDS: &[&str] = &[
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
        "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
        "nineteen", "twenty",
    ];
    WORDS
        .iter()
        .position(|w| *w == word)
        .and_then(|i| i32::try_from(i + 1).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(text: &str) -> Vec<i32> {
        let mut ys = extract_years(&text.to_lowercase(), 2024);
        ys.sort_unstable();
        ys
    }

    #[test]
    fn standalone_years() {
        assert_eq!(years("rainfall in 2015 and 2012"), vec![2012, 2015]);
        assert_eq!(years("production from 1998"), vec![1998]);
    }

    #[test]
    fn hyphenated_range_is_caught_by_first_stage() {
        assert_eq!(years("between 2010-2014"), vec![2010, 2014]);
    }

    #[test]
    fn range_with_prefixed_years() {
        assert_eq!(explicit_range("fy2010 to fy2015"), vec![2010, 2015]);
        assert_eq!(years("output fy2010 to fy2015"), vec![2010, 2015]);
    }

    #[test]
    fn range_takes_first_match_only() {
        assert_eq!(
            explicit_range("fy2001-fy2003 then fy2010-fy2012"),
            vec![2001, 2003]
        );
    }

    #[test]
    fn embedded_single_year() {
        assert_eq!(years("wheat in fy2019"), vec![2019]);
    }

    #[test]
    fn embedded_ignores_longer_numbers() {
        assert!(embedded_years("produced 120000 tonnes").is_empty());
        assert!(embedded_years("code 1234").is_empty());
    }

    #[test]
    fn last_n_years_is_inclusive_of_current() {
        assert_eq!(
            years("rainfall over the last 5 years"),
            vec![2020, 2021, 2022, 2023, 2024]
        );
        assert_eq!(years("past three years"), vec![2022, 2023, 2024]);
        assert_eq!(years("previous 1 year"), vec![2024]);
    }

    #[test]
    fn recent_years_defaults_to_three() {
        assert_eq!(years("recent years in kerala"), vec![2022, 2023, 2024]);
    }

    #[test]
    fn absolute_year_beats_relative_phrase() {
        // First successful stage wins; the relative phrase is never consulted.
        assert_eq!(years("last 5 years up to 2018"), vec![2018]);
    }

    #[test]
    fn nonsense_count_falls_back_to_recent() {
        assert_eq!(years("last few years, recent years"), vec![2022, 2023, 2024]);
        assert!(years("last few years").is_empty());
    }

    #[test]
    fn no_temporal_expression() {
        assert!(years("rice in punjab").is_empty());
    }
}
