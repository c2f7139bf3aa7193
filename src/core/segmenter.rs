// File: src/core/segmenter.rs
use crate::core::types::{Role, Segment};
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Prefix and suffix lengths, in letter clusters, from an affix pattern such
/// as `"1-2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffixSpan {
    pub prefix: usize,
    pub suffix: usize,
}

impl AffixSpan {
    pub fn new(prefix: usize, suffix: usize) -> Self {
        Self { prefix, suffix }
    }

    /// `None` for anything that is not two non-negative integers joined by a
    /// hyphen; callers then show the word unsegmented.
    pub fn parse(pattern: &str) -> Option<Self> {
        pattern.parse().ok()
    }

    pub fn role_at(&self, index: usize, count: usize) -> Role {
        if index < self.prefix {
            Role::Prefix
        } else if index + self.suffix >= count {
            // Same as `index >= count - suffix` without underflow when the
            // suffix is longer than the word.
            Role::Suffix
        } else {
            Role::Stem
        }
    }
}

impl FromStr for AffixSpan {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, suffix) = s.trim().split_once('-').unwrap_or((s, ""));
        Ok(Self {
            prefix: prefix.trim().parse()?,
            suffix: suffix.trim().parse()?,
        })
    }
}

fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

fn is_mark(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Mark
}

/// Splits NFC text into letter clusters: a letter followed by the combining
/// marks attached to it. Other characters end the current cluster and are
/// dropped, as is a mark with no letter in front of it.
pub fn letter_clusters(text: &str) -> Vec<String> {
    let mut clusters: Vec<String> = Vec::new();
    let mut open = false;

    for c in text.nfc() {
        if is_letter(c) {
            clusters.push(c.to_string());
            open = true;
        } else if is_mark(c) && open {
            if let Some(current) = clusters.last_mut() {
                current.push(c);
            }
        } else {
            open = false;
        }
    }
    clusters
}

/// Labels each letter cluster of `word` as prefix, stem or suffix.
///
/// Cluster `i` of `n` is a prefix when `i < prefix_len`, otherwise a suffix
/// when `i >= n - suffix_len`, otherwise stem. Overlapping spans resolve to
/// prefix.
pub fn segment(word: &str, prefix_len: usize, suffix_len: usize) -> Vec<Segment> {
    let span = AffixSpan::new(prefix_len, suffix_len);
    let clusters = letter_clusters(word);
    let count = clusters.len();

    clusters
        .into_iter()
        .enumerate()
        .map(|(i, text)| Segment {
            text,
            role: span.role_at(i, count),
        })
        .collect()
}

/// Segments `word` with a `"prefixLen-suffixLen"` pattern string.
pub fn segment_with_pattern(word: &str, pattern: &str) -> Option<Vec<Segment>> {
    let span = AffixSpan::parse(pattern)?;
    Some(segment(word, span.prefix, span.suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(segments: &[Segment]) -> Vec<Role> {
        segments.iter().map(|s| s.role).collect()
    }

    #[test]
    fn diacritics_stay_with_their_letter() {
        let clusters = letter_clusters("كَتَبَ");
        assert_eq!(clusters, vec!["كَ", "تَ", "بَ"]);
    }

    #[test]
    fn last_cluster_is_suffix() {
        let segments = segment("كَتَبَ", 0, 1);
        assert_eq!(roles(&segments), vec![Role::Stem, Role::Stem, Role::Suffix]);
        assert_eq!(segments[2].text, "بَ");
    }

    #[test]
    fn zero_lengths_leave_everything_stem() {
        let segments = segment("يَكْتُبُ", 0, 0);
        assert_eq!(segments.len(), 4);
        assert!(segments.iter().all(|s| s.role == Role::Stem));
    }

    #[test]
    fn prefix_wins_overlap() {
        let segments = segment("كَتَبَا", 3, 3);
        assert_eq!(
            roles(&segments),
            vec![Role::Prefix, Role::Prefix, Role::Prefix, Role::Suffix]
        );
        let segments = segment("كَتَبَ", 1, 10);
        assert_eq!(roles(&segments), vec![Role::Prefix, Role::Suffix, Role::Suffix]);
    }

    #[test]
    fn spaces_and_punctuation_are_not_counted() {
        let segments = segment("لَمْ يَكْتُبْ.", 2, 0);
        let text: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(text, vec!["لَ", "مْ", "يَ", "كْ", "تُ", "بْ"]);
        assert_eq!(roles(&segments)[..3], [Role::Prefix, Role::Prefix, Role::Stem]);
    }

    #[test]
    fn leading_mark_is_dropped() {
        assert_eq!(letter_clusters("\u{064E}ب"), vec!["ب"]);
        assert_eq!(letter_clusters(" \u{064E}"), Vec::<String>::new());
    }

    #[test]
    fn composes_before_clustering() {
        // e + combining acute composes to a single letter.
        assert_eq!(letter_clusters("e\u{0301}a"), vec!["\u{00E9}", "a"]);
    }

    #[test]
    fn pattern_strings() {
        assert_eq!(AffixSpan::parse("1-2"), Some(AffixSpan::new(1, 2)));
        assert_eq!(AffixSpan::parse(" 0-1 "), Some(AffixSpan::new(0, 1)));
        assert_eq!(AffixSpan::parse("1"), None);
        assert_eq!(AffixSpan::parse("-1-2"), None);
        assert_eq!(AffixSpan::parse(""), None);
        assert!(segment_with_pattern("كَتَبَ", "x-y").is_none());
        assert_eq!(segment_with_pattern("كَتَبَ", "0-1").unwrap().len(), 3);
    }
}
