use proptest::prelude::*;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};
use verb_core::core::segmenter::letter_clusters;
use verb_core::core::types::Role;
use verb_core::segment;

const ALPHABET: &[char] = &[
    'ك', 'ت', 'ب', 'ي', 'ن', 'و', 'ا', '\u{064E}', '\u{064F}', '\u{0650}', '\u{0652}',
    '\u{0651}', ' ', '-', '.',
];

fn word() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..24)
        .prop_map(|chars| chars.into_iter().collect())
}

fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

proptest! {
    #[test]
    fn one_segment_per_letter(w in word(), p in 0usize..8, s in 0usize..8) {
        let letters = w.chars().filter(|&c| is_letter(c)).count();
        prop_assert_eq!(segment(&w, p, s).len(), letters);
    }

    #[test]
    fn roles_follow_prefix_then_suffix_rule(w in word(), p in 0usize..30, s in 0usize..30) {
        let segments = segment(&w, p, s);
        let n = segments.len() as i64;
        for (i, seg) in segments.iter().enumerate() {
            let expected = if i < p {
                Role::Prefix
            } else if i as i64 >= n - s as i64 {
                Role::Suffix
            } else {
                Role::Stem
            };
            prop_assert_eq!(seg.role, expected);
        }
    }

    #[test]
    fn segmenting_is_pure(w in word(), p in 0usize..8, s in 0usize..8) {
        prop_assert_eq!(segment(&w, p, s), segment(&w, p, s));
    }

    #[test]
    fn segments_rebuild_the_clusters(w in word(), p in 0usize..8, s in 0usize..8) {
        let joined: String = segment(&w, p, s).into_iter().map(|seg| seg.text).collect();
        prop_assert_eq!(&joined, &letter_clusters(&w).concat());

        let kept_letters: String = joined.chars().filter(|&c| is_letter(c)).collect();
        let source_letters: String = w.chars().filter(|&c| is_letter(c)).collect();
        prop_assert_eq!(kept_letters, source_letters);
    }

    #[test]
    fn every_cluster_is_a_letter_then_marks(w in word()) {
        for cluster in letter_clusters(&w) {
            let mut chars = cluster.chars();
            prop_assert!(chars.next().is_some_and(is_letter));
            prop_assert!(chars.all(|c| c.general_category_group() == GeneralCategoryGroup::Mark));
        }
    }
}

#[test]
fn full_coverage_has_no_stem() {
    let segments = segment("يَكْتُبَانِ", 3, 4);
    assert_eq!(segments.len(), 6);
    let roles: Vec<Role> = segments.iter().map(|s| s.role).collect();
    assert_eq!(
        roles,
        vec![
            Role::Prefix,
            Role::Prefix,
            Role::Prefix,
            Role::Suffix,
            Role::Suffix,
            Role::Suffix
        ]
    );
}
