//! Unicode folding at the scoring boundary.
//!
//! Normalization runs lowercase first, then NFKD. Marks are kept, not
//! stripped, which makes diacritic matching one-directional: a bare letter
//! finds its accented forms, an accented letter does not find bare ones.

use tamis::{match_kind, normalize, score_match, MatchKind, CONTAINMENT_BONUS, NO_MATCH_SCORE};

use super::common::assert_score;

#[test]
fn bare_letters_find_accented_targets() {
    // "é" decomposes to "e" + U+0301, so the plain "e" is a substring.
    assert_score(score_match("e", "é"), 1.0 / 2.0 + CONTAINMENT_BONUS);
    assert_score(score_match("é", "café"), 2.0 / 5.0 + CONTAINMENT_BONUS);
}

#[test]
fn accented_letters_do_not_find_bare_targets() {
    // The combining mark in the query has nothing to match against.
    assert_score(score_match("é", "e"), NO_MATCH_SCORE);
    assert_eq!(match_kind("é", "e"), MatchKind::NoMatch);
}

#[test]
fn ratios_count_normalized_scalars_not_input_chars() {
    // "café" is 4 scalars on the way in and 5 after decomposition; the
    // denominator uses the 5.
    assert_eq!(normalize("café").chars().count(), 5);
    assert_score(score_match("e", "café"), 1.0 / 5.0 + CONTAINMENT_BONUS);
}

#[test]
fn precomposed_and_decomposed_accents_meet_in_the_middle() {
    // U+00E9 and "e" + U+0301 both normalize to the decomposed form.
    assert_score(score_match("\u{e9}", "caf\u{65}\u{301}"), 2.0 / 5.0 + CONTAINMENT_BONUS);
    assert_score(score_match("\u{65}\u{301}", "caf\u{e9}"), 2.0 / 5.0 + CONTAINMENT_BONUS);
}

#[test]
fn fullwidth_latin_folds_down_to_ascii() {
    assert_score(score_match("rust", "ＲＵＳＴ"), 1.5);
    assert_eq!(match_kind("rust", "ＲＵＳＴ"), MatchKind::Exact);
}

#[test]
fn ligatures_fold_to_their_letters() {
    assert_score(score_match("file", "ﬁle"), 1.5);
    assert_score(score_match("fi", "ﬁle"), 2.0 / 4.0 + CONTAINMENT_BONUS);
}

#[test]
fn trademark_matches_itself_but_not_the_letters_tm() {
    // Lowercasing runs before NFKD, so "™" expands to uppercase "TM" and a
    // lowercase "tm" query cannot reach it. Both sides of a "™" vs "™"
    // comparison expand the same way, so self-match still holds.
    assert_score(score_match("™", "™"), 1.5);
    assert_score(score_match("tm", "™"), NO_MATCH_SCORE);
    assert_score(score_match("TM", "™"), NO_MATCH_SCORE);
}

#[test]
fn dotted_capital_i_gains_a_combining_dot() {
    // "İ".to_lowercase() is "i" + U+0307, so a plain "i" is contained in it.
    assert_score(score_match("i", "İ"), 1.0 / 2.0 + CONTAINMENT_BONUS);
    assert_score(score_match("İ", "i"), NO_MATCH_SCORE);
}

#[test]
fn capital_sharp_s_meets_its_lowercase_form() {
    // U+1E9E lowercases to U+00DF, which has no NFKD decomposition. The
    // two-letter "ss" spelling is a different string entirely.
    assert_score(score_match("ß", "ẞ"), 1.5);
    assert_score(score_match("ss", "ß"), NO_MATCH_SCORE);
}

#[test]
fn hangul_syllables_compare_as_jamo() {
    // Each precomposed syllable decomposes to its jamo, so a one-syllable
    // query is a 3-of-6 prefix of a two-syllable target.
    assert_score(score_match("한", "한국"), 3.0 / 6.0 + CONTAINMENT_BONUS);
    assert_eq!(match_kind("한", "한국"), MatchKind::Containment);
}
