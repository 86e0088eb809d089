//! Decision-ladder precedence: which branch wins when several could apply.

use tamis::{
    match_kind, score_match, MatchKind, CONTAINMENT_BONUS, EMPTY_QUERY_SCORE, NO_MATCH_SCORE,
};

use super::common::assert_score;

#[test]
fn empty_query_wins_before_anything_else() {
    assert_score(score_match("", "anything"), EMPTY_QUERY_SCORE);
    assert_score(score_match("", ""), EMPTY_QUERY_SCORE);
    assert_eq!(match_kind("", "anything"), MatchKind::EmptyQuery);
    assert_eq!(match_kind("", ""), MatchKind::EmptyQuery);
}

#[test]
fn whitespace_query_is_not_empty() {
    // " " survives the raw emptiness check and scores as a containment hit.
    assert_score(score_match(" ", "a b"), 1.0 / 3.0 + CONTAINMENT_BONUS);
    assert_eq!(match_kind(" ", "a b"), MatchKind::Containment);
}

#[test]
fn containment_is_checked_before_the_subsequence_scan() {
    // "cat" is both a substring and a subsequence of "concatenate"; the
    // substring branch wins and brings the bonus with it.
    assert_score(score_match("cat", "concatenate"), 3.0 / 11.0 + CONTAINMENT_BONUS);
    assert_eq!(match_kind("cat", "concatenate"), MatchKind::Containment);
}

#[test]
fn exact_match_is_containment_at_full_length() {
    assert_score(score_match("cat", "cat"), 1.5);
    assert_score(score_match("CAT", "cat"), 1.5);
    assert_eq!(match_kind("cat", "cat"), MatchKind::Exact);
    assert_eq!(match_kind("CAT", "cat"), MatchKind::Exact);
}

#[test]
fn nonempty_query_against_empty_target_falls_through_to_no_match() {
    assert_score(score_match("abc", ""), NO_MATCH_SCORE);
    assert_eq!(match_kind("abc", ""), MatchKind::NoMatch);
}

#[test]
fn short_subsequence_can_outscore_a_long_containment() {
    // The tiers overlap on raw score. A tight subsequence ratio beats a
    // containment hit diluted by a long target, and ranking respects that.
    let subsequence = score_match("ct", "cat");
    let containment = score_match("ct", "manufacturing");
    assert_score(subsequence, 2.0 / 3.0);
    assert_score(containment, 2.0 / 13.0 + CONTAINMENT_BONUS);
    assert!(subsequence > containment);
    assert_eq!(match_kind("ct", "cat"), MatchKind::Subsequence);
    assert_eq!(match_kind("ct", "manufacturing"), MatchKind::Containment);
}
