//! Result ordering: score first, then target, then original index.

use tamis::MatchKind;

use super::common::{
    assert_sorted_by_score, candidates, rank_default, targets, title_corpus, word_corpus,
};

#[test]
fn scores_come_back_in_descending_order() {
    let results = rank_default("cat", &word_corpus());
    assert!(!results.is_empty());
    assert_sorted_by_score(&results);
}

#[test]
fn the_whole_ladder_lines_up_for_one_query() {
    // Exact beats containment, target length splits the containment hits,
    // and the lone subsequence hit trails the pack.
    let results = rank_default("cat", &word_corpus());
    assert_eq!(
        targets(&results),
        vec!["cat", "catalog", "scatter", "concatenate", "crate"]
    );
    assert_eq!(results[0].kind, MatchKind::Exact);
    assert_eq!(results[4].kind, MatchKind::Subsequence);
}

#[test]
fn raw_score_outranks_tier_membership() {
    // "ct" in "cat" is a subsequence at 2/3; "ct" in "manufacturing" is a
    // containment hit at 2/13 + 0.5. The bare ratio is larger, so the
    // subsequence row comes first. Kind labels never reorder results.
    let list = candidates(&["manufacturing", "cat"]);
    let results = rank_default("ct", &list);
    assert_eq!(targets(&results), vec!["cat", "manufacturing"]);
    assert_eq!(results[0].kind, MatchKind::Subsequence);
    assert_eq!(results[1].kind, MatchKind::Containment);
}

#[test]
fn score_ties_fall_back_to_alphabetical_targets() {
    // "catalog" and "scatter" are both 7-scalar containment hits.
    let results = rank_default("cat", &candidates(&["scatter", "catalog"]));
    assert_eq!(targets(&results), vec!["catalog", "scatter"]);
}

#[test]
fn identical_targets_keep_their_input_order() {
    let results = rank_default("pear", &candidates(&["pear", "apple", "pear"]));
    assert_eq!(targets(&results), vec!["pear", "pear"]);
    assert_eq!(results[0].index, 0);
    assert_eq!(results[1].index, 2);
}

#[test]
fn indices_always_point_at_the_source_candidate() {
    let list = title_corpus();
    for entry in rank_default("cat", &list) {
        assert_eq!(entry.target, list[entry.index]);
    }
}

#[test]
fn empty_query_lists_everything_alphabetically_at_zero() {
    let results = rank_default("", &candidates(&["pear", "apple", "plum"]));
    assert_eq!(targets(&results), vec!["apple", "pear", "plum"]);
    for entry in &results {
        assert_eq!(entry.score, 0.0);
        assert_eq!(entry.kind, MatchKind::EmptyQuery);
    }
}
