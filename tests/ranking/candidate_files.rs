//! Newline-delimited candidate files, loaded and ranked end to end.

use std::io::Write;

use tempfile::NamedTempFile;

use tamis::{load_candidates, MatchKind};

use super::common::{rank_default, targets};

#[test]
fn a_candidate_file_ranks_like_an_in_memory_list() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "concatenate").unwrap();
    writeln!(file, "cat").unwrap();
    writeln!(file, "dog").unwrap();
    writeln!(file, "catalog").unwrap();

    let list = load_candidates(file.path()).unwrap();
    let results = rank_default("cat", &list);
    assert_eq!(targets(&results), vec!["cat", "catalog", "concatenate"]);
    assert_eq!(results[0].kind, MatchKind::Exact);
}

#[test]
fn blank_lines_and_padding_never_become_candidates() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "  cat  ").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "\t").unwrap();
    writeln!(file, "catalog").unwrap();

    let list = load_candidates(file.path()).unwrap();
    assert_eq!(list, vec!["cat", "catalog"]);

    // Indices refer to the parsed list, with blanks already gone.
    let results = rank_default("cat", &list);
    assert_eq!(results[0].index, 0);
    assert_eq!(results[0].target, "cat");
}

#[test]
fn windows_line_endings_are_accepted() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "cat\r\ncatalog\r\n").unwrap();

    let list = load_candidates(file.path()).unwrap();
    assert_eq!(list, vec!["cat", "catalog"]);
}

#[test]
fn missing_files_report_their_path() {
    let error = load_candidates(std::path::Path::new("/no/such/candidates.txt")).unwrap_err();
    assert!(error.contains("/no/such/candidates.txt"), "{error}");
    assert!(error.contains("Failed to read"), "{error}");
}

#[test]
fn unicode_titles_survive_the_file_boundary() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Naïve Bayes from scratch").unwrap();
    writeln!(file, "plain text").unwrap();

    let list = load_candidates(file.path()).unwrap();
    let results = rank_default("naive", &list);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].target, "Naïve Bayes from scratch");
    assert_eq!(results[0].kind, MatchKind::Subsequence);
}
