use assert_fs::prelude::{FileWriteStr, PathChild};
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
#[case("forward")]
#[case("bidirectional")]
fn diff_of_textbook_example_has_five_edits(
    #[case] mode: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = common::run_snaketrace(&["diff", "ABCABBA", "CBABAC", "--mode", mode])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let (deleted, inserted, kept) = common::count_edits(&stdout);

    assert_eq!(deleted + inserted, 5);
    assert_eq!(kept, 4);
    assert_eq!(
        common::sides(&stdout),
        ("ABCABBA".to_string(), "CBABAC".to_string())
    );

    Ok(())
}

#[test]
fn diff_of_identical_words_keeps_everything() -> Result<(), Box<dyn std::error::Error>> {
    let text = Words(3..6).fake::<Vec<String>>().join("_");

    let output = common::run_snaketrace(&["diff", &text, &text])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let (deleted, inserted, kept) = common::count_edits(&stdout);

    assert_eq!((deleted, inserted), (0, 0));
    assert_eq!(kept, text.chars().count());

    Ok(())
}

#[test]
fn diff_with_empty_old_inserts_in_order() -> Result<(), Box<dyn std::error::Error>> {
    common::run_snaketrace(&["diff", "", "abc"])
        .assert()
        .success()
        .stdout("+a\n+b\n+c\n");

    Ok(())
}

#[test]
fn diff_with_empty_new_deletes_in_order() -> Result<(), Box<dyn std::error::Error>> {
    common::run_snaketrace(&["diff", "abc", "", "--mode", "forward"])
        .assert()
        .success()
        .stdout("-a\n-b\n-c\n");

    Ok(())
}

#[rstest]
#[case("forward")]
#[case("bidirectional")]
fn trace_ends_with_the_edit_script_length(
    #[case] mode: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    common::run_snaketrace(&["trace", "abcabba", "cbabac", "--mode", mode])
        .assert()
        .success()
        .stdout(predicate::str::contains("fwd"))
        .stdout(predicate::str::ends_with("edit script length: 5\n"));

    Ok(())
}

#[test]
fn bidirectional_trace_shows_reverse_records() -> Result<(), Box<dyn std::error::Error>> {
    common::run_snaketrace(&["trace", "abcabba", "cbabac", "--parallel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rev"));

    Ok(())
}

#[test]
fn snake_reports_the_overlap() -> Result<(), Box<dyn std::error::Error>> {
    common::run_snaketrace(&["snake", "abc", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("edit script length: 0"))
        .stdout(predicate::str::contains("found by: reverse search"))
        .stdout(predicate::str::contains("snake: (0, 0) -> (1, 1) -> (2, 2) -> (3, 3)"));

    Ok(())
}

#[test]
fn inputs_over_the_limit_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    common::run_snaketrace(&["diff", "abcdef", "abcxyz", "--max-len", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceed the limit of 8"));

    Ok(())
}

#[test]
fn missing_input_file_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    common::run_snaketrace(&["diff", "--file", "no-such-old.txt", "no-such-new.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read old file no-such-old.txt"));

    Ok(())
}

#[test]
fn file_contents_are_diffed_with_the_file_flag() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let old = dir.child("old.txt");
    let new = dir.child("new.txt");
    old.write_str("kitten")?;
    new.write_str("sitting")?;

    let output = common::run_snaketrace(&[
        "diff",
        "--file",
        &old.path().display().to_string(),
        &new.path().display().to_string(),
    ])
    .assert()
    .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert_eq!(
        common::sides(&stdout),
        ("kitten".to_string(), "sitting".to_string())
    );
    // "itt" and "n" survive: 2 deletions and 3 insertions
    assert_eq!(common::count_edits(&stdout), (2, 3, 4));

    Ok(())
}

#[test]
fn reverse_trace_lines_show_the_moving_end() -> Result<(), Box<dyn std::error::Error>> {
    let output = common::run_snaketrace(&["trace", "abcabba", "cbabac"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let heads = stdout
        .lines()
        .filter(|line| line.contains(" rev "))
        .filter_map(|line| {
            let start = line.find('(')?;
            let end = line[start..].find(')')?;
            Some(line[start..=start + end].to_string())
        })
        .collect::<std::collections::HashSet<_>>();

    assert!(heads.len() > 1, "reverse lines all show {heads:?}");

    Ok(())
}

#[test]
fn newlines_in_files_are_escaped_one_edit_per_line() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let old = dir.child("old.txt");
    let new = dir.child("new.txt");
    old.write_str("a\n")?;
    new.write_str("ab\n")?;

    common::run_snaketrace(&[
        "diff",
        "--file",
        &old.path().display().to_string(),
        &new.path().display().to_string(),
    ])
    .assert()
    .success()
    .stdout(" a\n+b\n \\n\n");

    Ok(())
}
