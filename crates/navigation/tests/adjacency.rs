use std::fs;
use std::path::Path;

use fileflow_navigation::{adjacent_file, Direction, OutOfBoundsPolicy};
use tempfile::tempdir;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), "").unwrap();
}

#[test]
fn spills_into_the_adjacent_folder_at_the_edges() {
    let root = tempdir().unwrap();
    let folder_a = root.path().join("a");
    let folder_b = root.path().join("b");
    fs::create_dir(&folder_a).unwrap();
    fs::create_dir(&folder_b).unwrap();
    touch(&folder_a, "a1.txt");
    touch(&folder_a, "a2.txt");
    touch(&folder_b, "b1.txt");

    assert_eq!(
        adjacent_file(
            &folder_a.join("a2.txt"),
            Direction::Next,
            OutOfBoundsPolicy::AdvanceToAdjacentFolder,
        ),
        Some(folder_b.join("b1.txt"))
    );
    assert_eq!(
        adjacent_file(
            &folder_b.join("b1.txt"),
            Direction::Previous,
            OutOfBoundsPolicy::AdvanceToAdjacentFolder,
        ),
        Some(folder_a.join("a2.txt"))
    );
}

#[test]
fn spill_stays_inside_the_folder_away_from_the_edges() {
    let root = tempdir().unwrap();
    let folder_a = root.path().join("a");
    let folder_b = root.path().join("b");
    fs::create_dir(&folder_a).unwrap();
    fs::create_dir(&folder_b).unwrap();
    touch(&folder_a, "a1.txt");
    touch(&folder_a, "a2.txt");
    touch(&folder_b, "b1.txt");

    assert_eq!(
        adjacent_file(
            &folder_a.join("a1.txt"),
            Direction::Next,
            OutOfBoundsPolicy::AdvanceToAdjacentFolder,
        ),
        Some(folder_a.join("a2.txt"))
    );
}

#[test]
fn spill_into_an_empty_folder_does_not_cascade() {
    let root = tempdir().unwrap();
    let folder_a = root.path().join("a");
    let folder_b = root.path().join("b");
    let folder_c = root.path().join("c");
    fs::create_dir(&folder_a).unwrap();
    fs::create_dir(&folder_b).unwrap();
    fs::create_dir(&folder_c).unwrap();
    touch(&folder_a, "a1.txt");
    touch(&folder_c, "c1.txt");

    // b is empty; c must not be reached.
    assert_eq!(
        adjacent_file(
            &folder_a.join("a1.txt"),
            Direction::Next,
            OutOfBoundsPolicy::AdvanceToAdjacentFolder,
        ),
        None
    );
}

#[test]
fn spill_without_an_adjacent_folder_yields_none() {
    let root = tempdir().unwrap();
    let folder_a = root.path().join("only");
    fs::create_dir(&folder_a).unwrap();
    touch(&folder_a, "a1.txt");

    assert_eq!(
        adjacent_file(
            &folder_a.join("a1.txt"),
            Direction::Next,
            OutOfBoundsPolicy::AdvanceToAdjacentFolder,
        ),
        None
    );
}

#[test]
fn every_policy_walks_an_ordered_folder_identically_in_the_middle() {
    let root = tempdir().unwrap();
    for name in ["one.txt", "two.txt", "zed.txt"] {
        touch(root.path(), name);
    }

    for policy in [
        OutOfBoundsPolicy::None,
        OutOfBoundsPolicy::LoopWithinFolder,
        OutOfBoundsPolicy::AdvanceToAdjacentFolder,
    ] {
        assert_eq!(
            adjacent_file(&root.path().join("one.txt"), Direction::Next, policy),
            Some(root.path().join("two.txt")),
            "policy {policy:?}"
        );
        assert_eq!(
            adjacent_file(&root.path().join("two.txt"), Direction::Previous, policy),
            Some(root.path().join("one.txt")),
            "policy {policy:?}"
        );
    }
}
