#![allow(dead_code)]

use assert_cmd::Command;

pub fn run_snaketrace(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("snaketrace").expect("Failed to find snaketrace binary");
    cmd.args(args).arg("--no-pager");
    cmd
}

/// Splits `diff` output into its `-`, `+` and ` ` prefixed lines
pub fn count_edits(stdout: &str) -> (usize, usize, usize) {
    stdout.lines().fold((0, 0, 0), |(del, ins, eq), line| {
        match line.chars().next() {
            Some('-') => (del + 1, ins, eq),
            Some('+') => (del, ins + 1, eq),
            _ => (del, ins, eq + 1),
        }
    })
}

/// Rebuilds (old, new) from `diff` output
pub fn sides(stdout: &str) -> (String, String) {
    let mut old = String::new();
    let mut new = String::new();
    for line in stdout.lines() {
        let mut chars = line.chars();
        let prefix = chars.next();
        let value: String = chars.collect();
        match prefix {
            Some('-') => old.push_str(&value),
            Some('+') => new.push_str(&value),
            _ => {
                old.push_str(&value);
                new.push_str(&value);
            }
        }
    }
    (old, new)
}
