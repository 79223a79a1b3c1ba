use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_seqstats"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

fn table_rows(output: &Output) -> Vec<Vec<String>> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(|line| line.split_whitespace().map(String::from).collect())
        .collect()
}

#[test]
fn test_stdin_without_file_arguments() {
    let output = run_with_stdin(&["stat", "-q"], b">a\nACGT\n>b\nAC\n");
    assert!(output.status.success());

    let rows = table_rows(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "file");
    assert_eq!(rows[1], vec!["-", "FASTA", "DNA", "2", "6", "2", "3.0", "4", "4"]);
}

#[test]
fn test_stdin_dash_argument_tsv() {
    let output = run_with_stdin(
        &["stat", "-q", "--format", "tsv", "-"],
        b"@r1\nACGT\n+\nIIII\n@r2\n\n+\n\n",
    );
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "-\tFASTQ\tDNA\t2\t4\t0\t2.0\t4\t4");
}

#[test]
fn test_malformed_stdin_exits_nonzero() {
    let output = run_with_stdin(&["stat", "-q"], b"@r1\nACGT\n+\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}
