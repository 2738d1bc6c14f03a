use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn command_matrix() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("lcsq")?;
    let output = cmd.arg("matrix").arg("tests/seqs/trio.fa").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    let expected = "3
s1\t2\t1\t2
s2\t1\t2\t1
s3\t2\t1\t2
";
    assert_eq!(stdout, expected);

    Ok(())
}

#[test]
fn command_matrix_single_record() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("lcsq")?;
    let output = cmd.arg("matrix").arg("tests/seqs/query.fa").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    // Diagonal of a 1x1 grid is the sequence's own length
    assert_eq!(stdout, "1\nq\t3\n");

    Ok(())
}

#[test]
fn command_matrix_outfile() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let outfile = temp.path().join("matrix.phy");

    let mut cmd = Command::cargo_bin("lcsq")?;
    cmd.arg("matrix")
        .arg("tests/seqs/trio.fa")
        .arg("-o")
        .arg(&outfile)
        .assert()
        .success();

    let content = std::fs::read_to_string(&outfile)?;
    assert!(content.starts_with("3\n"));
    assert!(content.contains("s2\t1\t2\t1"));

    Ok(())
}

#[test]
fn command_matrix_mixed_lengths() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("lcsq")?;
    cmd.arg("matrix")
        .arg("tests/seqs/pair.fa")
        .assert()
        .success()
        .stdout(predicate::str::contains("x\t7\t4"))
        .stdout(predicate::str::contains("y\t4\t6"));

    Ok(())
}
