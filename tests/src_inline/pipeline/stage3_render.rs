use super::*;
use crate::lengths::ReadLengths;
use tempfile::tempdir;

fn sorted(lengths: Vec<usize>) -> SortedLengths {
    ReadLengths::from(lengths).sorted()
}

#[test]
fn terminal_destination_writes_histogram() {
    let mut buf: Vec<u8> = Vec::new();
    run_stage3_to(&sorted(vec![2, 1]), &Destination::Terminal, &mut buf).expect("render");
    let out = String::from_utf8(buf).expect("utf8");
    assert_eq!(out.lines().count(), 2);
    assert!(out.ends_with("[    2] **\n"));
}

#[test]
fn chart_destination_writes_file_and_not_terminal() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("reads.fq.svg");
    let mut buf: Vec<u8> = Vec::new();
    run_stage3_to(
        &sorted(vec![7, 3]),
        &Destination::Chart(path.clone()),
        &mut buf,
    )
    .expect("render");
    assert!(buf.is_empty());
    let svg = std::fs::read_to_string(&path).expect("read");
    assert_eq!(svg.matches("<rect x=").count(), 2);
}

#[test]
fn empty_lengths_still_produce_a_chart() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("empty.svg");
    run_stage3_to(&sorted(Vec::new()), &Destination::Chart(path.clone()), &mut Vec::<u8>::new())
        .expect("render");
    let svg = std::fs::read_to_string(&path).expect("read");
    assert_eq!(svg.matches("<rect x=").count(), 0);
}

#[test]
fn unsupported_extension_is_a_save_failure() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("reads.eps");
    let err = run_stage3_to(&sorted(vec![1]), &Destination::Chart(path), &mut Vec::<u8>::new())
        .expect_err("should fail");
    assert_eq!(err.description(), "Could not save plot");
}

#[test]
fn missing_output_directory_is_a_save_failure() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("no/such/dir/out.svg");
    let err = run_stage3_to(&sorted(vec![1]), &Destination::Chart(path), &mut Vec::<u8>::new())
        .expect_err("should fail");
    assert!(matches!(
        err,
        Stage3Error::Chart {
            source: RenderError::Io(_),
            ..
        }
    ));
}
