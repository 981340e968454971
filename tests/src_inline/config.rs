use super::*;

#[test]
fn chart_path_defaults_to_input_plus_extension() {
    let dest = resolve_destination(Path::new("data/reads.fq.gz"), OutputMode::Png, None);
    assert_eq!(
        dest,
        Destination::Chart(PathBuf::from("data/reads.fq.gz.png"))
    );
    let dest = resolve_destination(Path::new("reads.fa"), OutputMode::Pdf, None);
    assert_eq!(dest, Destination::Chart(PathBuf::from("reads.fa.pdf")));
}

#[test]
fn explicit_out_path_wins() {
    let dest = resolve_destination(
        Path::new("reads.fa"),
        OutputMode::Png,
        Some(PathBuf::from("plots/len.svg")),
    );
    assert_eq!(dest, Destination::Chart(PathBuf::from("plots/len.svg")));
}

#[test]
fn cli_mode_ignores_out_path() {
    let dest = resolve_destination(
        Path::new("reads.fa"),
        OutputMode::Cli,
        Some(PathBuf::from("ignored.png")),
    );
    assert_eq!(dest, Destination::Terminal);
}

#[test]
fn run_config_classifies_input() {
    let cfg = RunConfig::new(
        PathBuf::from("reads.fastq.gz"),
        OutputMode::Cli,
        None,
        ErrorPolicy::default(),
    );
    assert_eq!(cfg.format, Some(SeqFormat::Fastq));
    assert_eq!(cfg.compression, Compression::Gzip);
    assert_eq!(cfg.on_error, ErrorPolicy::Continue);

    let cfg = RunConfig::new(
        PathBuf::from("notes.txt"),
        OutputMode::Svg,
        None,
        ErrorPolicy::Abort,
    );
    assert_eq!(cfg.format, None);
    assert_eq!(cfg.compression, Compression::Plain);
}
