//! End-to-end tests of the file conversion pipeline

use std::fs;
use std::path::{Path, PathBuf};

use map2gaf::{convert, ConvertOptions, GafError, TermMatching};

const REFERENCE: &str = "\
! GO IDs (primary only) and text strings
GO:0001 mitochondrion inheritance P
GO:0002 zinc transporter activity F
GO:0003 retired term obs
";

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn worked_example_is_byte_exact() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(dir.path(), "go.terms", "GO:0001 some name P\nGO:0002 another obs\n");
    let input = write(dir.path(), "genes.map", "GENE1\tGO:0001,GO:0002,GO:0003\n");
    let output = dir.path().join("out.gaf");

    let stats = convert(
        &input,
        &reference,
        &output,
        "Test species",
        &ConvertOptions::default(),
    )
    .unwrap();

    assert_eq!(stats.lines_read, 1);
    assert_eq!(stats.records_written, 1);
    assert_eq!(stats.terms_dropped, 2);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "!gaf-version: 2.0\n\
         Test species\tdb.GENE1\tGENE1\t0\tGO:0001\tPMID:0000000\tISO\t0\tP\t0\t0\tgene\t\
         taxon:79327\t23022011\tPFAM\n"
    );
}

#[test]
fn obsolete_terms_never_reach_the_output() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(dir.path(), "go.terms", REFERENCE);
    let input = write(
        dir.path(),
        "genes.map",
        "GENE1\tGO:0001,GO:0003\nGENE2\tGO:0003\nGENE3\tGO:0002,GO:0003,GO:0001\n",
    );
    let output = dir.path().join("out.gaf");

    convert(&input, &reference, &output, "sp", &ConvertOptions::default()).unwrap();

    let gaf = fs::read_to_string(&output).unwrap();
    assert!(!gaf.contains("GO:0003"));
    assert_eq!(gaf.lines().count(), 1 + 3);
}

#[test]
fn duplicate_gene_lines_produce_duplicate_rows() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(dir.path(), "go.terms", REFERENCE);
    let input = write(dir.path(), "genes.map", "GENE1\tGO:0001\nGENE1\tGO:0001,GO:0002\n");
    let output = dir.path().join("out.gaf");

    let stats = convert(&input, &reference, &output, "sp", &ConvertOptions::default()).unwrap();

    assert_eq!(stats.records_written, 3);
    let gaf = fs::read_to_string(&output).unwrap();
    let go1_rows: Vec<&str> = gaf.lines().filter(|l| l.contains("\tGO:0001\t")).collect();
    assert_eq!(go1_rows.len(), 2);
    assert_eq!(go1_rows[0], go1_rows[1]);
}

#[test]
fn input_order_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(dir.path(), "go.terms", REFERENCE);
    let input = write(dir.path(), "genes.map", "GENE1\tGO:0002,GO:0001\n");
    let output = dir.path().join("out.gaf");

    convert(&input, &reference, &output, "sp", &ConvertOptions::default()).unwrap();

    let gaf = fs::read_to_string(&output).unwrap();
    let terms: Vec<&str> = gaf
        .lines()
        .skip(1)
        .map(|l| l.split('\t').nth(4).unwrap())
        .collect();
    assert_eq!(terms, ["GO:0002", "GO:0001"]);
}

#[test]
fn line_without_tab_yields_no_rows_and_no_error() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(dir.path(), "go.terms", REFERENCE);
    let input = write(dir.path(), "genes.map", "GENE1 GO:0001\nGENE2\tGO:0001\n");
    let output = dir.path().join("out.gaf");

    let stats = convert(&input, &reference, &output, "sp", &ConvertOptions::default()).unwrap();

    // the first line has no tab, so only GENE2 contributes
    assert_eq!(stats.records_written, 1);
    let gaf = fs::read_to_string(&output).unwrap();
    assert!(gaf.lines().nth(1).unwrap().starts_with("sp\tdb.GENE2\t"));
}

#[test]
fn empty_input_still_writes_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(dir.path(), "go.terms", REFERENCE);
    let input = write(dir.path(), "genes.map", "");
    let output = dir.path().join("out.gaf");

    convert(&input, &reference, &output, "sp", &ConvertOptions::default()).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "!gaf-version: 2.0\n");
}

#[test]
fn rerunning_produces_byte_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(dir.path(), "go.terms", REFERENCE);
    let input = write(
        dir.path(),
        "genes.map",
        "GENE1\tGO:0001,GO:0002\nGENE2\tGO:0002\nGENE3\tGO:0001,GO:0001,GO:0003\n",
    );
    let first = dir.path().join("first.gaf");
    let second = dir.path().join("second.gaf");

    convert(&input, &reference, &first, "sp", &ConvertOptions::default()).unwrap();
    convert(&input, &reference, &second, "sp", &ConvertOptions::default()).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn trimmed_matching_recovers_padded_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(dir.path(), "go.terms", REFERENCE);
    let input = write(dir.path(), "genes.map", "GENE1\tGO:0001, GO:0002\n");
    let strict_out = dir.path().join("strict.gaf");
    let trimmed_out = dir.path().join("trimmed.gaf");

    let strict = convert(&input, &reference, &strict_out, "sp", &ConvertOptions::default()).unwrap();
    let trimmed = convert(
        &input,
        &reference,
        &trimmed_out,
        "sp",
        &ConvertOptions {
            matching: TermMatching::Trimmed,
        },
    )
    .unwrap();

    assert_eq!(strict.records_written, 1);
    assert_eq!(trimmed.records_written, 2);
    let gaf = fs::read_to_string(&trimmed_out).unwrap();
    assert!(gaf.contains("\tGO:0002\t"));
}

#[test]
fn missing_input_file_is_a_fatal_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(dir.path(), "go.terms", REFERENCE);
    let input = dir.path().join("no-such.map");
    let output = dir.path().join("out.gaf");

    let err = convert(&input, &reference, &output, "sp", &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, GafError::CannotOpenFile(ref f) if f.contains("no-such.map")));
}

#[test]
fn missing_reference_file_is_a_fatal_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("no-such.terms");
    let input = write(dir.path(), "genes.map", "GENE1\tGO:0001\n");
    let output = dir.path().join("out.gaf");

    let err = convert(&input, &reference, &output, "sp", &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, GafError::CannotOpenFile(ref f) if f.contains("no-such.terms")));
    assert!(!output.exists(), "no output file once the load failed");
}

#[test]
fn uncreatable_output_file_is_a_fatal_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(dir.path(), "go.terms", REFERENCE);
    let input = write(dir.path(), "genes.map", "GENE1\tGO:0001\n");
    let output = dir.path().join("missing-subdir").join("out.gaf");

    let err = convert(&input, &reference, &output, "sp", &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, GafError::CannotOpenFile(_)));
}
