use std::fs;

use pretty_assertions::assert_eq;
use query_error::Band;
use query_error_cli::{Command, ListOptions, QerrOptions, emit, find, run_main};
use tempfile::tempdir;

fn options(command: Command) -> QerrOptions {
    QerrOptions {
        command,
        output: None,
    }
}

#[test]
fn list_prints_every_kind_in_code_order() {
    let out = run_main(&options(Command::List(ListOptions::new())))
        .expect("list run")
        .expect("list output");

    let codes: Vec<u32> = out
        .lines()
        .map(|line| line.split_whitespace().next().expect("code column"))
        .map(|code| code.parse().expect("numeric code"))
        .collect();
    assert_eq!(codes.len(), query_error::registry::descriptors().len());
    assert_eq!(codes.first(), Some(&1000));
    assert_eq!(codes.last(), Some(&16007));
    assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn list_filters_by_band() {
    let list = ListOptions::new().with_band(Some(Band::Plan));
    let out = run_main(&options(Command::List(list)))
        .expect("list run")
        .expect("list output");

    let keys: Vec<&str> = out
        .lines()
        .map(|line| line.split_whitespace().nth(1).expect("key column"))
        .collect();
    assert_eq!(
        keys,
        vec![
            "plan.error",
            "plan.build_select.no_term_name",
            "plan.build_select.duplicate_alias",
        ]
    );
}

#[test]
fn show_by_code_and_by_key_agree() {
    let by_code = run_main(&options(Command::Show {
        query: "2080".to_string(),
    }))
    .expect("show by code")
    .expect("output");
    let by_key = run_main(&options(Command::Show {
        query: "admin.clustering.no_such_node".to_string(),
    }))
    .expect("show by key")
    .expect("output");

    assert_eq!(by_code, by_key);
    assert!(by_code.contains("band:     admin (2000-2999)"));
    assert!(by_code.contains("template: No such node {}"));
}

#[test]
fn show_unknown_code_is_an_unrecognized_value_error() {
    let err = run_main(&options(Command::Show {
        query: "5000".to_string(),
    }))
    .expect_err("unknown code");
    assert_eq!(err.code(), 1030);
    assert_eq!(err.key(), "service.io.request.unrecognized_value");
    assert_eq!(err.message(), "Unknown error code value: 5000");

    let err = find("datastore.nope").expect_err("unknown key");
    assert_eq!(err.message(), "Unknown error key value: datastore.nope");
}

#[test]
fn bands_lists_counts() {
    let out = run_main(&options(Command::Bands))
        .expect("bands run")
        .expect("bands output");
    let parse_line = out
        .lines()
        .find(|line| line.starts_with("parse "))
        .expect("parse band line");
    assert!(parse_line.contains("3000-3999"));
    assert!(parse_line.contains("Parse errors"));
}

#[test]
fn output_can_be_written_to_a_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bands.txt");

    let mut opts = options(Command::Bands);
    opts.output = Some(path.display().to_string());
    let text = run_main(&opts).expect("bands run").expect("bands output");
    emit(&opts, &text).expect("emit");

    let written = fs::read_to_string(&path).expect("read output");
    assert_eq!(written, text);
    assert_eq!(written.lines().count(), 10);
}

#[test]
fn unwritable_output_wraps_the_io_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("out.txt");

    let mut opts = options(Command::Bands);
    opts.output = Some(path.display().to_string());
    let err = emit(&opts, "text").expect_err("missing parent directory");

    assert_eq!(err.code(), 1040);
    assert!(err.message().contains("out.txt"));
    let source = err.source_ref().expect("io cause");
    assert!(source.downcast_ref::<std::io::Error>().is_some());
}
