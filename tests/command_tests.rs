use include_trace::commands::{execute_analyze, validate_args, validate_report_file, AnalyzeArgs};
use include_trace::output::read_report;
use include_trace::parser::{normalize_path, Dialect};
use std::fs;
use std::path::PathBuf;

#[test]
fn test_validate_args_valid() {
    let args = AnalyzeArgs {
        trace: PathBuf::from("build/includes.txt"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_top_headers_zero() {
    let args = AnalyzeArgs {
        top_headers: 0,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_analyze_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let inc = dir.path().join("Include");
    fs::create_dir(&inc).unwrap();
    fs::write(inc.join("a.h"), "a".repeat(100)).unwrap();
    fs::write(inc.join("b.h"), "b".repeat(40)).unwrap();
    fs::write(inc.join("shared.h"), "s".repeat(10)).unwrap();

    let a = inc.join("a.h").display().to_string();
    let b = inc.join("b.h").display().to_string();
    let shared = inc.join("shared.h").display().to_string();
    let trace = format!(". {a}\n.. {shared}\n. {b}\n.. {shared}\n");
    let trace_path = dir.path().join("includes.txt");
    fs::write(&trace_path, trace).unwrap();

    let out = dir.path().join("out");
    let args = AnalyzeArgs {
        trace: trace_path.clone(),
        output_dot: Some(out.join("includes.dot")),
        output_paths_dot: Some(out.join("paths.dot")),
        output_json: Some(out.join("includes.json")),
        output_order: Some(out.join("order.txt")),
        ..Default::default()
    };
    validate_args(&args).unwrap();
    execute_analyze(args).unwrap();

    let report = read_report(out.join("includes.json")).unwrap();
    assert_eq!(report.dialect, Dialect::Gcc);
    assert_eq!(report.file_count, 3);
    assert_eq!(report.include_count, 4);
    assert_eq!(report.total_size, 150);
    assert_eq!(report.heaviest_headers[0].name, normalize_path(&a));
    assert_eq!(report.heaviest_headers[0].aggregate_size, 110);
    assert_eq!(report.heaviest_headers[0].expansion_cost, 110);

    let shared_entry = report
        .heaviest_headers
        .iter()
        .find(|h| h.name == normalize_path(&shared))
        .unwrap();
    assert_eq!(shared_entry.include_count, 2);

    let include_dir = report
        .directories
        .iter()
        .find(|d| d.path == normalize_path(&inc.display().to_string()))
        .unwrap();
    assert_eq!(include_dir.size, 150);
    assert_eq!(include_dir.file_count, 3);

    let order = fs::read_to_string(out.join("order.txt")).unwrap();
    assert_eq!(order.lines().count(), 4);
    assert!(order.lines().last().unwrap().ends_with("(guarded, #2)"));

    assert!(out.join("includes.dot").exists());
    assert!(out.join("paths.dot").exists());
    assert!(validate_report_file(out.join("includes.json")).is_ok());
}

#[test]
fn test_execute_analyze_missing_header_fails() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = dir.path().join("includes.txt");
    fs::write(&trace_path, ". /definitely/not/here.h\n").unwrap();

    let args = AnalyzeArgs {
        trace: trace_path,
        output_json: Some(dir.path().join("includes.json")),
        ..Default::default()
    };

    assert!(execute_analyze(args).is_err());
    assert!(!dir.path().join("includes.json").exists());
}

#[test]
fn test_execute_analyze_note_prefix_keeps_detected_gcc() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.h"), "int a;\n").unwrap();
    let trace_path = dir.path().join("includes.txt");
    fs::write(&trace_path, ". a.h\n").unwrap();

    let out = dir.path().join("includes.json");
    let args = AnalyzeArgs {
        trace: trace_path,
        note_prefix: Some("Hinweis: Einlesen der Datei:".to_string()),
        base_dir: Some(dir.path().to_path_buf()),
        output_json: Some(out.clone()),
        ..Default::default()
    };
    validate_args(&args).unwrap();
    execute_analyze(args).unwrap();

    let report = read_report(out).unwrap();
    assert_eq!(report.dialect, Dialect::Gcc);
    assert_eq!(report.file_count, 1);
    assert_eq!(report.total_size, 7);
}
