//! 照合・コピー処理テスト
//!
//! 仕様どおりの成功・未検出・冪等性を実ファイルで検証

use bom_datasheet_rust::matcher::{self, types::*};
use bom_datasheet_rust::{loader, report};
use tempfile::tempdir;

fn load_entries(content: &str) -> (tempfile::TempDir, Vec<LoadedRow>) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bom.csv");
    std::fs::write(&path, content).unwrap();
    let entries = loader::load_bom(&path).unwrap();
    (dir, entries)
}

/// 仕様の例: R1 / Yageo / RC0402FR-0710KL が1ファイルに一致する
#[test]
fn test_worked_example_single_match() {
    let reference = tempdir().expect("Failed to create temp dir");
    let dest = tempdir().expect("Failed to create temp dir");
    std::fs::write(
        reference.path().join("Yageo - RC0402FR-0710KL.pdf"),
        b"yageo datasheet",
    )
    .unwrap();

    let (_bom_dir, entries) = load_entries(
        "banner\nITEMS,MFG,CATALOG\nR1,Yageo,RC0402FR-0710KL\n",
    );
    let summary = matcher::process(&entries, reference.path(), dest.path(), false).unwrap();

    assert_eq!(summary.success_count(), 1);
    assert_eq!(
        summary.successes[0].row.label(),
        "R1 - Yageo - RC0402FR-0710KL"
    );

    let dest_path = dest.path().join("R1 - Yageo - RC0402FR-0710KL.pdf");
    assert!(dest_path.is_file());
    assert_eq!(std::fs::read(&dest_path).unwrap(), b"yageo datasheet");
}

/// 仕様の例: データシートフォルダが空なら未検出になり、検索クエリが導出できる
#[test]
fn test_worked_example_empty_reference_folder() {
    let reference = tempdir().expect("Failed to create temp dir");
    let dest = tempdir().expect("Failed to create temp dir");

    let (_bom_dir, entries) = load_entries(
        "banner\nITEMS,MFG,CATALOG\nR1,Yageo,RC0402FR-0710KL\n",
    );
    let summary = matcher::process(&entries, reference.path(), dest.path(), false).unwrap();

    assert_eq!(summary.success_count(), 0);
    assert_eq!(summary.missing_count(), 1);

    let row = summary.missing[0].reconcilable_row().expect("row expected");
    assert_eq!(row.label(), "R1 - Yageo - RC0402FR-0710KL");
    assert_eq!(row.search_query(), "Yageo RC0402FR-0710KL datasheet");
}

/// 同じ入力で2回実行しても結果は変わらない
#[test]
fn test_two_runs_produce_identical_output() {
    let reference = tempdir().expect("Failed to create temp dir");
    let dest = tempdir().expect("Failed to create temp dir");
    std::fs::write(reference.path().join("Yageo - RC0402.pdf"), b"body").unwrap();

    let (_bom_dir, entries) = load_entries(
        "banner\nITEMS,MFG,CATALOG\nR1,Yageo,RC0402\nU9,Unknown,ZZZ\n",
    );

    let first = matcher::process(&entries, reference.path(), dest.path(), false).unwrap();
    let before = std::fs::read(dest.path().join("R1 - Yageo - RC0402.pdf")).unwrap();

    let second = matcher::process(&entries, reference.path(), dest.path(), false).unwrap();
    let after = std::fs::read(dest.path().join("R1 - Yageo - RC0402.pdf")).unwrap();

    assert_eq!(before, after);
    assert_eq!(first.success_count(), second.success_count());
    assert_eq!(first.missing_count(), second.missing_count());

    // コピー先に余計なファイルが増えない
    assert_eq!(std::fs::read_dir(dest.path()).unwrap().count(), 1);
}

/// CATALOG欠落の行があってもパニックせず、missingに必ず入る
#[test]
fn test_schema_violation_never_panics() {
    let reference = tempdir().expect("Failed to create temp dir");
    let dest = tempdir().expect("Failed to create temp dir");
    std::fs::write(reference.path().join("TI - SN74LS00N.pdf"), b"x").unwrap();

    let (_bom_dir, entries) = load_entries(
        "banner\nITEMS,MFG,CATALOG\nU1,TI,SN74LS00N\nU2,NXP,\n",
    );
    let summary = matcher::process(&entries, reference.path(), dest.path(), false).unwrap();

    assert_eq!(summary.success_count(), 1);
    assert_eq!(summary.missing_count(), 1);
    assert_eq!(
        summary.missing[0].reason(),
        "missing required column: CATALOG"
    );
}

/// サマリーとレポートの整形
#[test]
fn test_summary_and_report_flow() {
    let reference = tempdir().expect("Failed to create temp dir");
    let dest = tempdir().expect("Failed to create temp dir");
    std::fs::write(reference.path().join("Yageo - RC0402.pdf"), b"x").unwrap();

    let (bom_dir, entries) = load_entries(
        "banner\nITEMS,MFG,CATALOG\nR1,Yageo,RC0402\nU9,Unknown,ZZZ\n",
    );
    let summary = matcher::process(&entries, reference.path(), dest.path(), false).unwrap();

    let text = report::render_summary(&summary);
    assert!(text.contains("コピー成功 (1)"));
    assert!(text.contains("R1 - Yageo - RC0402"));
    assert!(text.contains("U9 - Unknown - ZZZ (no file found)"));

    let report_path = dest.path().join(report::DEFAULT_REPORT_FILE_NAME);
    let match_report = report::MatchReport::from_summary(
        summary,
        &bom_dir.path().join("bom.csv"),
        reference.path(),
    );
    match_report.save(&report_path).unwrap();

    let loaded = report::MatchReport::load(&report_path).unwrap();
    assert_eq!(loaded.summary.success_count(), 1);
    assert_eq!(loaded.summary.missing_count(), 1);
    assert_eq!(loaded.reference_folder, reference.path());
}
