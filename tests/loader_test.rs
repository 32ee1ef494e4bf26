//! BOM読み込みテスト
//!
//! バナー行の読み飛ばし・必須カラム検証・文字コード判定を検証

use bom_datasheet_rust::loader;
use bom_datasheet_rust::matcher::types::LoadedRow;
use tempfile::tempdir;

/// バナー行+ヘッダー行+データ行の標準的なBOM
#[test]
fn test_load_standard_bom() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bom.csv");
    std::fs::write(
        &path,
        "Exported from PLM 2026-08-01\n\
         ITEMS,MFG,CATALOG\n\
         R1,Yageo,RC0402FR-0710KL\n\
         C1,Murata,GRM155R71C104KA88D\n",
    )
    .unwrap();

    let entries = loader::load_bom(&path).unwrap();
    assert_eq!(entries.len(), 2);

    match &entries[0] {
        LoadedRow::Row(row) => {
            assert_eq!(row.item_number, "R1");
            assert_eq!(row.manufacturer, "Yageo");
            assert_eq!(row.part_number, "RC0402FR-0710KL");
            assert_eq!(row.search_key(), "Yageo - RC0402FR-0710KL");
        }
        LoadedRow::Invalid { .. } => panic!("valid row expected"),
    }
}

/// CATALOGカラムが無いBOMは行単位のエラーになる（パニックしない）
#[test]
fn test_missing_catalog_column_is_per_row_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bom.csv");
    std::fs::write(&path, "banner\nITEMS,MFG\nR1,Yageo\n").unwrap();

    let entries = loader::load_bom(&path).unwrap();
    assert_eq!(entries.len(), 1);
    match &entries[0] {
        LoadedRow::Invalid { column, .. } => assert_eq!(column, "CATALOG"),
        LoadedRow::Row(_) => panic!("schema error expected"),
    }
}

/// latin1でエンコードされたBOMもフォールバックで読める
#[test]
fn test_latin1_encoded_bom() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bom.csv");
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"banner\nITEMS,MFG,CATALOG\nU1,Pr\xE9cision,PX-100\n");
    std::fs::write(&path, &bytes).unwrap();

    let entries = loader::load_bom(&path).unwrap();
    match &entries[0] {
        LoadedRow::Row(row) => assert_eq!(row.manufacturer, "Précision"),
        LoadedRow::Invalid { .. } => panic!("valid row expected"),
    }
}

/// UTF-8 BOM付きのファイル
#[test]
fn test_utf8_bom_marker() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bom.csv");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(b"banner\nITEMS,MFG,CATALOG\nR1,Yageo,RC0402\n");
    std::fs::write(&path, &bytes).unwrap();

    let entries = loader::load_bom(&path).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(matches!(entries[0], LoadedRow::Row(_)));
}

/// 空行は読み飛ばされる
#[test]
fn test_blank_lines_are_skipped() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bom.csv");
    std::fs::write(
        &path,
        "banner\nITEMS,MFG,CATALOG\nR1,Yageo,A\n\n\nR2,TI,B\n",
    )
    .unwrap();

    let entries = loader::load_bom(&path).unwrap();
    assert_eq!(entries.len(), 2);
}
