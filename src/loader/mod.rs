//! BOMファイル読み込みモジュール
//!
//! 1行目はバナー行として読み飛ばし、2行目をヘッダーとして扱う。
//! 必須カラムは ITEMS / MFG / CATALOG（大文字小文字も含め完全一致）。
//! カラム欠落は行単位のエラーとして記録し、処理は続行する。

pub mod encoding;
mod excel;

use crate::error::{DatasheetError, Result};
use crate::matcher::types::{BomRow, LoadedRow};
use std::path::Path;

pub const COL_ITEMS: &str = "ITEMS";
pub const COL_MFG: &str = "MFG";
pub const COL_CATALOG: &str = "CATALOG";

const REQUIRED_COLUMNS: &[&str] = &[COL_ITEMS, COL_MFG, COL_CATALOG];

/// BOMファイルを読み込む
///
/// 拡張子が .xlsx ならExcelとして、それ以外は区切りテキストとして読む。
pub fn load_bom(path: &Path) -> Result<Vec<LoadedRow>> {
    if !path.exists() {
        return Err(DatasheetError::FileNotFound(path.display().to_string()));
    }

    let is_xlsx = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("xlsx"))
        .unwrap_or(false);

    let rows = if is_xlsx {
        excel::read_rows(path)?
    } else {
        read_csv_rows(path)?
    };

    parse_rows(rows)
}

/// CSVを文字コード判定付きで文字列の行列に読み出す
fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let bytes = std::fs::read(path)?;
    let (text, _encoding) = encoding::decode_with_fallback(&bytes)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }
    Ok(rows)
}

/// 行列からBOM行を組み立てる（行順を保持）
fn parse_rows(rows: Vec<Vec<String>>) -> Result<Vec<LoadedRow>> {
    if rows.len() < 2 {
        return Err(DatasheetError::BomParse(
            "ヘッダー行がありません（バナー行+ヘッダー行の2行が必要です）".into(),
        ));
    }

    let header = &rows[1];
    let column_index = |name: &str| header.iter().position(|h| h.trim() == name);
    let indices: Vec<(&str, Option<usize>)> = REQUIRED_COLUMNS
        .iter()
        .map(|&name| (name, column_index(name)))
        .collect();

    let mut entries = Vec::new();

    for (i, row) in rows.iter().enumerate().skip(2) {
        // 空行は読み飛ばす
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let line = i + 1;
        let mut fields = Vec::with_capacity(REQUIRED_COLUMNS.len());
        let mut missing_column = None;

        for (name, index) in &indices {
            let value = index
                .and_then(|idx| row.get(idx))
                .map(|cell| cell.trim())
                .filter(|cell| !cell.is_empty());
            match value {
                Some(v) => fields.push(v.to_string()),
                None => {
                    missing_column = Some(*name);
                    break;
                }
            }
        }

        match missing_column {
            Some(column) => entries.push(LoadedRow::Invalid {
                line,
                column: column.to_string(),
            }),
            None => {
                let mut it = fields.into_iter();
                entries.push(LoadedRow::Row(BomRow {
                    item_number: it.next().unwrap_or_default(),
                    manufacturer: it.next().unwrap_or_default(),
                    part_number: it.next().unwrap_or_default(),
                }));
            }
        }
    }

    Ok(entries)
}
