//! Excel形式のBOM読み込み（先頭ワークシートのみ）

use crate::error::{DatasheetError, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::io::BufReader;
use std::fs::File;
use std::path::Path;

/// xlsxの先頭シートを文字列の行列として読み出す
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook: Xlsx<BufReader<File>> =
        open_workbook(path).map_err(|e: calamine::XlsxError| DatasheetError::Excel(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| DatasheetError::Excel("ワークシートがありません".into()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| DatasheetError::Excel(e.to_string()))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    Ok(rows)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
