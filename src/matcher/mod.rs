//! 照合・コピーモジュール
//!
//! BOM各行の検索キー（"{MFG} - {CATALOG}"）をデータシートフォルダの
//! ファイル名と部分文字列で照合し、一致ファイルをコピー先へ
//! 正規化した名前で複製する。行単位の失敗は記録して処理を続ける。

pub mod types;

use crate::error::Result;
use crate::scanner::{self, DatasheetFile};
use indicatif::ProgressBar;
use sha2::{Digest, Sha256};
use self::types::{BomRow, LoadedRow, MatchSuccess, MatchSummary, MissingEntry};
use std::path::Path;

/// BOM行列をデータシートフォルダと照合し、一致ファイルをコピーする
///
/// コピー先フォルダは無ければ作成する。同名ファイルは上書きされるため、
/// 同一入力での再実行は結果が変わらない。
pub fn process(
    entries: &[LoadedRow],
    reference_dir: &Path,
    dest_dir: &Path,
    verbose: bool,
) -> Result<MatchSummary> {
    std::fs::create_dir_all(dest_dir)?;

    let files = scanner::scan_reference_folder(reference_dir)?;

    let progress = ProgressBar::new(entries.len() as u64);
    let mut successes = Vec::new();
    let mut missing = Vec::new();

    for entry in entries {
        match entry {
            LoadedRow::Invalid { line, column } => {
                missing.push(MissingEntry::SchemaError {
                    line: *line,
                    column: column.clone(),
                });
            }
            LoadedRow::Row(row) => match match_row(row, &files, dest_dir, &progress, verbose) {
                Ok(success) => successes.push(success),
                Err(entry) => missing.push(entry),
            },
        }
        progress.inc(1);
    }

    progress.finish_and_clear();

    Ok(MatchSummary {
        destination_folder: dest_dir.to_path_buf(),
        successes,
        missing,
    })
}

/// 1行分の照合とコピー
///
/// 複数ファイルが一致した場合は全てコピーする（同じコピー先名のため
/// 後のコピーが前を上書きする）。1つでもコピーが成功すれば成功扱い。
fn match_row(
    row: &BomRow,
    files: &[DatasheetFile],
    dest_dir: &Path,
    progress: &ProgressBar,
    verbose: bool,
) -> std::result::Result<MatchSuccess, MissingEntry> {
    let search_key = row.search_key();
    let matches: Vec<&DatasheetFile> = files
        .iter()
        .filter(|f| f.file_name.contains(&search_key))
        .collect();

    if matches.is_empty() {
        return Err(MissingEntry::NoFileFound { row: row.clone() });
    }

    let dest_path = dest_dir.join(row.dest_file_name());
    let mut copied_from = None;
    let mut first_error: Option<String> = None;

    for file in &matches {
        match std::fs::copy(&file.path, &dest_path) {
            Ok(_) => {
                if verbose {
                    progress.println(format!(
                        "  コピー: {} -> {}",
                        file.path.display(),
                        dest_path.display()
                    ));
                }
                copied_from = Some(file.path.clone());
            }
            Err(e) => {
                if first_error.is_none() {
                    first_error = Some(e.to_string());
                }
            }
        }
    }

    match copied_from {
        Some(source_path) => Ok(MatchSuccess {
            row: row.clone(),
            source_path,
            sha256: file_sha256(&dest_path).ok(),
            dest_path,
            matched_files: matches.len(),
        }),
        None => Err(MissingEntry::CopyError {
            row: row.clone(),
            detail: first_error.unwrap_or_else(|| "コピーできませんでした".into()),
        }),
    }
}

/// ファイルのSHA-256を16進文字列で返す
pub fn file_sha256(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
