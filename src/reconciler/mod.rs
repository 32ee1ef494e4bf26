//! 未検出データシートの対話式補完モジュール
//!
//! 未検出の部品を入力順に1件ずつ処理する。各件でWeb検索を開き、
//! 端末へドラッグされたPDFのパスを受け取ってコピー先へ保存する。
//! 「メインデータベースへ保存」を選んだ場合はデータシートフォルダにも
//! 複製し、次回以降の自動照合で見つかるようにする。
//!
//! 中止（q）は残り全件の補完を打ち切る。

use crate::error::{DatasheetError, Result};
use crate::matcher::types::BomRow;
use dialoguer::{Confirm, Input};
use std::path::{Path, PathBuf};

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileAction {
    /// ファイルパスのドロップ
    Drop(PathBuf),
    /// 検索ページをもう一度開く
    OpenSearch,
    /// 補完全体を中止
    Abort,
}

/// 受理された1件の結果
#[derive(Debug, Clone)]
pub struct ResolvedItem {
    pub row: BomRow,
    pub dest_path: PathBuf,
    /// メインデータベースへも保存した場合のパス
    pub reference_path: Option<PathBuf>,
}

/// 補完処理全体の結果
#[derive(Debug)]
pub struct ReconcileOutcome {
    pub resolved: Vec<ResolvedItem>,
    pub aborted: bool,
    pub remaining: Vec<BomRow>,
}

/// Web検索のURL（クエリの空白は + に置き換える）
pub fn search_url(row: &BomRow) -> String {
    format!(
        "https://www.google.com/search?q={}",
        row.search_query().replace(' ', "+")
    )
}

/// 検索ページをブラウザで開く（開けなくても処理は続ける）
pub fn open_search(row: &BomRow) {
    let _ = open::that(search_url(row));
}

/// 端末へドロップされたパス文字列を整える
///
/// 端末エミュレータはパスを引用符や波括弧で囲むことがある。
pub fn clean_dropped_path(input: &str) -> PathBuf {
    let trimmed = input
        .trim()
        .trim_matches(|c| c == '"' || c == '\'' || c == '{' || c == '}');
    PathBuf::from(trimmed)
}

/// 受理する拡張子は .pdf（大文字小文字は区別しない）
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// 入力文字列をアクションへ変換する（空入力はNone）
pub fn parse_action(input: &str) -> Option<ReconcileAction> {
    match input.trim() {
        "" => None,
        "q" | "Q" => Some(ReconcileAction::Abort),
        "o" | "O" => Some(ReconcileAction::OpenSearch),
        other => Some(ReconcileAction::Drop(clean_dropped_path(other))),
    }
}

/// ドロップされたファイルを検証してコピーする
///
/// メインデータベースへの保存が有効な場合は、部品番号なしの
/// "{MFG} - {CATALOG}.pdf" でデータシートフォルダにも複製する。
pub fn accept_drop(
    dropped: &Path,
    row: &BomRow,
    dest_dir: &Path,
    reference_dir: &Path,
    save_to_main_db: bool,
) -> Result<ResolvedItem> {
    if !is_pdf(dropped) {
        return Err(DatasheetError::InvalidDrop(dropped.display().to_string()));
    }
    if !dropped.is_file() {
        return Err(DatasheetError::DroppedFileNotFound(
            dropped.display().to_string(),
        ));
    }

    let reference_path = if save_to_main_db {
        let path = reference_dir.join(row.reference_file_name());
        std::fs::copy(dropped, &path)?;
        Some(path)
    } else {
        None
    };

    let dest_path = dest_dir.join(row.dest_file_name());
    std::fs::copy(dropped, &dest_path)?;

    Ok(ResolvedItem {
        row: row.clone(),
        dest_path,
        reference_path,
    })
}

/// サマリー確認後の手動補完の意思確認
pub fn confirm_opt_in(missing_count: usize) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!(
            "未検出の{}件を手動で補完しますか？",
            missing_count
        ))
        .default(false)
        .interact()
        .map_err(|e| DatasheetError::Prompt(e.to_string()))
}

/// 未検出部品を対話式で1件ずつ補完する
pub fn run_reconciliation(
    items: &[BomRow],
    dest_dir: &Path,
    reference_dir: &Path,
) -> Result<ReconcileOutcome> {
    // 保存先の方針は最初に1回だけ確認する
    let save_to_main_db = Confirm::new()
        .with_prompt("補完したデータシートをメインデータベースにも保存しますか？")
        .default(true)
        .interact()
        .map_err(|e| DatasheetError::Prompt(e.to_string()))?;

    println!("---");
    println!("操作: [パスをドロップしてEnter] o:検索を再表示 q:中止");
    println!("---");

    let mut resolved: Vec<ResolvedItem> = Vec::new();
    let mut aborted = false;

    'items: for (count, row) in items.iter().enumerate() {
        println!(
            "\n[{}/{}] {} のデータシートをドラッグしてください",
            count + 1,
            items.len(),
            row.search_key()
        );
        println!("  検索クエリ: {}", row.search_query());
        open_search(row);

        loop {
            let input: String = Input::new()
                .with_prompt("PDF")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| DatasheetError::Prompt(e.to_string()))?;

            match parse_action(&input) {
                None => continue,
                Some(ReconcileAction::OpenSearch) => {
                    open_search(row);
                }
                Some(ReconcileAction::Abort) => {
                    println!("  → 中止します（残り{}件）", items.len() - count);
                    aborted = true;
                    break 'items;
                }
                Some(ReconcileAction::Drop(path)) => {
                    match accept_drop(&path, row, dest_dir, reference_dir, save_to_main_db) {
                        Ok(item) => {
                            println!("  ✔ 保存: {}", item.dest_path.display());
                            if let Some(ref reference) = item.reference_path {
                                println!("  ✔ データベースへ追加: {}", reference.display());
                            }
                            resolved.push(item);
                            continue 'items;
                        }
                        // 不正なドロップは拒否して同じ件の入力を続ける
                        Err(DatasheetError::InvalidDrop(path)) => {
                            println!("  ⚠ PDFファイルのみ受け付けます: {}", path);
                        }
                        Err(DatasheetError::DroppedFileNotFound(path)) => {
                            println!("  ⚠ ファイルが見つかりません: {}", path);
                        }
                        Err(e) => {
                            println!("  ⚠ コピーに失敗しました: {}", e);
                        }
                    }
                }
            }
        }
    }

    let remaining = items
        .iter()
        .filter(|row| !resolved.iter().any(|item| &item.row == *row))
        .cloned()
        .collect();

    Ok(ReconcileOutcome {
        resolved,
        aborted,
        remaining,
    })
}
