//! サマリー表示とレポートファイル
//!
//! 照合結果を人が読むサマリー文字列と、`reconcile` サブコマンドが
//! 後から読み直せるJSONレポートの2形式に整形する。

use crate::error::{DatasheetError, Result};
use crate::matcher::types::MatchSummary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_REPORT_FILE_NAME: &str = "match-report.json";

/// 照合結果のJSONレポート
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// バージョン（互換性チェック用）
    pub version: u32,
    pub generated_at: String,
    pub bom_file: PathBuf,
    pub reference_folder: PathBuf,
    pub summary: MatchSummary,
}

impl MatchReport {
    const CURRENT_VERSION: u32 = 1;

    pub fn from_summary(
        summary: MatchSummary,
        bom_file: &Path,
        reference_folder: &Path,
    ) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            bom_file: bom_file.to_path_buf(),
            reference_folder: reference_folder.to_path_buf(),
            summary,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DatasheetError::Report(format!(
                "レポートファイルがありません: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let report: MatchReport = serde_json::from_str(&content)?;
        if report.version != Self::CURRENT_VERSION {
            return Err(DatasheetError::Report(format!(
                "レポートのバージョンが一致しません: {}",
                report.version
            )));
        }
        Ok(report)
    }
}

/// サマリー文字列を組み立てる
pub fn render_summary(summary: &MatchSummary) -> String {
    let mut text = String::new();

    text.push_str(&format!(
        "コピー先: {}\n\n",
        summary.destination_folder.display()
    ));

    text.push_str(&format!("✔ コピー成功 ({}):\n", summary.success_count()));
    for success in &summary.successes {
        text.push_str(&format!("  {}\n", success.row.label()));
    }

    text.push_str(&format!("\n✖ 未検出 ({}):\n", summary.missing_count()));
    for entry in &summary.missing {
        text.push_str(&format!("  {}\n", entry.label()));
    }

    let ambiguous: Vec<_> = summary.ambiguous().collect();
    if !ambiguous.is_empty() {
        text.push_str(&format!("\n⚠ 複数一致 ({}):\n", ambiguous.len()));
        for success in ambiguous {
            text.push_str(&format!(
                "  {} ({}件)\n",
                success.row.label(),
                success.matched_files
            ));
        }
    }

    text
}
