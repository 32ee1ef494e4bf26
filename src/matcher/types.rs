use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// BOMの1行（部品番号・メーカー・型番）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomRow {
    pub item_number: String,
    pub manufacturer: String,
    pub part_number: String,
}

impl BomRow {
    /// データシートフォルダ内のファイル名に対する検索キー
    ///
    /// 大文字小文字・空白の正規化はしない（完全な部分文字列一致）。
    pub fn search_key(&self) -> String {
        format!("{} - {}", self.manufacturer, self.part_number)
    }

    /// コピー先の正規化ファイル名
    pub fn dest_file_name(&self) -> String {
        format!(
            "{} - {} - {}.pdf",
            self.item_number, self.manufacturer, self.part_number
        )
    }

    /// メインデータベースへ保存するときのファイル名（部品番号なし）
    pub fn reference_file_name(&self) -> String {
        format!("{} - {}.pdf", self.manufacturer, self.part_number)
    }

    /// Web検索用のクエリ文字列
    pub fn search_query(&self) -> String {
        format!("{} {} datasheet", self.manufacturer, self.part_number)
    }

    /// サマリー表示用のラベル
    pub fn label(&self) -> String {
        format!(
            "{} - {} - {}",
            self.item_number, self.manufacturer, self.part_number
        )
    }
}

/// Loaderが読み取った1行分の結果（行順を保持する）
#[derive(Debug, Clone)]
pub enum LoadedRow {
    Row(BomRow),
    /// 必須カラム欠落（行番号と欠けていたカラム名）
    Invalid { line: usize, column: String },
}

/// 照合に成功した行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSuccess {
    pub row: BomRow,
    pub source_path: PathBuf,
    pub dest_path: PathBuf,
    /// 検索キーに一致したファイル数（2以上は曖昧一致）
    pub matched_files: usize,
    /// コピー後ファイルのSHA-256（計算失敗時はNone）
    pub sha256: Option<String>,
}

/// 照合できなかった行
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MissingEntry {
    NoFileFound { row: BomRow },
    CopyError { row: BomRow, detail: String },
    SchemaError { line: usize, column: String },
}

impl MissingEntry {
    /// サマリーに出す理由テキスト
    pub fn reason(&self) -> String {
        match self {
            MissingEntry::NoFileFound { .. } => "no file found".to_string(),
            MissingEntry::CopyError { detail, .. } => format!("copy error: {}", detail),
            MissingEntry::SchemaError { column, .. } => {
                format!("missing required column: {}", column)
            }
        }
    }

    /// サマリーの1行分のテキスト
    pub fn label(&self) -> String {
        match self {
            MissingEntry::NoFileFound { row } | MissingEntry::CopyError { row, .. } => {
                format!("{} ({})", row.label(), self.reason())
            }
            MissingEntry::SchemaError { line, .. } => {
                format!("行{}: {}", line, self.reason())
            }
        }
    }

    /// 手動補完の対象となる行（スキーマエラーは対象外）
    pub fn reconcilable_row(&self) -> Option<&BomRow> {
        match self {
            MissingEntry::NoFileFound { row } | MissingEntry::CopyError { row, .. } => Some(row),
            MissingEntry::SchemaError { .. } => None,
        }
    }
}

/// 照合・コピー処理の結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub destination_folder: PathBuf,
    pub successes: Vec<MatchSuccess>,
    pub missing: Vec<MissingEntry>,
}

impl MatchSummary {
    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// 複数ファイルに一致した行（曖昧一致）
    pub fn ambiguous(&self) -> impl Iterator<Item = &MatchSuccess> {
        self.successes.iter().filter(|s| s.matched_files > 1)
    }
}
