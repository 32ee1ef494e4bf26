use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasheetError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("CONFIG.txt が見つかりません: {0}")]
    ConfigNotFound(String),

    #[error("BOMファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("データシートフォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("文字コードを判定できません: {0}")]
    Decode(String),

    #[error("BOM読み込みエラー: {0}")]
    BomParse(String),

    #[error("CSV解析エラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel読み込みエラー: {0}")]
    Excel(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("レポート読み込みエラー: {0}")]
    Report(String),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDFファイルのみ受け付けます: {0}")]
    InvalidDrop(String),

    #[error("ドロップされたファイルが見つかりません: {0}")]
    DroppedFileNotFound(String),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, DatasheetError>;
