use crate::error::{DatasheetError, Result};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "CONFIG.txt";
const CONFIG_KEY: &str = "ENTER DATASHEET DATABASE PATH HERE:";

/// データシートフォルダの設定
///
/// 実行ファイルと同じディレクトリの CONFIG.txt から読み込む。
#[derive(Debug, Clone)]
pub struct Config {
    pub datasheet_folder: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Err(DatasheetError::ConfigNotFound(
                config_path.display().to_string(),
            ));
        }

        let content = std::fs::read_to_string(config_path)?;
        let folder = parse_config(&content)?;
        Ok(Self {
            datasheet_folder: folder,
        })
    }

    pub fn save_to(config_path: &Path, folder: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = format!("{}{}\n", CONFIG_KEY, folder.display());
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(folder: &Path) -> Result<()> {
        Self::save_to(&Self::config_path()?, folder)
    }

    /// CONFIG.txt の場所（実行ファイルの隣）
    pub fn config_path() -> Result<PathBuf> {
        let exe = std::env::current_exe()?;
        let dir = exe
            .parent()
            .ok_or_else(|| DatasheetError::Config("実行ファイルの場所を特定できません".into()))?;
        Ok(dir.join(CONFIG_FILE_NAME))
    }
}

/// CONFIG.txt の内容からデータシートフォルダのパスを取り出す
fn parse_config(content: &str) -> Result<PathBuf> {
    for line in content.lines() {
        if let Some(rest) = line.strip_prefix(CONFIG_KEY) {
            let path = rest.trim();
            if path.is_empty() {
                return Err(DatasheetError::Config(
                    "CONFIG.txt のパスが空です".into(),
                ));
            }
            return Ok(PathBuf::from(path));
        }
    }
    Err(DatasheetError::Config(format!(
        "CONFIG.txt に \"{}\" の行がありません",
        CONFIG_KEY
    )))
}
