use crate::error::{DatasheetError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// データシートフォルダ内の1ファイル
#[derive(Debug, Clone)]
pub struct DatasheetFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// データシートフォルダ直下のファイル一覧を取得する
pub fn scan_reference_folder(folder: &Path) -> Result<Vec<DatasheetFile>> {
    if !folder.exists() {
        return Err(DatasheetError::FolderNotFound(
            folder.display().to_string(),
        ));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1) // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        files.push(DatasheetFile {
            path: path.to_path_buf(),
            file_name,
        });
    }

    // ファイル名でソート（OSの列挙順に依存しない）
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}
