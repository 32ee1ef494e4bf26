//! 文字コードのフォールバック連鎖付きデコード
//!
//! BOM判定 → UTF-8（厳密） → windows-1252 の順で試す。
//! iso-8859-1/latin1はWHATWGの対応でwindows-1252に包含される。

use crate::error::{DatasheetError, Result};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// バイト列をデコードし、本文と使用した文字コード名を返す
///
/// BOMが文字コードを明示しているのにデコードできない場合は
/// 致命的エラー（文字化けしたまま処理を続けない）。
pub fn decode_with_fallback(bytes: &[u8]) -> Result<(String, &'static str)> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        let (text, _, had_errors) = encoding.decode(bytes);
        if had_errors {
            return Err(DatasheetError::Decode(format!(
                "BOMは{}を示していますがデコードに失敗しました",
                encoding.name()
            )));
        }
        return Ok((text.into_owned(), encoding.name()));
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok((text.to_string(), UTF_8.name()));
    }

    let (text, had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(DatasheetError::Decode(
            "windows-1252でもデコードできません".into(),
        ));
    }
    Ok((text.into_owned(), WINDOWS_1252.name()))
}
