use std::fs;

use crate::error::ExtractError;

/// Read a text file with an optional explicit encoding.
/// Supported encodings: "utf-8" (default), "shift_jis" (aliases: "sjis", "cp932", "windows-31j"),
/// "windows-1252", "utf-16le", "utf-16be". Unknown values fall back to UTF-8 (lossy).
pub fn read_txt_with_encoding(path: &str, encoding: Option<&str>) -> Result<String, ExtractError> {
    let bytes = fs::read(path).map_err(|e| ExtractError::io(path, e))?;
    Ok(decode_bytes(&bytes, encoding))
}

/// Decode raw bytes and normalize CRLF to LF.
pub fn decode_bytes(bytes: &[u8], encoding: Option<&str>) -> String {
    let lower = encoding.unwrap_or("").to_ascii_lowercase();
    let text: String = match lower.as_str() {
        "utf-8" | "utf8" | "" => String::from_utf8_lossy(bytes).into_owned(),
        "shift_jis" | "sjis" | "cp932" | "windows-31j" => {
            let (cow, _enc_used, _had_errors) = encoding_rs::SHIFT_JIS.decode(bytes);
            cow.into_owned()
        }
        "windows-1252" | "cp1252" => {
            let (cow, _enc_used, _had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
            cow.into_owned()
        }
        // BOM-sniffing decode drops a leading BOM.
        "utf-16le" | "utf16le" => encoding_rs::UTF_16LE.decode(bytes).0.into_owned(),
        "utf-16be" | "utf16be" => encoding_rs::UTF_16BE.decode(bytes).0.into_owned(),
        other => {
            tracing::warn!(encoding = other, "unknown encoding hint; decoding as UTF-8");
            String::from_utf8_lossy(bytes).into_owned()
        }
    };
    text.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_shift_jis() {
        let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode("今日は晴れです。\r\n");
        assert_eq!(decode_bytes(&bytes, Some("sjis")), "今日は晴れです。\n");
    }

    #[test]
    fn decodes_utf16le_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for u in "本当？".encode_utf16() { bytes.extend_from_slice(&u.to_le_bytes()); }
        assert_eq!(decode_bytes(&bytes, Some("UTF-16LE")), "本当？");
    }

    #[test]
    fn unknown_hint_falls_back_to_utf8() {
        assert_eq!(decode_bytes("abc".as_bytes(), Some("klingon")), "abc");
    }
}
