use anyhow::{bail, Context, Result};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use std::fs;
use std::path::Path;

/// How the bytes of a file are turned into text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingChoice {
    /// Sniff a BOM, then try UTF-8, then fall back to Windows-1252.
    Auto,
    /// Always decode with the given encoding. A BOM still wins.
    Fixed(&'static Encoding),
}

impl Default for EncodingChoice {
    fn default() -> Self {
        EncodingChoice::Fixed(UTF_8)
    }
}

impl EncodingChoice {
    pub fn resolve(&self, bytes: &[u8]) -> &'static Encoding {
        match self {
            EncodingChoice::Auto => detect_encoding(bytes),
            EncodingChoice::Fixed(encoding) => *encoding,
        }
    }
}

/// A file read fully into memory and split into lines.
#[derive(Debug)]
pub struct DecodedFile {
    pub lines: Vec<String>,
    pub encoding: &'static Encoding,
}

/// Reads the whole file at `path` in one blocking call and splits it into
/// lines, each keeping its terminator.
pub fn read_lines(path: &Path, choice: EncodingChoice) -> Result<DecodedFile> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    let (text, encoding) = decode_strict(&bytes, choice.resolve(&bytes))
        .with_context(|| format!("Failed to decode file: {}", path.display()))?;

    let lines = split_lines_keep_ends(&text);
    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        lines = lines.len(),
        encoding = encoding.name(),
        "read file"
    );

    Ok(DecodedFile { lines, encoding })
}

/// Decodes `bytes` without replacement characters. Malformed input is an
/// error rather than being patched with U+FFFD.
pub fn decode_strict(
    bytes: &[u8],
    encoding: &'static Encoding,
) -> Result<(String, &'static Encoding)> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((bom_encoding, bom_len)) => (bom_encoding, &bytes[bom_len..]),
        None => (encoding, bytes),
    };

    match encoding.decode_without_bom_handling_and_without_replacement(body) {
        Some(text) => Ok((text.into_owned(), encoding)),
        None => bail!("Input is not valid {} text", encoding.name()),
    }
}

/// Splits after every `\n`, `\r\n` and lone `\r`, keeping the terminators.
/// A trailing fragment without a terminator becomes the last line.
pub fn split_lines_keep_ends(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(text[start..=i].to_string());
                start = i + 1;
            }
            b'\r' => {
                let end = if bytes.get(i + 1) == Some(&b'\n') {
                    i + 1
                } else {
                    i
                };
                lines.push(text[start..=end].to_string());
                start = end + 1;
                i = end;
            }
            _ => {}
        }
        i += 1;
    }

    if start < text.len() {
        lines.push(text[start..].to_string());
    }

    lines
}

pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    // Check for BOM
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    // Windows-1252 maps every byte, so it never fails to decode
    WINDOWS_1252
}

pub fn available_encodings() -> Vec<(&'static str, &'static Encoding)> {
    vec![
        ("UTF-8", UTF_8),
        ("UTF-16 LE", UTF_16LE),
        ("UTF-16 BE", UTF_16BE),
        ("Windows-1252", WINDOWS_1252),
    ]
}
