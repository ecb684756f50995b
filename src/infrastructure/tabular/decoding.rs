// ============================================================
// TEXT DECODING
// ============================================================
// Turn uploaded CSV bytes into text without ever failing on bad bytes

use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::domain::error::{AppError, Result};
use crate::domain::sweeper_config::is_latin1_label;

/// Decode `bytes` with the encoding named by `label`.
///
/// Latin-1 labels map every byte to the code point of the same value. The
/// WHATWG tables would otherwise treat them as windows-1252. Other labels go
/// through `encoding_rs`, with malformed sequences replaced.
pub fn decode_text<'a>(bytes: &'a [u8], label: &str) -> Result<Cow<'a, str>> {
    if is_latin1_label(label) {
        return Ok(encoding_rs::mem::decode_latin1(bytes));
    }

    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| AppError::ConfigError(format!("Unknown text encoding: {}", label)))?;

    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "Replaced malformed byte sequences while decoding");
    }
    Ok(text)
}
