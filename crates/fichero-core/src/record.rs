//! Client name normalization and record text formatting.
//!
//! All name handling lives here so create/read/append/remove cannot drift:
//! the index key is always [`normalized`], the record filename is always
//! [`display`] plus [`RECORD_EXTENSION`].

use crate::error::{Result, StoreError};
use chrono::Local;

/// File extension marking a file as a client record.
pub const RECORD_EXTENSION: &str = "txt";

/// Separator line delimiting an appended request block.
const REQUEST_SEPARATOR: &str = "==============================";

/// Lowercase form of a client name, used as the index key.
pub fn normalized(name: &str) -> String {
    name.to_lowercase()
}

/// Title-cased form of a client name, used for display and filenames.
///
/// The first letter after any non-alphabetic boundary is uppercased and the
/// rest lowercased, so `ana maría` becomes `Ana María`. Record files written
/// by earlier versions of the system use the same convention, which keeps
/// their filenames stable across rewrites.
pub fn display(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alpha = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Whether a client name can safely become a record filename.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains(['/', '\\', '\0'])
}

pub fn validate(name: &str) -> Result<()> {
    if !is_valid_name(name) {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Current local time at second precision, as written into record files.
fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Header block written when a client record is created.
pub fn creation_block(display_name: &str, service_description: &str) -> String {
    format!(
        "--- Ficha del Cliente: {} ---\nFecha de Creación: {}\n\n--- Servicio Inicial ---\nDescripción: {}\n",
        display_name,
        timestamp(),
        service_description
    )
}

/// Delimited block appended to a record for each recurring request.
pub fn request_block(description: &str) -> String {
    format!(
        "\n{sep}\n--- Solicitud Recurrente ({}) ---\nDescripción: {}\n{sep}\n",
        timestamp(),
        description,
        sep = REQUEST_SEPARATOR
    )
}
