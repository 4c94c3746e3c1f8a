//! User-facing messages.
//!
//! Single locale, hardcoded, matching the original UI copy.

pub const CARD_UPDATED: &str = "Kartu digital berhasil diperbarui!";
pub const CARD_LOADED: &str = "Data kartu berhasil dimuat!";
pub const CARD_IMPORTED: &str = "Data kartu berhasil diimpor!";
pub const CARD_EXPORTED: &str = "Data kartu berhasil diekspor!";
pub const VCARD_DOWNLOADED: &str = "Kartu berhasil diunduh dalam format vCard!";
pub const INVALID_FILE: &str = "Format file tidak valid!";
pub const DATA_CLEARED: &str = "Semua data berhasil dihapus!";
