/// Storage key shared by every persistence path (local store, import,
/// export). The browser original used the same key in `localStorage`.
pub const STORAGE_KEY: &str = "qeo-card-data";

/// vCard version emitted by the codec.
pub const VCARD_VERSION: &str = "3.0";

/// Fallback base name for exported data files when the card has no name.
pub const EXPORT_FALLBACK_NAME: &str = "qeo-card";
