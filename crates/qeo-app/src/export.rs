//! Export glue: file naming and the download/import paths.
//!
//! File writes go through the [`FileTransfer`] collaborator so tests can
//! capture output without touching the filesystem.

use std::path::{Path, PathBuf};

use qeo_core::constants::EXPORT_FALLBACK_NAME;
use qeo_core::model::{CardFields, CardRecord};
use qeo_store::{LoadSource, ParseError};

/// File collaborator for downloads and imports.
pub trait FileTransfer {
    /// Reads a text file.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read.
    fn read_text(&self, path: &Path) -> anyhow::Result<String>;

    /// Writes `content` to a file called `name` in the transfer target.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be written.
    fn write_text(&self, name: &str, content: &str) -> anyhow::Result<()>;
}

/// Filesystem-backed transfer writing into a target directory.
#[derive(Debug)]
pub struct LocalFiles {
    out_dir: PathBuf,
}

impl LocalFiles {
    /// Creates a transfer targeting `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

impl FileTransfer for LocalFiles {
    fn read_text(&self, path: &Path) -> anyhow::Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write_text(&self, name: &str, content: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(name);
        std::fs::write(&path, content)?;
        tracing::info!(path = %path.display(), "file written");
        Ok(())
    }
}

/// Collapses each whitespace run to a single underscore.
fn file_safe(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// File name for the `.vcf` download. Derived from the display name, so an
/// empty card downloads as the name placeholder.
#[must_use]
pub fn vcard_file_name(fields: &CardFields) -> String {
    format!("{}.vcf", file_safe(fields.display_name()))
}

/// File name for the JSON data export. Derived from the raw name; an empty
/// name falls back to the fixed default rather than the placeholder.
#[must_use]
pub fn data_file_name(fields: &CardFields) -> String {
    let base = if fields.name.is_empty() {
        EXPORT_FALLBACK_NAME.to_string()
    } else {
        file_safe(&fields.name)
    };
    format!("{base}_data.json")
}

/// Writes the `.vcf` download for the given fields.
///
/// ## Errors
/// Returns an error if the file cannot be written.
pub fn download_vcard(fields: &CardFields, files: &impl FileTransfer) -> anyhow::Result<String> {
    let content = qeo_vcard::encode(fields);
    let file_name = vcard_file_name(fields);
    files.write_text(&file_name, &content)?;
    Ok(file_name)
}

/// Writes the pretty-printed JSON data export.
///
/// ## Errors
/// Returns an error if serialization or the file write fails.
pub fn export_card_data(
    record: &CardRecord,
    files: &impl FileTransfer,
) -> anyhow::Result<String> {
    let content = qeo_store::serialize_pretty(record)?;
    let file_name = data_file_name(&record.fields);
    files.write_text(&file_name, &content)?;
    Ok(file_name)
}

/// Reads and validates an externally supplied card file.
///
/// Import is the strict path: the `name` and `email` keys must be present.
/// Nothing is committed here; callers replace the session record and
/// persist only on success, so failed imports leave state untouched.
///
/// ## Errors
/// Returns an error if the file cannot be read, or [`ParseError`] (wrapped)
/// if its content fails validation.
pub fn import_card_data(path: &Path, files: &impl FileTransfer) -> anyhow::Result<CardRecord> {
    let text = files.read_text(path)?;
    let record = qeo_store::deserialize(&text, LoadSource::FileImport)?;
    Ok(record)
}

/// Whether an import failure was a content problem (as opposed to I/O).
#[must_use]
pub fn is_invalid_format(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ParseError>().is_some()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use qeo_core::model::PresentationState;

    use super::*;

    /// Captures writes in memory.
    #[derive(Default)]
    struct CapturedFiles {
        written: RefCell<Vec<(String, String)>>,
        content: Option<String>,
    }

    impl FileTransfer for CapturedFiles {
        fn read_text(&self, _path: &Path) -> anyhow::Result<String> {
            self.content
                .clone()
                .ok_or_else(|| anyhow::anyhow!("no such file"))
        }

        fn write_text(&self, name: &str, content: &str) -> anyhow::Result<()> {
            self.written
                .borrow_mut()
                .push((name.to_string(), content.to_string()));
            Ok(())
        }
    }

    fn named_record(name: &str) -> CardRecord {
        CardRecord {
            fields: CardFields {
                name: name.to_string(),
                ..CardFields::default()
            },
            presentation: PresentationState::default(),
        }
    }

    #[test_log::test]
    fn file_safe_collapses_whitespace_runs() {
        assert_eq!(file_safe("Budi Santoso"), "Budi_Santoso");
        assert_eq!(file_safe("Budi   Santoso"), "Budi_Santoso");
        assert_eq!(file_safe(" Budi\tSantoso "), "_Budi_Santoso_");
    }

    #[test_log::test]
    fn vcard_file_name_uses_the_display_name() {
        let fields = CardFields {
            name: "Budi Santoso".to_string(),
            ..CardFields::default()
        };
        assert_eq!(vcard_file_name(&fields), "Budi_Santoso.vcf");
        // Empty name falls back to the placeholder, as in the original.
        assert_eq!(vcard_file_name(&CardFields::default()), "Nama_Anda.vcf");
    }

    #[test_log::test]
    fn data_file_name_uses_the_raw_name_or_fallback() {
        let fields = CardFields {
            name: "Budi Santoso".to_string(),
            ..CardFields::default()
        };
        assert_eq!(data_file_name(&fields), "Budi_Santoso_data.json");
        assert_eq!(data_file_name(&CardFields::default()), "qeo-card_data.json");
    }

    #[test_log::test]
    fn download_vcard_writes_the_codec_output() {
        let files = CapturedFiles::default();
        let fields = CardFields {
            name: "Budi".to_string(),
            ..CardFields::default()
        };

        let file_name = download_vcard(&fields, &files).expect("download");
        assert_eq!(file_name, "Budi.vcf");

        let written = files.written.borrow();
        assert_eq!(written[0].0, "Budi.vcf");
        assert_eq!(written[0].1, qeo_vcard::encode(&fields));
    }

    #[test_log::test]
    fn export_writes_pretty_json_that_reimports() {
        let files = CapturedFiles::default();
        let record = named_record("Budi");

        export_card_data(&record, &files).expect("export");

        let written = files.written.borrow();
        let (name, content) = &written[0];
        assert_eq!(name, "Budi_data.json");
        assert!(content.contains('\n'));

        let reread = CapturedFiles {
            content: Some(content.clone()),
            ..CapturedFiles::default()
        };
        let imported =
            import_card_data(Path::new("Budi_data.json"), &reread).expect("reimport");
        assert_eq!(imported, record);
    }

    #[test_log::test]
    fn import_rejects_files_without_required_keys() {
        let files = CapturedFiles {
            content: Some(r#"{"phone":"123"}"#.to_string()),
            ..CapturedFiles::default()
        };
        let err = import_card_data(Path::new("card.json"), &files).unwrap_err();
        assert!(is_invalid_format(&err));
    }

    #[test_log::test]
    fn read_failure_is_not_a_format_error() {
        let files = CapturedFiles::default();
        let err = import_card_data(Path::new("missing.json"), &files).unwrap_err();
        assert!(!is_invalid_format(&err));
    }

    #[test_log::test]
    fn local_files_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("exports");
        let files = LocalFiles::new(&out);

        files.write_text("card.json", "{}").expect("write");
        let read = files.read_text(&out.join("card.json")).expect("read");
        assert_eq!(read, "{}");
    }
}
