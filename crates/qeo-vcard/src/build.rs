//! vCard serialization.

use qeo_core::constants::VCARD_VERSION;
use qeo_core::model::CardFields;

use crate::property::content_lines;

const BEGIN_LINE: &str = "BEGIN:VCARD\n";
const VERSION_LINE: &str = const_str::concat!("VERSION:", VCARD_VERSION, "\n");
const END_LINE: &str = "END:VCARD\n";

/// Serializes the card fields as a vCard 3.0 text block.
///
/// The output has exactly nine lines in fixed order, each terminated by a
/// line break. Identical input yields byte-identical output, so the QR
/// payload and the `.vcf` export always match. Values are emitted
/// verbatim; vCard-reserved characters are not escaped.
#[must_use]
pub fn encode(fields: &CardFields) -> String {
    let lines = content_lines(fields);

    let content_len: usize = lines.iter().map(|l| l.name.len() + l.value.len() + 2).sum();
    let mut out =
        String::with_capacity(BEGIN_LINE.len() + VERSION_LINE.len() + content_len + END_LINE.len());

    out.push_str(BEGIN_LINE);
    out.push_str(VERSION_LINE);
    for line in &lines {
        out.push_str(line.name);
        out.push(':');
        out.push_str(&line.value);
        out.push('\n');
    }
    out.push_str(END_LINE);

    tracing::trace!(bytes = out.len(), "encoded vCard block");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn always_nine_lines_in_fixed_order() {
        for fields in [
            CardFields::default(),
            CardFields {
                name: "Budi".to_string(),
                phone: "08123".to_string(),
                ..CardFields::default()
            },
        ] {
            let block = encode(&fields);
            let lines: Vec<&str> = block.lines().collect();
            assert_eq!(lines.len(), 9);
            assert_eq!(lines[0], "BEGIN:VCARD");
            assert_eq!(lines[1], "VERSION:3.0");
            assert!(lines[2].starts_with("FN:"));
            assert!(lines[3].starts_with("ORG:"));
            assert!(lines[4].starts_with("TITLE:"));
            assert!(lines[5].starts_with("TEL:"));
            assert!(lines[6].starts_with("EMAIL:"));
            assert!(lines[7].starts_with("URL:"));
            assert!(lines[8].starts_with("ADR:"));
        }
    }

    #[test_log::test]
    fn every_line_is_terminated() {
        let block = encode(&CardFields::default());
        assert!(block.ends_with("END:VCARD\n"));
        assert_eq!(block.matches('\n').count(), 9);
    }

    #[test_log::test]
    fn empty_fields_encode_placeholders() {
        let block = encode(&CardFields::default());
        assert!(block.contains("FN:Nama Anda\n"));
        assert!(block.contains("ORG:Perusahaan Anda\n"));
        assert!(block.contains("TITLE:Jabatan Anda\n"));
        assert!(block.contains("TEL:+62 812 3456 7890\n"));
        assert!(block.contains("EMAIL:email@example.com\n"));
        assert!(block.contains("URL:https://example.com\n"));
        assert!(block.contains("ADR:;;Jl. Example No. 123, Jakarta;;;;\n"));
    }

    #[test_log::test]
    fn mixed_fields_match_expected_block() {
        let fields = CardFields {
            name: "Budi".to_string(),
            title: String::new(),
            company: "Acme".to_string(),
            phone: "08123".to_string(),
            email: "b@x.com".to_string(),
            website: String::new(),
            address: String::new(),
        };
        let expected = "BEGIN:VCARD\n\
                        VERSION:3.0\n\
                        FN:Budi\n\
                        ORG:Acme\n\
                        TITLE:Jabatan Anda\n\
                        TEL:08123\n\
                        EMAIL:b@x.com\n\
                        URL:https://example.com\n\
                        ADR:;;Jl. Example No. 123, Jakarta;;;;\n";
        assert_eq!(encode(&fields), expected);
    }

    #[test_log::test]
    fn identical_input_is_byte_identical() {
        let fields = CardFields {
            name: "Siti Rahayu".to_string(),
            email: "siti@example.co.id".to_string(),
            ..CardFields::default()
        };
        assert_eq!(encode(&fields), encode(&fields));
    }

    #[test_log::test]
    fn reserved_characters_pass_through_verbatim() {
        let fields = CardFields {
            name: "Budi; Santoso, S.Kom".to_string(),
            ..CardFields::default()
        };
        let block = encode(&fields);
        assert!(block.contains("FN:Budi; Santoso, S.Kom\n"));
    }
}
