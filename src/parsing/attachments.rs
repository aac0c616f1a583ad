use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static DOCUMENT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<DOCUMENT>(.*?)</DOCUMENT>").unwrap());
static FILENAME_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<FILENAME>([^\r\n<]+)").unwrap());
static TEXT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<(?:TEXT|text)>(.*?)</(?:TEXT|text)>").unwrap());

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp", "svg"];
const BINARY_EXTENSIONS: &[&str] = &["pdf", "zip", "exe", "dll", "bin", "dat", "db", "sqlite"];

/// Walk the `<DOCUMENT>` blocks and yield each `<TEXT>` body, in document
/// order. Skipped: the `.txt` primary filing body, image and binary
/// payloads, and any filename in `already_decoded` (names recovered by the
/// UUE codec; running that codec first is what makes this de-duplication
/// correct).
pub fn extract_document_texts(text: &str, already_decoded: &HashSet<String>) -> Vec<String> {
    let mut bodies = Vec::new();

    for block in DOCUMENT_BLOCK.captures_iter(text) {
        let block = &block[1];
        let Some(filename) = FILENAME_TAG
            .captures(block)
            .map(|caps| caps[1].trim().to_string())
        else {
            continue;
        };

        if already_decoded.contains(&filename) {
            log::debug!("attachment {:?} already recovered via uudecode", filename);
            continue;
        }
        if !is_text_attachment(&filename) {
            continue;
        }

        let Some(body) = TEXT_BLOCK.captures(block).map(|caps| caps[1].to_string()) else {
            continue;
        };
        let body = body
            .replace("<XBRL>", "")
            .replace("</XBRL>", "")
            .replace("<XML>", "")
            .replace("</XML>", "")
            .trim()
            .nfkc()
            .collect::<String>();
        if !body.is_empty() {
            bodies.push(body);
        }
    }

    bodies
}

fn is_text_attachment(filename: &str) -> bool {
    let extension = filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase();
    extension != "txt"
        && !IMAGE_EXTENSIONS.contains(&extension.as_str())
        && !BINARY_EXTENSIONS.contains(&extension.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(filename: &str, body: &str) -> String {
        format!(
            "<DOCUMENT>\n<TYPE>EX-99.1\n<SEQUENCE>1\n<FILENAME>{}\n<TEXT>\n{}\n</TEXT>\n</DOCUMENT>\n",
            filename, body
        )
    }

    #[test]
    fn collects_text_bodies_in_order() {
        let text = format!(
            "{}{}",
            document("press.htm", "first body"),
            document("exhibit.xml", "<XML>second body</XML>")
        );
        let bodies = extract_document_texts(&text, &HashSet::new());
        assert_eq!(bodies, vec!["first body".to_string(), "second body".to_string()]);
    }

    #[test]
    fn skips_primary_txt_body() {
        let text = document("0000320193-25-000008.txt", "complete submission");
        assert!(extract_document_texts(&text, &HashSet::new()).is_empty());
    }

    #[test]
    fn skips_images_and_binaries() {
        let text = format!(
            "{}{}{}",
            document("logo.jpg", "not really an image"),
            document("report.pdf", "not really a pdf"),
            document("exhibit.htm", "kept")
        );
        let bodies = extract_document_texts(&text, &HashSet::new());
        assert_eq!(bodies, vec!["kept".to_string()]);
    }

    #[test]
    fn skips_filenames_recovered_by_uudecode() {
        let text = document("exhibit99.htm", "inline copy");
        let mut decoded = HashSet::new();
        decoded.insert("exhibit99.htm".to_string());
        assert!(extract_document_texts(&text, &decoded).is_empty());
    }

    #[test]
    fn document_without_filename_is_ignored() {
        let text = "<DOCUMENT>\n<TYPE>EX-1\n<TEXT>orphan</TEXT>\n</DOCUMENT>";
        assert!(extract_document_texts(text, &HashSet::new()).is_empty());
    }
}
