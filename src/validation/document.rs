use thiserror::Error;

use crate::config::DocumentPolicy;
use crate::format::format_size_limit;
use crate::record::Document;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("Please upload {} file", describe_types(.accepted))]
    UnsupportedType { accepted: Vec<String> },
    #[error("File size should not exceed {}", format_size_limit(.max_bytes))]
    TooLarge { max_bytes: u64 },
    /// No file chosen; only reported by the submission gate.
    #[error("Proof of address is required")]
    Missing,
}

/// Checks type first, then size. A rejected candidate is dropped whole.
pub fn validate_document(
    candidate: Document,
    policy: &DocumentPolicy,
) -> Result<Document, DocumentError> {
    if !policy.accepts(&candidate.mime_type) {
        return Err(DocumentError::UnsupportedType {
            accepted: policy.accepted_types.clone(),
        });
    }
    if candidate.size_bytes > policy.max_bytes {
        return Err(DocumentError::TooLarge {
            max_bytes: policy.max_bytes,
        });
    }
    Ok(candidate)
}

/// "image/jpeg" -> "JPEG"
fn format_label(mime_type: &str) -> String {
    let subtype = mime_type.rsplit('/').next().unwrap_or(mime_type);
    subtype.trim_start_matches("x-").to_ascii_uppercase()
}

/// Image types are grouped: "an image (JPEG, PNG, GIF) or PDF".
fn describe_types(accepted: &[String]) -> String {
    let (images, others): (Vec<&String>, Vec<&String>) =
        accepted.iter().partition(|t| t.starts_with("image/"));

    let mut parts = Vec::new();
    if !images.is_empty() {
        let labels: Vec<String> = images.iter().map(|t| format_label(t)).collect();
        parts.push(format!("image ({})", labels.join(", ")));
    }
    parts.extend(others.iter().map(|t| format_label(t)));

    let listed = match parts.split_last() {
        None => return "a supported".to_string(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    };
    format!("{} {}", article(&listed), listed)
}

/// Labels are read letter by letter, so "an SVG" but "a PDF".
fn article(phrase: &str) -> &'static str {
    if phrase.starts_with("image") {
        return "an";
    }
    match phrase.chars().next() {
        Some(c) if "AEFHILMNORSX".contains(c) => "an",
        _ => "a",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    fn policy() -> DocumentPolicy {
        DocumentPolicy::default()
    }

    #[test]
    fn exactly_at_the_limit_is_accepted() {
        let doc = Document::new("scan.png", "image/png", 5 * MIB);
        assert_eq!(validate_document(doc.clone(), &policy()), Ok(doc));
    }

    #[test]
    fn one_byte_over_is_too_large() {
        let doc = Document::new("scan.png", "image/png", 5 * MIB + 1);
        assert_eq!(
            validate_document(doc, &policy()),
            Err(DocumentError::TooLarge { max_bytes: 5 * MIB })
        );
    }

    #[test]
    fn unsupported_type_regardless_of_size() {
        for size in [0, 10, 5 * MIB + 1] {
            let doc = Document::new("notes.txt", "text/plain", size);
            assert!(matches!(
                validate_document(doc, &policy()),
                Err(DocumentError::UnsupportedType { .. })
            ));
        }
    }

    #[test]
    fn all_default_types_accepted() {
        for mime in ["image/jpeg", "image/png", "image/gif", "application/pdf"] {
            let doc = Document::new("f", mime, 1);
            assert!(validate_document(doc, &policy()).is_ok(), "{mime}");
        }
    }

    #[test]
    fn messages_enumerate_formats_and_limit() {
        let err = validate_document(Document::new("a.txt", "text/plain", 1), &policy())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please upload an image (JPEG, PNG, GIF) or PDF file"
        );

        let err = validate_document(Document::new("a.pdf", "application/pdf", 6 * MIB), &policy())
            .unwrap_err();
        assert_eq!(err.to_string(), "File size should not exceed 5MB");

        assert_eq!(
            DocumentError::Missing.to_string(),
            "Proof of address is required"
        );
    }

    #[test]
    fn single_accepted_type() {
        assert_eq!(describe_types(&["application/pdf".to_string()]), "a PDF");
        assert_eq!(describe_types(&["image/png".to_string()]), "an image (PNG)");
        assert_eq!(format_label("image/x-png"), "PNG");
    }

    #[test]
    fn article_follows_first_label() {
        let accepted = vec!["application/msword".to_string(), "application/pdf".to_string()];
        assert_eq!(describe_types(&accepted), "an MSWORD or PDF");

        let err = DocumentError::UnsupportedType {
            accepted: vec!["image/svg+xml".to_string()],
        };
        assert_eq!(err.to_string(), "Please upload an image (SVG+XML) file");

        let err = DocumentError::UnsupportedType {
            accepted: vec!["text/csv".to_string()],
        };
        assert_eq!(err.to_string(), "Please upload a CSV file");
    }
}
