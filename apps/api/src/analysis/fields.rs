//! Field extractors: candidate name and certification block.
//!
//! Both are plain text scans over already-extracted resume text.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

pub const NAME_NOT_FOUND: &str = "Name not found";
pub const DEFAULT_MAX_CERTIFICATIONS: usize = 3;

lazy_static! {
    /// Capitalized word, one space, capitalized word.
    static ref NAME_PATTERN: Regex = Regex::new(r"\b[A-Z][a-zA-Z]* [A-Z][a-zA-Z]*\b").unwrap();
    static ref CERTIFICATES_HEADER: Regex = Regex::new(r"(?i)certificates").unwrap();
    static ref SKILLS_HEADER: Regex = Regex::new(r"(?i)skills").unwrap();
}

/// Outcome of name extraction. Absence is a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateName {
    Found(String),
    NotFound,
}

impl fmt::Display for CandidateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateName::Found(name) => f.write_str(name),
            CandidateName::NotFound => f.write_str(NAME_NOT_FOUND),
        }
    }
}

/// Returns the first "Firstname Lastname"-shaped span in `first_page`.
///
/// Any two adjacent capitalized words qualify, so a heading such as
/// "Work Experience" placed before the name is returned instead.
pub fn extract_candidate_name(first_page: &str) -> CandidateName {
    NAME_PATTERN
        .find(first_page)
        .map(|m| CandidateName::Found(m.as_str().to_string()))
        .unwrap_or(CandidateName::NotFound)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Certifications section not found in the resume")]
pub struct SectionNotFound;

/// Returns up to `max` entries of the CERTIFICATES block.
///
/// The block runs from just after the first "CERTIFICATES" (any case) to the
/// next "Skills" (any case) or end of text. Lines are trimmed, blanks dropped,
/// and the first remaining line is discarded as the header echo.
pub fn extract_certifications(text: &str, max: usize) -> Result<Vec<String>, SectionNotFound> {
    let header = CERTIFICATES_HEADER.find(text).ok_or(SectionNotFound)?;
    let rest = &text[header.end()..];
    let block = match SKILLS_HEADER.find(rest) {
        Some(stop) => &rest[..stop.start()],
        None => rest,
    };

    Ok(block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .skip(1)
        .take(max)
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_found_verbatim() {
        let name = extract_candidate_name("resume of\nJohn Smith\nsoftware engineer");
        assert_eq!(name, CandidateName::Found("John Smith".to_string()));
        assert_eq!(name.to_string(), "John Smith");
    }

    #[test]
    fn test_first_span_wins() {
        let name = extract_candidate_name("contact: Jane Doe, referee John Smith");
        assert_eq!(name, CandidateName::Found("Jane Doe".to_string()));
    }

    #[test]
    fn test_heading_is_a_known_false_positive() {
        let name = extract_candidate_name("Work Experience\nJohn Smith");
        assert_eq!(name.to_string(), "Work Experience");
    }

    #[test]
    fn test_name_not_found_is_sentinel() {
        let name = extract_candidate_name("no capitalised pairs here, just PROSE 123");
        assert_eq!(name, CandidateName::NotFound);
        assert_eq!(name.to_string(), NAME_NOT_FOUND);
    }

    #[test]
    fn test_name_requires_single_space() {
        assert_eq!(extract_candidate_name("John\nSmith"), CandidateName::NotFound);
        assert_eq!(extract_candidate_name("John  Smith"), CandidateName::NotFound);
    }

    #[test]
    fn test_name_on_empty_text() {
        assert_eq!(extract_candidate_name(""), CandidateName::NotFound);
    }

    #[test]
    fn test_certifications_block_until_skills() {
        let text = "CERTIFICATES\nHeader Line\nAWS Certified\nPMP\nSkills\nPython";
        let certs = extract_certifications(text, 3).unwrap();
        assert_eq!(certs, vec!["AWS Certified".to_string(), "PMP".to_string()]);
    }

    #[test]
    fn test_certifications_truncated_to_max() {
        let text = "Certificates & Licenses\n  CKA  \n\nCKAD\nAWS SAA\nGCP ACE\n";
        let certs = extract_certifications(text, 2).unwrap();
        assert_eq!(certs, vec!["CKA".to_string(), "CKAD".to_string()]);
    }

    #[test]
    fn test_certifications_run_to_end_of_text() {
        let text = "Summary\ncertificates\nIssued by\nCISSP\nOSCP";
        let certs = extract_certifications(text, 10).unwrap();
        assert_eq!(certs, vec!["CISSP".to_string(), "OSCP".to_string()]);
    }

    #[test]
    fn test_certifications_stop_at_lowercase_skills() {
        let text = "CERTIFICATES\nheader\nPMP\nskills: rust, sql";
        let certs = extract_certifications(text, 3).unwrap();
        assert_eq!(certs, vec!["PMP".to_string()]);
    }

    #[test]
    fn test_found_but_empty_is_not_an_error() {
        let certs = extract_certifications("CERTIFICATES\nSkills\nRust", 3).unwrap();
        assert!(certs.is_empty());
    }

    #[test]
    fn test_zero_max_returns_empty() {
        let certs = extract_certifications("CERTIFICATES\nx\nPMP", 0).unwrap();
        assert!(certs.is_empty());
    }

    #[test]
    fn test_missing_header_is_section_not_found() {
        let err = extract_certifications("Experience\nSkills\nPython", 3).unwrap_err();
        assert_eq!(err, SectionNotFound);
    }

    #[test]
    fn test_windows_line_endings() {
        let text = "CERTIFICATES\r\nheader\r\nAWS Certified\r\nPMP\r\n";
        let certs = extract_certifications(text, 3).unwrap();
        assert_eq!(certs, vec!["AWS Certified".to_string(), "PMP".to_string()]);
    }
}
