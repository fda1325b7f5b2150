//! Command implementations

use crate::error::{CliError, ExitCode, Result};
use colored::Colorize;
use provision_sections::{SectionEditor, SectionInfo, normalize};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Where the body of a new section comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySource<'a> {
    Text(&'a str),
    File(&'a Path),
    Stdin,
}

pub fn run_add(file: &Path, tag: &str, source: BodySource<'_>) -> Result<ExitCode> {
    let body = read_body(source)?;
    SectionEditor::new(file).add(tag, &body)?;
    println!(
        "{} section {} to {}",
        "Added".green().bold(),
        normalize(tag).cyan(),
        file.display()
    );
    Ok(ExitCode::Success)
}

pub fn run_remove(file: &Path, tag: &str) -> Result<ExitCode> {
    SectionEditor::new(file).remove(tag)?;
    println!(
        "{} section {} from {}",
        "Removed".green().bold(),
        normalize(tag).cyan(),
        file.display()
    );
    Ok(ExitCode::Success)
}

pub fn run_has(file: &Path, tag: &str) -> Result<ExitCode> {
    if SectionEditor::new(file).contains(tag)? {
        Ok(ExitCode::Success)
    } else {
        tracing::debug!(file = %file.display(), tag, "no marker found");
        Ok(ExitCode::Absent)
    }
}

#[derive(Debug, Serialize)]
struct SectionSummary {
    tag: String,
    start_line: usize,
    end_line: usize,
    body: String,
}

impl From<&SectionInfo> for SectionSummary {
    fn from(section: &SectionInfo) -> Self {
        Self {
            tag: section.tag.clone(),
            start_line: section.start_line,
            end_line: section.end_line,
            body: section.body_lossy().into_owned(),
        }
    }
}

pub fn run_list(file: &Path, json: bool) -> Result<ExitCode> {
    let sections = SectionEditor::new(file).sections()?;

    if json {
        let summaries: Vec<SectionSummary> = sections.iter().map(SectionSummary::from).collect();
        let output = serde_json::to_string_pretty(&summaries)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        println!("{output}");
        return Ok(ExitCode::Success);
    }

    if sections.is_empty() {
        println!("No sections in {}", file.display());
        return Ok(ExitCode::Success);
    }

    for section in &sections {
        println!(
            "{}  lines {}-{}",
            section.tag.cyan().bold(),
            section.start_line,
            section.end_line
        );
    }
    Ok(ExitCode::Success)
}

pub fn run_normalize(tag: &str) -> Result<ExitCode> {
    let tag = provision_sections::Tag::new(tag)?;
    println!("{tag}");
    Ok(ExitCode::Success)
}

/// Read the section body, dropping one trailing line terminator from file
/// and stdin input so `echo text |` does not produce a blank body line.
///
/// Bodies must be valid UTF-8; a body file with other bytes is rejected
/// rather than rewritten.
fn read_body(source: BodySource<'_>) -> Result<String> {
    match source {
        BodySource::Text(text) => Ok(text.to_string()),
        BodySource::File(path) => {
            let bytes = provision_fs::io::read_bytes(path)?;
            let text = String::from_utf8(bytes).map_err(|_| CliError::InvalidBody {
                path: path.to_path_buf(),
            })?;
            Ok(strip_terminator(text))
        }
        BodySource::Stdin => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(strip_terminator(buf))
        }
    }
}

fn strip_terminator(mut text: String) -> String {
    if text.ends_with("\r\n") {
        text.truncate(text.len() - 2);
    } else if text.ends_with('\n') {
        text.truncate(text.len() - 1);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_strip_terminator() {
        assert_eq!(strip_terminator("a\n".into()), "a");
        assert_eq!(strip_terminator("a\r\n".into()), "a");
        assert_eq!(strip_terminator("a\n\n".into()), "a\n");
        assert_eq!(strip_terminator("a".into()), "a");
    }

    #[test]
    fn test_add_from_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target.conf");
        let body = temp.path().join("body.txt");
        fs::write(&target, "").unwrap();
        fs::write(&body, "include extra.conf\n").unwrap();

        let code = run_add(&target, "extra", BodySource::File(&body)).unwrap();

        assert_eq!(code, ExitCode::Success);
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "#BEGIN_EXTRA\ninclude extra.conf\n#END_EXTRA\n"
        );
    }

    #[test]
    fn test_add_from_non_utf8_file_rejected() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target.conf");
        let body = temp.path().join("body.bin");
        fs::write(&target, "keep\n").unwrap();
        fs::write(&body, [b'o', b'k', 0xFF, b'\n']).unwrap();

        let err = run_add(&target, "extra", BodySource::File(&body)).unwrap_err();

        assert!(matches!(err, CliError::InvalidBody { .. }));
        assert_eq!(err.exit_code(), ExitCode::InvalidArgument);
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep\n");
    }

    #[test]
    fn test_has_reports_absent() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target.conf");
        fs::write(&target, "nothing\n").unwrap();

        assert_eq!(run_has(&target, "cron").unwrap(), ExitCode::Absent);
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(run_normalize("").is_err());
    }
}
