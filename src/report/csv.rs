//! # CSV Export
//!
//! @title Vulnerable Results CSV
//! @author Ramprasad
//!
//! Writes vulnerable results as CSV. Every field is double-quoted and embedded
//! quotes are doubled, so commas and quotes in paths or reasons survive.

use super::{ReportError, ScanResult};
use std::path::Path;

/// File name of the CSV written at the scan root.
pub const CSV_FILE_NAME: &str = "cve-2025-55182-scan-results.csv";

/// Header row.
pub const CSV_HEADER: &str = "Name,Path,Details,ReactVersion,NextVersion";

/// Renders vulnerable results as CSV text, header included.
///
/// Non-vulnerable results are ignored.
pub fn to_csv(results: &[ScanResult]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for result in results {
        if let ScanResult::Vulnerable {
            repo_name,
            manifest_path,
            react_version,
            next_version,
            ..
        } = result
        {
            let row = [
                quote(repo_name),
                quote(&manifest_path.display().to_string()),
                quote(&result.details()),
                quote(react_version.as_deref().unwrap_or_default()),
                quote(next_version.as_deref().unwrap_or_default()),
            ];
            out.push_str(&row.join(","));
            out.push('\n');
        }
    }

    out
}

/// Writes the CSV for `results` to `path`, replacing any existing file.
pub fn write_csv(path: &Path, results: &[ScanResult]) -> Result<(), ReportError> {
    std::fs::write(path, to_csv(results)).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote {} vulnerable row(s) to {}", results.len(), path.display());
    Ok(())
}

/// Quotes a single field.
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Splits one CSV line into fields, honoring quotes and doubled quotes.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn vulnerable(name: &str, path: &str, reasons: &[&str], react: Option<&str>) -> ScanResult {
        ScanResult::Vulnerable {
            repo_name: name.to_string(),
            manifest_path: PathBuf::from(path),
            reasons: reasons.iter().map(|r| r.to_string()).collect(),
            react_version: react.map(str::to_string),
            next_version: None,
        }
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_rows_split_back_to_fields() {
        let results = vec![
            vulnerable(
                "web, admin",
                "/src/\"odd\"/package.json",
                &[
                    "React 19.1.0 (vulnerable: 19.0.0-19.2.0)",
                    "Uses React Server Components packages",
                ],
                Some("19.1.0"),
            ),
            vulnerable(
                "api",
                "/src/api/package.json",
                &["React ^19.0.0 (vulnerable: 19.0.0-19.2.0)"],
                Some("^19.0.0"),
            ),
        ];

        let csv = to_csv(&results);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), results.len() + 1);
        assert_eq!(lines[0], CSV_HEADER);

        for (line, result) in lines[1..].iter().zip(&results) {
            let fields = parse_csv_line(line);
            assert_eq!(fields.len(), 5);
            assert_eq!(fields[0], result.repo_name());
            assert_eq!(fields[1], result.manifest_path().display().to_string());
            assert_eq!(fields[2], result.details());
            assert_eq!(fields[4], "");
        }
        assert_eq!(parse_csv_line(lines[1])[3], "19.1.0");
    }

    #[test]
    fn test_non_vulnerable_results_are_skipped() {
        let results = vec![ScanResult::Safe {
            repo_name: "legacy".to_string(),
            manifest_path: PathBuf::from("legacy/package.json"),
            react_version: Some("18.2.0".to_string()),
            next_version: None,
        }];

        assert_eq!(to_csv(&results), format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_write_csv_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CSV_FILE_NAME);
        std::fs::write(&path, "stale").unwrap();

        let results = [vulnerable("web", "web/package.json", &["x"], Some("19.0.0"))];
        write_csv(&path, &results).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(CSV_HEADER));
        assert_eq!(written.lines().count(), 2);
    }

    #[test]
    fn test_write_csv_reports_path_on_failure() {
        let err = write_csv(Path::new("/nonexistent/dir/out.csv"), &[]).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dir/out.csv"));
    }
}
