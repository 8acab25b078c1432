//! Report rendering for duplicate scan results.
//!
//! The engine's [`Grouping`] keeps every group, including singletons; this
//! layer filters to groups of two or more paths and renders them as
//! human-readable text or machine-readable JSON.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "duplicates": [
//!     {
//!       "hash": "abc123...",
//!       "paths": ["/path/to/file1.txt", "/path/to/file2.txt"]
//!     }
//!   ],
//!   "summary": {
//!     "duplicate_groups": 1,
//!     "duplicate_files": 2
//!   }
//! }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::duplicates::Grouping;
use crate::scanner::digest_to_hex;

/// A single duplicate group, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct ReportGroup {
    /// BLAKE3 digest as a hexadecimal string (64 characters)
    pub hash: String,
    /// Paths to all files sharing this digest
    pub paths: Vec<String>,
}

/// Summary statistics for a scan.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    /// Number of groups with two or more files
    pub duplicate_groups: usize,
    /// Total number of files across those groups
    pub duplicate_files: usize,
}

/// A filtered, deterministically ordered duplicate report.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateReport {
    /// Groups of files with identical content
    pub duplicates: Vec<ReportGroup>,
    /// Summary statistics
    pub summary: ReportSummary,
}

impl DuplicateReport {
    /// Build a report from an engine grouping.
    ///
    /// Singleton groups are dropped. Groups are sorted by digest and paths
    /// within each group are sorted, so the rendering is stable regardless
    /// of hashing order.
    #[must_use]
    pub fn from_grouping(grouping: &Grouping) -> Self {
        let mut duplicates: Vec<ReportGroup> = grouping
            .iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(digest, paths)| {
                let mut paths: Vec<String> =
                    paths.iter().map(|p| p.display().to_string()).collect();
                paths.sort();
                ReportGroup {
                    hash: digest_to_hex(digest),
                    paths,
                }
            })
            .collect();
        duplicates.sort_by(|a, b| a.hash.cmp(&b.hash));

        let duplicate_files = duplicates.iter().map(|g| g.paths.len()).sum();
        let summary = ReportSummary {
            duplicate_groups: duplicates.len(),
            duplicate_files,
        };

        Self {
            duplicates,
            summary,
        }
    }

    /// Whether the report contains no duplicate groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.duplicates.is_empty()
    }

    /// Render the report as human-readable text.
    ///
    /// One block per group: the digest on its own line, followed by the
    /// member paths indented, with a blank line between groups.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_text(&self, writer: &mut impl Write) -> std::io::Result<()> {
        if self.is_empty() {
            writeln!(writer, "No duplicate files found.")?;
            return Ok(());
        }

        for (i, group) in self.duplicates.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            writeln!(writer, "{}", group.hash)?;
            for path in &group.paths {
                writeln!(writer, "  {path}")?;
            }
        }

        writeln!(
            writer,
            "\n{} duplicate files in {} groups",
            self.summary.duplicate_files, self.summary.duplicate_groups
        )?;
        Ok(())
    }

    /// Render the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    pub fn write_json(&self, writer: &mut impl Write) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_grouping() -> Grouping {
        let mut grouping = Grouping::new();
        grouping.insert(
            [0xaa; 32],
            vec![PathBuf::from("/b/copy.txt"), PathBuf::from("/a/orig.txt")],
        );
        grouping.insert([0xbb; 32], vec![PathBuf::from("/a/lonely.txt")]);
        grouping
    }

    #[test]
    fn test_singleton_groups_are_filtered() {
        let report = DuplicateReport::from_grouping(&sample_grouping());

        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.summary.duplicate_groups, 1);
        assert_eq!(report.summary.duplicate_files, 2);
    }

    #[test]
    fn test_paths_are_sorted_within_group() {
        let report = DuplicateReport::from_grouping(&sample_grouping());

        assert_eq!(report.duplicates[0].paths, vec!["/a/orig.txt", "/b/copy.txt"]);
    }

    #[test]
    fn test_empty_grouping_renders_notice() {
        let report = DuplicateReport::from_grouping(&Grouping::new());
        assert!(report.is_empty());

        let mut buf = Vec::new();
        report.write_text(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No duplicate files found.\n");
    }

    #[test]
    fn test_text_output_lists_groups() {
        let report = DuplicateReport::from_grouping(&sample_grouping());

        let mut buf = Vec::new();
        report.write_text(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains(&"aa".repeat(32)));
        assert!(text.contains("  /a/orig.txt"));
        assert!(text.contains("  /b/copy.txt"));
        assert!(text.contains("2 duplicate files in 1 groups"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let report = DuplicateReport::from_grouping(&sample_grouping());

        let mut buf = Vec::new();
        report.write_json(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["summary"]["duplicate_groups"], 1);
        assert_eq!(value["duplicates"][0]["paths"][0], "/a/orig.txt");
        assert_eq!(value["duplicates"][0]["hash"], "aa".repeat(32));
    }
}
