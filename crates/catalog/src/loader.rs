//! JSON record and metrics loaders
//!
//! The record source is a JSON array of institution rows; the metrics
//! source is a JSON array of per-year applicant counts keyed by unit id.
//! A missing source maps to `Error::DataUnavailable` and an unparseable
//! one to `Error::Malformed`; the store folds both into the empty-store
//! policy at its boundary.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use uniscope_core::{Error, InstitutionRecord, Result};

/// One applicant-volume row from the metrics-by-year source
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplicantMetric {
    /// Institution id the metric belongs to
    pub unitid: u32,

    /// Reporting year
    #[serde(default)]
    pub year: Option<u16>,

    /// Total applicants reported for that year
    #[serde(default)]
    pub applicants_total: Option<u64>,
}

/// Load institution records from a JSON reader
pub fn load_institution_records<R: Read>(reader: R) -> Result<Vec<InstitutionRecord>> {
    serde_json::from_reader(reader).map_err(|e| Error::Malformed(e.to_string()))
}

/// Load institution records from a file path
///
/// A missing or unreadable file is `DataUnavailable`; a file that reads
/// but does not parse is `Malformed`.
pub fn load_records_from_path(path: &Path) -> Result<Vec<InstitutionRecord>> {
    let file = File::open(path)
        .map_err(|e| Error::data_unavailable(format!("{}: {}", path.display(), e)))?;
    load_institution_records(BufReader::new(file))
}

/// Load applicant metrics from a JSON reader
pub fn load_applicant_metrics<R: Read>(reader: R) -> Result<Vec<ApplicantMetric>> {
    serde_json::from_reader(reader).map_err(|e| Error::Malformed(e.to_string()))
}

/// Load applicant metrics from a file path
pub fn load_metrics_from_path(path: &Path) -> Result<Vec<ApplicantMetric>> {
    let file = File::open(path)
        .map_err(|e| Error::data_unavailable(format!("{}: {}", path.display(), e)))?;
    load_applicant_metrics(BufReader::new(file))
}

/// Attach the most recent applicant volume to each record
///
/// For every institution the latest reporting year wins; within the same
/// year the larger applicant count wins. Metric rows without a usable
/// count are skipped. Records with no metric row keep their volume absent.
pub fn merge_applicant_metrics(records: &mut [InstitutionRecord], metrics: &[ApplicantMetric]) {
    let mut latest: FxHashMap<u32, (u64, u16)> = FxHashMap::default();
    for metric in metrics {
        let Some(applicants) = metric.applicants_total else {
            continue;
        };
        let year = metric.year.unwrap_or(0);
        match latest.get(&metric.unitid) {
            Some(&(prior_applicants, prior_year))
                if prior_year > year || (prior_year == year && prior_applicants >= applicants) => {}
            _ => {
                latest.insert(metric.unitid, (applicants, year));
            }
        }
    }

    for record in records.iter_mut() {
        if let Some(&(applicants, year)) = latest.get(&record.id) {
            record.applicants_total = Some(applicants);
            record.applicants_year = if year > 0 { Some(year) } else { None };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn metric(unitid: u32, year: Option<u16>, applicants: Option<u64>) -> ApplicantMetric {
        ApplicantMetric {
            unitid,
            year,
            applicants_total: applicants,
        }
    }

    #[test]
    fn test_load_records_reader() {
        let json = r#"[
            {"unitid": 1, "name": "Alpha", "state": "CA"},
            {"unitid": 2, "name": "Beta"}
        ]"#;
        let records = load_institution_records(json.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].state_code.as_deref(), Some("CA"));
    }

    #[test]
    fn test_load_records_malformed() {
        let result = load_institution_records(r#"{"not": "an array"}"#.as_bytes());
        assert!(matches!(result, Err(Error::Malformed(_))));
    }

    #[test]
    fn test_load_records_missing_file() {
        let result = load_records_from_path(Path::new("/nonexistent/institutions.json"));
        assert!(matches!(result, Err(Error::DataUnavailable { .. })));
    }

    #[test]
    fn test_load_records_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"unitid": 7, "name": "Gamma"}}]"#).unwrap();
        let records = load_records_from_path(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 7);
    }

    #[test]
    fn test_merge_latest_year_wins() {
        let mut records = vec![InstitutionRecord::new(1, "A")];
        let metrics = vec![
            metric(1, Some(2021), Some(10_000)),
            metric(1, Some(2023), Some(8_000)),
            metric(1, Some(2022), Some(12_000)),
        ];
        merge_applicant_metrics(&mut records, &metrics);
        assert_eq!(records[0].applicants_total, Some(8_000));
        assert_eq!(records[0].applicants_year, Some(2023));
    }

    #[test]
    fn test_merge_same_year_larger_count_wins() {
        let mut records = vec![InstitutionRecord::new(1, "A")];
        let metrics = vec![
            metric(1, Some(2023), Some(5_000)),
            metric(1, Some(2023), Some(9_000)),
        ];
        merge_applicant_metrics(&mut records, &metrics);
        assert_eq!(records[0].applicants_total, Some(9_000));
    }

    #[test]
    fn test_merge_skips_rows_without_counts() {
        let mut records = vec![InstitutionRecord::new(1, "A")];
        merge_applicant_metrics(&mut records, &[metric(1, Some(2023), None)]);
        assert!(records[0].applicants_total.is_none());
    }

    #[test]
    fn test_merge_leaves_unmatched_records_absent() {
        let mut records = vec![InstitutionRecord::new(1, "A"), InstitutionRecord::new(2, "B")];
        merge_applicant_metrics(&mut records, &[metric(1, Some(2023), Some(100))]);
        assert_eq!(records[0].applicants_total, Some(100));
        assert!(records[1].applicants_total.is_none());
    }

    #[test]
    fn test_merge_missing_year_treated_as_oldest() {
        let mut records = vec![InstitutionRecord::new(1, "A")];
        let metrics = vec![
            metric(1, None, Some(50_000)),
            metric(1, Some(2020), Some(100)),
        ];
        merge_applicant_metrics(&mut records, &metrics);
        assert_eq!(records[0].applicants_total, Some(100));
        assert_eq!(records[0].applicants_year, Some(2020));
    }
}
