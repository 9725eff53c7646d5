use std::io;

use csv::WriterBuilder;
use mw_core::errors::{ErrorInfo, MwError};
use serde::{Deserialize, Serialize};

use crate::engine::LatencyReport;

/// One metrics output record, keyed by entity name or snapshot date token.
///
/// When the snapshot for a key is unavailable the metric fields are absent
/// and serialize as empty CSV fields; the key field is always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRow {
    /// Entity name or snapshot date token.
    pub key: String,
    /// Metric values, absent when the run was unmeasurable.
    pub values: Option<MetricsValues>,
}

/// The measured fields of a metrics record, in output column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsValues {
    /// Direct site-to-site chord distance, km.
    pub geo_dist_dc: f64,
    /// Shortest backbone path length, km.
    pub path_length: f64,
    /// Total fiber access distance, km.
    pub dist_fiber: f64,
    /// Path length over direct tower chord.
    pub stretch: f64,
    /// Latency-weighted aggregate stretch.
    pub stretch_aggr: f64,
    /// Count of leading low-stretch simple paths.
    pub simple_path_counter: usize,
    /// Lower-median per-hop length, km.
    pub median_link_len: f64,
    /// Lower-median numeric frequency, absent when none parsed.
    pub median_freq: Option<f64>,
    /// Fraction of path edges covered by a low-stretch alternate.
    pub path_diversity: f64,
    /// Unweighted hop count.
    pub hop_count: usize,
}

impl MetricsRow {
    /// Builds a populated row from an analysis report.
    pub fn from_report(key: impl Into<String>, report: &LatencyReport) -> Self {
        Self {
            key: key.into(),
            values: Some(MetricsValues {
                geo_dist_dc: report.geo_dist_dc,
                path_length: report.path_length,
                dist_fiber: report.dist_fiber,
                stretch: report.stretch,
                stretch_aggr: report.stretch_aggr,
                simple_path_counter: report.simple_path_counter,
                median_link_len: report.median_link_len,
                median_freq: report.median_freq,
                path_diversity: report.path_diversity,
                hop_count: report.hop_count,
            }),
        }
    }

    /// Builds an absent row: key populated, every metric field empty.
    pub fn absent(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: None,
        }
    }

    /// Returns the row as ordered textual fields.
    pub fn fields(&self) -> Vec<String> {
        let mut fields = vec![self.key.clone()];
        match &self.values {
            Some(v) => {
                fields.push(v.geo_dist_dc.to_string());
                fields.push(v.path_length.to_string());
                fields.push(v.dist_fiber.to_string());
                fields.push(v.stretch.to_string());
                fields.push(v.stretch_aggr.to_string());
                fields.push(v.simple_path_counter.to_string());
                fields.push(v.median_link_len.to_string());
                fields.push(v.median_freq.map(|f| f.to_string()).unwrap_or_default());
                fields.push(v.path_diversity.to_string());
                fields.push(v.hop_count.to_string());
            }
            None => fields.extend(std::iter::repeat(String::new()).take(10)),
        }
        fields
    }
}

/// Appends metrics rows to a writer as headerless CSV.
pub fn write_rows<W: io::Write>(writer: W, rows: &[MetricsRow]) -> Result<(), MwError> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    for row in rows {
        csv_writer
            .write_record(row.fields())
            .map_err(|err| wrap_csv("metrics-write-row", err))?;
    }
    csv_writer
        .flush()
        .map_err(|err| wrap_csv("metrics-flush", err.into()))?;
    Ok(())
}

fn wrap_csv(code: &str, err: csv::Error) -> MwError {
    MwError::Metrics(ErrorInfo::new(code, "metrics output failure").with_hint(err.to_string()))
}
