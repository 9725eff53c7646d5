use chrono::NaiveDate;
use mw_core::{GeoPoint, LicenseId};
use serde::{Deserialize, Serialize};

/// Regulatory status text attached to a license record.
///
/// The status is informational; validity on a date is decided purely from the
/// grant/cancel/expiry dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseStatus {
    /// License is listed as active.
    Active,
    /// License was terminated by the holder.
    Terminated,
    /// License ran past its expiry date.
    Expired,
    /// License was cancelled by the regulator.
    Cancelled,
    /// Any unrecognized status text.
    Unknown,
}

impl LicenseStatus {
    /// Parses upstream status text, mapping unrecognized values to `Unknown`.
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "Active" => LicenseStatus::Active,
            "Terminated" => LicenseStatus::Terminated,
            "Expired" => LicenseStatus::Expired,
            "Cancelled" => LicenseStatus::Cancelled,
            _ => LicenseStatus::Unknown,
        }
    }
}

/// One parsed license ledger record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseRecord {
    /// License identifier.
    pub id: LicenseId,
    /// Regulatory status text.
    pub status: LicenseStatus,
    /// Date the license was granted.
    pub grant_date: NaiveDate,
    /// Date the license became effective, when present.
    pub effective_date: Option<NaiveDate>,
    /// Date the license was cancelled; absent (empty or unparseable in the
    /// ledger) means never cancelled.
    pub cancel_date: Option<NaiveDate>,
    /// Date the license expires.
    pub expiry_date: NaiveDate,
}

/// One parsed hop ledger record: a transmitter-to-receiver segment owned by a
/// license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopRecord {
    /// Owning license.
    pub license_id: LicenseId,
    /// Status text carried on the hop line.
    pub status: LicenseStatus,
    /// Transmitter location.
    pub tx_point: GeoPoint,
    /// Transmitter elevation text.
    pub tx_elevation: String,
    /// Receiver location.
    pub rx_point: GeoPoint,
    /// Receiver elevation text.
    pub rx_elevation: String,
    /// Operating frequencies as reported, brackets and padding stripped.
    pub frequencies: Vec<String>,
}

/// A per-record parse defect. Defects exclude the record from the ledger's
/// active set; they never abort the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDefect {
    /// 1-based line number of the defective record.
    pub line: u64,
    /// Stable machine readable defect code.
    pub code: String,
    /// Human readable description.
    pub message: String,
}

impl RecordDefect {
    pub(crate) fn new(line: u64, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            line,
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Result of parsing a license ledger: good records plus isolated defects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LicenseLedger {
    /// Successfully parsed records in file order.
    pub records: Vec<LicenseRecord>,
    /// Records that failed to parse.
    pub defects: Vec<RecordDefect>,
}

/// Result of parsing a hop ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HopLedger {
    /// Successfully parsed records in file order.
    pub records: Vec<HopRecord>,
    /// Records that failed to parse.
    pub defects: Vec<RecordDefect>,
}
