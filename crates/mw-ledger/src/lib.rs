#![deny(missing_docs)]

//! License and hop ledger ingestion, license validity filtering, and
//! per-date network reconstruction.

mod dates;
mod parse;
mod reconstruct;
mod schema;
mod validity;

pub use dates::{parse_ledger_date, parse_snapshot_token, snapshot_token};
pub use parse::{parse_frequency_list, parse_hop_ledger, parse_license_ledger};
pub use reconstruct::{reconstruct, Snapshot};
pub use schema::{
    HopLedger, HopRecord, LicenseLedger, LicenseRecord, LicenseStatus, RecordDefect,
};
pub use validity::active_licenses;
