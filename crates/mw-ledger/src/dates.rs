//! Date parsing for ledgers and snapshot naming tokens.

use chrono::NaiveDate;
use mw_core::errors::{ErrorInfo, MwError};

/// Parses a ledger date in `mm/dd/yyyy` form.
pub fn parse_ledger_date(text: &str) -> Result<NaiveDate, MwError> {
    NaiveDate::parse_from_str(text.trim(), "%m/%d/%Y").map_err(|err| {
        MwError::Ledger(
            ErrorInfo::new("bad-date", "date is not mm/dd/yyyy")
                .with_context("text", text)
                .with_hint(err.to_string()),
        )
    })
}

/// Formats a date as the `mm_dd_yyyy` snapshot naming token.
pub fn snapshot_token(date: NaiveDate) -> String {
    date.format("%m_%d_%Y").to_string()
}

/// Parses a `mm_dd_yyyy` snapshot naming token.
pub fn parse_snapshot_token(token: &str) -> Result<NaiveDate, MwError> {
    NaiveDate::parse_from_str(token.trim(), "%m_%d_%Y").map_err(|err| {
        MwError::Ledger(
            ErrorInfo::new("bad-snapshot-token", "token is not mm_dd_yyyy")
                .with_context("text", token)
                .with_hint(err.to_string()),
        )
    })
}
