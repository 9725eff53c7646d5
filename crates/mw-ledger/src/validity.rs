use std::collections::BTreeSet;

use chrono::NaiveDate;
use mw_core::LicenseId;

use crate::schema::LicenseRecord;

/// Returns the set of licenses active on the given date.
///
/// A license is active iff `grant_date <= date`, `expiry_date > date`, and
/// the cancel date, when present, is strictly after `date`. A license
/// granted on `date` is already active; one expiring on `date` is not; one
/// cancelled on `date` is still active through that day.
pub fn active_licenses(date: NaiveDate, records: &[LicenseRecord]) -> BTreeSet<LicenseId> {
    records
        .iter()
        .filter(|record| is_active(date, record))
        .map(|record| record.id.clone())
        .collect()
}

fn is_active(date: NaiveDate, record: &LicenseRecord) -> bool {
    record.grant_date <= date
        && record.expiry_date > date
        && record.cancel_date.map_or(true, |cancel| cancel > date)
}
