use chrono::NaiveDate;
use mw_core::LicenseId;
use mw_ledger::{active_licenses, parse_license_ledger};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ledger_from(lines: &str) -> Vec<mw_ledger::LicenseRecord> {
    let parsed = parse_license_ledger(lines.as_bytes());
    assert!(parsed.defects.is_empty(), "defects: {:?}", parsed.defects);
    parsed.records
}

#[test]
fn grant_date_boundary_is_inclusive() {
    let records = ledger_from("1001,Active,01/01/2010,01/01/2010,,01/01/2030\n");
    let active = active_licenses(date(2010, 1, 1), &records);
    assert!(active.contains(&LicenseId::new("1001")));
}

#[test]
fn expiry_date_boundary_is_exclusive() {
    let records = ledger_from("1001,Active,01/01/2010,01/01/2010,,01/01/2030\n");
    let active = active_licenses(date(2030, 1, 1), &records);
    assert!(active.is_empty());
    let active = active_licenses(date(2029, 12, 31), &records);
    assert_eq!(active.len(), 1);
}

#[test]
fn cancel_date_boundary_keeps_license_active() {
    // Cancel takes effect only strictly after the cancel date.
    let records = ledger_from("1001,Terminated,01/01/2010,01/01/2010,06/15/2015,01/01/2030\n");
    assert_eq!(active_licenses(date(2015, 6, 15), &records).len(), 1);
    assert!(active_licenses(date(2015, 6, 16), &records).is_empty());
}

#[test]
fn missing_cancel_date_means_never_cancelled() {
    let records = ledger_from("1001,Active,01/01/2010,01/01/2010,,01/01/2030\n");
    assert_eq!(records[0].cancel_date, None);
    assert_eq!(active_licenses(date(2020, 7, 4), &records).len(), 1);
}

#[test]
fn unparseable_cancel_date_means_never_cancelled() {
    // The cancel column is optional: text that fails to parse is treated the
    // same as an empty field and does not reject the record.
    let records = ledger_from("1001,Active,01/01/2010,01/01/2010,garbage,01/01/2030\n");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].cancel_date, None);
    assert!(active_licenses(date(2015, 1, 1), &records).contains(&LicenseId::new("1001")));
}

#[test]
fn not_yet_granted_license_is_inactive() {
    let records = ledger_from("1001,Active,01/01/2010,01/01/2010,,01/01/2030\n");
    assert!(active_licenses(date(2009, 12, 31), &records).is_empty());
}

#[test]
fn status_text_does_not_override_dates() {
    // Validity is decided from the dates alone; the status column is
    // informational.
    let records = ledger_from("1001,Terminated,01/01/2010,01/01/2010,,01/01/2030\n");
    assert_eq!(active_licenses(date(2020, 1, 1), &records).len(), 1);
}
