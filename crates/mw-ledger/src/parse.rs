use std::io;

use csv::{ReaderBuilder, StringRecord};
use mw_core::{GeoPoint, LicenseId};

use crate::dates::parse_ledger_date;
use crate::schema::{HopLedger, HopRecord, LicenseLedger, LicenseRecord, LicenseStatus, RecordDefect};

/// Parses a license ledger (`license_id,status,grant,effective,cancel,expiry`).
///
/// Records with a malformed grant or expiry date are reported as defects and
/// excluded; they never abort the batch. The cancel field is optional: empty
/// or unparseable text means "never cancelled".
pub fn parse_license_ledger<R: io::Read>(reader: R) -> LicenseLedger {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut ledger = LicenseLedger::default();
    for (idx, result) in csv_reader.records().enumerate() {
        let line = idx as u64 + 1;
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                ledger
                    .defects
                    .push(RecordDefect::new(line, "bad-record", err.to_string()));
                continue;
            }
        };
        match parse_license_record(&record) {
            Ok(parsed) => ledger.records.push(parsed),
            Err(defect) => ledger.defects.push(RecordDefect::new(line, defect.0, defect.1)),
        }
    }
    ledger
}

/// Parses a hop ledger
/// (`license_id;status;tx_lat;tx_lon;tx_elev;rx_lat;rx_lon;rx_elev;freqs`).
pub fn parse_hop_ledger<R: io::Read>(reader: R) -> HopLedger {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b';')
        .flexible(true)
        .from_reader(reader);
    let mut ledger = HopLedger::default();
    for (idx, result) in csv_reader.records().enumerate() {
        let line = idx as u64 + 1;
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                ledger
                    .defects
                    .push(RecordDefect::new(line, "bad-record", err.to_string()));
                continue;
            }
        };
        match parse_hop_record(&record) {
            Ok(parsed) => ledger.records.push(parsed),
            Err(defect) => ledger.defects.push(RecordDefect::new(line, defect.0, defect.1)),
        }
    }
    ledger
}

/// Splits a bracketed, comma-separated frequency list into entries.
///
/// Brackets and padding are stripped; entries keep any embedded quote
/// characters, which numeric consumers strip when interpreting values.
pub fn parse_frequency_list(text: &str) -> Vec<String> {
    text.replace(['[', ']', ' '], "")
        .split(',')
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.to_string())
        .collect()
}

struct Defect(&'static str, String);

fn parse_license_record(record: &StringRecord) -> Result<LicenseRecord, Defect> {
    let id = required_field(record, 0, "license_id")?;
    let status = LicenseStatus::parse(field(record, 1));
    let grant_date = parse_ledger_date(field(record, 2))
        .map_err(|err| Defect("bad-grant-date", err.info().to_string()))?;
    let effective_date = optional_date(field(record, 3));
    let cancel_date = optional_date(field(record, 4));
    let expiry_date = parse_ledger_date(field(record, 5))
        .map_err(|err| Defect("bad-expiry-date", err.info().to_string()))?;
    Ok(LicenseRecord {
        id: LicenseId::new(id),
        status,
        grant_date,
        effective_date,
        cancel_date,
        expiry_date,
    })
}

fn parse_hop_record(record: &StringRecord) -> Result<HopRecord, Defect> {
    let license_id = required_field(record, 0, "license_id")?;
    let status = LicenseStatus::parse(field(record, 1));
    let tx_point = parse_point(record, 2, 3)?;
    let tx_elevation = field(record, 4).trim().to_string();
    let rx_point = parse_point(record, 5, 6)?;
    let rx_elevation = field(record, 7).trim().to_string();
    let frequencies = parse_frequency_list(field(record, 8));
    Ok(HopRecord {
        license_id: LicenseId::new(license_id),
        status,
        tx_point,
        tx_elevation,
        rx_point,
        rx_elevation,
        frequencies,
    })
}

fn parse_point(record: &StringRecord, lat_idx: usize, lon_idx: usize) -> Result<GeoPoint, Defect> {
    let lat = parse_coord(field(record, lat_idx))?;
    let lon = parse_coord(field(record, lon_idx))?;
    Ok(GeoPoint::new(lat, lon))
}

fn parse_coord(text: &str) -> Result<f64, Defect> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| Defect("bad-coordinate", format!("unparsable coordinate: {text:?}")))
}

fn optional_date(text: &str) -> Option<chrono::NaiveDate> {
    parse_ledger_date(text).ok()
}

fn field<'r>(record: &'r StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("")
}

fn required_field<'r>(
    record: &'r StringRecord,
    idx: usize,
    name: &'static str,
) -> Result<&'r str, Defect> {
    let value = field(record, idx).trim();
    if value.is_empty() {
        return Err(Defect("missing-field", format!("record is missing {name}")));
    }
    Ok(value)
}
