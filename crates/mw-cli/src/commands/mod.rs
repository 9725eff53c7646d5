use std::error::Error;
use std::fs;
use std::path::Path;

use mw_core::{GeoPoint, Site};
use mw_ledger::{HopLedger, LicenseLedger, RecordDefect};

pub mod latency;
pub mod reconstruct;
pub mod temporal;
pub mod version;

/// Parses a `lat,lon` decimal-degree pair into a named site.
pub(crate) fn parse_site(name: &str, text: &str) -> Result<Site, Box<dyn Error>> {
    let mut parts = text.split(',');
    let lat = parts
        .next()
        .ok_or_else(|| format!("{name}: expected lat,lon"))?
        .trim()
        .parse::<f64>()?;
    let lon = parts
        .next()
        .ok_or_else(|| format!("{name}: expected lat,lon"))?
        .trim()
        .parse::<f64>()?;
    if parts.next().is_some() {
        return Err(format!("{name}: expected exactly two coordinates").into());
    }
    Ok(Site::new(name, GeoPoint::new(lat, lon)))
}

pub(crate) fn load_license_ledger(path: &Path) -> Result<LicenseLedger, Box<dyn Error>> {
    let body = fs::read(path)?;
    let ledger = mw_ledger::parse_license_ledger(&body[..]);
    report_defects("license ledger", path, &ledger.defects);
    Ok(ledger)
}

pub(crate) fn load_hop_ledger(path: &Path) -> Result<HopLedger, Box<dyn Error>> {
    let body = fs::read(path)?;
    let ledger = mw_ledger::parse_hop_ledger(&body[..]);
    report_defects("hop ledger", path, &ledger.defects);
    Ok(ledger)
}

fn report_defects(kind: &str, path: &Path, defects: &[RecordDefect]) {
    for defect in defects {
        eprintln!(
            "{kind} {}:{}: {} ({})",
            path.display(),
            defect.line,
            defect.message,
            defect.code
        );
    }
}

/// Writes one numeric value per line, the layout of the link data files.
pub(crate) fn write_value_lines(path: &Path, values: &[f64]) -> Result<(), Box<dyn Error>> {
    let mut body = String::new();
    for value in values {
        body.push_str(&format!("{value}\n"));
    }
    fs::write(path, body)?;
    Ok(())
}
