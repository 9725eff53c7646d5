use mw_ledger::{parse_frequency_list, parse_hop_ledger, parse_license_ledger, LicenseStatus};

#[test]
fn malformed_grant_date_isolates_the_record() {
    let text = "\
1001,Active,01/01/2010,01/01/2010,,01/01/2030
1002,Active,not-a-date,01/01/2010,,01/01/2030
1003,Active,02/01/2010,02/01/2010,,01/01/2030
";
    let ledger = parse_license_ledger(text.as_bytes());
    assert_eq!(ledger.records.len(), 2);
    assert_eq!(ledger.defects.len(), 1);
    assert_eq!(ledger.defects[0].line, 2);
    assert_eq!(ledger.defects[0].code, "bad-grant-date");
}

#[test]
fn malformed_expiry_date_isolates_the_record() {
    let text = "1001,Active,01/01/2010,01/01/2010,,13/45/20xx\n";
    let ledger = parse_license_ledger(text.as_bytes());
    assert!(ledger.records.is_empty());
    assert_eq!(ledger.defects[0].code, "bad-expiry-date");
}

#[test]
fn truncated_record_is_a_defect() {
    let ledger = parse_license_ledger("1001,Active,01/01/2010\n".as_bytes());
    assert!(ledger.records.is_empty());
    assert_eq!(ledger.defects.len(), 1);
}

#[test]
fn unknown_status_text_maps_to_unknown() {
    let ledger =
        parse_license_ledger("1001,Surrendered,01/01/2010,01/01/2010,,01/01/2030\n".as_bytes());
    assert_eq!(ledger.records[0].status, LicenseStatus::Unknown);
}

#[test]
fn hop_record_parses_coordinates_and_frequencies() {
    let text = "3322637;Active;41.38511;-81.32581;300.5;41.41264;-81.70786;256.0;['6093.45', '6034.15']\n";
    let ledger = parse_hop_ledger(text.as_bytes());
    assert!(ledger.defects.is_empty(), "defects: {:?}", ledger.defects);
    let hop = &ledger.records[0];
    assert_eq!(hop.license_id.as_str(), "3322637");
    assert_eq!(hop.tx_point.lat_deg, 41.38511);
    assert_eq!(hop.rx_point.lon_deg, -81.70786);
    assert_eq!(hop.tx_elevation, "300.5");
    assert_eq!(hop.frequencies, vec!["'6093.45'".to_string(), "'6034.15'".to_string()]);
}

#[test]
fn unparsable_coordinate_isolates_the_record() {
    let text = "\
3322637;Active;41.38511;-81.32581;300.5;41.41264;-81.70786;256.0;[6093.45]
3322638;Active;garbage;-81.32581;300.5;41.41264;-81.70786;256.0;[6034.15]
";
    let ledger = parse_hop_ledger(text.as_bytes());
    assert_eq!(ledger.records.len(), 1);
    assert_eq!(ledger.defects.len(), 1);
    assert_eq!(ledger.defects[0].line, 2);
    assert_eq!(ledger.defects[0].code, "bad-coordinate");
}

#[test]
fn frequency_list_stripping() {
    assert_eq!(
        parse_frequency_list("[6093.45, 6034.15]"),
        vec!["6093.45".to_string(), "6034.15".to_string()]
    );
    assert_eq!(parse_frequency_list("[]"), Vec::<String>::new());
    assert_eq!(parse_frequency_list(""), Vec::<String>::new());
}
