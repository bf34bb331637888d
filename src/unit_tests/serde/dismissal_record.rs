use crate::types::events::DismissalRecord;
use chrono::{TimeZone, Utc};
use serde_test::{assert_tokens, Token};

#[test]
fn dismissal_record() {
    assert_tokens(
        &DismissalRecord::new(Utc.timestamp_millis_opt(1_718_006_400_123).unwrap()),
        &[Token::I64(1_718_006_400_123)],
    );
}

#[test]
fn deserialize_dismissal_record_as_stored() {
    assert_eq!(
        serde_json::from_str::<DismissalRecord>("1718006400000").unwrap(),
        DismissalRecord::new(Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap())
    );
    assert!(serde_json::from_str::<DismissalRecord>("\"yesterday\"").is_err());
    assert!(serde_json::from_str::<DismissalRecord>("yesterday").is_err());
}
