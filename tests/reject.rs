use passbook::decode::decode_slice;
use passbook::scan::{Error, key::FieldKey};

const RECORD: &str = r#"{"name":"Ann","accountNumber":"0000000001","balance":"12.340","isActive":"true","favoriteAccounts":[{"name":"Bo","accountNumber":"0000000002","isActive":"false"},{"name":"Cy","accountNumber":"0000000003","isActive":"true"},{"name":"Dee","accountNumber":"0000000004","isActive":"false"}]}"#;

#[test]
fn reject_narrow_account_number() {
    let record = RECORD.replace("0000000001", "001");
    let result = decode_slice(record.as_bytes());
    assert!(matches!(result, Err(Error::AccountNumberWidth { .. })));
}

#[test]
fn reject_wide_account_number() {
    let record = RECORD.replace("0000000001", "00000000011");
    let result = decode_slice(record.as_bytes());
    assert!(matches!(result, Err(Error::AccountNumberWidth { .. })));
}

#[test]
fn reject_narrow_balance() {
    let record = RECORD.replace("12.340", "12.34");
    let result = decode_slice(record.as_bytes());
    assert!(matches!(result, Err(Error::BalanceFormat { .. })));
}

#[test]
fn reject_wide_balance() {
    let record = RECORD.replace("12.340", "12.3456");
    let result = decode_slice(record.as_bytes());
    assert!(matches!(result, Err(Error::BalanceFormat { .. })));
}

#[test]
fn reject_swapped_keys() {
    let record = r#"{"accountNumber":"0000000001","name":"Ann"}"#;
    let result = decode_slice(record.as_bytes());
    assert!(matches!(
        result,
        Err(Error::KeyMismatch {
            expected: FieldKey::Name,
            ..
        })
    ));
}

#[test]
fn reject_unknown_key() {
    let record = RECORD.replace(r#""balance""#, r#""ballast""#);
    let result = decode_slice(record.as_bytes());
    assert!(matches!(
        result,
        Err(Error::KeyMismatch {
            expected: FieldKey::Balance,
            ..
        })
    ));
}

#[test]
fn reject_mangled_boolean() {
    let record = RECORD.replacen(r#""isActive":"true""#, r#""isActive":"truthy""#, 1);
    let result = decode_slice(record.as_bytes());
    assert!(matches!(result, Err(Error::BooleanLiteral { .. })));
}

#[test]
fn reject_missing_favorite() {
    // Two favorite entries where the layout requires three.
    let record = r#"{"name":"Ann","accountNumber":"0000000001","balance":"12.340","isActive":"true","favoriteAccounts":[{"name":"Bo","accountNumber":"0000000002","isActive":"false"},{"name":"Cy","accountNumber":"0000000003","isActive":"true"}]}"#;
    let result = decode_slice(record.as_bytes());
    assert!(matches!(
        result,
        Err(Error::UnexpectedEnd {
            key: FieldKey::Name,
            ..
        })
    ));
}

#[test]
fn reject_extra_favorite() {
    let extra = r#",{"name":"Ed","accountNumber":"0000000005","isActive":"true"}]}"#;
    let record = RECORD.replace("]}", extra);
    let result = decode_slice(record.as_bytes());
    assert!(matches!(result, Err(Error::TrailingKey { .. })));
}

#[test]
fn reject_truncated_input() {
    let cut = RECORD.find("12.340").unwrap() + 2;
    let result = decode_slice(RECORD[..cut].as_bytes());
    assert!(matches!(
        result,
        Err(Error::UnexpectedEnd {
            key: FieldKey::Balance,
            ..
        })
    ));
}

#[test]
fn reject_empty_input() {
    let result = decode_slice(b"");
    assert!(matches!(
        result,
        Err(Error::UnexpectedEnd {
            key: FieldKey::Name,
            offset: 0,
        })
    ));
}
