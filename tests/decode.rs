#![cfg(feature = "std")]

use passbook::account::{Account, FavoriteAccount};

const RECORD: &str = r#"{"name":"Ann","accountNumber":"0000000001","balance":"12.340","isActive":"true","favoriteAccounts":[{"name":"Bo","accountNumber":"0000000002","isActive":"false"},{"name":"Cy","accountNumber":"0000000003","isActive":"true"},{"name":"Dee","accountNumber":"0000000004","isActive":"false"}]}"#;

fn expected() -> Account {
    Account {
        name: "Ann".into(),
        account_number: 1,
        balance: 12.34,
        is_active: true,
        favorite_accounts: [
            FavoriteAccount {
                name: "Bo".into(),
                account_number: 2,
                is_active: false,
            },
            FavoriteAccount {
                name: "Cy".into(),
                account_number: 3,
                is_active: true,
            },
            FavoriteAccount {
                name: "Dee".into(),
                account_number: 4,
                is_active: false,
            },
        ],
    }
}

#[test]
fn decode_slice_account() {
    let account = passbook::decode::decode_slice(RECORD.as_bytes()).unwrap();
    assert_eq!(account, expected());
}

#[test]
fn decode_reader_account() {
    let mut reader = RECORD.as_bytes();
    let account = passbook::decode::decode_reader(&mut reader).unwrap();
    assert_eq!(account, expected());
}

#[test]
fn decode_slice_bare_scalars() {
    // Scalar values may appear bare; the scan locates them by content, not
    // by their delimiters.
    let record = r#"{
"name": "Ann",
"accountNumber": 0000000001,
"balance": 12.340,
"isActive": true,
"favoriteAccounts": [{
"name": "Bo",
"accountNumber": 0000000002,
"isActive": false
},{
"name": "Cy",
"accountNumber": 0000000003,
"isActive": true
},{
"name": "Dee",
"accountNumber": 0000000004,
"isActive": false
}]
}"#;

    let account = passbook::decode::decode_slice(record.as_bytes()).unwrap();
    assert_eq!(account, expected());
}

#[test]
fn round_trip_rendering() {
    let account = passbook::decode::decode_slice(RECORD.as_bytes()).unwrap();

    let rendered = account.to_string();
    let again = passbook::decode::decode_slice(rendered.as_bytes()).unwrap();

    assert_eq!(account, again);
}

#[test]
fn rendering_is_json_shaped() {
    let account = passbook::decode::decode_slice(RECORD.as_bytes()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&account.to_string()).unwrap();

    assert_eq!(json["name"], "Ann");
    assert_eq!(json["accountNumber"], "0000000001");
    assert_eq!(json["balance"], "12.340");
    assert_eq!(json["isActive"], "true");

    let favorites = json["favoriteAccounts"].as_array().unwrap();
    assert_eq!(favorites.len(), 3);
    assert_eq!(favorites[0]["name"], "Bo");
    assert_eq!(favorites[1]["accountNumber"], "0000000003");
    assert_eq!(favorites[2]["isActive"], "false");
}
