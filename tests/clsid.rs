use dxdiag_clsid::{
    clsid_dxdiag_provider, guid_from_bytes, guid_to_bytes, guid_to_string, parse_guid,
    CLSID_DxDiagProvider, CLSID_DXDIAGPROVIDER_BYTES,
};

const DECLARED: [u8; 16] = [
    0x71, 0x80, 0x5B, 0xA6, 0xFE, 0x3B, 0x13, 0x42, 0x9A, 0x5B, 0x49, 0x1D, 0xA4, 0x46, 0x1C, 0xA7,
];

#[test]
fn basic() {
    let guid = clsid_dxdiag_provider();
    assert_eq!(guid, clsid_dxdiag_provider(), "idempotent");
    assert_eq!(guid_to_bytes(&guid), DECLARED, "raw bytes");
    assert_eq!(CLSID_DXDIAGPROVIDER_BYTES, DECLARED, "declared bytes");

    assert_eq!(
        u32::from_le_bytes([DECLARED[0], DECLARED[1], DECLARED[2], DECLARED[3]]),
        0xA65B8071
    );
    assert_eq!(u16::from_le_bytes([DECLARED[4], DECLARED[5]]), 0x3BFE);
    assert_eq!(u16::from_le_bytes([DECLARED[6], DECLARED[7]]), 0x4213);
    assert_eq!(guid.data3, 0x4213, "data3");
    assert_eq!(guid.data4, DECLARED[8..], "data4");
}

#[test]
fn display_format() {
    let guid = guid_from_bytes(DECLARED);
    assert_eq!(
        format!("{:?}", guid),
        "A65B8071-3BFE-4213-9A5B-491DA4461CA7"
    );
    assert_eq!(guid_to_string(&guid), "{A65B8071-3BFE-4213-9A5B-491DA4461CA7}");
}

#[test]
fn string_round_trip() {
    let hyphenated = format!("{:?}", CLSID_DxDiagProvider);
    let parsed = parse_guid(&hyphenated).expect("Parse the hyphenated form");
    assert_eq!(guid_to_bytes(&parsed), DECLARED);

    let braced = guid_to_string(&CLSID_DxDiagProvider);
    let parsed = parse_guid(&braced).expect("Parse the braced form");
    assert_eq!(parsed, CLSID_DxDiagProvider);
}

#[test]
fn matches_windows_core() {
    assert_eq!(
        CLSID_DxDiagProvider,
        windows_core::GUID::from_u128(0xa65b8071_3bfe_4213_9a5b_491da4461ca7)
    );
}
