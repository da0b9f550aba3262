use std::mem::size_of;

use windows_core::{Error, Result, GUID, HRESULT};

// Anything else means the GUID ABI is not the Windows one.
const _: () = assert!(size_of::<GUID>() == 16);

/// Raw bytes of `CLSID_DxDiagProvider` as declared in `um/dxdiag.h`.
pub const CLSID_DXDIAGPROVIDER_BYTES: [u8; 16] = [
    0x71, 0x80, 0x5B, 0xA6, //
    0xFE, 0x3B, //
    0x13, 0x42, //
    0x9A, 0x5B, 0x49, 0x1D, 0xA4, 0x46, 0x1C, 0xA7,
];

/// Class identifier of the DirectX Diagnostics provider,
/// `{A65B8071-3BFE-4213-9A5B-491DA4461CA7}`.
#[allow(non_upper_case_globals)]
pub const CLSID_DxDiagProvider: GUID = guid_from_bytes(CLSID_DXDIAGPROVIDER_BYTES);

/// Returns [`CLSID_DxDiagProvider`].
pub const fn clsid_dxdiag_provider() -> GUID {
    CLSID_DxDiagProvider
}

/// Builds a GUID from its in-memory representation: `data1`, `data2` and
/// `data3` little-endian, `data4` as is.
pub const fn guid_from_bytes(bytes: [u8; 16]) -> GUID {
    GUID::from_values(
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        u16::from_le_bytes([bytes[4], bytes[5]]),
        u16::from_le_bytes([bytes[6], bytes[7]]),
        [
            bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
        ],
    )
}

/// Inverse of [`guid_from_bytes`].
pub const fn guid_to_bytes(guid: &GUID) -> [u8; 16] {
    let data1 = guid.data1.to_le_bytes();
    let data2 = guid.data2.to_le_bytes();
    let data3 = guid.data3.to_le_bytes();
    let data4 = guid.data4;
    [
        data1[0], data1[1], data1[2], data1[3], data2[0], data2[1], data3[0], data3[1], data4[0],
        data4[1], data4[2], data4[3], data4[4], data4[5], data4[6], data4[7],
    ]
}

/// Registry form, `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}`, uppercase.
pub fn guid_to_string(guid: &GUID) -> String {
    format!("{{{:?}}}", guid)
}

/// `E_INVALIDARG`, the code carried by every [`parse_guid`] error.
pub const E_INVALIDARG: HRESULT = HRESULT(0x80070057_u32 as i32);

const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

fn invalid_guid(text: &str, reason: &str) -> Error {
    log::trace!("parse_guid: rejected {:?}: {}", text, reason);
    Error::new(E_INVALIDARG, format!("invalid GUID {:?}: {}", text, reason))
}

/// Parses `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX`, optionally wrapped in braces.
pub fn parse_guid(text: &str) -> Result<GUID> {
    let inner = match text.strip_prefix('{') {
        Some(rest) => rest
            .strip_suffix('}')
            .ok_or_else(|| invalid_guid(text, "unbalanced braces"))?,
        None if text.ends_with('}') => return Err(invalid_guid(text, "unbalanced braces")),
        None => text,
    };

    if inner.len() != 36 {
        return Err(invalid_guid(text, "expected 36 characters"));
    }

    let mut value = 0u128;
    for (index, byte) in inner.bytes().enumerate() {
        if HYPHEN_POSITIONS.contains(&index) {
            if byte != b'-' {
                return Err(invalid_guid(text, "misplaced hyphen"));
            }
            continue;
        }
        let digit = (byte as char)
            .to_digit(16)
            .ok_or_else(|| invalid_guid(text, "not a hex digit"))?;
        value = (value << 4) | u128::from(digit);
    }

    Ok(GUID::from_u128(value))
}
