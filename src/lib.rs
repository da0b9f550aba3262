//! `CLSID_DxDiagProvider`, the class identifier of the DirectX Diagnostics
//! COM provider, as a `windows_core::GUID`.

mod guid;
pub use guid::{
    clsid_dxdiag_provider, guid_from_bytes, guid_to_bytes, guid_to_string, parse_guid,
    CLSID_DXDIAGPROVIDER_BYTES, CLSID_DxDiagProvider, E_INVALIDARG,
};

#[cfg(windows)]
pub mod registry;
