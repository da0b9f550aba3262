use winreg::enums::*;
use winreg::RegKey;

use crate::guid::{guid_to_string, CLSID_DxDiagProvider};

fn open_inproc_server_key() -> std::io::Result<RegKey> {
    let hkcr = RegKey::predef(HKEY_CLASSES_ROOT);
    let clsid_key = hkcr.open_subkey_with_flags("CLSID", KEY_READ)?;
    clsid_key.open_subkey_with_flags(
        format!("{}\\InProcServer32", guid_to_string(&CLSID_DxDiagProvider)),
        KEY_READ,
    )
}

/// Module COM loads for `CLSID_DxDiagProvider`, usually `dxdiagn.dll`.
pub fn provider_server_path() -> std::io::Result<String> {
    log::trace!("provider_server_path");
    open_inproc_server_key()?.get_value("")
}

pub fn provider_threading_model() -> std::io::Result<String> {
    log::trace!("provider_threading_model");
    open_inproc_server_key()?.get_value("ThreadingModel")
}

pub fn is_provider_registered() -> bool {
    let registered = open_inproc_server_key().is_ok();
    log::trace!("is_provider_registered: {}", registered);
    registered
}
