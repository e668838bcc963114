/// File browser panel
/// Lists the backend's current directory and reads/writes text files.
///
/// The list arrives as one `|`-separated payload. The separator cannot be
/// escaped, so a filename containing `|` is split into two lines.

use crate::bridge::Bridge;
use crate::services::backend::FILE_LIST_SEPARATOR;

/// One display line per entry; an empty payload has no entries
pub fn split_file_list(payload: &str) -> Vec<String> {
    if payload.is_empty() {
        return Vec::new();
    }
    payload.split(FILE_LIST_SEPARATOR).map(str::to_string).collect()
}

pub fn file_listing<B: Bridge + ?Sized>(bridge: &mut B) -> Vec<String> {
    split_file_list(&bridge.get_file_list().to_text())
}

pub fn create_text_file<B: Bridge + ?Sized>(bridge: &mut B, name: &str, content: &str) -> String {
    bridge.create_text_file(name, content).to_text().into_owned()
}

pub fn read_text_file<B: Bridge + ?Sized>(bridge: &mut B, name: &str) -> String {
    bridge.read_text_file(name).to_text().into_owned()
}
