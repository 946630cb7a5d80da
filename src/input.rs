//! Input directory scanning
//!
//! Contributed data arrives as a flat directory of files; only `.json`
//! files directly under the input directory are considered (no recursion).
//! The scan looks for the contributor's wallet address and stops at the
//! first file that carries one.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Accepted spellings of the wallet address key, checked in order
const WALLET_ADDRESS_KEYS: [&str; 2] = ["walletAddress", "wallet_address"];

/// Outcome of one input-directory scan
#[derive(Debug, Default)]
pub struct ScanResult {
    /// First non-empty wallet address found, if any
    pub wallet_address: Option<String>,
    /// `.json` files parsed
    pub files_scanned: usize,
    /// `.json` files skipped because they were not parseable JSON objects
    pub files_skipped: usize,
}

impl ScanResult {
    pub fn wallet_address_present(&self) -> bool {
        self.wallet_address.is_some()
    }
}

/// Scan `input_dir` for a wallet address.
///
/// Stops at the first `.json` file carrying a non-empty wallet address.
/// Malformed files are skipped with a warning; an unreadable directory is
/// an error.
pub fn scan_input_dir(input_dir: &Path) -> Result<ScanResult> {
    let entries = std::fs::read_dir(input_dir)
        .with_context(|| format!("Failed to read input directory {}", input_dir.display()))?;

    let mut result = ScanResult::default();

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        if !has_json_extension(&path) {
            continue;
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;

        let data: Value = match serde_json::from_str(&contents) {
            Ok(data) => data,
            Err(e) => {
                warn!("Skipping malformed JSON file {}: {}", path.display(), e);
                result.files_skipped += 1;
                continue;
            }
        };

        let Some(object) = data.as_object() else {
            warn!("Skipping {}: top level is not a JSON object", path.display());
            result.files_skipped += 1;
            continue;
        };

        result.files_scanned += 1;

        if let Some(address) = extract_wallet_address(object) {
            debug!("Found wallet address in {}", path.display());
            if !is_evm_address(&address) {
                warn!(
                    "Wallet address in {} is not a 0x-prefixed 20-byte hex address",
                    path.display()
                );
            }
            result.wallet_address = Some(address);
            break;
        }
    }

    Ok(result)
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// First accepted wallet key with a non-empty string value
fn extract_wallet_address(object: &serde_json::Map<String, Value>) -> Option<String> {
    WALLET_ADDRESS_KEYS
        .iter()
        .filter_map(|key| object.get(*key))
        .filter_map(|value| value.as_str())
        .find(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Check if a string is a 0x-prefixed 20-byte hex address
pub fn is_evm_address(address: &str) -> bool {
    let Some(hex_part) = address.strip_prefix("0x") else {
        return false;
    };
    matches!(hex::decode(hex_part), Ok(bytes) if bytes.len() == 20)
}
