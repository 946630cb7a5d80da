//! Proof of Contribution - score and validate DLP data contributions
//!
//! Generates a proof-of-contribution record for data dropped into a DLP
//! input directory and reports it to the validation service.
//!
//! # How it works
//!
//! 1. Contributors place their exported data (JSON files) in the input directory
//! 2. The generator scans `.json` inputs for a wallet address identifying the contributor
//! 3. Ownership and overall score are assigned from the scan outcome
//! 4. The finished proof is POSTed to the validation service
//! 5. The proof record is written to `results.json` for the chain writer
//!
//! # Scoring
//!
//! - Wallet address present: ownership 0.1, proof valid
//! - No wallet address: ownership 0.0, proof invalid
//! - Overall score mirrors the ownership component

pub mod config;
pub mod input;
pub mod proof;
pub mod validator;

pub use config::Config;
pub use input::{scan_input_dir, ScanResult};
pub use proof::{
    ProofAttributes, ProofGenerator, ProofMetadata, ProofResponse, OWNERSHIP_WALLET_PRESENT,
};
pub use validator::ValidatorClient;
