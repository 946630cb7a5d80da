//! Proof-of-contribution generation
//!
//! A proof is a score/validity assertion about a data contribution. The
//! generator scans the input directory for the contributor's wallet
//! address, assigns the ownership and overall scores, and reports the
//! finished record to the validation service.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::Config;
use crate::input;
use crate::validator::ValidatorClient;

/// Ownership score assigned when a wallet address is present
pub const OWNERSHIP_WALLET_PRESENT: f64 = 0.1;

/// Proof record reported to the validation service
///
/// This is the durable contract chain writers and auditors depend on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofResponse {
    /// DLP context this proof was generated under
    pub dlp_id: String,
    /// Ownership component score in [0, 1]
    pub ownership: f64,
    /// Overall score, currently mirrors `ownership`
    pub score: f64,
    /// True iff a wallet address was found in the contributed data
    pub valid: bool,
    /// Public-facing facts derived from the contributed data
    pub attributes: ProofAttributes,
    /// Facts about the proof itself, written on-chain
    pub metadata: ProofMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProofAttributes {
    pub wallet_address_present: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProofMetadata {
    pub dlp_id: String,
    pub generated_at: Option<DateTime<Utc>>,
}

impl ProofResponse {
    /// New proof for a DLP context, not yet scored
    pub fn new(dlp_id: impl Into<String>) -> Self {
        Self {
            dlp_id: dlp_id.into(),
            ownership: 0.0,
            score: 0.0,
            valid: false,
            attributes: ProofAttributes::default(),
            metadata: ProofMetadata::default(),
        }
    }
}

/// Runs the scan → score → package → report pipeline
pub struct ProofGenerator {
    config: Config,
    validator: ValidatorClient,
}

impl ProofGenerator {
    pub fn new(config: Config) -> Self {
        let validator = ValidatorClient::new(&config.validator.endpoint);
        Self { config, validator }
    }

    /// Generate a proof for the configured input directory.
    ///
    /// Filesystem errors are fatal. Submission failures are logged and
    /// recovered; the computed proof is returned either way.
    pub async fn generate(&self) -> Result<ProofResponse> {
        info!("Starting proof generation");

        let scan = input::scan_input_dir(&self.config.proof.input_dir)?;
        let found = scan.wallet_address_present();

        let mut proof = ProofResponse::new(self.config.proof.dlp_id.clone());
        proof.ownership = if found { OWNERSHIP_WALLET_PRESENT } else { 0.0 };
        proof.score = proof.ownership;
        proof.valid = found;
        proof.attributes = ProofAttributes {
            wallet_address_present: found,
        };
        proof.metadata = ProofMetadata {
            dlp_id: proof.dlp_id.clone(),
            generated_at: Some(Utc::now()),
        };

        info!(
            "Scanned {} input files ({} skipped): valid={} score={}",
            scan.files_scanned, scan.files_skipped, proof.valid, proof.score
        );

        match self.validator.submit_proof(&proof).await {
            Ok(()) => info!("Proof data sent successfully"),
            Err(e) => error!("Error sending proof data: {}", e),
        }

        Ok(proof)
    }
}
