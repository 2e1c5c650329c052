//! Consistency and retention policies for the upload pipeline.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// What happens when the asset is stored but the video record update fails.
///
/// `BestEffort` keeps the request successful and logs the failure: the caller
/// receives a URL the metadata store may not have indexed yet (an eventually
/// consistent URL index). `Strict` fails the request with a 500 instead; the
/// stored bytes are kept either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetadataSyncPolicy {
    #[default]
    BestEffort,
    Strict,
}

impl FromStr for MetadataSyncPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "best_effort" | "best-effort" => Ok(MetadataSyncPolicy::BestEffort),
            "strict" => Ok(MetadataSyncPolicy::Strict),
            _ => Err(anyhow::anyhow!("Invalid metadata sync policy: {}", s)),
        }
    }
}

impl Display for MetadataSyncPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MetadataSyncPolicy::BestEffort => write!(f, "best_effort"),
            MetadataSyncPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// What happens to the previously referenced asset once a new one replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupersededAssetPolicy {
    /// Leave the old bytes in place.
    #[default]
    Retain,
    /// Delete the old object in the background after the record points elsewhere.
    Delete,
}

impl FromStr for SupersededAssetPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "retain" => Ok(SupersededAssetPolicy::Retain),
            "delete" => Ok(SupersededAssetPolicy::Delete),
            _ => Err(anyhow::anyhow!("Invalid superseded asset policy: {}", s)),
        }
    }
}

impl Display for SupersededAssetPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SupersededAssetPolicy::Retain => write!(f, "retain"),
            SupersededAssetPolicy::Delete => write!(f, "delete"),
        }
    }
}
