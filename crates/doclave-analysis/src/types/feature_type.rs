//! Feature selection for analysis requests.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Structured-analysis capability requested from the provider.
///
/// Serialized in the provider's SCREAMING_SNAKE wire form (`"FORMS"`,
/// `"TABLES"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    /// Form-field (key/value pair) extraction.
    Forms,
    /// Table extraction.
    Tables,
    /// Answers to caller-supplied queries.
    Queries,
    /// Signature detection.
    Signatures,
    /// Layout element detection.
    Layout,
}
