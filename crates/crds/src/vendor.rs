//! Vendor, platform and fabric position types shared by templates and
//! rendered topology nodes.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Network operating system family of a fabric node
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, Default)]
pub enum VendorType {
    /// Nokia SR Linux
    #[serde(rename = "nokiaSRL")]
    NokiaSrl,

    /// Nokia SR OS
    #[serde(rename = "nokiaSROS")]
    NokiaSros,

    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl VendorType {
    /// Wire name, as used in CRDs and labels
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorType::NokiaSrl => "nokiaSRL",
            VendorType::NokiaSros => "nokiaSROS",
            VendorType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VendorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vendor and hardware platform of the nodes in a tier
///
/// A tier lists one or more of these; node `n` of the tier takes entry
/// `n % len`, so two entries alternate vendors across the tier.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub struct VendorInfo {
    /// Vendor type (e.g., "nokiaSRL")
    #[serde(default)]
    pub vendor_type: VendorType,

    /// Hardware platform (e.g., "IXR-D3")
    #[serde(default)]
    pub platform: String,
}

impl VendorInfo {
    /// Create vendor info for a platform
    pub fn new(vendor_type: VendorType, platform: impl Into<String>) -> Self {
        Self {
            vendor_type,
            platform: platform.into(),
        }
    }
}

/// Position of a node in a Clos fabric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Tier 3, connects to the spines of its pod
    Leaf,
    /// Tier 2, connects leafs within a pod to the superspines
    Spine,
    /// Tier 1, interconnects pods
    Superspine,
}

impl Position {
    /// Lowercase name used in node names and labels
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Leaf => "leaf",
            Position::Spine => "spine",
            Position::Superspine => "superspine",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_type_wire_names() {
        let json = serde_json::to_string(&VendorType::NokiaSrl).unwrap();
        assert_eq!(json, "\"nokiaSRL\"");
        let parsed: VendorType = serde_json::from_str("\"nokiaSROS\"").unwrap();
        assert_eq!(parsed, VendorType::NokiaSros);
        assert_eq!(VendorType::default().to_string(), "unknown");
    }

    #[test]
    fn test_position_wire_names() {
        let parsed: Position = serde_json::from_str("\"superspine\"").unwrap();
        assert_eq!(parsed, Position::Superspine);
        assert_eq!(Position::Leaf.to_string(), "leaf");
    }
}
