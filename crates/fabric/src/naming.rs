//! Interface naming
//!
//! Maps an interface ordinal to the physical interface name of a node.
//! Uplink ports on some platforms start after a block of access ports, so
//! the uplink side of a link is shifted by a per (vendor, position, platform)
//! offset taken from a lookup table.

use std::collections::HashMap;

use crds::{Position, VendorType};
use tracing::{debug, warn};

/// Name returned for uplink interfaces of (vendor, position, platform)
/// combinations that have no entry in the offset table
pub const PLACEHOLDER_INTERFACE: &str = "int-1/0";

/// Interface name for an ordinal, without any platform offset
#[must_use]
pub fn interface_name(ordinal: u32) -> String {
    format!("int-1/{ordinal}")
}

/// Lookup key of the offset table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OffsetKey {
    /// Vendor type of the node
    pub vendor_type: VendorType,
    /// Position of the node in the fabric
    pub position: Position,
    /// Hardware platform of the node
    pub platform: String,
}

impl OffsetKey {
    /// Build a key
    pub fn new(vendor_type: VendorType, position: Position, platform: impl Into<String>) -> Self {
        Self {
            vendor_type,
            position,
            platform: platform.into(),
        }
    }
}

/// Table of uplink interface offsets
///
/// `InterfaceNaming::default()` holds the known Nokia SR Linux offsets. The
/// table is incomplete reference data; add entries with [`InterfaceNaming::with_offset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceNaming {
    offsets: HashMap<OffsetKey, u32>,
}

impl Default for InterfaceNaming {
    fn default() -> Self {
        Self::empty()
            .with_offset(VendorType::NokiaSrl, Position::Leaf, "IXR-D3", 26)
            .with_offset(VendorType::NokiaSrl, Position::Leaf, "IXR-D2", 48)
            .with_offset(VendorType::NokiaSrl, Position::Spine, "IXR-D3", 24)
    }
}

impl InterfaceNaming {
    /// Table without any offsets
    #[must_use]
    pub fn empty() -> Self {
        Self {
            offsets: HashMap::new(),
        }
    }

    /// Add (or replace) an offset
    #[must_use]
    pub fn with_offset(
        mut self,
        vendor_type: VendorType,
        position: Position,
        platform: impl Into<String>,
        offset: u32,
    ) -> Self {
        self.insert(OffsetKey::new(vendor_type, position, platform), offset);
        self
    }

    /// Add (or replace) an offset, returning the previous one
    pub fn insert(&mut self, key: OffsetKey, offset: u32) -> Option<u32> {
        self.offsets.insert(key, offset)
    }

    /// Offset for a combination, `None` if the table has no entry
    #[must_use]
    pub fn offset(&self, vendor_type: VendorType, platform: &str, position: Position) -> Option<u32> {
        self.offsets
            .get(&OffsetKey::new(vendor_type, position, platform))
            .copied()
    }

    /// Interface name for an ordinal, without any platform offset
    #[must_use]
    pub fn name(&self, ordinal: u32) -> String {
        interface_name(ordinal)
    }

    /// Interface name for an ordinal shifted by the platform offset
    ///
    /// Unknown combinations yield [`PLACEHOLDER_INTERFACE`] rather than an
    /// error; use [`InterfaceNaming::offset`] to detect them up front.
    #[must_use]
    pub fn name_with_offset(
        &self,
        vendor_type: VendorType,
        platform: &str,
        position: Position,
        ordinal: u32,
    ) -> String {
        match self.offset(vendor_type, platform, position) {
            Some(offset) => {
                debug!(
                    "Interface offset {} for {} {} {}, ordinal {}",
                    offset, vendor_type, position, platform, ordinal
                );
                interface_name(ordinal + offset)
            }
            None => {
                warn!(
                    "No interface offset for {} {} platform {:?}, using {}",
                    vendor_type, position, platform, PLACEHOLDER_INTERFACE
                );
                PLACEHOLDER_INTERFACE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        let naming = InterfaceNaming::default();
        assert_eq!(naming.name(1), "int-1/1");
        assert_eq!(naming.name(17), "int-1/17");
    }

    #[test]
    fn test_known_offsets() {
        let naming = InterfaceNaming::default();
        assert_eq!(
            naming.name_with_offset(VendorType::NokiaSrl, "IXR-D3", Position::Leaf, 1),
            "int-1/27"
        );
        assert_eq!(
            naming.name_with_offset(VendorType::NokiaSrl, "IXR-D2", Position::Leaf, 2),
            "int-1/50"
        );
        assert_eq!(
            naming.name_with_offset(VendorType::NokiaSrl, "IXR-D3", Position::Spine, 3),
            "int-1/27"
        );
    }

    #[test]
    fn test_unknown_combination_yields_placeholder() {
        let naming = InterfaceNaming::default();
        // IXR-D2 has no spine entry, SR OS has no entries at all
        assert_eq!(
            naming.name_with_offset(VendorType::NokiaSrl, "IXR-D2", Position::Spine, 5),
            PLACEHOLDER_INTERFACE
        );
        assert_eq!(
            naming.name_with_offset(VendorType::NokiaSros, "7750-SR1", Position::Leaf, 1),
            "int-1/0"
        );
        assert_eq!(naming.offset(VendorType::Unknown, "", Position::Superspine), None);
    }

    #[test]
    fn test_extend_table() {
        let naming = InterfaceNaming::default().with_offset(
            VendorType::NokiaSros,
            Position::Spine,
            "7250-IXR-X",
            8,
        );
        assert_eq!(
            naming.name_with_offset(VendorType::NokiaSros, "7250-IXR-X", Position::Spine, 1),
            "int-1/9"
        );

        let mut naming = InterfaceNaming::empty();
        assert_eq!(naming.insert(OffsetKey::new(VendorType::NokiaSrl, Position::Leaf, "IXR-D3"), 10), None);
        assert_eq!(naming.insert(OffsetKey::new(VendorType::NokiaSrl, Position::Leaf, "IXR-D3"), 12), Some(10));
        assert_eq!(naming.offset(VendorType::NokiaSrl, "IXR-D3", Position::Leaf), Some(12));
    }
}
