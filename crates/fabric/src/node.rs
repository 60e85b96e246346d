//! Generated fabric nodes.

use crds::{Position, VendorInfo, VendorType};

/// A node of the generated fabric
///
/// The name is derived from position, pod index and node index on demand and
/// is never stored. Superspines carry a plane index instead of a pod index;
/// the plane only drives wiring and is not part of the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FabricNode {
    position: Position,
    node_index: u32,
    pod_index: Option<u32>,
    plane_index: Option<u32>,
    uplinks_per_node: u32,
    vendor_info: VendorInfo,
}

impl FabricNode {
    /// Leaf node `node_index` of pod `pod_index` (both start at 1)
    #[must_use]
    pub fn leaf(pod_index: u32, node_index: u32, uplinks_per_node: u32, vendor_info: VendorInfo) -> Self {
        Self {
            position: Position::Leaf,
            node_index,
            pod_index: Some(pod_index),
            plane_index: None,
            uplinks_per_node,
            vendor_info,
        }
    }

    /// Spine node `node_index` of pod `pod_index` (both start at 1)
    #[must_use]
    pub fn spine(pod_index: u32, node_index: u32, uplinks_per_node: u32, vendor_info: VendorInfo) -> Self {
        Self {
            position: Position::Spine,
            node_index,
            pod_index: Some(pod_index),
            plane_index: None,
            uplinks_per_node,
            vendor_info,
        }
    }

    /// Superspine node `node_index` of plane `plane_index` (both start at 1)
    #[must_use]
    pub fn superspine(plane_index: u32, node_index: u32, uplinks_per_node: u32, vendor_info: VendorInfo) -> Self {
        Self {
            position: Position::Superspine,
            node_index,
            pod_index: None,
            plane_index: Some(plane_index),
            uplinks_per_node,
            vendor_info,
        }
    }

    /// Node name: `pod<pod>-<position><index>` or `superspine<index>`
    #[must_use]
    pub fn name(&self) -> String {
        match self.pod_index {
            Some(pod) => format!("pod{}-{}{}", pod, self.position, self.node_index),
            None => format!("{}{}", self.position, self.node_index),
        }
    }

    /// Position in the fabric
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Index within the tier and pod, starting at 1
    #[must_use]
    pub fn node_index(&self) -> u32 {
        self.node_index
    }

    /// Pod index, `None` for superspines
    #[must_use]
    pub fn pod_index(&self) -> Option<u32> {
        self.pod_index
    }

    /// Plane index, superspines only
    #[must_use]
    pub fn plane_index(&self) -> Option<u32> {
        self.plane_index
    }

    /// Uplinks towards every node of the tier above
    #[must_use]
    pub fn uplinks_per_node(&self) -> u32 {
        self.uplinks_per_node
    }

    /// Vendor and platform
    #[must_use]
    pub fn vendor_info(&self) -> &VendorInfo {
        &self.vendor_info
    }

    /// Vendor type
    #[must_use]
    pub fn vendor_type(&self) -> VendorType {
        self.vendor_info.vendor_type
    }

    /// Hardware platform
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.vendor_info.platform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn srl(platform: &str) -> VendorInfo {
        VendorInfo::new(VendorType::NokiaSrl, platform)
    }

    #[test]
    fn test_pod_node_names() {
        assert_eq!(FabricNode::leaf(1, 3, 1, srl("IXR-D2")).name(), "pod1-leaf3");
        assert_eq!(FabricNode::spine(12, 2, 1, srl("IXR-D3")).name(), "pod12-spine2");
    }

    #[test]
    fn test_superspine_name_ignores_plane() {
        let plane1 = FabricNode::superspine(1, 2, 1, srl("IXR-D3"));
        let plane2 = FabricNode::superspine(2, 2, 1, srl("IXR-D3"));
        assert_eq!(plane1.name(), "superspine2");
        assert_eq!(plane1.name(), plane2.name());
        assert_ne!(plane1, plane2);
        assert_eq!(plane2.plane_index(), Some(2));
        assert_eq!(plane2.pod_index(), None);
    }
}
