//! Generated fabric links.

use crate::node::FabricNode;

/// One side of a link: a node and one of its interfaces
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Node owning the interface
    pub node: FabricNode,
    /// Interface name (e.g., "int-1/49")
    pub if_name: String,
}

impl Endpoint {
    /// Create an endpoint
    pub fn new(node: FabricNode, if_name: impl Into<String>) -> Self {
        Self {
            node,
            if_name: if_name.into(),
        }
    }
}

/// A point-to-point link of the generated fabric
///
/// Endpoint A is the upper-tier node (spine or superspine), endpoint B the
/// lower-tier node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FabricLink {
    endpoint_a: Endpoint,
    endpoint_b: Endpoint,
}

impl FabricLink {
    /// Create a link between two endpoints
    #[must_use]
    pub fn new(endpoint_a: Endpoint, endpoint_b: Endpoint) -> Self {
        Self {
            endpoint_a,
            endpoint_b,
        }
    }

    /// Link name: `<nodeA>-<ifA>-<nodeB>-<ifB>` with every `/` replaced by `-`
    #[must_use]
    pub fn name(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.endpoint_a.node.name(),
            self.endpoint_a.if_name,
            self.endpoint_b.node.name(),
            self.endpoint_b.if_name
        )
        .replace('/', "-")
    }

    /// Upper-tier endpoint
    #[must_use]
    pub fn endpoint_a(&self) -> &Endpoint {
        &self.endpoint_a
    }

    /// Lower-tier endpoint
    #[must_use]
    pub fn endpoint_b(&self) -> &Endpoint {
        &self.endpoint_b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crds::{VendorInfo, VendorType};

    #[test]
    fn test_link_name_is_flat() {
        let vendor = VendorInfo::new(VendorType::NokiaSrl, "IXR-D3");
        let link = FabricLink::new(
            Endpoint::new(FabricNode::spine(1, 1, 1, vendor.clone()), "int-1/3"),
            Endpoint::new(FabricNode::leaf(1, 3, 1, vendor), "int-1/27"),
        );
        assert_eq!(link.name(), "pod1-spine1-int-1-3-pod1-leaf3-int-1-27");
        assert!(!link.name().contains('/'));
        assert_eq!(link.endpoint_a().if_name, "int-1/3");
    }
}
