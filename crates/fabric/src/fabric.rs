//! Fabric assembly
//!
//! Resolves a template, expands its tiers and wires the result. Any error
//! aborts the build; a [`Fabric`] only exists fully built.

use crds::FabricTemplate;
use tracing::{debug, info};

use crate::error::FabricError;
use crate::link::FabricLink;
use crate::naming::InterfaceNaming;
use crate::node::FabricNode;
use crate::resolver::TemplateResolver;
use crate::template::{self, ResolvedTemplate};
use crate::tier::{self, NodeInventory};
use crate::wiring::{self, LinkLayers, UplinkLimits};

/// A generated fabric: ordered nodes and links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fabric {
    nodes: Vec<FabricNode>,
    links: Vec<FabricLink>,
}

impl Fabric {
    /// Build a fabric with the default interface naming table
    pub async fn build<R>(template: &FabricTemplate, resolver: &R) -> Result<Self, FabricError>
    where
        R: TemplateResolver + ?Sized,
    {
        Self::build_with_naming(template, resolver, &InterfaceNaming::default()).await
    }

    /// Build a fabric with a caller supplied interface naming table
    pub async fn build_with_naming<R>(
        template: &FabricTemplate,
        resolver: &R,
        naming: &InterfaceNaming,
    ) -> Result<Self, FabricError>
    where
        R: TemplateResolver + ?Sized,
    {
        let resolved = template::resolve(template, resolver).await?;
        Self::from_resolved(&resolved, naming)
    }

    /// Build a fabric from an already resolved template
    pub fn from_resolved(template: &ResolvedTemplate, naming: &InterfaceNaming) -> Result<Self, FabricError> {
        debug!(
            "Building fabric: {} pod entries, tier1 {}, max uplinks tier2->tier1 {}, tier3->tier2 {}",
            template.pods.len(),
            template.tier1.as_ref().map_or(0, |t| t.node_number),
            template.max_uplinks_tier2_to_tier1,
            template.max_uplinks_tier3_to_tier2
        );

        let inventory = tier::build_nodes(template)?;
        let limits = UplinkLimits {
            tier2_to_tier1: template.max_uplinks_tier2_to_tier1,
            tier3_to_tier2: template.max_uplinks_tier3_to_tier2,
        };
        let layers = wiring::build_links(&inventory, limits, naming)?;

        let fabric = Self::assemble(&inventory, layers);
        info!(
            "Fabric generated: {} nodes, {} links",
            fabric.nodes.len(),
            fabric.links.len()
        );
        Ok(fabric)
    }

    fn assemble(inventory: &NodeInventory, layers: LinkLayers) -> Self {
        let nodes = inventory.iter().cloned().collect();
        let mut links = layers.leaf_spine;
        links.extend(layers.spine_superspine);
        Self { nodes, links }
    }

    /// Nodes: superspines, then per pod its spines and leafs
    #[must_use]
    pub fn nodes(&self) -> &[FabricNode] {
        &self.nodes
    }

    /// Links: leaf-spine links, then spine-superspine links
    #[must_use]
    pub fn links(&self) -> &[FabricLink] {
        &self.links
    }

    /// Consume the fabric, returning its nodes and links
    #[must_use]
    pub fn into_parts(self) -> (Vec<FabricNode>, Vec<FabricLink>) {
        (self.nodes, self.links)
    }

    /// Log every node at debug level
    pub fn log_nodes(&self) {
        for node in &self.nodes {
            debug!(
                "Node {}: position {}, pod {:?}, plane {:?}, vendor {}, platform {}",
                node.name(),
                node.position(),
                node.pod_index(),
                node.plane_index(),
                node.vendor_type(),
                node.platform()
            );
        }
    }

    /// Log every link at debug level
    pub fn log_links(&self) {
        for link in &self.links {
            debug!(
                "Link {}: {} {} <-> {} {}",
                link.name(),
                link.endpoint_a().node.name(),
                link.endpoint_a().if_name,
                link.endpoint_b().node.name(),
                link.endpoint_b().if_name
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::ResolvedPod;
    use crds::{TierTemplate, VendorInfo, VendorType};

    fn tier(num: u32, platform: &str) -> TierTemplate {
        TierTemplate {
            vendor_info: vec![VendorInfo::new(VendorType::NokiaSrl, platform)],
            node_number: num,
            uplinks_per_node: 1,
        }
    }

    #[test]
    fn test_nodes_and_links_ordering() {
        let resolved = ResolvedTemplate {
            tier1: Some(tier(2, "IXR-D3")),
            border_leaf: None,
            pods: vec![ResolvedPod {
                pod_number: 1,
                tier2: Some(tier(2, "IXR-D3")),
                tier3: Some(tier(1, "IXR-D2")),
            }],
            max_uplinks_tier2_to_tier1: 1,
            max_uplinks_tier3_to_tier2: 1,
        };
        let fabric = Fabric::from_resolved(&resolved, &InterfaceNaming::default()).unwrap();
        fabric.log_nodes();
        fabric.log_links();

        let names: Vec<String> = fabric.nodes().iter().map(FabricNode::name).collect();
        assert_eq!(
            names[..4],
            ["superspine1", "superspine2", "superspine1", "superspine2"]
        );
        assert_eq!(names[4..], ["pod1-spine1", "pod1-spine2", "pod1-leaf1"]);

        // 2 leaf-spine links first, then 4 spine-superspine links
        assert_eq!(fabric.links().len(), 6);
        assert!(fabric.links()[..2].iter().all(|l| l.endpoint_b().node.name() == "pod1-leaf1"));
        assert!(fabric.links()[2..].iter().all(|l| l.endpoint_a().node.plane_index().is_some()));

        let (nodes, links) = fabric.into_parts();
        assert_eq!((nodes.len(), links.len()), (7, 6));
    }
}
