//! Link generation
//!
//! Interface ordinals are packed by peer index times the configured uplink
//! maximum, so a node changing its own uplink count (within the maximum)
//! never moves the interfaces of links it does not own.

use tracing::debug;

use crate::error::FabricError;
use crate::link::{Endpoint, FabricLink};
use crate::naming::InterfaceNaming;
use crate::node::FabricNode;
use crate::tier::NodeInventory;

/// Upper bounds on the uplinks between adjacent tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UplinkLimits {
    /// maxUplinksTier2ToTier1
    pub tier2_to_tier1: u32,
    /// maxUplinksTier3ToTier2
    pub tier3_to_tier2: u32,
}

/// Both link layers of a fabric
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkLayers {
    /// Leaf to spine links, inside each pod
    pub leaf_spine: Vec<FabricLink>,
    /// Spine to superspine links, across pods
    pub spine_superspine: Vec<FabricLink>,
}

/// Wire every pod and every plane of the inventory
pub fn build_links(
    inventory: &NodeInventory,
    limits: UplinkLimits,
    naming: &InterfaceNaming,
) -> Result<LinkLayers, FabricError> {
    let leaf_spine = leaf_spine_links(inventory, limits.tier3_to_tier2, naming)?;
    let spine_superspine = spine_superspine_links(inventory, limits.tier2_to_tier1, naming)?;

    debug!(
        "Generated {} leaf-spine and {} spine-superspine links",
        leaf_spine.len(),
        spine_superspine.len()
    );
    Ok(LinkLayers {
        leaf_spine,
        spine_superspine,
    })
}

/// Every leaf of a pod connects to every spine of the same pod
///
/// Spine side: `u + 1 + (leaf - 1) * max`, leaf side:
/// `u + 1 + (spine - 1) * max` shifted by the leaf platform offset, where
/// `leaf` and `spine` are the 1-based positions within the pod.
fn leaf_spine_links(
    inventory: &NodeInventory,
    max_uplinks: u32,
    naming: &InterfaceNaming,
) -> Result<Vec<FabricLink>, FabricError> {
    let mut links = Vec::new();

    for pod in &inventory.pods {
        for (spine_ordinal, spine) in (1u32..).zip(&pod.spines) {
            for (leaf_ordinal, leaf) in (1u32..).zip(&pod.leafs) {
                check_uplinks(leaf, max_uplinks, "maxUplinksTier3ToTier2")?;

                for uplink in 1..=leaf.uplinks_per_node() {
                    let spine_if = naming.name(uplink + (leaf_ordinal - 1) * max_uplinks);
                    let leaf_if = naming.name_with_offset(
                        leaf.vendor_type(),
                        leaf.platform(),
                        leaf.position(),
                        uplink + (spine_ordinal - 1) * max_uplinks,
                    );
                    links.push(FabricLink::new(
                        Endpoint::new(spine.clone(), spine_if),
                        Endpoint::new(leaf.clone(), leaf_if),
                    ));
                }
            }
        }
    }

    Ok(links)
}

/// Spine `k` of every pod connects to superspine `k` of every plane
///
/// Superspine side: `u + 1 + (pod - 1) * max`, spine side:
/// `u + 1 + (plane - 1) * max` shifted by the spine platform offset.
fn spine_superspine_links(
    inventory: &NodeInventory,
    max_uplinks: u32,
    naming: &InterfaceNaming,
) -> Result<Vec<FabricLink>, FabricError> {
    let mut links = Vec::new();

    for superspine in &inventory.superspines {
        let plane = superspine.plane_index().unwrap_or(1);
        for pod in &inventory.pods {
            for (spine_ordinal, spine) in (1u32..).zip(&pod.spines) {
                check_uplinks(spine, max_uplinks, "maxUplinksTier2ToTier1")?;

                if spine_ordinal != superspine.node_index() {
                    continue;
                }
                for uplink in 1..=spine.uplinks_per_node() {
                    let superspine_if = naming.name(uplink + (pod.pod_index - 1) * max_uplinks);
                    let spine_if = naming.name_with_offset(
                        spine.vendor_type(),
                        spine.platform(),
                        spine.position(),
                        uplink + (plane - 1) * max_uplinks,
                    );
                    links.push(FabricLink::new(
                        Endpoint::new(superspine.clone(), superspine_if),
                        Endpoint::new(spine.clone(), spine_if),
                    ));
                }
            }
        }
    }

    Ok(links)
}

fn check_uplinks(node: &FabricNode, max: u32, field: &'static str) -> Result<(), FabricError> {
    if node.uplinks_per_node() > max {
        return Err(FabricError::UplinkExceedsMax {
            node: node.name(),
            uplinks: node.uplinks_per_node(),
            field,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::PodNodes;
    use crds::{VendorInfo, VendorType};

    fn srl(platform: &str) -> VendorInfo {
        VendorInfo::new(VendorType::NokiaSrl, platform)
    }

    fn pod(pod_index: u32, spines: u32, leafs: u32, leaf_uplinks: u32) -> PodNodes {
        PodNodes {
            pod_index,
            spines: (1..=spines)
                .map(|i| FabricNode::spine(pod_index, i, 1, srl("IXR-D3")))
                .collect(),
            leafs: (1..=leafs)
                .map(|i| FabricNode::leaf(pod_index, i, leaf_uplinks, srl("IXR-D2")))
                .collect(),
        }
    }

    fn limits(tier2_to_tier1: u32, tier3_to_tier2: u32) -> UplinkLimits {
        UplinkLimits {
            tier2_to_tier1,
            tier3_to_tier2,
        }
    }

    fn names(links: &[FabricLink]) -> Vec<String> {
        links.iter().map(FabricLink::name).collect()
    }

    #[test]
    fn test_leaf_spine_packing() {
        let inventory = NodeInventory {
            superspines: Vec::new(),
            pods: vec![pod(1, 2, 2, 2)],
        };
        let layers = build_links(&inventory, limits(1, 2), &InterfaceNaming::default()).unwrap();

        assert_eq!(
            names(&layers.leaf_spine),
            [
                "pod1-spine1-int-1-1-pod1-leaf1-int-1-49",
                "pod1-spine1-int-1-2-pod1-leaf1-int-1-50",
                "pod1-spine1-int-1-3-pod1-leaf2-int-1-49",
                "pod1-spine1-int-1-4-pod1-leaf2-int-1-50",
                "pod1-spine2-int-1-1-pod1-leaf1-int-1-51",
                "pod1-spine2-int-1-2-pod1-leaf1-int-1-52",
                "pod1-spine2-int-1-3-pod1-leaf2-int-1-51",
                "pod1-spine2-int-1-4-pod1-leaf2-int-1-52",
            ]
        );
        assert!(layers.spine_superspine.is_empty());
    }

    #[test]
    fn test_spine_superspine_matches_node_index() {
        let superspines = (1..=2)
            .flat_map(|plane| (1..=2).map(move |i| FabricNode::superspine(plane, i, 1, srl("IXR-D3"))))
            .collect();
        let inventory = NodeInventory {
            superspines,
            pods: vec![pod(1, 2, 0, 1), pod(2, 2, 0, 1)],
        };
        let layers = build_links(&inventory, limits(1, 1), &InterfaceNaming::default()).unwrap();

        // 2 planes x 2 superspines, each matching one spine in each of the 2 pods
        assert_eq!(layers.spine_superspine.len(), 8);
        let first = &layers.spine_superspine[0];
        assert_eq!(first.endpoint_a().node.name(), "superspine1");
        assert_eq!(first.endpoint_a().if_name, "int-1/1");
        assert_eq!(first.endpoint_b().node.name(), "pod1-spine1");
        assert_eq!(first.endpoint_b().if_name, "int-1/25");

        let pod2 = &layers.spine_superspine[1];
        assert_eq!(pod2.endpoint_a().if_name, "int-1/2");
        assert_eq!(pod2.endpoint_b().node.name(), "pod2-spine1");

        // plane 2 shifts the spine side
        let plane2 = &layers.spine_superspine[4];
        assert_eq!(plane2.endpoint_a().node.plane_index(), Some(2));
        assert_eq!(plane2.endpoint_b().if_name, "int-1/26");
        assert!(
            layers
                .spine_superspine
                .iter()
                .all(|l| l.endpoint_a().node.node_index() == l.endpoint_b().node.node_index())
        );
    }

    #[test]
    fn test_leaf_uplinks_exceed_max() {
        let inventory = NodeInventory {
            superspines: Vec::new(),
            pods: vec![pod(1, 1, 1, 3)],
        };
        let err = build_links(&inventory, limits(1, 2), &InterfaceNaming::default()).unwrap_err();
        match err {
            FabricError::UplinkExceedsMax {
                node,
                uplinks,
                field,
                max,
            } => {
                assert_eq!(node, "pod1-leaf1");
                assert_eq!(uplinks, 3);
                assert_eq!(field, "maxUplinksTier3ToTier2");
                assert_eq!(max, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_spine_uplinks_checked_without_match() {
        let mut spines = pod(1, 2, 0, 1);
        spines.spines[1] = FabricNode::spine(1, 2, 2, srl("IXR-D3"));
        let inventory = NodeInventory {
            superspines: vec![FabricNode::superspine(1, 1, 1, srl("IXR-D3"))],
            pods: vec![spines],
        };
        let err = build_links(&inventory, limits(1, 1), &InterfaceNaming::default()).unwrap_err();
        assert!(matches!(err, FabricError::UplinkExceedsMax { field: "maxUplinksTier2ToTier1", .. }));
    }

    #[test]
    fn test_unknown_platform_uses_placeholder() {
        let inventory = NodeInventory {
            superspines: Vec::new(),
            pods: vec![PodNodes {
                pod_index: 1,
                spines: vec![FabricNode::spine(1, 1, 1, srl("IXR-D3"))],
                leafs: vec![FabricNode::leaf(
                    1,
                    1,
                    1,
                    VendorInfo::new(VendorType::NokiaSros, "7750-SR1"),
                )],
            }],
        };
        let layers = build_links(&inventory, limits(1, 1), &InterfaceNaming::default()).unwrap();
        assert_eq!(layers.leaf_spine[0].endpoint_b().if_name, "int-1/0");
    }
}
