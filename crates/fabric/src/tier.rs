//! Tier expansion
//!
//! Turns the tiers of a resolved template into fabric nodes. Pods are
//! numbered `(template ordinal + 1) * (instance + 1)`; distinct pod entries
//! can land on the same pod index, in which case their nodes share one pod.

use crds::{Position, TierTemplate};
use tracing::debug;

use crate::error::FabricError;
use crate::node::FabricNode;
use crate::template::ResolvedTemplate;

/// Spine and leaf nodes of one pod index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodNodes {
    /// Pod index, starting at 1
    pub pod_index: u32,
    /// Spines of the pod, in creation order
    pub spines: Vec<FabricNode>,
    /// Leafs of the pod, in creation order
    pub leafs: Vec<FabricNode>,
}

/// All nodes of a fabric, grouped the way wiring needs them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeInventory {
    /// Superspines, plane by plane
    pub superspines: Vec<FabricNode>,
    /// Pods in order of first appearance of their pod index
    pub pods: Vec<PodNodes>,
}

impl NodeInventory {
    fn pod_mut(&mut self, pod_index: u32) -> &mut PodNodes {
        let position = match self.pods.iter().position(|p| p.pod_index == pod_index) {
            Some(position) => position,
            None => {
                self.pods.push(PodNodes {
                    pod_index,
                    spines: Vec::new(),
                    leafs: Vec::new(),
                });
                self.pods.len() - 1
            }
        };
        &mut self.pods[position]
    }

    /// Number of superspine planes: the largest spine count of any pod
    #[must_use]
    pub fn plane_count(&self) -> u32 {
        self.pods
            .iter()
            .map(|p| u32::try_from(p.spines.len()).unwrap_or(u32::MAX))
            .max()
            .unwrap_or(0)
    }

    /// Superspines first, then per pod its spines followed by its leafs
    pub fn iter(&self) -> impl Iterator<Item = &FabricNode> {
        self.superspines
            .iter()
            .chain(self.pods.iter().flat_map(|p| p.spines.iter().chain(p.leafs.iter())))
    }

    /// Total number of nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.superspines.len()
            + self
                .pods
                .iter()
                .map(|p| p.spines.len() + p.leafs.len())
                .sum::<usize>()
    }

    /// Whether the inventory holds no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Expand every tier of the template into nodes
pub fn build_nodes(template: &ResolvedTemplate) -> Result<NodeInventory, FabricError> {
    let mut inventory = NodeInventory::default();

    for (pod_ordinal, pod) in (1u32..).zip(&template.pods) {
        for instance in 1..=pod.pod_number {
            let pod_index = pod_ordinal * instance;
            let spines = expand_pod_tier(Position::Spine, pod_index, pod.tier2.as_ref())?;
            let leafs = expand_pod_tier(Position::Leaf, pod_index, pod.tier3.as_ref())?;

            let pod_nodes = inventory.pod_mut(pod_index);
            pod_nodes.spines.extend(spines);
            pod_nodes.leafs.extend(leafs);
        }
    }

    if let Some(tier1) = &template.tier1 {
        inventory.superspines = expand_superspines(tier1, inventory.plane_count())?;
    }

    debug!(
        "Expanded {} superspines and {} pods",
        inventory.superspines.len(),
        inventory.pods.len()
    );
    Ok(inventory)
}

fn expand_pod_tier(
    position: Position,
    pod_index: u32,
    tier: Option<&TierTemplate>,
) -> Result<Vec<FabricNode>, FabricError> {
    let Some(tier) = tier else {
        return Ok(Vec::new());
    };
    let label = if position == Position::Spine { "tier2" } else { "tier3" };
    check_vendor_info(label, tier)?;

    let nodes: Vec<FabricNode> = tier
        .vendor_info
        .iter()
        .cycle()
        .zip(1..=tier.node_number)
        .map(|(vendor, node_index)| {
            if position == Position::Spine {
                FabricNode::spine(pod_index, node_index, tier.uplinks_per_node, vendor.clone())
            } else {
                FabricNode::leaf(pod_index, node_index, tier.uplinks_per_node, vendor.clone())
            }
        })
        .collect();

    debug!("Pod {}: {} {} nodes", pod_index, nodes.len(), position);
    Ok(nodes)
}

/// Superspines: `tier1.node_number` devices per plane, vendor chosen by plane
fn expand_superspines(tier1: &TierTemplate, planes: u32) -> Result<Vec<FabricNode>, FabricError> {
    if planes == 0 {
        return Ok(Vec::new());
    }
    check_vendor_info("tier1", tier1)?;

    let mut nodes = Vec::new();
    for (plane_index, vendor) in (1..=planes).zip(tier1.vendor_info.iter().cycle()) {
        for node_index in 1..=tier1.node_number {
            nodes.push(FabricNode::superspine(
                plane_index,
                node_index,
                tier1.uplinks_per_node,
                vendor.clone(),
            ));
        }
    }

    debug!("{} planes of {} superspines", planes, tier1.node_number);
    Ok(nodes)
}

fn check_vendor_info(tier: &'static str, template: &TierTemplate) -> Result<(), FabricError> {
    if template.node_number > 0 && template.vendor_info.is_empty() {
        return Err(FabricError::EmptyVendorInfo {
            tier,
            node_number: template.node_number,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::ResolvedPod;
    use crds::{VendorInfo, VendorType};

    fn tier(num: u32, platforms: &[&str]) -> TierTemplate {
        TierTemplate {
            vendor_info: platforms
                .iter()
                .map(|p| VendorInfo::new(VendorType::NokiaSrl, *p))
                .collect(),
            node_number: num,
            uplinks_per_node: 1,
        }
    }

    fn template(tier1: Option<TierTemplate>, pods: Vec<ResolvedPod>) -> ResolvedTemplate {
        ResolvedTemplate {
            tier1,
            border_leaf: None,
            pods,
            max_uplinks_tier2_to_tier1: 1,
            max_uplinks_tier3_to_tier2: 1,
        }
    }

    fn pod(pod_number: u32, spines: u32, leafs: u32) -> ResolvedPod {
        ResolvedPod {
            pod_number,
            tier2: Some(tier(spines, &["IXR-D3"])),
            tier3: Some(tier(leafs, &["IXR-D2"])),
        }
    }

    #[test]
    fn test_vendor_round_robin() {
        let resolved = template(
            None,
            vec![ResolvedPod {
                pod_number: 1,
                tier2: None,
                tier3: Some(tier(5, &["IXR-D2", "IXR-D3"])),
            }],
        );
        let inventory = build_nodes(&resolved).unwrap();

        let platforms: Vec<&str> = inventory.pods[0].leafs.iter().map(FabricNode::platform).collect();
        assert_eq!(platforms, ["IXR-D2", "IXR-D3", "IXR-D2", "IXR-D3", "IXR-D2"]);
        assert!(inventory.pods[0].spines.is_empty());
    }

    #[test]
    fn test_pod_index_product() {
        let resolved = template(None, vec![pod(3, 1, 1), pod(2, 1, 1)]);
        let inventory = build_nodes(&resolved).unwrap();

        // entry 1 gives 1, 2, 3; entry 2 gives 2, 4 (2 collides)
        let indexes: Vec<u32> = inventory.pods.iter().map(|p| p.pod_index).collect();
        assert_eq!(indexes, [1, 2, 3, 4]);
        assert_eq!(inventory.pods[1].spines.len(), 2);
        let names: Vec<String> = inventory.pods[1].spines.iter().map(FabricNode::name).collect();
        assert_eq!(names, ["pod2-spine1", "pod2-spine1"]);
    }

    #[test]
    fn test_superspine_planes() {
        let resolved = template(
            Some(tier(3, &["IXR-D3", "IXR-D2"])),
            vec![pod(1, 2, 4), pod(1, 4, 4)],
        );
        let inventory = build_nodes(&resolved).unwrap();

        assert_eq!(inventory.plane_count(), 4);
        assert_eq!(inventory.superspines.len(), 12);

        let first = &inventory.superspines[0];
        assert_eq!((first.plane_index(), first.node_index()), (Some(1), 1));
        let plane2 = &inventory.superspines[3];
        assert_eq!((plane2.plane_index(), plane2.node_index()), (Some(2), 1));
        // vendor follows the plane
        assert_eq!(first.platform(), "IXR-D3");
        assert_eq!(plane2.platform(), "IXR-D2");
        assert_eq!(inventory.superspines[2].platform(), "IXR-D3");
    }

    #[test]
    fn test_iteration_order_and_len() {
        let resolved = template(Some(tier(1, &["IXR-D3"])), vec![pod(1, 1, 2)]);
        let inventory = build_nodes(&resolved).unwrap();

        let names: Vec<String> = inventory.iter().map(FabricNode::name).collect();
        assert_eq!(names, ["superspine1", "pod1-spine1", "pod1-leaf1", "pod1-leaf2"]);
        assert_eq!(inventory.len(), 4);
        assert!(!inventory.is_empty());
    }

    #[test]
    fn test_empty_vendor_info() {
        let resolved = template(
            None,
            vec![ResolvedPod {
                pod_number: 1,
                tier2: Some(tier(2, &[])),
                tier3: None,
            }],
        );
        let err = build_nodes(&resolved).unwrap_err();
        assert!(matches!(err, FabricError::EmptyVendorInfo { tier: "tier2", node_number: 2 }));
    }

    #[test]
    fn test_no_superspines_without_spines() {
        let resolved = template(
            Some(tier(2, &["IXR-D3"])),
            vec![ResolvedPod {
                pod_number: 1,
                tier2: None,
                tier3: Some(tier(2, &["IXR-D2"])),
            }],
        );
        let inventory = build_nodes(&resolved).unwrap();
        assert!(inventory.superspines.is_empty());
        assert_eq!(inventory.len(), 2);
    }
}
