//! Topology record rendering
//!
//! Turns generated nodes and links into `TopologyNode` / `TopologyLink`
//! objects owned by the template they were generated from. Record names are
//! `<template>.<node or link name>`, so re-applying the same template
//! addresses the same records.

use std::collections::BTreeMap;

use crds::{LinkEndpoint, LinkKind, Template, TopologyLink, TopologyLinkSpec, TopologyNode, TopologyNodeSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Resource, ResourceExt};

use crate::link::{Endpoint, FabricLink};
use crate::node::FabricNode;

/// Label holding the node position
pub const LABEL_POSITION: &str = "topology.yndd.io/position";
/// Label holding the node index
pub const LABEL_NODE_INDEX: &str = "topology.yndd.io/node-index";
/// Label holding the pod index (pod nodes only)
pub const LABEL_POD_INDEX: &str = "topology.yndd.io/pod-index";
/// Label holding the hardware platform
pub const LABEL_PLATFORM: &str = "topology.yndd.io/platform";
/// Label holding the vendor type
pub const LABEL_VENDOR_TYPE: &str = "topology.yndd.io/vendor-type";
/// Label holding the name of the owning template
pub const LABEL_TEMPLATE: &str = "topology.yndd.io/template";

/// Render a node as a `TopologyNode` owned by `parent`
#[must_use]
pub fn render_node(parent: &Template, node: &FabricNode) -> TopologyNode {
    let mut labels = template_labels(parent);
    labels.insert(LABEL_POSITION.to_string(), node.position().to_string());
    labels.insert(LABEL_NODE_INDEX.to_string(), node.node_index().to_string());
    if let Some(pod_index) = node.pod_index() {
        labels.insert(LABEL_POD_INDEX.to_string(), pod_index.to_string());
    }
    labels.insert(LABEL_PLATFORM.to_string(), label_value(node.platform()));
    labels.insert(LABEL_VENDOR_TYPE.to_string(), node.vendor_type().to_string());

    TopologyNode {
        metadata: child_metadata(parent, &node.name(), labels),
        spec: TopologyNodeSpec {
            position: node.position(),
            node_index: node.node_index(),
            pod_index: node.pod_index(),
            plane_index: node.plane_index(),
            vendor_type: node.vendor_type(),
            platform: node.platform().to_string(),
        },
    }
}

/// Render a link as a `TopologyLink` owned by `parent`
#[must_use]
pub fn render_link(parent: &Template, link: &FabricLink) -> TopologyLink {
    TopologyLink {
        metadata: child_metadata(parent, &link.name(), template_labels(parent)),
        spec: TopologyLinkSpec {
            kind: LinkKind::Infra,
            endpoints: vec![endpoint(link.endpoint_a()), endpoint(link.endpoint_b())],
        },
    }
}

fn endpoint(endpoint: &Endpoint) -> LinkEndpoint {
    LinkEndpoint {
        node_name: endpoint.node.name(),
        interface_name: endpoint.if_name.clone(),
        kind: LinkKind::Infra,
    }
}

fn template_labels(parent: &Template) -> BTreeMap<String, String> {
    BTreeMap::from([(LABEL_TEMPLATE.to_string(), parent.name_any())])
}

fn child_metadata(parent: &Template, name: &str, labels: BTreeMap<String, String>) -> ObjectMeta {
    ObjectMeta {
        name: Some(format!("{}.{}", parent.name_any(), name)),
        namespace: parent.namespace(),
        labels: Some(labels),
        owner_references: parent.controller_owner_ref(&()).map(|owner| vec![owner]),
        ..Default::default()
    }
}

/// Label values only allow alphanumerics, '-', '_' and '.'
fn label_value(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') { c } else { '-' })
        .collect()
}
