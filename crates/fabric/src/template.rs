//! Template validation and resolution
//!
//! A root template may build pods from other templates, either directly
//! (`templateReference`) or through a definition (`definitionReference`).
//! Resolution validates the root, fetches every referenced child, validates
//! it as a child and folds everything into a [`ResolvedTemplate`], which has
//! no reference fields at all. Nesting is one level deep: a child that
//! references further templates is rejected.

use crds::{FabricTemplate, PodTemplate, TierTemplate, TopologyResourceReference};
use tracing::debug;

use crate::error::FabricError;
use crate::resolver::TemplateResolver;

const MAX_UPLINKS_LIMIT: u32 = 4;

/// Role a template plays during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateRole<'a> {
    /// The template the fabric is generated from
    Root,
    /// A template referenced from a root pod entry
    Child {
        /// Reference the child was fetched through, for error reporting
        name: &'a str,
    },
}

/// A fabric template with every pod reference replaced by its target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    /// Superspine tier
    pub tier1: Option<TierTemplate>,
    /// Border leaf tier
    pub border_leaf: Option<TierTemplate>,
    /// Pods, in template order
    pub pods: Vec<ResolvedPod>,
    /// Upper bound on spine uplinks towards one superspine
    pub max_uplinks_tier2_to_tier1: u32,
    /// Upper bound on leaf uplinks towards one spine
    pub max_uplinks_tier3_to_tier2: u32,
}

/// A natively defined pod
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPod {
    /// Number of pod instances
    pub pod_number: u32,
    /// Spine tier
    pub tier2: Option<TierTemplate>,
    /// Leaf tier
    pub tier3: Option<TierTemplate>,
}

/// Validate a template for the role it plays
///
/// Root pod entries either define tiers natively together with a pod number,
/// or carry exactly one reference and no pod number. A child template holds
/// a single native pod entry whose pod number, if set, is 1.
pub fn check_template(template: &FabricTemplate, role: TemplateRole<'_>) -> Result<(), FabricError> {
    if let TemplateRole::Child { name } = role {
        if template.pods.len() != 1 {
            return Err(FabricError::ChildPodCount {
                template: name.to_string(),
                count: template.pods.len(),
            });
        }
    } else {
        check_uplink_max("maxUplinksTier2ToTier1", template.max_uplinks_tier2_to_tier1)?;
        check_uplink_max("maxUplinksTier3ToTier2", template.max_uplinks_tier3_to_tier2)?;
    }

    for (ordinal, pod) in template.pods.iter().enumerate() {
        check_pod_template(ordinal, pod, role)?;
    }
    Ok(())
}

fn check_uplink_max(field: &'static str, value: u32) -> Result<(), FabricError> {
    if (1..=MAX_UPLINKS_LIMIT).contains(&value) {
        Ok(())
    } else {
        Err(FabricError::UplinkMaxOutOfRange { field, value })
    }
}

fn check_pod_template(ordinal: usize, pod: &PodTemplate, role: TemplateRole<'_>) -> Result<(), FabricError> {
    if pod.has_native_tiers() && pod.has_reference() {
        return Err(FabricError::MixedDefinition { pod: ordinal });
    }

    match role {
        TemplateRole::Root => {
            if pod.template_reference.is_some() && pod.definition_reference.is_some() {
                return Err(FabricError::MultipleReferences { pod: ordinal });
            }
            if pod.has_reference() && pod.pod_number.is_some() {
                return Err(FabricError::ReferenceWithPodNumber { pod: ordinal });
            }
            if !pod.has_reference() && pod.pod_number.is_none() {
                return Err(FabricError::MissingPodNumber { pod: ordinal });
            }
        }
        TemplateRole::Child { name } => {
            if pod.has_reference() {
                return Err(FabricError::ChildWithReference {
                    template: name.to_string(),
                });
            }
            if let Some(pod_number) = pod.pod_number.filter(|n| *n != 1) {
                return Err(FabricError::ChildPodNumber {
                    template: name.to_string(),
                    pod_number,
                });
            }
        }
    }

    native_tiers(ordinal, pod).map(|_| ())
}

/// Spine and leaf tiers of a pod entry, folding in the labelled tier list
fn native_tiers(
    ordinal: usize,
    pod: &PodTemplate,
) -> Result<(Option<TierTemplate>, Option<TierTemplate>), FabricError> {
    let mut tier2 = pod.tier2.clone();
    let mut tier3 = pod.tier3.clone();

    for labeled in &pod.tiers {
        let (slot, kind) = match labeled.kind.as_str() {
            "tier2" => (&mut tier2, "tier2"),
            "tier3" => (&mut tier3, "tier3"),
            _ => {
                return Err(FabricError::InvalidTierKind {
                    pod: ordinal,
                    kind: labeled.kind.clone(),
                });
            }
        };
        if slot.is_some() {
            return Err(FabricError::DuplicateTier { pod: ordinal, kind });
        }
        *slot = Some(TierTemplate::from(labeled));
    }

    Ok((tier2, tier3))
}

fn resolved_pod(ordinal: usize, pod: &PodTemplate) -> Result<ResolvedPod, FabricError> {
    let (tier2, tier3) = native_tiers(ordinal, pod)?;
    Ok(ResolvedPod {
        pod_number: pod.pod_number.unwrap_or(1),
        tier2,
        tier3,
    })
}

/// Validate a root template and replace its pod references by their targets
///
/// Tier1, border leaf and the uplink maxima always come from the root.
/// Resolver errors abort resolution; nothing is merged partially.
pub async fn resolve<R>(template: &FabricTemplate, resolver: &R) -> Result<ResolvedTemplate, FabricError>
where
    R: TemplateResolver + ?Sized,
{
    check_template(template, TemplateRole::Root)?;

    let mut pods = Vec::with_capacity(template.pods.len());
    for (ordinal, pod) in template.pods.iter().enumerate() {
        let resolved = if let Some(reference) = &pod.template_reference {
            debug!("Pod {} references template {}", ordinal, reference);
            resolve_child(reference, resolver).await?
        } else if let Some(reference) = &pod.definition_reference {
            debug!("Pod {} references definition {}", ordinal, reference);
            let definition = resolver.get_definition(reference).await?;
            let [rule] = definition.templates.as_slice() else {
                return Err(FabricError::MultipleTemplatesOnDefinition {
                    definition: reference.to_string(),
                    count: definition.templates.len(),
                });
            };
            let mut target = rule.template_ref.clone();
            if target.namespace.is_none() {
                target.namespace.clone_from(&reference.namespace);
            }
            resolve_child(&target, resolver).await?
        } else {
            resolved_pod(ordinal, pod)?
        };
        pods.push(resolved);
    }

    Ok(ResolvedTemplate {
        tier1: template.tier1.clone(),
        border_leaf: template.border_leaf.clone(),
        pods,
        max_uplinks_tier2_to_tier1: template.max_uplinks_tier2_to_tier1,
        max_uplinks_tier3_to_tier2: template.max_uplinks_tier3_to_tier2,
    })
}

async fn resolve_child<R>(reference: &TopologyResourceReference, resolver: &R) -> Result<ResolvedPod, FabricError>
where
    R: TemplateResolver + ?Sized,
{
    let child = resolver.get_template(reference).await?;
    let name = reference.to_string();
    check_template(&child, TemplateRole::Child { name: &name })?;

    let mut pod = resolved_pod(0, &child.pods[0])?;
    pod.pod_number = 1;
    Ok(pod)
}
