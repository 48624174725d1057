use ahash::AHashMap;
use log::debug;

use super::{Pedigree, PedigreeError, MAX_INDIVIDUALS};

/// A single vertex of the inheritance network.
/// # Fields:
/// - `label`   : name of the individual.
/// - `parents` : `[mother, father]` indices within the `Network`. `None` for founders.
/// - `evidence`: observed trait status, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub label   : String,
    pub parents : Option<[usize; 2]>,
    pub evidence: Option<bool>,
}

impl Node {
    #[inline(always)]
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }
}

/// Validated, index-based view of a `Pedigree`.
///
/// Nodes follow the label order of the source pedigree: node `i` is tied to bit `i` of every hypothesis mask.
/// A `Network` can only be obtained through `Pedigree::network()`, which guarantees that:
/// - every parent index points to a node of the network.
/// - every individual either has two distinct parents, or none.
/// - the parent graph is acyclic.
/// - the network holds at most `MAX_INDIVIDUALS` nodes.
#[derive(Debug, Clone)]
pub struct Network {
    nodes: Vec<Node>,
}

impl Network {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sort nodes in topological order: parents before offsprings, by sweeping over unresolved nodes until a
    /// fixed point is reached. Returns the label of the first node that could not be resolved if the graph
    /// contains a cycle.
    fn topological_order(nodes: &[Node]) -> Result<Vec<usize>, String> {
        let mut resolved = vec![false; nodes.len()];
        let mut order    = Vec::with_capacity(nodes.len());
        loop {
            let before = order.len();
            for (i, node) in nodes.iter().enumerate() {
                if resolved[i] {
                    continue
                }
                if node.parents.map_or(true, |[mother, father]| resolved[mother] && resolved[father]) {
                    resolved[i] = true;
                    order.push(i);
                }
            }
            if order.len() == before {
                break
            }
        }

        match resolved.iter().position(|done| !done) {
            Some(i) => Err(nodes[i].label.clone()),
            None    => Ok(order),
        }
    }
}

impl TryFrom<&Pedigree> for Network {
    type Error = PedigreeError;

    fn try_from(pedigree: &Pedigree) -> Result<Self, Self::Error> {
        use PedigreeError::{CyclicPedigree, TooManyIndividuals, UnknownParent};
        if pedigree.len() > MAX_INDIVIDUALS {
            return Err(TooManyIndividuals{found: pedigree.len(), max: MAX_INDIVIDUALS})
        }

        let indices: AHashMap<&str, usize> = pedigree.iter()
            .enumerate()
            .map(|(i, ind)| (ind.label.as_str(), i))
            .collect();

        let index_of = |label: &str, parent: &str| {
            indices.get(parent).copied().ok_or_else(|| UnknownParent{label: label.to_string(), parent: parent.to_string()})
        };

        let nodes = pedigree.iter()
            .map(|ind| {
                let parents = match ind.parents() {
                    Some(parents) => Some([
                        index_of(&ind.label, parents.mother())?,
                        index_of(&ind.label, parents.father())?
                    ]),
                    None => None,
                };
                Ok(Node { label: ind.label.clone(), parents, evidence: ind.trait_evidence })
            })
            .collect::<Result<Vec<Node>, PedigreeError>>()?;

        let order = Self::topological_order(&nodes).map_err(CyclicPedigree)?;
        debug!("Validated pedigree of {} individuals. Topological order: {:?}",
            nodes.len(),
            order.iter().map(|&i| nodes[i].label.as_str()).collect::<Vec<_>>()
        );
        Ok(Network { nodes })
    }
}
