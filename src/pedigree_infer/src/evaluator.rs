use crate::{
    hypothesis::Hypothesis,
    pedigree::{Network, Node},
    probs::{GeneCount, ProbabilityTables},
};

/// Probability that an offspring carries `genes` copies of the variant, given the probabilities that its mother
/// (`mom_p`) and its father (`dad_p`) each transmit it. Both transmissions are independent.
#[inline(always)]
pub fn inheritance_prob(genes: GeneCount, mom_p: f64, dad_p: f64) -> f64 {
    match genes {
        GeneCount::Two  => mom_p * dad_p,
        GeneCount::One  => mom_p * (1.0 - dad_p) + (1.0 - mom_p) * dad_p,
        GeneCount::Zero => (1.0 - mom_p) * (1.0 - dad_p),
    }
}

/// Joint probability evaluator of a single, fully specified `Hypothesis`.
///
/// Relies on the conditional independence assumptions of the inheritance network: an individual's gene count only
/// depends on the gene counts of its parents, and its trait status only depends on its own gene count.
/// P(hypothesis) = Π P(genes | parents' genes) * P(trait | genes)
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    network: &'a Network,
    tables : &'a ProbabilityTables,
}

impl<'a> Evaluator<'a> {
    pub fn new(network: &'a Network, tables: &'a ProbabilityTables) -> Self {
        Self { network, tables }
    }

    /// Compute the joint probability of `hypothesis`.
    pub fn joint_probability(&self, hypothesis: &Hypothesis) -> f64 {
        let mut probability = 1.0;
        for (i, node) in self.network.nodes().iter().enumerate() {
            let genes = hypothesis.genes(i);
            probability *= self.gene_probability(node, genes, hypothesis)
                * self.trait_probability(genes, hypothesis.has_trait(i));

            if probability == 0.0 { // No need to go further.
                break
            }
        }
        probability
    }

    /// Probability that `node` carries `genes` copies of the variant.
    /// - founders: unconditional prior.
    /// - offsprings: conditioned on the gene counts `hypothesis` assigns to the parents.
    #[inline]
    pub fn gene_probability(&self, node: &Node, genes: GeneCount, hypothesis: &Hypothesis) -> f64 {
        match node.parents {
            None => self.tables.gene_prior[genes],
            Some([mother, father]) => {
                let mom_p = self.tables.transmission_prob(hypothesis.genes(mother));
                let dad_p = self.tables.transmission_prob(hypothesis.genes(father));
                inheritance_prob(genes, mom_p, dad_p)
            }
        }
    }

    #[inline]
    pub fn trait_probability(&self, genes: GeneCount, has_trait: bool) -> f64 {
        self.tables.trait_given_genes[genes].get(has_trait)
    }
}
