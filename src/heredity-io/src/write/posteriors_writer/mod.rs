use pedigree_infer::{GeneCount, Posteriors};

/// Header line of the `table` output format. Pretty-print separators are replaced by `GenericWriter`
pub const TABLE_HEADER: &str = "name       - gene_0 - gene_1 - gene_2 - trait_false - trait_true";

/// Format posteriors as a table: a header, followed by one line per individual, in label order.
/// Each line holds `name - p0 - p1 - p2 - p_false - p_true`, rounded to `precision` decimals.
pub fn table_lines(posteriors: &Posteriors, precision: usize) -> Vec<String> {
    std::iter::once(TABLE_HEADER.to_string())
        .chain(posteriors.iter().map(|person| format!("{person:.precision$}")))
        .collect()
}

/// Format posteriors as indented blocks, in label order:
/// ```text
/// Harry:
///   Gene:
///     0: 0.5351
///     1: 0.4557
///     2: 0.0092
///   Trait:
///     False: 0.7335
///     True: 0.2665
/// ```
pub fn report_lines(posteriors: &Posteriors, precision: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(posteriors.len() * 8);
    for person in posteriors {
        lines.push(format!("{}:", person.label));
        lines.push("  Gene:".to_string());
        for genes in GeneCount::ALL {
            lines.push(format!("    {genes}: {:.precision$}", person.gene(genes)));
        }
        lines.push("  Trait:".to_string());
        for has_trait in [false, true] {
            let status = if has_trait { "True" } else { "False" };
            lines.push(format!("    {status}: {:.precision$}", person.trait_prob(has_trait)));
        }
    }
    lines
}
