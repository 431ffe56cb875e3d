use indexmap::IndexSet;

use crate::parser::{analyzer::{PredicateResolver, References}, ast::QueryTree};

/// Decides which joins must stay on the outer query once WHERE moves into
/// the subquery.
pub struct JoinRetention;

impl JoinRetention {
    /// Aliases of the joins SELECT, GROUP BY, HAVING or ORDER BY still need,
    /// either through the join alias or through its association path, plus
    /// every join those joins hang off or refer to in their `WITH` condition.
    pub fn retained_aliases(query: &QueryTree) -> IndexSet<String> {
        let references = References::outside_where(query);

        let mut retained: IndexSet<String> = query.joins.iter()
            .filter(|join| references.mentions_alias(&join.alias) || references.mentions_path(&join.association))
            .map(|join| join.alias.clone())
            .collect();

        let mut pending: Vec<String> = retained.iter().cloned().collect();
        while let Some(alias) = pending.pop() {
            let Some(join) = query.joins.iter().find(|join| join.alias == alias) else {
                continue;
            };

            let mut needed = References::new();
            needed.aliases.insert(join.source_alias().to_string());
            if let Some(condition) = &join.condition {
                PredicateResolver::collect_predicate(condition, &mut needed);
            }

            for parent in query.joins.iter().filter(|parent| needed.mentions_alias(&parent.alias)) {
                if retained.insert(parent.alias.clone()) {
                    pending.push(parent.alias.clone());
                }
            }
        }

        // declaration order
        query.joins.iter()
            .map(|join| join.alias.clone())
            .filter(|alias| retained.contains(alias))
            .collect()
    }
}
