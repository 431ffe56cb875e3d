use crate::{
    naming::AliasGenerator,
    parser::{
        analyzer::{AliasRenames, JoinResolver, PredicateResolver},
        ast::{FromClause, QueryTree, ScalarExpr, SelectItem}
    }
};

/// Copy of a query's filtering part under fresh aliases.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelatedSubquery {
    pub query: QueryTree,
    /// outer alias -> fresh alias
    pub renames: AliasRenames,
}

pub struct SubqueryBuilder;

impl SubqueryBuilder {
    /// `SELECT <fresh root> FROM ... <every join> WHERE <renamed criteria>`.
    ///
    /// Expects a single FROM entry. FROM aliases are renamed first, then join
    /// aliases in declaration order, each through the generator. SELECT extras, GROUP BY, HAVING and ORDER BY
    /// are left out.
    pub fn build(query: &QueryTree, generator: &mut dyn AliasGenerator) -> CorrelatedSubquery {
        let mut renames = AliasRenames::new();
        for alias in query.declared_aliases() {
            let fresh = generator.generate_join_alias(alias);
            renames.insert(alias.to_string(), fresh);
        }

        let from: Vec<FromClause> = query.from.iter()
            .map(|from| FromClause::new(&from.entity, renames.get(&from.alias).unwrap_or(&from.alias)))
            .collect();

        let projection = from.first()
            .map(|root| vec![SelectItem::new(ScalarExpr::name(&root.alias))])
            .unwrap_or_default();

        let subquery = QueryTree {
            projection,
            from,
            joins: JoinResolver::rename_joins(&query.joins, &renames),
            criteria: query.criteria.as_ref().map(|criteria| PredicateResolver::rename_predicate(criteria, &renames)),
            ..Default::default()
        };

        CorrelatedSubquery { query: subquery, renames }
    }
}
