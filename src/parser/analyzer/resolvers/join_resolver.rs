use crate::parser::{analyzer::{AliasRenames, ColumnResolver, PredicateResolver}, ast::Join};

pub struct JoinResolver;

impl JoinResolver {
    /// Renames the declared alias, the association source and the `WITH`
    /// condition of a join.
    pub fn rename_join(join: &Join, renames: &AliasRenames) -> Join {
        Join {
            join_type: join.join_type,
            association: ColumnResolver::rename_column(&join.association, renames),
            alias: renames.get(&join.alias).cloned().unwrap_or_else(|| join.alias.clone()),
            condition: join.condition.as_ref().map(|c| PredicateResolver::rename_predicate(c, renames)),
        }
    }

    pub fn rename_joins(joins: &[Join], renames: &AliasRenames) -> Vec<Join> {
        joins.iter().map(|join| Self::rename_join(join, renames)).collect()
    }
}
