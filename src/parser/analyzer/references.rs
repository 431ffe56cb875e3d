use indexmap::IndexSet;

use crate::parser::{
    analyzer::{ColumnResolver, PredicateResolver, ScalarResolver},
    ast::{Column, QueryTree}
};

/// Aliases and association paths a set of clauses mentions.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct References {
    pub aliases: IndexSet<String>,
    pub paths: IndexSet<Column>,
    /// FROM, JOIN and result aliases of every query added, subqueries included.
    pub declared: IndexSet<String>,
}

impl References {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_column(&mut self, column: &Column) {
        self.aliases.insert(column.alias().to_string());
        if let Column::Path { .. } = column {
            self.paths.insert(column.clone());
        }
    }

    pub fn mentions_alias(&self, alias: &str) -> bool {
        self.aliases.contains(alias)
    }

    pub fn mentions_path(&self, path: &Column) -> bool {
        self.paths.contains(path)
    }

    /// Everything the query mentions or declares, WHERE included.
    pub fn add_query(&mut self, query: &QueryTree) {
        self.declared.extend(query.declared_aliases().map(str::to_string));
        self.declared.extend(query.projection.iter().filter_map(|item| item.alias.clone()));
        for join in &query.joins {
            ColumnResolver::collect_column(&join.association, self);
            if let Some(condition) = &join.condition {
                PredicateResolver::collect_predicate(condition, self);
            }
        }
        if let Some(criteria) = &query.criteria {
            PredicateResolver::collect_predicate(criteria, self);
        }
        self.add_outside_where(query);
    }

    /// References of SELECT, GROUP BY, HAVING and ORDER BY.
    pub fn add_outside_where(&mut self, query: &QueryTree) {
        for item in &query.projection {
            ScalarResolver::collect_scalar(&item.expression, self);
        }
        for column in &query.group_by {
            ColumnResolver::collect_column(column, self);
        }
        if let Some(having) = &query.having {
            PredicateResolver::collect_predicate(having, self);
        }
        for order in &query.order_by {
            ScalarResolver::collect_scalar(&order.expr, self);
        }
    }

    pub fn outside_where(query: &QueryTree) -> Self {
        let mut references = Self::new();
        references.add_outside_where(query);
        references
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{analyzer::References, ast::{Column, QueryTree}};

    #[test]
    pub fn test_outside_where() {
        let query = QueryTree::try_from(
            "SELECT o, count(o.id) AS counter FROM Car o LEFT JOIN o.colors colors WHERE colors.name = 'red' GROUP BY o.colors HAVING counter > 3"
        ).expect("Failed to parse query");

        let references = References::outside_where(&query);

        assert!(references.mentions_alias("o"));
        assert!(references.mentions_alias("counter"));
        assert!(!references.mentions_alias("colors"));
        assert!(references.mentions_path(&Column::path("o", "colors")));
        assert!(references.mentions_path(&Column::path("o", "id")));
    }

    #[test]
    pub fn test_subquery_references() {
        let query = QueryTree::try_from(
            "SELECT o FROM Car o WHERE o IN(SELECT c FROM Car c LEFT JOIN c.brand b WHERE b.name = :name)"
        ).expect("Failed to parse query");

        let mut references = References::new();
        references.add_query(&query);

        assert!(references.mentions_alias("b"));
        assert!(references.mentions_path(&Column::path("c", "brand")));
    }

    #[test]
    pub fn test_subquery_declared_aliases() {
        let query = QueryTree::try_from(
            "SELECT o FROM Car o WHERE o IN(SELECT c FROM Car c LEFT JOIN c.colors unused)"
        ).expect("Failed to parse query");

        let mut references = References::new();
        references.add_query(&query);

        assert!(!references.mentions_alias("unused"));
        assert_eq!(references.declared.iter().map(String::as_str).collect::<Vec<_>>(), vec!["o", "c", "unused"]);
    }
}
