use std::fmt;

use indexmap::IndexMap;

use crate::parser::{
    analyzer::{AnalyzerError, ColumnResolver, PredicateResolver, ScalarResolver},
    ast::{Column, QueryTree}
};

/// Query clause an alias reference was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Select,
    Join,
    Where,
    GroupBy,
    Having,
    OrderBy,
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Select => write!(f, "SELECT"),
            Clause::Join => write!(f, "JOIN"),
            Clause::Where => write!(f, "WHERE"),
            Clause::GroupBy => write!(f, "GROUP BY"),
            Clause::Having => write!(f, "HAVING"),
            Clause::OrderBy => write!(f, "ORDER BY"),
        }
    }
}

/// What a visible alias stands for.
#[derive(Debug, Clone, PartialEq)]
pub enum AliasKind {
    /// FROM entry, backed by an entity name.
    Entity(String),
    /// JOIN target, backed by the association path it was reached through.
    Join(Column),
    /// SELECT result variable (`count(o.id) AS counter`).
    Result,
}

impl AliasKind {
    /// Entities and joins may be dereferenced with `alias.field`; result
    /// variables may not.
    pub fn is_identification_variable(&self) -> bool {
        !matches!(self, AliasKind::Result)
    }
}

#[derive(Debug, Default, Clone)]
pub struct AnalysisContext {
    /// map visible alias -> what backs it
    pub aliases: IndexMap<String, AliasKind>,
}

impl AnalysisContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_alias(&mut self, visible: impl Into<String>, kind: AliasKind) -> Result<(), AnalyzerError> {
        let visible = visible.into();
        if self.aliases.contains_key(&visible) {
            return Err(AnalyzerError::DuplicateAlias(visible));
        }
        self.aliases.insert(visible, kind);
        Ok(())
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.aliases.contains_key(alias)
    }

    pub fn is_identification_variable(&self, alias: &str) -> bool {
        self.aliases.get(alias).is_some_and(AliasKind::is_identification_variable)
    }

    pub fn build_context_from_query(query: &QueryTree) -> Result<Self, AnalyzerError> {
        let mut ctx = Self::new();
        ctx.add_query_aliases(query)?;
        Ok(ctx)
    }

    fn add_query_aliases(&mut self, query: &QueryTree) -> Result<(), AnalyzerError> {
        if query.from.is_empty() {
            return Err(AnalyzerError::MissingRoot);
        }

        for from in &query.from {
            self.add_alias(from.alias.clone(), AliasKind::Entity(from.entity.clone()))?;
        }

        // a join may only start from an alias declared before it
        for join in &query.joins {
            if !self.is_identification_variable(join.source_alias()) {
                return Err(AnalyzerError::UnknownJoinSource {
                    join: join.alias.clone(),
                    source: join.source_alias().to_string(),
                });
            }
            self.add_alias(join.alias.clone(), AliasKind::Join(join.association.clone()))?;
        }

        for alias in query.projection.iter().filter_map(|item| item.alias.as_ref()) {
            self.add_alias(alias.clone(), AliasKind::Result)?;
        }

        Ok(())
    }

    /// Scope of a subquery: the identification variables of this scope plus
    /// everything the subquery declares itself.
    pub fn nested(&self, query: &QueryTree) -> Result<Self, AnalyzerError> {
        let mut ctx = Self::new();
        for (alias, kind) in self.aliases.iter().filter(|(_, kind)| kind.is_identification_variable()) {
            ctx.aliases.insert(alias.clone(), kind.clone());
        }
        ctx.add_query_aliases(query)?;
        Ok(ctx)
    }

    /// Checks every alias reference of the query against this scope.
    pub fn check_query(&self, query: &QueryTree) -> Result<(), AnalyzerError> {
        for join in &query.joins {
            if let Some(condition) = &join.condition {
                PredicateResolver::check_predicate(condition, self, Clause::Join)?;
            }
        }

        for item in &query.projection {
            ScalarResolver::check_scalar(&item.expression, self, Clause::Select)?;
        }

        if let Some(criteria) = &query.criteria {
            PredicateResolver::check_predicate(criteria, self, Clause::Where)?;
        }

        for column in &query.group_by {
            ColumnResolver::check_column(column, self, Clause::GroupBy)?;
        }

        if let Some(having) = &query.having {
            PredicateResolver::check_predicate(having, self, Clause::Having)?;
        }

        for order in &query.order_by {
            ScalarResolver::check_scalar(&order.expr, self, Clause::OrderBy)?;
        }

        Ok(())
    }

    pub fn analyze_query(query: &QueryTree) -> Result<Self, AnalyzerError> {
        let ctx = Self::build_context_from_query(query)?;
        ctx.check_query(query)?;
        Ok(ctx)
    }
}
