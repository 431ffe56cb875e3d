use tracing::{debug, trace, warn};

use crate::{
    metadata::{EagerLoadingConfig, ResourceMetadataProvider},
    naming::{AliasGenerator, QueryNameGenerator},
    parser::{analyzer::AnalysisContext, ast::{Predicate, QueryTree, ScalarExpr}},
    rewriter::{JoinRetention, RewriteError, SubqueryBuilder}
};

/// Moves the filtering joins of a collection query into a correlated
/// `root IN(SELECT ...)` subquery, so joined rows no longer multiply the
/// root rows the outer query returns.
///
/// ```text
/// SELECT o FROM Car o LEFT JOIN o.colors colors WHERE o.colors = :foo
/// ```
/// becomes
/// ```text
/// SELECT o FROM Car o WHERE o IN(SELECT o_2 FROM Car o_2 LEFT JOIN o_2.colors colors_2 WHERE o_2.colors = :foo)
/// ```
///
/// Joins SELECT, GROUP BY, HAVING or ORDER BY still refer to stay on the
/// outer query. Queries with more than one FROM entry are left untouched.
#[derive(Debug, Clone)]
pub struct EagerJoinRewriter<P> {
    provider: P,
    enabled: bool,
    max_joins: usize,
    force_eager: bool,
}

impl<P: ResourceMetadataProvider> EagerJoinRewriter<P> {
    pub fn new(provider: P, force_eager: bool) -> Self {
        Self::from_config(&EagerLoadingConfig { force_eager, ..Default::default() }, provider)
    }

    pub fn from_config(config: &EagerLoadingConfig, provider: P) -> Self {
        Self {
            provider,
            enabled: config.enabled,
            max_joins: config.max_joins,
            force_eager: config.force_eager,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Rewrites `query` in place. On error the query is left as it was.
    pub fn rewrite(
        &self,
        query: &mut QueryTree,
        generator: &mut dyn AliasGenerator,
        resource_type: &str,
        operation_name: Option<&str>,
    ) -> Result<(), RewriteError> {
        if !self.enabled {
            debug!(resource_type, "eager loading disabled, query left untouched");
            return Ok(());
        }

        let force_eager = self.provider
            .resolve(resource_type, operation_name)?
            .resolve_force_eager(self.force_eager);
        if !force_eager {
            debug!(resource_type, ?operation_name, "force_eager is off, query left untouched");
            return Ok(());
        }

        if query.criteria.is_none() {
            debug!(resource_type, ?operation_name, "no WHERE clause, query left untouched");
            return Ok(());
        }

        if query.joins.is_empty() {
            debug!(resource_type, ?operation_name, "no joins, query left untouched");
            return Ok(());
        }

        // other FROM entries would lose their constraints once WHERE moves
        if query.from.len() > 1 {
            debug!(resource_type, ?operation_name, roots = query.from.len(), "several FROM entries, query left untouched");
            return Ok(());
        }

        if let Err(error) = AnalysisContext::analyze_query(query) {
            warn!(resource_type, %error, "query rejected");
            return Err(error.into());
        }

        if query.joins.len() > self.max_joins {
            warn!(resource_type, joins = query.joins.len(), max_joins = self.max_joins, "query rejected, too many joins");
            return Err(RewriteError::TooManyJoins { joins: query.joins.len(), max_joins: self.max_joins });
        }

        let primary_alias = query.root_alias().unwrap_or_default().to_string();
        let retained = JoinRetention::retained_aliases(query);
        let subquery = SubqueryBuilder::build(query, generator);
        trace!(subquery = %subquery.query, "correlated subquery");

        let (kept, moved): (Vec<_>, Vec<_>) = query.joins.drain(..).partition(|join| retained.contains(&join.alias));
        query.joins = kept;
        query.criteria = Some(Predicate::in_subquery(ScalarExpr::name(&primary_alias), subquery.query));

        debug!(
            resource_type,
            ?operation_name,
            moved = ?moved.iter().map(|join| join.alias.as_str()).collect::<Vec<_>>(),
            retained = ?retained,
            "filtering joins moved into subquery"
        );

        Ok(())
    }

    /// Same as [`rewrite`](Self::rewrite) with a [`QueryNameGenerator`]
    /// seeded from the query itself.
    pub fn rewrite_query(
        &self,
        query: &mut QueryTree,
        resource_type: &str,
        operation_name: Option<&str>,
    ) -> Result<(), RewriteError> {
        let mut generator = QueryNameGenerator::for_query(query);
        self.rewrite(query, &mut generator, resource_type, operation_name)
    }
}
