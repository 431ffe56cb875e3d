use crate::parser::{
    analyzer::{AliasRenames, AnalysisContext, AnalyzerError, Clause, ColumnResolver, JoinResolver, References, ScalarResolver},
    ast::{FromClause, OrderBy, Predicate, QueryTree, SelectItem}
};

pub struct PredicateResolver;

impl PredicateResolver {
    pub fn check_predicate(pred: &Predicate, ctx: &AnalysisContext, clause: Clause) -> Result<(), AnalyzerError> {
        match pred {
            Predicate::And(list) | Predicate::Or(list) => {
                for p in list {
                    Self::check_predicate(p, ctx, clause)?;
                }
                Ok(())
            }
            Predicate::Not(inner) => Self::check_predicate(inner, ctx, clause),
            Predicate::Compare { left, right, .. } => {
                ScalarResolver::check_scalar(left, ctx, clause)?;
                ScalarResolver::check_scalar(right, ctx, clause)
            }
            Predicate::IsNull { expr, .. } => ScalarResolver::check_scalar(expr, ctx, clause),
            Predicate::InList { expr, list, .. } => {
                ScalarResolver::check_scalar(expr, ctx, clause)?;
                for item in list {
                    ScalarResolver::check_scalar(item, ctx, clause)?;
                }
                Ok(())
            }
            Predicate::Like { expr, pattern, .. } => {
                ScalarResolver::check_scalar(expr, ctx, clause)?;
                ScalarResolver::check_scalar(pattern, ctx, clause)
            }
            Predicate::InSubquery { expr, subquery, .. } => {
                ScalarResolver::check_scalar(expr, ctx, clause)?;
                ctx.nested(subquery)?.check_query(subquery)
            }
        }
    }

    pub fn rename_predicate(pred: &Predicate, renames: &AliasRenames) -> Predicate {
        match pred {
            Predicate::And(list) => Predicate::And(list.iter().map(|p| Self::rename_predicate(p, renames)).collect()),
            Predicate::Or(list) => Predicate::Or(list.iter().map(|p| Self::rename_predicate(p, renames)).collect()),
            Predicate::Not(inner) => Predicate::Not(Box::new(Self::rename_predicate(inner, renames))),
            Predicate::Compare { left, op, right } => Predicate::Compare {
                left: ScalarResolver::rename_scalar(left, renames),
                op: *op,
                right: ScalarResolver::rename_scalar(right, renames),
            },
            Predicate::IsNull { expr, negated } => Predicate::IsNull {
                expr: ScalarResolver::rename_scalar(expr, renames),
                negated: *negated,
            },
            Predicate::InList { expr, list, negated } => Predicate::InList {
                expr: ScalarResolver::rename_scalar(expr, renames),
                list: list.iter().map(|item| ScalarResolver::rename_scalar(item, renames)).collect(),
                negated: *negated,
            },
            Predicate::Like { expr, pattern, negated } => Predicate::Like {
                expr: ScalarResolver::rename_scalar(expr, renames),
                pattern: ScalarResolver::rename_scalar(pattern, renames),
                negated: *negated,
            },
            Predicate::InSubquery { expr, subquery, negated } => Predicate::InSubquery {
                expr: ScalarResolver::rename_scalar(expr, renames),
                subquery: Box::new(Self::rename_subquery(subquery, renames)),
                negated: *negated,
            },
        }
    }

    /// Correlated references of a nested query follow the renaming too.
    fn rename_subquery(query: &QueryTree, renames: &AliasRenames) -> QueryTree {
        QueryTree {
            projection: query.projection.iter()
                .map(|item| SelectItem {
                    expression: ScalarResolver::rename_scalar(&item.expression, renames),
                    ..item.clone()
                })
                .collect(),
            from: query.from.iter()
                .map(|from| FromClause::new(&from.entity, renames.get(&from.alias).unwrap_or(&from.alias)))
                .collect(),
            joins: JoinResolver::rename_joins(&query.joins, renames),
            criteria: query.criteria.as_ref().map(|p| Self::rename_predicate(p, renames)),
            group_by: query.group_by.iter().map(|col| ColumnResolver::rename_column(col, renames)).collect(),
            having: query.having.as_ref().map(|p| Self::rename_predicate(p, renames)),
            order_by: query.order_by.iter()
                .map(|order| OrderBy { expr: ScalarResolver::rename_scalar(&order.expr, renames), ascending: order.ascending })
                .collect(),
            parameters: query.parameters.clone(),
        }
    }

    pub fn collect_predicate(pred: &Predicate, references: &mut References) {
        match pred {
            Predicate::And(list) | Predicate::Or(list) => {
                for p in list {
                    Self::collect_predicate(p, references);
                }
            }
            Predicate::Not(inner) => Self::collect_predicate(inner, references),
            Predicate::Compare { left, right, .. } => {
                ScalarResolver::collect_scalar(left, references);
                ScalarResolver::collect_scalar(right, references);
            }
            Predicate::IsNull { expr, .. } => ScalarResolver::collect_scalar(expr, references),
            Predicate::InList { expr, list, .. } => {
                ScalarResolver::collect_scalar(expr, references);
                for item in list {
                    ScalarResolver::collect_scalar(item, references);
                }
            }
            Predicate::Like { expr, pattern, .. } => {
                ScalarResolver::collect_scalar(expr, references);
                ScalarResolver::collect_scalar(pattern, references);
            }
            Predicate::InSubquery { expr, subquery, .. } => {
                ScalarResolver::collect_scalar(expr, references);
                references.add_query(subquery);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{analyzer::{AliasRenames, PredicateResolver}, ast::Predicate, QueryParser};

    fn predicate(text: &str) -> Predicate {
        let mut parser = QueryParser::new(text);
        Predicate::parse(&mut parser).expect("Failed to parse predicate")
    }

    fn renames() -> AliasRenames {
        AliasRenames::from([
            ("o".to_string(), "o_2".to_string()),
            ("colors".to_string(), "colors_2".to_string()),
        ])
    }

    #[test]
    pub fn test_rename_predicate() {
        let pred = predicate("o.colors = :foo AND (colors.name LIKE 'r%' OR NOT (colors.id IN (1, 2)))");

        let renamed = PredicateResolver::rename_predicate(&pred, &renames());

        assert_eq!(renamed.to_string(), "o_2.colors = :foo AND (colors_2.name LIKE 'r%' OR NOT (colors_2.id IN(1, 2)))");
    }

    #[test]
    pub fn test_rename_correlated_subquery() {
        let pred = predicate("o.brand IN(SELECT b FROM Brand b WHERE b.owner = o.owner)");

        let renamed = PredicateResolver::rename_predicate(&pred, &renames());

        assert_eq!(renamed.to_string(), "o_2.brand IN(SELECT b FROM Brand b WHERE b.owner = o_2.owner)");
    }
}
