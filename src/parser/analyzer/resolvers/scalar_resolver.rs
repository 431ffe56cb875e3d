use crate::parser::{
    analyzer::{AliasRenames, AnalysisContext, AnalyzerError, Clause, ColumnResolver, PredicateResolver, References},
    ast::{CaseExpr, Function, ScalarExpr}
};

pub struct ScalarResolver;

impl ScalarResolver {
    pub fn check_scalar(expr: &ScalarExpr, ctx: &AnalysisContext, clause: Clause) -> Result<(), AnalyzerError> {
        match expr {
            ScalarExpr::Column(col) => ColumnResolver::check_column(col, ctx, clause),
            ScalarExpr::Function(function) => {
                for arg in &function.args {
                    Self::check_scalar(arg, ctx, clause)?;
                }
                Ok(())
            }
            ScalarExpr::Case(case) => {
                for (condition, result) in &case.whens {
                    PredicateResolver::check_predicate(condition, ctx, clause)?;
                    Self::check_scalar(result, ctx, clause)?;
                }
                match &case.else_expr {
                    Some(else_expr) => Self::check_scalar(else_expr, ctx, clause),
                    None => Ok(()),
                }
            }
            ScalarExpr::Literal(_) | ScalarExpr::Parameter(_) | ScalarExpr::WildCard => Ok(()),
        }
    }

    pub fn rename_scalar(expr: &ScalarExpr, renames: &AliasRenames) -> ScalarExpr {
        match expr {
            ScalarExpr::Column(col) => ScalarExpr::Column(ColumnResolver::rename_column(col, renames)),
            ScalarExpr::Function(Function { name, args, distinct }) => ScalarExpr::Function(Function {
                name: name.clone(),
                args: args.iter().map(|arg| Self::rename_scalar(arg, renames)).collect(),
                distinct: *distinct,
            }),
            ScalarExpr::Case(CaseExpr { whens, else_expr }) => ScalarExpr::Case(CaseExpr {
                whens: whens.iter()
                    .map(|(condition, result)| (
                        PredicateResolver::rename_predicate(condition, renames),
                        Self::rename_scalar(result, renames),
                    ))
                    .collect(),
                else_expr: else_expr.as_ref().map(|e| Box::new(Self::rename_scalar(e, renames))),
            }),
            _ => expr.clone(),
        }
    }

    pub fn collect_scalar(expr: &ScalarExpr, references: &mut References) {
        match expr {
            ScalarExpr::Column(col) => ColumnResolver::collect_column(col, references),
            ScalarExpr::Function(function) => {
                for arg in &function.args {
                    Self::collect_scalar(arg, references);
                }
            }
            ScalarExpr::Case(case) => {
                for (condition, result) in &case.whens {
                    PredicateResolver::collect_predicate(condition, references);
                    Self::collect_scalar(result, references);
                }
                if let Some(else_expr) = &case.else_expr {
                    Self::collect_scalar(else_expr, references);
                }
            }
            ScalarExpr::Literal(_) | ScalarExpr::Parameter(_) | ScalarExpr::WildCard => {}
        }
    }
}
