use indexmap::IndexMap;

use crate::parser::{analyzer::{AnalysisContext, AnalyzerError, Clause, References}, ast::Column};

/// old alias -> new alias
pub type AliasRenames = IndexMap<String, String>;

pub struct ColumnResolver;

impl ColumnResolver {
    /// `alias.field` needs an entity or join alias; a bare name may also be a
    /// result variable.
    pub fn check_column(col: &Column, ctx: &AnalysisContext, clause: Clause) -> Result<(), AnalyzerError> {
        let known = match col {
            Column::Name { name } => ctx.contains(name),
            Column::Path { alias, .. } => ctx.is_identification_variable(alias),
        };

        match known {
            true => Ok(()),
            false => Err(AnalyzerError::UnknownAlias { alias: col.alias().to_string(), clause }),
        }
    }

    pub fn rename_column(col: &Column, renames: &AliasRenames) -> Column {
        match col {
            Column::Name { name } => match renames.get(name) {
                Some(renamed) => Column::name(renamed),
                None => col.clone(),
            },
            Column::Path { alias, field } => match renames.get(alias) {
                Some(renamed) => Column::path(renamed, field),
                None => col.clone(),
            },
        }
    }

    pub fn collect_column(col: &Column, references: &mut References) {
        references.add_column(col);
    }
}
