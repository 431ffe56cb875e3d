use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::{analyzer::References, ast::QueryTree};

static INVALID_ALIAS_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9_]").expect("valid alias pattern")
});

/// Source of fresh aliases while a query is being rewritten.
///
/// An implementation must never hand out an alias that is already in use in
/// the query being rewritten, nor the same alias twice.
pub trait AliasGenerator {
    fn generate_join_alias(&mut self, association: &str) -> String;
}

/// Default generator: `<name>_<n>` with the smallest `n >= 2` that is not
/// reserved yet. Every returned alias is reserved.
#[derive(Debug, Default, Clone)]
pub struct QueryNameGenerator {
    reserved: IndexSet<String>,
}

impl QueryNameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reserved<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut generator = Self::new();
        for name in names {
            generator.reserve(name);
        }
        generator
    }

    /// Seeded with every alias and parameter name the query already uses,
    /// aliases declared inside nested subqueries included.
    pub fn for_query(query: &QueryTree) -> Self {
        let mut references = References::new();
        references.add_query(query);

        let mut generator = Self::with_reserved(references.declared);
        for alias in references.aliases {
            generator.reserve(alias);
        }
        for name in query.parameters.keys() {
            generator.reserve(name.clone());
        }
        generator
    }

    pub fn reserve(&mut self, name: impl Into<String>) -> &mut Self {
        self.reserved.insert(name.into());
        self
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    pub fn generate_parameter_name(&mut self, name: &str) -> String {
        self.next_free(name)
    }

    fn next_free(&mut self, name: &str) -> String {
        let base = Self::sanitize(name);
        let mut counter = 2;
        loop {
            let candidate = format!("{}_{}", base, counter);
            if !self.reserved.contains(&candidate) {
                self.reserved.insert(candidate.clone());
                return candidate;
            }
            counter += 1;
        }
    }

    /// Keeps identifier characters only; a leading digit or an empty name
    /// gets an `a` prefix.
    fn sanitize(name: &str) -> String {
        let cleaned = INVALID_ALIAS_CHARS.replace_all(name, "_");
        match cleaned.chars().next() {
            Some(first) if !first.is_ascii_digit() => cleaned.into_owned(),
            _ => format!("a{}", cleaned),
        }
    }
}

impl AliasGenerator for QueryNameGenerator {
    fn generate_join_alias(&mut self, association: &str) -> String {
        self.next_free(association)
    }
}
