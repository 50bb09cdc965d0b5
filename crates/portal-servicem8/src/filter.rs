//! `$filter` expressions.
//!
//! ServiceM8 accepts a small OData subset on list endpoints. Only equality
//! clauses joined with `and` are needed here.

use std::fmt;

/// An OData `$filter` expression of `field eq 'value'` clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    clauses: Vec<String>,
}

impl Filter {
    /// A single `field eq 'value'` clause.
    #[must_use]
    pub fn eq(field: &str, value: &str) -> Self {
        Self {
            clauses: vec![clause(field, value)],
        }
    }

    /// Append `and field eq 'value'`.
    #[must_use]
    pub fn and_eq(mut self, field: &str, value: &str) -> Self {
        self.clauses.push(clause(field, value));
        self
    }

    /// Active records belonging to a company.
    #[must_use]
    pub fn company(company_uuid: &str) -> Self {
        Self::eq("company_uuid", company_uuid)
    }

    /// The `$filter=...` query pair, URL-encoded.
    #[must_use]
    pub fn to_query(&self) -> String {
        format!("%24filter={}", urlencoding::encode(&self.to_string()))
    }
}

fn clause(field: &str, value: &str) -> String {
    format!("{field} eq '{}'", value.replace('\'', "''"))
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clauses.join(" and "))
    }
}
