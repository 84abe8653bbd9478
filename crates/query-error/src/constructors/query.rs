//! Parse (3000-3999) and plan (4000-4999) errors.

use std::fmt::Display;

use super::cause_constructors;
use crate::{Error, ErrorKind};

cause_constructors! {
    /// The statement text could not be parsed.
    ParseSyntax,
    /// The planner could not build a plan for a parsed statement.
    Plan,
}

impl Error {
    /// A projection or FROM term has neither a name nor an alias.
    #[track_caller]
    pub fn plan_no_term_name(term_type: impl Display) -> Self {
        Self::new(ErrorKind::PlanNoTermName, &[&term_type])
    }

    #[track_caller]
    pub fn plan_duplicate_alias(term_type: impl Display, alias: impl Display) -> Self {
        Self::new(ErrorKind::PlanDuplicateAlias, &[&term_type, &alias])
    }
}

#[cfg(test)]
mod tests {
    use crate::{Band, Error};

    #[test]
    fn test_parse_syntax() {
        let err = Error::parse_syntax("unexpected token", "SELECT FROM");
        assert_eq!(err.code(), 3000);
        assert_eq!(err.key(), "parse.syntax_error");
        assert_eq!(err.band(), Band::Parse);
        assert_eq!(err.message(), "Syntax error: SELECT FROM");
    }

    #[test]
    fn test_plan_errors() {
        let err = Error::plan("no index", "primary scan");
        assert_eq!(err.code(), 4000);
        assert_eq!(err.key(), "plan.error");

        let err = Error::plan_no_term_name("FROM");
        assert_eq!(err.code(), 4010);
        assert_eq!(err.message(), "FROM term must have a name or alias");

        let err = Error::plan_duplicate_alias("FROM", "b");
        assert_eq!(err.code(), 4020);
        assert_eq!(err.band(), Band::Plan);
        assert_eq!(err.message(), "Duplicate FROM alias b");
    }
}
