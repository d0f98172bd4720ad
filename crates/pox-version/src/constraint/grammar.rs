//! Constraint text grammar shared by both flavors
//!
//! A constraint is split on `||` into OR-groups. Each group must match the
//! whole-group pattern and is then scanned left to right for clauses, so
//! clauses may be separated by commas, whitespace or both. A group without
//! any clause stands for the wildcard.

use regex::{Captures, Regex};

use super::Operator;
use crate::error::{Error, Result};

/// Compiled grammar for one flavor
#[derive(Debug)]
pub(crate) struct Grammar {
    group: Regex,
    clause: Regex,
}

/// One clause found in a constraint group
#[derive(Debug)]
pub(crate) struct ClauseMatch<'t> {
    pub operator: Operator,
    pub captures: Captures<'t>,
}

impl<'t> ClauseMatch<'t> {
    /// The operand text, without the operator and the whitespace after it
    pub fn operand(&self) -> &'t str {
        let whole = self.captures.get(0).map_or("", |m| m.as_str());
        let operator_len = self.captures.name("op").map_or(0, |m| m.as_str().len());
        whole[operator_len..].trim_start()
    }
}

impl Grammar {
    /// Build the grammar from operator tokens and an operand pattern.
    ///
    /// The operand pattern must capture its parts with named groups; the
    /// operator is captured as `op`.
    pub fn new(operators: &[&str], operand: &str) -> std::result::Result<Self, regex::Error> {
        let ops = operators
            .iter()
            .map(|op| regex::escape(op))
            .collect::<Vec<_>>()
            .join("|");

        let group = Regex::new(&format!(
            r"^\s*(?:\s*(?:{ops}|)\s*(?:{operand})\s*,?)*\s*$",
            ops = ops,
            operand = strip_names(operand)
        ))?;
        let clause = Regex::new(&format!(
            r"(?P<op>{ops}|)\s*(?:{operand})",
            ops = ops,
            operand = operand
        ))?;

        Ok(Grammar { group, clause })
    }

    /// Split constraint text into OR-groups of clauses; `None` is the wildcard clause
    pub fn parse<'t>(&self, text: &'t str) -> Result<Vec<Vec<Option<ClauseMatch<'t>>>>> {
        let mut groups = Vec::new();

        for group in text.split("||") {
            if !self.group.is_match(group) {
                log::debug!("Rejected constraint group {:?}", group);
                return Err(Error::MalformedConstraint(group.trim().to_string()));
            }

            let mut clauses = Vec::new();
            for captures in self.clause.captures_iter(group) {
                let token = captures.name("op").map_or("", |m| m.as_str());
                let operator: Operator = token.parse()?;
                clauses.push(Some(ClauseMatch { operator, captures }));
            }
            if clauses.is_empty() {
                clauses.push(None);
            }
            groups.push(clauses);
        }

        Ok(groups)
    }
}

/// Turn every named group of a pattern into a non-capturing group
pub(crate) fn strip_names(pattern: &str) -> String {
    lazy_static::lazy_static! {
        static ref NAMED_GROUP_RE: Regex = Regex::new(r"\(\?P<[A-Za-z_][A-Za-z0-9_]*>").unwrap();
    }
    NAMED_GROUP_RE.replace_all(pattern, "(?:").into_owned()
}
