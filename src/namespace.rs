use std::fmt;

use crate::error::AppError;

const MAX_LEN: usize = 63;

/// Deployment-specific prefix for every table this service owns.
///
/// Only `[A-Za-z_][A-Za-z0-9_]*` is accepted, so a namespace can be spliced
/// into DDL and DML without quoting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.len() > MAX_LEN {
            return Err(AppError::InvalidNamespace(format!(
                "namespace exceeds {MAX_LEN} characters"
            )));
        }
        if !validate_ident(raw) {
            return Err(AppError::InvalidNamespace(format!(
                "namespace {raw:?} must match [A-Za-z_][A-Za-z0-9_]*"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn table(&self, name: &str) -> String {
        format!("{}_{}", self.0, name)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validate_ident(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
