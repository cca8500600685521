//! envsubst-compatible placeholder substitution.
//!
//! `$NAME` and `${NAME}` are placeholders when `NAME` is a shell identifier.
//! Any other `$` is copied literally, including shell operators such as
//! `${NAME:-default}` which envsubst does not understand either.

use std::collections::BTreeSet;

use super::environment::Environment;

/// Which placeholders a renderer substitutes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VariableFilter {
    /// Every placeholder.
    #[default]
    All,
    /// Only placeholders naming one of these variables; others stay verbatim.
    Only(BTreeSet<String>),
}

impl VariableFilter {
    /// An empty list means no restriction.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() { VariableFilter::All } else { VariableFilter::Only(names) }
    }

    fn allows(&self, name: &str) -> bool {
        match self {
            VariableFilter::All => true,
            VariableFilter::Only(names) => names.contains(name),
        }
    }
}

#[derive(Debug)]
pub struct TemplateRenderer<'a> {
    env: &'a Environment,
    filter: VariableFilter,
}

impl<'a> TemplateRenderer<'a> {
    pub fn new(env: &'a Environment) -> Self {
        Self { env, filter: VariableFilter::All }
    }

    pub fn with_filter(mut self, filter: VariableFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Substitute placeholders. Unset variables become empty.
    ///
    /// Works on bytes: text outside placeholders is copied unchanged whatever
    /// its encoding, and values are inserted as the environment holds them.
    pub fn render(&self, template: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(template.len());
        let mut rest = template;

        while let Some(pos) = find_dollar(rest) {
            out.extend_from_slice(&rest[..pos]);
            let tail = &rest[pos..];
            match parse_placeholder(tail) {
                Some(p) if self.filter.allows(p.name) => {
                    out.extend_from_slice(self.env.get(p.name).unwrap_or_default());
                    rest = &tail[p.len..];
                }
                Some(p) => {
                    out.extend_from_slice(&tail[..p.len]);
                    rest = &tail[p.len..];
                }
                None => {
                    out.push(b'$');
                    rest = &tail[1..];
                }
            }
        }

        out.extend_from_slice(rest);
        out
    }

    /// Substituted variable names that have no value in the environment.
    pub fn unset_variables(&self, template: &[u8]) -> BTreeSet<String> {
        placeholder_names(template)
            .filter(|name| self.filter.allows(name) && self.env.get(name).is_none())
            .map(str::to_string)
            .collect()
    }
}

/// Names of all placeholders in `template`, in order of appearance.
pub fn placeholder_names(template: &[u8]) -> impl Iterator<Item = &str> {
    let mut rest = template;
    std::iter::from_fn(move || {
        while let Some(pos) = find_dollar(rest) {
            let tail = &rest[pos..];
            match parse_placeholder(tail) {
                Some(p) => {
                    rest = &tail[p.len..];
                    return Some(p.name);
                }
                None => rest = &tail[1..],
            }
        }
        None
    })
}

fn find_dollar(s: &[u8]) -> Option<usize> {
    s.iter().position(|&b| b == b'$')
}

struct Placeholder<'t> {
    name: &'t str,
    /// Length of the placeholder text including `$` and braces.
    len: usize,
}

fn parse_placeholder(s: &[u8]) -> Option<Placeholder<'_>> {
    let body = s.strip_prefix(b"$")?;

    if let Some(braced) = body.strip_prefix(b"{") {
        let name = identifier(braced)?;
        if braced[name.len()..].starts_with(b"}") {
            return Some(Placeholder { name, len: name.len() + 3 });
        }
        return None;
    }

    let name = identifier(body)?;
    Some(Placeholder { name, len: name.len() + 1 })
}

/// Leading shell identifier of `s`. Identifiers are ASCII, so the slice is
/// always valid UTF-8.
fn identifier(s: &[u8]) -> Option<&str> {
    match s.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return None,
    }
    let len = s.iter().take_while(|b| b.is_ascii_alphanumeric() || **b == b'_').count();
    std::str::from_utf8(&s[..len]).ok()
}
