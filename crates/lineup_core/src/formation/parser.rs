//! Formation descriptor parsing.
//!
//! A descriptor is a `-`-separated list of outfield line sizes ordered from
//! defense to attack (`"4-3-3"`). The goalkeeper is never encoded.

use crate::error::{FormationError, Result};
use std::fmt;
use std::num::IntErrorKind;

/// Tolerant tokenizer: keeps every token that parses to a positive integer,
/// silently drops the rest. Never panics.
///
/// Integers too large for `u32` saturate to `u32::MAX` instead of being
/// dropped, so the line stays and the distributor rejects it.
pub fn parse_line_sizes(descriptor: &str) -> Vec<u32> {
    descriptor.split('-').filter_map(parse_token).filter(|&size| size > 0).collect()
}

fn parse_token(token: &str) -> Option<u32> {
    match token.trim().parse::<u32>() {
        Ok(size) => Some(size),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Some(u32::MAX),
        Err(_) => None,
    }
}

/// Parsed, non-empty formation descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormationDescriptor {
    line_sizes: Vec<u32>,
}

impl FormationDescriptor {
    /// Parses `descriptor`; a result without any line is a structural error.
    pub fn parse(descriptor: &str) -> Result<Self> {
        let line_sizes = parse_line_sizes(descriptor);
        if line_sizes.is_empty() {
            return Err(FormationError::EmptyDescriptor { descriptor: descriptor.to_string() });
        }
        Ok(Self { line_sizes })
    }

    pub fn line_sizes(&self) -> &[u32] {
        &self.line_sizes
    }

    pub fn line_count(&self) -> usize {
        self.line_sizes.len()
    }

    /// Outfield players required to fill every line.
    pub fn outfield_total(&self) -> usize {
        self.line_sizes.iter().fold(0usize, |acc, &size| acc.saturating_add(size as usize))
    }

    /// Canonical `a-b-c` form of the parsed sizes.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FormationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, size) in self.line_sizes.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", size)?;
        }
        Ok(())
    }
}
