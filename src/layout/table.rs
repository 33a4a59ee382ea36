use std::fmt;

use serde::{Deserialize, Serialize};

use super::LayoutError;

/// Which side of the conversion a layout belongs to.
///
/// Every registry holds two disjoint namespaces, one per role: the Thai-side
/// layouts the user meant to type in (or vice versa) and the Latin-side ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Thai,
    English,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Thai => f.write_str("thai"),
            Role::English => f.write_str("english"),
        }
    }
}

/// One named keyboard layout: two character rows positionally aligned to
/// physical key order.
///
/// Index `i` of `shift` is the shifted output of the same physical key as
/// index `i` of `normal`. Cross-layout conversion relies on that alignment,
/// so both rows must have the same length.
#[derive(Debug)]
pub struct LayoutTable {
    name: &'static str,
    role: Role,
    normal: Vec<char>,
    shift: Vec<char>,
}

impl LayoutTable {
    pub fn new(
        name: &'static str,
        role: Role,
        normal: &str,
        shift: &str,
    ) -> Result<Self, LayoutError> {
        let normal: Vec<char> = normal.chars().collect();
        let shift: Vec<char> = shift.chars().collect();
        if normal.is_empty() || normal.len() != shift.len() {
            return Err(LayoutError::RowLengthMismatch {
                name: name.to_string(),
                normal: normal.len(),
                shift: shift.len(),
            });
        }
        Ok(Self {
            name,
            role,
            normal,
            shift,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Number of physical keys the table models.
    pub fn key_count(&self) -> usize {
        self.normal.len()
    }

    pub fn normal(&self) -> &[char] {
        &self.normal
    }

    pub fn shift(&self) -> &[char] {
        &self.shift
    }

    /// Position of `c` in the combined search sequence: the shift row
    /// followed by the normal row. A character present in both rows resolves
    /// to its shift-row position; round-trip conversion depends on that
    /// tie-break.
    pub fn combined_position(&self, c: char) -> Option<usize> {
        self.shift.iter().position(|&k| k == c).or_else(|| {
            self.normal
                .iter()
                .position(|&k| k == c)
                .map(|i| i + self.shift.len())
        })
    }

    /// Character at `index` of the combined sequence (shift row first).
    pub fn combined_char(&self, index: usize) -> Option<char> {
        if index < self.shift.len() {
            self.shift.get(index).copied()
        } else {
            self.normal.get(index - self.shift.len()).copied()
        }
    }

    /// Toggle the shift state of `c`: a normal-row character becomes its
    /// shift-row counterpart at the same key and vice versa. The normal row
    /// is searched first when a character appears in both rows. `None` when
    /// `c` is on neither row.
    pub fn toggle_shift(&self, c: char) -> Option<char> {
        if let Some(i) = self.normal.iter().position(|&k| k == c) {
            return self.shift.get(i).copied();
        }
        self.shift
            .iter()
            .position(|&k| k == c)
            .and_then(|j| self.normal.get(j).copied())
    }
}
