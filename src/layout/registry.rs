use std::sync::OnceLock;

use super::tables::BUILTIN;
use super::{LayoutError, LayoutTable, Role};

/// Read-only map from (role, layout name) to its table.
///
/// Built once and never mutated; lookups borrow the stored tables, so
/// concurrent conversions need no locking.
#[derive(Debug)]
pub struct LayoutRegistry {
    thai: Vec<LayoutTable>,
    english: Vec<LayoutTable>,
}

impl LayoutRegistry {
    /// Get or initialize the registry of built-in layouts, shared for the
    /// process lifetime.
    pub fn global() -> &'static LayoutRegistry {
        static INSTANCE: OnceLock<LayoutRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            // The built-in tables are static literals checked by tests, so a
            // validation failure here is a defect in this crate.
            Self::builtin().expect("built-in layout tables are malformed")
        })
    }

    /// Build a registry holding exactly the built-in layouts.
    pub fn builtin() -> Result<Self, LayoutError> {
        let mut tables = Vec::with_capacity(BUILTIN.len());
        for b in BUILTIN {
            tables.push(LayoutTable::new(b.name, b.role, b.normal, b.shift)?);
        }
        Self::new(tables)
    }

    /// Build a registry from arbitrary tables, validating the invariants
    /// cross-layout lookups rely on: every table has the same key count,
    /// names are unique within a role, and each role has at least one table.
    pub fn new(tables: Vec<LayoutTable>) -> Result<Self, LayoutError> {
        let mut thai: Vec<LayoutTable> = Vec::new();
        let mut english: Vec<LayoutTable> = Vec::new();
        let mut key_count = None;

        for table in tables {
            let expected = *key_count.get_or_insert(table.key_count());
            if table.key_count() != expected {
                return Err(LayoutError::KeyCountMismatch {
                    name: table.name().to_string(),
                    len: table.key_count(),
                    expected,
                });
            }
            let bucket = match table.role() {
                Role::Thai => &mut thai,
                Role::English => &mut english,
            };
            if bucket.iter().any(|t| t.name() == table.name()) {
                return Err(LayoutError::DuplicateLayout {
                    role: table.role(),
                    name: table.name().to_string(),
                });
            }
            bucket.push(table);
        }

        if thai.is_empty() {
            return Err(LayoutError::EmptyRole(Role::Thai));
        }
        if english.is_empty() {
            return Err(LayoutError::EmptyRole(Role::English));
        }
        Ok(Self { thai, english })
    }

    pub fn get(&self, role: Role, name: &str) -> Result<&LayoutTable, LayoutError> {
        self.tables(role)
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| LayoutError::UnknownLayout {
                role,
                name: name.to_string(),
            })
    }

    /// Tables for one role, in registration order.
    pub fn tables(&self, role: Role) -> &[LayoutTable] {
        match role {
            Role::Thai => &self.thai,
            Role::English => &self.english,
        }
    }

    pub fn names(&self, role: Role) -> Vec<&'static str> {
        self.tables(role).iter().map(|t| t.name()).collect()
    }

    /// Key count shared by every table in the registry.
    pub fn key_count(&self) -> usize {
        self.thai[0].key_count()
    }
}
