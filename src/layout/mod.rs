mod registry;
mod table;
mod tables;

pub use registry::LayoutRegistry;
pub use table::{LayoutTable, Role};

/// Unified error type for layout lookup and registry construction.
///
/// `UnknownLayout` is the only variant the conversion API can surface; the
/// rest reject malformed table sets at registry build time, before any
/// positional lookup can silently mis-align.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("unknown {role} layout: {name}")]
    UnknownLayout { role: Role, name: String },

    #[error("layout {name}: normal row has {normal} keys, shift row has {shift}")]
    RowLengthMismatch {
        name: String,
        normal: usize,
        shift: usize,
    },

    #[error("layout {name} has {len} keys, registry expects {expected}")]
    KeyCountMismatch {
        name: String,
        len: usize,
        expected: usize,
    },

    #[error("duplicate {role} layout: {name}")]
    DuplicateLayout { role: Role, name: String },

    #[error("no {0} layouts registered")]
    EmptyRole(Role),
}
