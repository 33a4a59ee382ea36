//! Fix text typed with the wrong keyboard-layout selection.
//!
//! Each typed character is mapped back through its physical key position to
//! the character another layout would have produced on the same key. Thai
//! national layouts (Kedmanee, Pattachotee, Manoonchai) and Latin layouts
//! (Qwerty, Dvorak, Colemak) are built in.
//!
//! ```
//! use wronglang::{convert, Mode};
//!
//! let fixed = convert(Mode::ToThai, "Kedmanee", "Qwerty", "l;ylfu").unwrap();
//! assert_eq!(fixed, "สวัสดี");
//! ```
//!
//! Positional key-mapping only: no phonetic or dictionary translation, and
//! characters outside the layout tables pass through unchanged.

pub mod convert;
pub mod layout;
pub mod trace_init;

pub use convert::{convert, convert_text, Mode, ParseModeError};
pub use layout::{LayoutError, LayoutRegistry, LayoutTable, Role};
