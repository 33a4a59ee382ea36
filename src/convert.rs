use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::layout::{LayoutError, LayoutRegistry, LayoutTable, Role};

/// Conversion mode selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// The user typed on the Latin layout while meaning to type Thai.
    ToThai,
    /// The user typed on the Thai layout while meaning to type English.
    ToEnglish,
    /// Toggle the shift state of each character, Thai table only.
    Unshift,
}

impl Mode {
    /// Display label, matching the mode names shown to end users.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::ToThai => "To Thai",
            Mode::ToEnglish => "To English",
            Mode::Unshift => "Unshift",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode: {0} (expected to-thai, to-english or unshift)")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    /// Accepts the display labels and their kebab-case forms,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "to thai" | "to-thai" | "tothai" => Ok(Mode::ToThai),
            "to english" | "to-english" | "toenglish" => Ok(Mode::ToEnglish),
            "unshift" => Ok(Mode::Unshift),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Convert `text` using the built-in layout registry.
///
/// Both layout names must exist in their role's namespace regardless of
/// mode; `Unshift` only touches the Thai side but still validates both
/// selections. The only failure is [`LayoutError::UnknownLayout`], raised
/// before any conversion work.
pub fn convert(
    mode: Mode,
    thai_layout: &str,
    english_layout: &str,
    text: &str,
) -> Result<String, LayoutError> {
    let registry = LayoutRegistry::global();
    let thai = registry.get(Role::Thai, thai_layout)?;
    let english = registry.get(Role::English, english_layout)?;
    Ok(convert_text(mode, thai, english, text))
}

/// Convert `text` with already-resolved tables.
///
/// Pure function: one output character per input character, left to right.
/// Characters absent from the relevant rows pass through unchanged, so
/// arbitrary free text (digits, punctuation, emoji) survives conversion.
pub fn convert_text(mode: Mode, thai: &LayoutTable, english: &LayoutTable, text: &str) -> String {
    let _span = debug_span!(
        "convert_text",
        mode = %mode,
        thai = thai.name(),
        english = english.name()
    )
    .entered();

    let out: String = text
        .chars()
        .map(|c| match mode {
            Mode::ToThai => map_positional(english, thai, c),
            Mode::ToEnglish => map_positional(thai, english, c),
            Mode::Unshift => thai.toggle_shift(c).unwrap_or(c),
        })
        .collect();

    debug!(chars = text.chars().count(), "converted");
    out
}

/// Positional lookup: find `c` in `from`'s combined sequence and emit the
/// character at the same index of `to`'s combined sequence. The registry
/// guarantees both sequences have the same length, so a found index is
/// always in range; `unwrap_or` covers tables paired outside a registry.
fn map_positional(from: &LayoutTable, to: &LayoutTable, c: char) -> char {
    from.combined_position(c)
        .and_then(|i| to.combined_char(i))
        .unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [Mode; 3] = [Mode::ToThai, Mode::ToEnglish, Mode::Unshift];

    fn kedmanee() -> &'static LayoutTable {
        LayoutRegistry::global().get(Role::Thai, "Kedmanee").unwrap()
    }

    fn qwerty() -> &'static LayoutTable {
        LayoutRegistry::global().get(Role::English, "Qwerty").unwrap()
    }

    #[test]
    fn test_to_thai_kedmanee_qwerty() {
        assert_eq!(convert(Mode::ToThai, "Kedmanee", "Qwerty", "dbd").unwrap(), "กิก");
        assert_eq!(
            convert(Mode::ToThai, "Kedmanee", "Qwerty", "l;ylfu").unwrap(),
            "สวัสดี"
        );
        assert_eq!(
            convert(Mode::ToThai, "Kedmanee", "Qwerty", "hello").unwrap(),
            "้ำสสน"
        );
    }

    #[test]
    fn test_to_thai_shifted_input() {
        // 'H' sits on the shift half of the combined sequence, so it maps to
        // the Kedmanee shift row; '!' is not on the Kedmanee board at all and
        // the Qwerty index lands on '+' there.
        assert_eq!(
            convert(Mode::ToThai, "Kedmanee", "Qwerty", "Hello!").unwrap(),
            "็ำสสน+"
        );
    }

    #[test]
    fn test_to_english_kedmanee_qwerty() {
        assert_eq!(
            convert(Mode::ToEnglish, "Kedmanee", "Qwerty", "สวัสดี").unwrap(),
            "l;ylfu"
        );
    }

    #[test]
    fn test_round_trip() {
        for text in ["hello", "dbd", "The Quick Brown Fox?"] {
            let thai = convert(Mode::ToThai, "Kedmanee", "Qwerty", text).unwrap();
            let back = convert(Mode::ToEnglish, "Kedmanee", "Qwerty", &thai).unwrap();
            assert_eq!(back, text);
        }
    }

    #[test]
    fn test_round_trip_other_layouts() {
        assert_eq!(convert(Mode::ToThai, "Kedmanee", "Dvorak", "dbd").unwrap(), "้ื้");
        let text = "pyfgcrl";
        let thai = convert(Mode::ToThai, "Manoonchai", "Dvorak", text).unwrap();
        let back = convert(Mode::ToEnglish, "Manoonchai", "Dvorak", &thai).unwrap();
        assert_eq!(back, text);
    }

    #[test]
    fn test_unshift_swaps_rows() {
        // ก is Kedmanee normal row, ฏ its shift counterpart on the same key.
        assert_eq!(convert(Mode::Unshift, "Kedmanee", "Qwerty", "ก").unwrap(), "ฏ");
        assert_eq!(convert(Mode::Unshift, "Kedmanee", "Qwerty", "ฏ").unwrap(), "ก");
        assert_eq!(convert(Mode::Unshift, "Kedmanee", "Qwerty", "กิก").unwrap(), "ฏฺฏ");
    }

    #[test]
    fn test_unshift_involution() {
        let text = "กิ่นอยู่?ท";
        let once = convert(Mode::Unshift, "Kedmanee", "Qwerty", text).unwrap();
        let twice = convert(Mode::Unshift, "Kedmanee", "Qwerty", &once).unwrap();
        assert_eq!(twice, text);
    }

    #[test]
    fn test_unshift_ignores_english_side() {
        // 'a' is on the Qwerty board but Unshift only consults the Thai table.
        assert_eq!(
            convert(Mode::Unshift, "Kedmanee", "Qwerty", "a1 ?").unwrap(),
            "a1 ท"
        );
    }

    #[test]
    fn test_pattachotee_duplicate_tie_breaks() {
        // '_' appears on both Pattachotee rows (normal index 0, shift index
        // 7). Unshift resolves via the normal row, so it becomes ฿, and a
        // positional lookup resolves via the shift row, so it maps to Qwerty
        // shift index 7, '&'.
        assert_eq!(
            convert(Mode::Unshift, "Pattachotee", "Qwerty", "_").unwrap(),
            "฿"
        );
        assert_eq!(
            convert(Mode::ToEnglish, "Pattachotee", "Qwerty", "_").unwrap(),
            "&"
        );
    }

    #[test]
    fn test_pass_through_unknown_chars() {
        for mode in MODES {
            assert_eq!(
                convert(mode, "Kedmanee", "Qwerty", "😀\n\t").unwrap(),
                "😀\n\t"
            );
        }
        // Thai digits are not on the Qwerty board, so ToEnglish from a board
        // that lacks them passes them through.
        assert_eq!(
            convert(Mode::ToThai, "Kedmanee", "Qwerty", "๕๖").unwrap(),
            "๕๖"
        );
    }

    #[test]
    fn test_length_invariance() {
        let inputs = ["", "dbd", "Hello, world! 123", "สวัสดีครับ", "mixed ไทย 😀"];
        for mode in MODES {
            for text in inputs {
                let out = convert(mode, "Kedmanee", "Qwerty", text).unwrap();
                assert_eq!(
                    out.chars().count(),
                    text.chars().count(),
                    "{mode} on {text:?}"
                );
            }
        }
    }

    #[test]
    fn test_empty_input() {
        for mode in MODES {
            assert_eq!(convert(mode, "Kedmanee", "Qwerty", "").unwrap(), "");
        }
    }

    #[test]
    fn test_unknown_layout_fails() {
        for mode in MODES {
            assert_eq!(
                convert(mode, "Kedmanee", "Azerty", "abc").unwrap_err(),
                LayoutError::UnknownLayout {
                    role: Role::English,
                    name: "Azerty".to_string(),
                }
            );
        }
        // Role namespaces are disjoint: a Latin name is unknown on the Thai
        // side even though it exists in the registry.
        assert!(convert(Mode::Unshift, "Qwerty", "Qwerty", "abc").is_err());
    }

    #[test]
    fn test_convert_text_is_pure_per_char() {
        let thai = kedmanee();
        let english = qwerty();
        let whole = convert_text(Mode::ToThai, thai, english, "dbd");
        let per_char: String = "dbd"
            .chars()
            .map(|c| convert_text(Mode::ToThai, thai, english, &c.to_string()))
            .collect();
        assert_eq!(whole, per_char);
    }

    #[test]
    fn test_mode_labels_and_parsing() {
        assert_eq!(Mode::ToThai.label(), "To Thai");
        assert_eq!(Mode::ToEnglish.to_string(), "To English");
        assert_eq!("To Thai".parse::<Mode>().unwrap(), Mode::ToThai);
        assert_eq!("to-english".parse::<Mode>().unwrap(), Mode::ToEnglish);
        assert_eq!("UNSHIFT".parse::<Mode>().unwrap(), Mode::Unshift);
        assert!("transliterate".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_serde_kebab() {
        assert_eq!(serde_json::to_string(&Mode::ToThai).unwrap(), "\"to-thai\"");
        assert_eq!(
            serde_json::from_str::<Mode>("\"to-english\"").unwrap(),
            Mode::ToEnglish
        );
    }
}
