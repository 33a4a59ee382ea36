//! Built-in layout data.
//!
//! Each row covers the 47 character keys of a full ANSI board, in physical
//! key order: number row (backtick through equals), then the Q, A and Z rows
//! including the bracket, backslash, quote and slash keys. Thai national
//! layouts assign a character to every one of those positions, so Latin-side
//! tables carry their full 47 as well to keep cross-layout indices aligned.

use super::Role;

pub(crate) struct BuiltinLayout {
    pub name: &'static str,
    pub role: Role,
    pub normal: &'static str,
    pub shift: &'static str,
}

pub(crate) const BUILTIN: &[BuiltinLayout] = &[
    BuiltinLayout {
        name: "Kedmanee",
        role: Role::Thai,
        normal: "_ๅ/-ภถุึคตจขชๆไำพะัีรนยบลฃฟหกดเ้่าสวงผปแอิืทมใฝ",
        shift: "%+๑๒๓๔ู฿๕๖๗๘๙๐\"ฎฑธํ๊ณฯญฐ,ฅฤฆฏโฌ็๋ษศซ.()ฉฮฺ์?ฒฬฦ",
    },
    BuiltinLayout {
        name: "Pattachotee",
        role: Role::Thai,
        normal: "_=๒๓๔๕ู๗๘๙๐๑๖็ตยอร่ดมวแใฌฃ้ทงกัีานเไขบปลหิคสะจพ",
        shift: "฿+\"/,?ุ_.()-%๊ฤๆญษึฝซถฒฯฦํ๋ธำณ์ืผชโฆฑฎฏฐภัศฮฟฉฬ",
    },
    BuiltinLayout {
        name: "Manoonchai",
        role: Role::Thai,
        normal: "`1234567890-=ใตหลสปักิบ็ฬฯงเรนมอา่้วืุไทยจคีดะู",
        shift: "~!@#$%^&*()_+ฒฏซญฟฉึธฐฎฆฑฌษถแชพผำขโภ\"ฤฝๆณ๊๋์ศฮ?",
    },
    BuiltinLayout {
        name: "Qwerty",
        role: Role::English,
        normal: "`1234567890-=qwertyuiop[]\\asdfghjkl;'zxcvbnm,./",
        shift: "~!@#$%^&*()_+QWERTYUIOP{}|ASDFGHJKL:\"ZXCVBNM<>?",
    },
    BuiltinLayout {
        name: "Dvorak",
        role: Role::English,
        normal: "`1234567890[]',.pyfgcrl/=\\aoeuidhtns-;qjkxbmwvz",
        shift: "~!@#$%^&*(){}\"<>PYFGCRL?+|AOEUIDHTNS_:QJKXBMWVZ",
    },
    BuiltinLayout {
        name: "Colemak",
        role: Role::English,
        normal: "`1234567890-=qwfpgjluy;[]\\arstdhneio'zxcvbkm,./",
        shift: "~!@#$%^&*()_+QWFPGJLUY:{}|ARSTDHNEIO\"ZXCVBKM<>?",
    },
];
