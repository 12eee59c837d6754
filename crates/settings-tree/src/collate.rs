//! Locale-aware string ordering.
//!
//! Approximates the Unicode root collation without pulling in locale data.
//! Strings are NFD-decomposed so an accented letter splits into its base
//! letter and combining marks:
//!
//! 1. Primary: base characters only; whitespace/control < punctuation and
//!    symbols < digits < letters, letters compared case-insensitively.
//! 2. Secondary: combining marks per base character, unaccented first.
//! 3. Tertiary: lowercase before uppercase at the first position that only
//!    differs in case.
//! 4. Code-point order, so only identical strings compare equal.
//!
//! The result is a total order and independent of the host locale.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// ASCII punctuation and symbols in root collation order.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Character class, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Symbol,
    Digit,
    Letter,
}

fn primary_key(c: char) -> (CharClass, u32) {
    if c.is_whitespace() || c.is_control() {
        return (CharClass::Space, c as u32);
    }
    if let Some(pos) = PUNCTUATION_ORDER.find(c) {
        return (CharClass::Symbol, pos as u32);
    }
    if c.is_ascii_punctuation() || (!c.is_alphanumeric() && !c.is_ascii()) {
        return (CharClass::Symbol, 0x100 + c as u32);
    }
    if c.is_numeric() {
        return (CharClass::Digit, c as u32);
    }
    (CharClass::Letter, fold(c) as u32)
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// A base character and the combining marks attached to it.
struct CollationUnit {
    base: char,
    marks: Vec<char>,
}

fn decompose(s: &str) -> Vec<CollationUnit> {
    let mut units: Vec<CollationUnit> = Vec::new();
    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = units.last_mut() {
                last.marks.push(c);
                continue;
            }
        }
        units.push(CollationUnit {
            base: c,
            marks: Vec::new(),
        });
    }
    units
}

/// Compare two strings the way a settings browser lists them.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let ua = decompose(a);
    let ub = decompose(b);

    let primary = ua
        .iter()
        .map(|u| primary_key(u.base))
        .cmp(ub.iter().map(|u| primary_key(u.base)));
    if primary != Ordering::Equal {
        return primary;
    }

    // Same primary sequence means the same number of units.
    let secondary = ua.iter().map(|u| &u.marks).cmp(ub.iter().map(|u| &u.marks));
    if secondary != Ordering::Equal {
        return secondary;
    }

    let tertiary = ua
        .iter()
        .map(|u| u.base.is_uppercase())
        .cmp(ub.iter().map(|u| u.base.is_uppercase()));
    if tertiary != Ordering::Equal {
        return tertiary;
    }

    a.cmp(b)
}
