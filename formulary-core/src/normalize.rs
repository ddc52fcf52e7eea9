//! Digit to subscript normalization for chemical formulas

/// Subscript glyphs indexed by the ASCII digit they replace
const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Map a single character to its subscript form, if it is an ASCII digit
fn subscript_char(c: char) -> char {
    match c {
        '0'..='9' => SUBSCRIPT_DIGITS[(c as u8 - b'0') as usize],
        _ => c,
    }
}

/// Replace every ASCII digit in `formula` with its Unicode subscript (e.g. "H2O" -> "H₂O").
///
/// Each character is mapped independently in a single pass, so output glyphs
/// are never matched again and multi-digit counts such as "12" become "₁₂".
pub fn to_subscript(formula: &str) -> String {
    formula.chars().map(subscript_char).collect()
}
