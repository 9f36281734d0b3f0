//! Lexical identifier predicate.

use super::constants::KEYWORDS;

/// Returns true if `text` is a legal identifier of the token grammar.
///
/// Uses Unicode Standard Annex #31 rules: the first character must be `_` or
/// XID_Start, the rest XID_Continue. Reserved keywords are not identifiers.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if first != '_' && !unicode_ident::is_xid_start(first) {
        return false;
    }
    if !chars.all(unicode_ident::is_xid_continue) {
        return false;
    }
    !KEYWORDS.contains(&text)
}
