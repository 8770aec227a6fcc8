//! Hash shortening for display.

/// Separator placed between the kept halves of a shortened hash.
pub const ELLIPSIS: &str = "...";

/// Shorten `hash` to `length / 2` leading and `length / 2` trailing
/// characters joined by `...`.
///
/// Hashes of at most `length` characters are returned unchanged. Lengths
/// are counted in `char`s, so multi-byte text is never split mid code point.
/// The halves use truncating division: an odd `length` drops one character
/// and a `length` below 2 keeps nothing but the ellipsis.
pub fn hash_shortener(hash: &str, length: usize) -> String {
    let total = hash.chars().count();
    if total <= length {
        return hash.to_string();
    }

    let half = length / 2;
    let first: String = hash.chars().take(half).collect();
    let last: String = hash.chars().skip(total - half).collect();

    let mut out = String::with_capacity(first.len() + ELLIPSIS.len() + last.len());
    out.push_str(&first);
    out.push_str(ELLIPSIS);
    out.push_str(&last);
    out
}
