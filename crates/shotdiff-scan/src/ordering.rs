use std::cmp::Ordering;

/// Orders file names the way a human-facing listing would. Characters rank
/// as whitespace and punctuation first, then digits, then letters; letters
/// compare case-insensitively, lowercase sorts before uppercase on a tie, and
/// raw byte order breaks any remaining tie so the order stays total.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase).map(collation_key);
    let folded_b = b.chars().flat_map(char::to_lowercase).map(collation_key);

    folded_a
        .cmp(folded_b)
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn collation_key(c: char) -> (u8, char) {
    let class = if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    };
    (class, c)
}
