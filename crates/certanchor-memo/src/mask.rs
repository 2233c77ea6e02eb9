//! # Privacy Masking
//!
//! Partial redaction of personal fields before public anchoring. Masking
//! is irreversible: the memo carries enough of the name and email for a
//! human to recognize their own certificate, and nothing more.
//!
//! All slicing here is by `char`, never by byte — participant names are
//! routinely accented.

/// Mask a participant name.
///
/// First two characters of the first whitespace-separated token, a literal
/// `****`, then the last two characters of the last token. A blank name
/// masks to the empty string.
///
/// `"David Richard"` → `"Da****rd"`.
pub fn mask_name(full_name: &str) -> String {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
        return String::new();
    };

    let head: String = first.chars().take(2).collect();
    let tail_rev: Vec<char> = last.chars().rev().take(2).collect();
    let tail: String = tail_rev.into_iter().rev().collect();
    format!("{head}****{tail}")
}

/// Mask an email address.
///
/// The local part keeps its first two characters, a `*`, and its last
/// character when longer than three characters; otherwise just the first
/// character and a `*`. The domain keeps the first character of its first
/// label, `**`, and its final label. An address with no `@` masks to the
/// literal `"mascarado"`.
///
/// `"davidrichard.ms@gmail.com"` → `"da*s@g**com"`.
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return "mascarado".to_string();
    };

    let local_chars: Vec<char> = local.chars().collect();
    let masked_local = if local_chars.len() > 3 {
        let head: String = local_chars.iter().take(2).collect();
        let tail = local_chars[local_chars.len() - 1];
        format!("{head}*{tail}")
    } else {
        let head: String = local_chars.iter().take(1).collect();
        format!("{head}*")
    };

    let labels: Vec<&str> = domain.split('.').collect();
    let initial: String = labels
        .first()
        .map(|label| label.chars().take(1).collect())
        .unwrap_or_default();
    let final_label = labels.last().copied().unwrap_or_default();

    format!("{masked_local}@{initial}**{final_label}")
}
