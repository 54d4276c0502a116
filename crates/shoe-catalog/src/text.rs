//! Card label text.

/// `noun` when `count == 1`, otherwise `noun` + "s".
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}

/// Count followed by the pluralized noun, e.g. "3 Colors".
pub fn count_label(noun: &str, count: u32) -> String {
    format!("{} {}", count, pluralize(noun, count))
}
