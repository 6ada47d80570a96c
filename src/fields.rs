// Character info fields written the old way: an all caps name, a colon, the info, then a semicolon.
// e.g. "APPEARANCE: long pointy ears, dark hair, lithe and unsettlingly tall;"
// A last field without its closing semicolon is not captured.
use once_cell::sync::OnceCell;
use regex::Regex;
use std::collections::BTreeMap;

fn field_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceCell<Option<Regex>> = OnceCell::new();
    PATTERN
        .get_or_init(|| Regex::new(r"([A-Z ]+):(.[^;]*);").ok())
        .as_ref()
}

/// Every `FIELD: info;` block in the entry, keyed by trimmed field name. Later duplicates win.
pub fn character_fields(world_info_entry: &str) -> BTreeMap<String, String> {
    let Some(pattern) = field_pattern() else {
        return BTreeMap::new();
    };

    pattern
        .captures_iter(world_info_entry)
        .map(|captures| {
            (
                captures[1].trim().to_string(),
                captures[2].trim().to_string(),
            )
        })
        .collect()
}

// A single field's info, if present.
pub fn character_field(world_info_entry: &str, field: &str) -> Option<String> {
    character_fields(world_info_entry).remove(field)
}
