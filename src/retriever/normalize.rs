/// Ordered (substring, label) rules. The first rule whose substring occurs in
/// the lowercased name wins, so specific needles must precede general ones
/// ("light rum" before "rum"). New synonyms are appended, never reordered.
pub const NORMALIZATION_RULES: &[(&str, &str)] = &[
    ("lemon peel", "lemon peel"),
    ("lemonade", "lemonade"),
    ("lemon", "lemon"),
    ("lime", "lime"),
    ("sugar", "sugar"),
    ("light rum", "light rum"),
    ("rum", "rum"),
];

/// Map an ingredient name to its coarse canonical label.
///
/// Names that match no rule fall back to their lowercased, trimmed form.
pub fn normalize_ingredient(name: &str) -> String {
    let name_lower = name.trim().to_lowercase();

    NORMALIZATION_RULES
        .iter()
        .find(|(needle, _)| name_lower.contains(needle))
        .map(|(_, label)| (*label).to_string())
        .unwrap_or(name_lower)
}
