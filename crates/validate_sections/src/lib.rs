// crates/validate_sections/src/lib.rs

/// Section headings every migration prompt is expected to carry.
pub const REQUIRED_SECTIONS: [&str; 5] = [
    "Migration Instructions",
    "Phase 1",
    "Phase 2",
    "Phase 3",
    "Final Checklist",
];

/// Returns the required sections that do not appear in `content`.
///
/// The check is literal, case-sensitive substring containment with no
/// normalization. An empty result means every section was found.
pub fn missing_sections(content: &str) -> Vec<&'static str> {
    REQUIRED_SECTIONS
        .iter()
        .copied()
        .filter(|section| !content.contains(section))
        .collect()
}
