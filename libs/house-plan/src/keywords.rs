//! # Reserved Names
//!
//! Parameter names the engine recognises even when nobody supplies a
//! handler for them. A reserved name that stays unresolved gets a no-op
//! handler and a warning; any other unresolved name is dropped silently.
//!
//! Two independent sets make up the reserved names: the domain vocabulary
//! below and the names exported by the [helper library](crate::helpers).

use crate::helpers;

/// Domain vocabulary of house-plan collaborators.
pub const DOMAIN_VOCABULARY: &[&str] = &[
    "section",
    "stud",
    "plywood",
    "door",
    "trim",
    "shade",
    "twinWall",
    "insulation",
    "flooring",
    "tilted",
    "sloped",
    "batten",
];

/// True for a name in the domain vocabulary.
pub fn is_domain_word(name: &str) -> bool {
    DOMAIN_VOCABULARY.iter().any(|word| *word == name)
}

/// True for a domain word or a helper name.
///
/// ```rust
/// use house_plan::keywords::is_reserved;
///
/// assert!(is_reserved("stud"));
/// assert!(is_reserved("verticalSlice"));
/// assert!(!is_reserved("length"));
/// ```
pub fn is_reserved(name: &str) -> bool {
    is_domain_word(name) || helpers::is_helper(name)
}
