//! Name derivations used when filling stub tokens.
//!
//! ## Examples
//!
//! | Input           | Function               | Output           |
//! |-----------------|------------------------|------------------|
//! | `"user"`        | `capitalize`           | `"User"`         |
//! | `"category"`    | `pluralize`            | `"categories"`   |
//! | `"UserEntity"`  | `strip_entity_suffix`  | `"User"`         |
//! | `"user"`        | `seeder_class_name`    | `"UserSeeder"`   |

const ENTITY_SUFFIX: &str = "Entity";
const SEEDER_SUFFIX: &str = "Seeder";

/// Uppercase the first character, leave the rest unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// English plural of a lowercase noun, good enough for table names.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    if let Some(stem) = word.strip_suffix('y') {
        let before = stem.chars().last();
        if before.is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }

    if ["s", "x", "z", "ch", "sh"].iter().any(|e| word.ends_with(e)) {
        return format!("{word}es");
    }

    format!("{word}s")
}

/// `"UserEntity"` → `"User"`. A bare `"Entity"` is kept as-is.
pub fn strip_entity_suffix(name: &str) -> &str {
    match name.strip_suffix(ENTITY_SUFFIX) {
        Some(stem) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Capitalised seeder class name, with `Seeder` appended unless present.
pub fn seeder_class_name(name: &str) -> String {
    let capitalized = capitalize(name);
    if capitalized.ends_with(SEEDER_SUFFIX) {
        capitalized
    } else {
        format!("{capitalized}{SEEDER_SUFFIX}")
    }
}
