//! Naming helpers for C entities and C++ identifiers.

/// C++ keywords that cannot be used as class or group names.
pub const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "asm", "auto", "bool", "break", "case", "catch", "char",
    "class", "const", "const_cast", "constexpr", "continue", "decltype", "default", "delete",
    "do", "double", "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false",
    "float", "for", "friend", "goto", "if", "inline", "int", "long", "mutable", "namespace",
    "new", "noexcept", "not", "nullptr", "operator", "or", "private", "protected", "public",
    "register", "reinterpret_cast", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "throw", "true",
    "try", "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual", "void",
    "volatile", "while",
];

/// Check if a name is a C++ keyword
pub fn is_cpp_keyword(name: &str) -> bool {
    CPP_KEYWORDS.contains(&name)
}

/// Extract the entity prefix of a C type name.
///
/// The prefix is the longest leading run of `[A-Za-z0-9]+_` segments, so
/// `lv_timer_t` gives `lv_timer_` and `lv_draw_mask_line_param_t` gives
/// `lv_draw_mask_line_param_`. Returns `None` when the name does not start
/// with such a segment.
pub fn entity_prefix(type_name: &str) -> Option<&str> {
    let bytes = type_name.as_bytes();
    let mut end = 0;
    let mut pos = 0;

    loop {
        let seg_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphanumeric() {
            pos += 1;
        }
        if pos == seg_start || pos >= bytes.len() || bytes[pos] != b'_' {
            break;
        }
        pos += 1;
        end = pos;
    }

    if end == 0 { None } else { Some(&type_name[..end]) }
}

/// Validate that a name is a usable C/C++ identifier.
///
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if is_cpp_keyword(name) {
        return Some("name is a C++ keyword");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_prefix() {
        assert_eq!(entity_prefix("lv_timer_t"), Some("lv_timer_"));
        assert_eq!(entity_prefix("lv_obj_t"), Some("lv_obj_"));
        assert_eq!(
            entity_prefix("lv_draw_mask_line_param_t"),
            Some("lv_draw_mask_line_param_")
        );
        assert_eq!(entity_prefix("uint32_t"), Some("uint32_"));
    }

    #[test]
    fn test_entity_prefix_absent() {
        assert_eq!(entity_prefix("char"), None);
        assert_eq!(entity_prefix("void"), None);
        assert_eq!(entity_prefix(""), None);
        assert_eq!(entity_prefix("_private_t"), None);
    }

    #[test]
    fn test_entity_prefix_trailing_underscore() {
        assert_eq!(entity_prefix("foo_"), Some("foo_"));
        assert_eq!(entity_prefix("foo__bar"), Some("foo_"));
    }

    #[test]
    fn test_validate_identifier() {
        assert_eq!(validate_identifier("Timer"), None);
        assert_eq!(validate_identifier("_misc"), None);
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1timer").is_some());
        assert!(validate_identifier("my-class").is_some());
        assert!(validate_identifier("class").is_some());
    }
}
