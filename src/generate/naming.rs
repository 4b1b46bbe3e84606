//! Name derivation for generated components.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// Characters stripped from the front of an id once the prefix is gone.
const SEPARATORS: &[char] = &['-', '_', '.', '=', '+', '#', '@', '!', '~', '*'];

/// Strip the configured prefix and any separator run that follows it.
///
/// `icon-home` with prefix `icon` becomes `home`. An id that does not start
/// with the prefix, or that is nothing but the prefix, is returned as is.
/// A remainder made only of separators is kept rather than emptied.
pub fn trim_icon_id(id: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return id.to_string();
    }

    match id.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => {
            let stripped = rest.trim_start_matches(SEPARATORS);
            if stripped.is_empty() {
                rest.to_string()
            } else {
                stripped.to_string()
            }
        }
        _ => id.to_string(),
    }
}

/// PascalCase component name for a trimmed id.
///
/// Identifiers cannot start with a digit, so such names get an `Icon`
/// prefix (`3d-box` → `Icon3dBox`).
pub fn component_name(trimmed_id: &str) -> String {
    let name = trimmed_id.to_upper_camel_case();
    match name.chars().next() {
        None => "Icon".to_string(),
        Some(c) if c.is_ascii_digit() => format!("Icon{}", name),
        Some(_) => name,
    }
}

/// camelCase JSX prop name for an SVG attribute (`fill-rule` → `fillRule`).
pub fn prop_name(attribute: &str) -> String {
    attribute.to_lower_camel_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_with_dash() {
        assert_eq!(trim_icon_id("icon-home", "icon"), "home");
    }

    #[test]
    fn test_trim_separator_runs() {
        assert_eq!(trim_icon_id("icon_-_arrow-left", "icon"), "arrow-left");
        assert_eq!(trim_icon_id("icon@#user", "icon"), "user");
    }

    #[test]
    fn test_trim_without_separator() {
        assert_eq!(trim_icon_id("iconhome", "icon"), "home");
    }

    #[test]
    fn test_trim_other_prefix_untouched() {
        assert_eq!(trim_icon_id("bi-home", "icon"), "bi-home");
    }

    #[test]
    fn test_trim_prefix_only() {
        assert_eq!(trim_icon_id("icon", "icon"), "icon");
        assert_eq!(trim_icon_id("icon--", "icon"), "--");
    }

    #[test]
    fn test_trim_empty_prefix() {
        assert_eq!(trim_icon_id("icon-home", ""), "icon-home");
    }

    #[test]
    fn test_component_name() {
        assert_eq!(component_name("home"), "Home");
        assert_eq!(component_name("arrow-left"), "ArrowLeft");
        assert_eq!(component_name("user_add"), "UserAdd");
    }

    #[test]
    fn test_component_name_leading_digit() {
        assert_eq!(component_name("3d"), "Icon3d");
    }

    #[test]
    fn test_prop_name() {
        assert_eq!(prop_name("d"), "d");
        assert_eq!(prop_name("fill-rule"), "fillRule");
        assert_eq!(prop_name("p-id"), "pId");
        assert_eq!(prop_name("fill-opacity"), "fillOpacity");
    }
}
