use crate::types::{DirectiveMap, DirectiveValue};

/// Combine explicit sshd overrides with the derived allow lists.
///
/// Starts from a copy of `overrides`. `AllowUsers` and `AllowGroups` are set
/// from the subject lists when those are non-empty and replace any same-named
/// override outright; a replaced key keeps its original position in the
/// mapping. No other keys are touched.
pub fn merge(overrides: &DirectiveMap, users: &[String], groups: &[String]) -> DirectiveMap {
    let mut merged = overrides.clone();
    if !users.is_empty() {
        merged.set("AllowUsers", DirectiveValue::List(users.to_vec()));
    }
    if !groups.is_empty() {
        merged.set("AllowGroups", DirectiveValue::List(groups.to_vec()));
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_override_is_replaced_not_merged() {
        let overrides = DirectiveMap::from_iter([("AllowUsers", "x")]);
        let merged = merge(&overrides, &strings(&["a"]), &[]);

        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged.get("AllowUsers"),
            Some(&DirectiveValue::List(strings(&["a"])))
        );
    }

    #[test]
    fn test_empty_lists_leave_overrides_untouched() {
        let overrides = DirectiveMap::from_iter([("X11Forwarding", "no")]);
        let merged = merge(&overrides, &[], &[]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get("AllowUsers"), None);
        assert_eq!(merged.get("AllowGroups"), None);
    }

    #[test]
    fn test_appended_keys_follow_overrides() {
        let overrides = DirectiveMap::from_iter([("X11Forwarding", "no")]);
        let merged = merge(&overrides, &strings(&["alice"]), &strings(&["devs"]));

        let names: Vec<&String> = merged.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["X11Forwarding", "AllowUsers", "AllowGroups"]);
    }

    #[test]
    fn test_replaced_key_keeps_its_position() {
        let overrides = DirectiveMap::from_iter([("AllowUsers", "x"), ("X11Forwarding", "no")]);
        let merged = merge(&overrides, &strings(&["alice"]), &[]);

        let names: Vec<&String> = merged.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["AllowUsers", "X11Forwarding"]);
    }
}
