use crate::types::{DomainAppendOp, SettingKind};

/// Parse the identity-domain catalogue supplied by the external fact
/// provider: strip all whitespace, split on commas, drop empty segments.
///
/// Total over any input; an empty or all-whitespace catalogue yields zero
/// domains.
pub fn parse_catalogue(catalogue: &str) -> Vec<String> {
    let stripped: String = catalogue.chars().filter(|c| !c.is_whitespace()).collect();
    stripped
        .split(',')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fan the users/groups pair out across every known identity domain.
///
/// For each domain in catalogue order: one `AllowUsers` append if `users` is
/// non-empty, then one `AllowGroups` append if `groups` is non-empty.
pub fn expand(catalogue: &str, users: &[String], groups: &[String]) -> Vec<DomainAppendOp> {
    let mut ops = Vec::new();
    for domain in parse_catalogue(catalogue) {
        if !users.is_empty() {
            ops.push(DomainAppendOp {
                domain: domain.clone(),
                setting: SettingKind::AllowUsers,
                items: users.to_vec(),
            });
        }
        if !groups.is_empty() {
            ops.push(DomainAppendOp {
                domain: domain.clone(),
                setting: SettingKind::AllowGroups,
                items: groups.to_vec(),
            });
        }
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[parameterized(
        plain = { "dom1,dom2", &["dom1", "dom2"] },
        spaced = { "dom1, dom2", &["dom1", "dom2"] },
        inner_whitespace = { "d om1,\tdom2 ", &["dom1", "dom2"] },
        trailing_comma = { "dom1,", &["dom1"] },
        empty = { "", &[] },
        whitespace_only = { "  \t", &[] },
        stray_commas = { ",,", &[] },
    )]
    fn test_parse_catalogue(catalogue: &str, expected: &[&str]) {
        assert_eq!(parse_catalogue(catalogue), expected);
    }

    #[test]
    fn test_expand_users_only() {
        let ops = expand("dom1, dom2", &strings(&["u"]), &[]);
        assert_eq!(
            ops,
            vec![
                DomainAppendOp {
                    domain: "dom1".to_string(),
                    setting: SettingKind::AllowUsers,
                    items: strings(&["u"]),
                },
                DomainAppendOp {
                    domain: "dom2".to_string(),
                    setting: SettingKind::AllowUsers,
                    items: strings(&["u"]),
                },
            ]
        );
    }

    #[test]
    fn test_expand_users_then_groups_per_domain() {
        let ops = expand("dom1,dom2", &strings(&["u"]), &strings(&["g"]));

        let keys: Vec<(&str, SettingKind)> = ops
            .iter()
            .map(|op| (op.domain.as_str(), op.setting))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("dom1", SettingKind::AllowUsers),
                ("dom1", SettingKind::AllowGroups),
                ("dom2", SettingKind::AllowUsers),
                ("dom2", SettingKind::AllowGroups),
            ]
        );
    }

    #[test]
    fn test_expand_empty_catalogue_is_not_an_error() {
        assert!(expand("", &strings(&["u"]), &strings(&["g"])).is_empty());
    }
}
