use super::*;
use crate::util::prop_paths::validate_path;

#[test]
fn default_catalog_has_no_empty_groups() {
    let groups = default_style_groups();
    assert!(!groups.is_empty());
    for group in &groups {
        assert!(!group.styles.is_empty(), "group {} has no styles", group.key);
    }
}

#[test]
fn declared_paths_are_unique_across_all_groups() {
    let groups = default_style_groups();
    let mut seen: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.styles.iter().map(|s| s.path.as_str()))
        .collect();
    let total = seen.len();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), total);
}

#[test]
fn declared_paths_are_valid_and_within_one_nesting_level() {
    for group in default_style_groups() {
        for declaration in group.styles {
            assert_eq!(validate_path(&declaration.path), Ok(()));
            assert!(declaration.path.split('.').count() <= 2, "{}", declaration.path);
        }
    }
}

#[test]
fn select_declarations_always_offer_their_default() {
    for group in default_style_groups() {
        for declaration in group.styles {
            match declaration.control {
                StyleControl::Select => {
                    let default = declaration
                        .default_value
                        .as_str()
                        .map(str::to_owned)
                        .unwrap_or_default();
                    assert!(declaration.options.contains(&default), "{}", declaration.path);
                }
                _ => assert!(declaration.options.is_empty(), "{}", declaration.path),
            }
        }
    }
}

#[test]
fn default_values_match_their_control_kind() {
    for group in default_style_groups() {
        for declaration in group.styles {
            match declaration.control {
                StyleControl::Number => assert!(declaration.default_value.is_number()),
                StyleControl::Size | StyleControl::Select | StyleControl::Color => {
                    assert!(declaration.default_value.is_string());
                }
            }
        }
    }
}

#[test]
fn catalog_round_trips_through_json_for_host_supplied_schemas() {
    let groups = default_style_groups();
    let encoded = serde_json::to_string(&groups).unwrap();
    let decoded: Vec<StyleGroup> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, groups);
}
