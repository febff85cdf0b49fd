//! Structural lints over a built [`Config`].
//!
//! The host loads whatever it is given and lets a later binding silently
//! shadow an earlier one, so consistency mistakes only show up as dead keys
//! or a session that fails to start. These checks catch them ahead of time;
//! the `tilecfg` binary and the test suite both run them.

use crate::Config;
use crate::floating::{self, Match};
use crate::groups::GroupDef;
use crate::hooks;
use crate::keys::{Action, KeyBinding};
use crate::layout::Layout;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Problem {
    /// Two bindings share a `(modifier set, key)` chord; the host keeps the
    /// later one.
    ShadowedBinding { key: String, modmask: u16 },
    /// A binding targets a group name that is not declared.
    UnknownGroup { key: String, group: String },
    /// The hidden-bar sentinel names no declared layout.
    MissingSentinelLayout { sentinel: &'static str },
    /// A stock floating rule was dropped or reordered.
    AlteredDefaultFloatRule { index: usize },
    /// A group does not contribute exactly its switch/move binding pair.
    UnpairedGroup { group: String, count: usize },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::ShadowedBinding { key, modmask } => write!(
                f,
                "duplicate binding for key '{}' (modmask {:#06x}); the later one shadows the earlier",
                key, modmask
            ),
            Problem::UnknownGroup { key, group } => write!(
                f,
                "binding on key '{}' targets undeclared group '{}'",
                key, group
            ),
            Problem::MissingSentinelLayout { sentinel } => write!(
                f,
                "bar-toggle hook expects a layout named '{}' but none is declared",
                sentinel
            ),
            Problem::AlteredDefaultFloatRule { index } => write!(
                f,
                "stock floating rule at index {} is missing or overridden",
                index
            ),
            Problem::UnpairedGroup { group, count } => write!(
                f,
                "group '{}' has {} derived bindings, expected exactly 2",
                group, count
            ),
        }
    }
}

/// Bindings whose chord repeats an earlier one.
pub fn shadowed_bindings(keys: &[KeyBinding]) -> Vec<Problem> {
    let mut seen: HashMap<(u16, &str), usize> = HashMap::new();
    let mut problems = Vec::new();
    for binding in keys {
        let count = seen.entry((binding.modmask(), binding.key.as_str())).or_insert(0);
        *count += 1;
        if *count == 2 {
            problems.push(Problem::ShadowedBinding {
                key: binding.key.clone(),
                modmask: binding.modmask(),
            });
        }
    }
    problems
}

/// Group names referenced by bindings must all be declared.
pub fn unknown_group_refs(keys: &[KeyBinding], groups: &[&str]) -> Vec<Problem> {
    let mut problems = Vec::new();
    for binding in keys {
        let target = match &binding.action {
            Action::SwitchToGroup(name) => Some(name),
            Action::MoveWindowToGroup { group, .. } => Some(group),
            _ => None,
        };
        if let Some(name) = target {
            if !groups.contains(&name.as_str()) {
                problems.push(Problem::UnknownGroup {
                    key: binding.key.clone(),
                    group: name.clone(),
                });
            }
        }
    }
    problems
}

/// The bar-toggle sentinel must name a declared layout under the host's
/// name normalization.
pub fn sentinel_layout_present(layouts: &[Layout]) -> Vec<Problem> {
    if layouts.iter().any(|l| l.name() == hooks::HIDDEN_BAR_LAYOUT) {
        Vec::new()
    } else {
        vec![Problem::MissingSentinelLayout {
            sentinel: hooks::HIDDEN_BAR_LAYOUT,
        }]
    }
}

/// The stock floating rules must survive verbatim as a prefix of the final
/// rule list.
pub fn default_float_rules_intact(rules: &[Match]) -> Vec<Problem> {
    let defaults = floating::default_float_rules();
    let mut problems = Vec::new();
    for (index, expected) in defaults.iter().enumerate() {
        if rules.get(index) != Some(expected) {
            problems.push(Problem::AlteredDefaultFloatRule { index });
        }
    }
    problems
}

/// Every seed definition must contribute one switch and one move binding.
pub fn group_binding_pairs(keys: &[KeyBinding], defs: &[GroupDef]) -> Vec<Problem> {
    let mut problems = Vec::new();
    for def in defs {
        let count = keys
            .iter()
            .filter(|b| match &b.action {
                Action::SwitchToGroup(name) => name == def.name,
                Action::MoveWindowToGroup { group, .. } => group == def.name,
                _ => false,
            })
            .count();
        if count != 2 {
            problems.push(Problem::UnpairedGroup {
                group: def.name.to_string(),
                count,
            });
        }
    }
    problems
}

pub fn run_all(config: &Config) -> Vec<Problem> {
    let mut problems = Vec::new();
    problems.extend(shadowed_bindings(&config.keys));
    problems.extend(unknown_group_refs(&config.keys, &config.groups));
    problems.extend(sentinel_layout_present(&config.layouts));
    problems.extend(default_float_rules_intact(&config.floating));
    problems.extend(group_binding_pairs(&config.keys, crate::groups::GROUPS));
    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{LayoutCommand, Mod};

    fn binding(mods: &[Mod], key: &str, action: Action) -> KeyBinding {
        KeyBinding::new(mods, key, action, "")
    }

    #[test]
    fn detects_a_shadowed_chord() {
        let keys = vec![
            binding(&[Mod::Alt], "n", Action::Layout(LayoutCommand::Normalize)),
            binding(&[Mod::Alt], "n", Action::Layout(LayoutCommand::Normalize)),
        ];
        let problems = shadowed_bindings(&keys);
        assert_eq!(problems.len(), 1);
        assert!(matches!(&problems[0], Problem::ShadowedBinding { key, .. } if key == "n"));
    }

    #[test]
    fn same_key_different_modifiers_is_fine() {
        let keys = vec![
            binding(&[Mod::Alt], "m", Action::Layout(LayoutCommand::Shrink)),
            binding(&[Mod::Super], "m", Action::Spawn("firefox".into())),
        ];
        assert!(shadowed_bindings(&keys).is_empty());
    }

    #[test]
    fn a_triplicate_is_reported_once() {
        let keys = vec![
            binding(&[Mod::Alt], "x", Action::NextLayout),
            binding(&[Mod::Alt], "x", Action::NextLayout),
            binding(&[Mod::Alt], "x", Action::NextLayout),
        ];
        assert_eq!(shadowed_bindings(&keys).len(), 1);
    }

    #[test]
    fn detects_a_dangling_group_reference() {
        let keys = vec![binding(
            &[Mod::Alt],
            "5",
            Action::SwitchToGroup("Games".into()),
        )];
        let problems = unknown_group_refs(&keys, &["Code", "Music"]);
        assert_eq!(problems.len(), 1);
        assert!(matches!(&problems[0], Problem::UnknownGroup { group, .. } if group == "Games"));
    }

    #[test]
    fn detects_a_missing_sentinel_layout() {
        let layouts = vec![crate::layout::layouts()[0].clone()];
        assert_eq!(
            sentinel_layout_present(&layouts),
            vec![Problem::MissingSentinelLayout { sentinel: "max" }]
        );
    }

    #[test]
    fn detects_a_dropped_default_float_rule() {
        let mut rules = floating::float_rules();
        rules.remove(0);
        assert!(!default_float_rules_intact(&rules).is_empty());
    }

    #[test]
    fn detects_an_unpaired_group() {
        let defs = &[GroupDef { number: "1", name: "Code" }];
        let keys = vec![binding(
            &[Mod::Alt],
            "1",
            Action::SwitchToGroup("Code".into()),
        )];
        let problems = group_binding_pairs(&keys, defs);
        assert_eq!(
            problems,
            vec![Problem::UnpairedGroup { group: "Code".into(), count: 1 }]
        );
    }

    #[test]
    fn the_shipped_config_is_clean() {
        assert_eq!(run_all(&Config::build()), Vec::new());
    }
}
