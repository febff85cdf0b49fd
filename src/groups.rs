//! Group (workspace) definitions and the bindings derived from them.

use crate::keys::{Action, KeyBinding, MOD, Mod};

/// A numeric label paired with a group name. Each definition yields one
/// workspace plus a switch-to and a move-window-to binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupDef {
    pub number: &'static str,
    pub name: &'static str,
}

pub const GROUPS: &[GroupDef] = &[
    GroupDef { number: "1", name: "Code" },
    GroupDef { number: "2", name: "Music" },
    GroupDef { number: "3", name: "Browser" },
    GroupDef { number: "4", name: "Terminal" },
];

/// Group names in declaration order; the host materializes one workspace per
/// entry.
pub fn groups() -> Vec<&'static str> {
    GROUPS.iter().map(|def| def.name).collect()
}

/// Exactly two bindings per definition: `mod+<number>` switches to the group
/// and `mod+shift+<number>` moves the focused window there and follows it.
pub fn group_bindings(defs: &[GroupDef]) -> Vec<KeyBinding> {
    let mut bindings = Vec::with_capacity(defs.len() * 2);
    for def in defs {
        bindings.push(KeyBinding::new(
            &[MOD],
            def.number,
            Action::SwitchToGroup(def.name.to_string()),
            &format!("Switch to group {}", def.name),
        ));
        bindings.push(KeyBinding::new(
            &[MOD, Mod::Shift],
            def.number,
            Action::MoveWindowToGroup {
                group: def.name.to_string(),
                switch: true,
            },
            &format!("Switch to & move focused window to group {}", def.name),
        ));
    }
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_bindings_per_definition() {
        assert_eq!(group_bindings(GROUPS).len(), 2 * GROUPS.len());
    }

    #[test]
    fn each_group_gets_a_switch_and_a_move_pair() {
        let bindings = group_bindings(GROUPS);
        for def in GROUPS {
            let switches = bindings
                .iter()
                .filter(|b| b.action == Action::SwitchToGroup(def.name.to_string()))
                .count();
            let moves = bindings
                .iter()
                .filter(|b| {
                    b.action
                        == Action::MoveWindowToGroup {
                            group: def.name.to_string(),
                            switch: true,
                        }
                })
                .count();
            assert_eq!(switches, 1, "group {}", def.name);
            assert_eq!(moves, 1, "group {}", def.name);
        }
    }

    #[test]
    fn derived_bindings_reuse_the_numeric_label() {
        let bindings = group_bindings(GROUPS);
        for (def, pair) in GROUPS.iter().zip(bindings.chunks(2)) {
            assert_eq!(pair[0].key, def.number);
            assert_eq!(pair[1].key, def.number);
            assert_eq!(pair[1].mods, vec![MOD, Mod::Shift]);
        }
    }

    #[test]
    fn group_names_in_declaration_order() {
        assert_eq!(groups(), vec!["Code", "Music", "Browser", "Terminal"]);
    }
}
