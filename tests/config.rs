//! End-to-end checks over the fully built configuration: the cross-reference
//! properties the host only discovers at session start.

use tilecfg::{Config, check};
use tilecfg::floating;
use tilecfg::groups::{self, GROUPS};
use tilecfg::hooks::{self, BarControl};
use tilecfg::keys::Action;

#[test]
fn the_shipped_config_passes_every_lint() {
    let config = Config::build();
    let problems = check::run_all(&config);
    assert!(problems.is_empty(), "lint problems: {:?}", problems);
}

#[test]
fn group_table_derives_exactly_two_bindings_per_entry() {
    let config = Config::build();
    let derived = config
        .keys
        .iter()
        .filter(|b| {
            matches!(
                b.action,
                Action::SwitchToGroup(_) | Action::MoveWindowToGroup { .. }
            )
        })
        .count();
    assert_eq!(derived, 2 * GROUPS.len());
}

#[test]
fn every_group_reference_resolves_to_a_declared_group() {
    let config = Config::build();
    for binding in &config.keys {
        let target = match &binding.action {
            Action::SwitchToGroup(name) => Some(name),
            Action::MoveWindowToGroup { group, .. } => Some(group),
            _ => None,
        };
        if let Some(name) = target {
            assert!(
                config.groups.contains(&name.as_str()),
                "binding '{}' targets undeclared group '{}'",
                binding.key,
                name
            );
        }
    }
}

#[test]
fn no_binding_shadows_another() {
    let config = Config::build();
    assert!(check::shadowed_bindings(&config.keys).is_empty());
}

#[test]
fn the_bar_toggle_sentinel_names_a_declared_layout() {
    let config = Config::build();
    assert!(
        config
            .layouts
            .iter()
            .any(|l| l.name() == hooks::HIDDEN_BAR_LAYOUT)
    );
}

#[test]
fn stock_floating_rules_survive_the_splice() {
    let config = Config::build();
    let defaults = floating::default_float_rules();
    assert_eq!(&config.floating[..defaults.len()], defaults.as_slice());
}

#[test]
fn cycling_the_layout_list_toggles_the_bar_correctly() {
    struct Screen {
        top_visible: bool,
    }
    impl BarControl for Screen {
        fn show_top(&mut self, visible: bool) {
            self.top_visible = visible;
        }
    }

    let config = Config::build();
    let mut screen = Screen { top_visible: true };
    for layout in &config.layouts {
        hooks::on_layout_change(layout, &mut screen);
        assert_eq!(
            screen.top_visible,
            layout.name() != hooks::HIDDEN_BAR_LAYOUT,
            "wrong bar state after activating {}",
            layout.name()
        );
    }
}

#[test]
fn host_contract_fields_are_populated() {
    let config = Config::build();
    assert!(!config.keys.is_empty());
    assert_eq!(config.groups, groups::groups());
    assert_eq!(config.layouts.len(), 3);
    assert_eq!(config.screens.len(), 2);
    assert_eq!(config.mouse.len(), 3);
    assert!(config.floating.len() > floating::default_float_rules().len());
}
