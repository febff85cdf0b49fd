//! Floating rules: predicates that exempt matching windows from the active
//! layout's automatic placement.

/// A window predicate. `WmType` matches `_NET_WM_WINDOW_TYPE`, `WmClass` the
/// second field of `WM_CLASS` (see `xprop`), `Title` the window title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Match {
    WmType(&'static str),
    WmClass(&'static str),
    Title(&'static str),
}

/// The host's stock floating rules. Kept verbatim; [`float_rules`] splices
/// additions after them and must never override an entry.
pub fn default_float_rules() -> Vec<Match> {
    vec![
        Match::WmType("utility"),
        Match::WmType("notification"),
        Match::WmType("toolbar"),
        Match::WmType("splash"),
        Match::WmType("dialog"),
        Match::WmClass("file_progress"),
        Match::WmClass("confirm"),
        Match::WmClass("dialog"),
        Match::WmClass("download"),
        Match::WmClass("error"),
        Match::WmClass("splash"),
        Match::WmClass("toolbar"),
    ]
}

/// Defaults plus the explicit additions for gitk helpers, ssh-askpass and
/// pinentry.
pub fn float_rules() -> Vec<Match> {
    let mut rules = default_float_rules();
    rules.extend([
        Match::WmClass("confirmreset"), // gitk
        Match::WmClass("makebranch"),   // gitk
        Match::WmClass("maketag"),      // gitk
        Match::WmClass("ssh-askpass"),
        Match::Title("branchdialog"), // gitk
        Match::Title("pinentry"),     // GPG key password entry
    ]);
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_form_an_unmodified_prefix() {
        let rules = float_rules();
        let defaults = default_float_rules();
        assert!(rules.len() > defaults.len());
        assert_eq!(&rules[..defaults.len()], defaults.as_slice());
    }

    #[test]
    fn additions_follow_the_defaults() {
        let rules = float_rules();
        let tail = &rules[default_float_rules().len()..];
        assert!(tail.contains(&Match::WmClass("ssh-askpass")));
        assert!(tail.contains(&Match::Title("pinentry")));
        assert_eq!(tail.len(), 6);
    }
}
