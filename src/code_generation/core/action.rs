use std::fmt;

/// Behaviors the `modgen` command can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    List,
    Help,
}

impl Action {
    /// Map an action token to a behavior.
    ///
    /// Tokens are matched exactly. Anything unrecognized, or no token at all,
    /// falls back to `Help`.
    pub fn select(token: Option<&str>) -> Self {
        match token {
            Some("generate") => Action::Generate,
            Some("list") => Action::List,
            Some("help") => Action::Help,
            _ => Action::Help,
        }
    }

    /// Whether this action needs a module name
    pub fn requires_name(self) -> bool {
        matches!(self, Action::Generate)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Generate => "generate",
            Action::List => "list",
            Action::Help => "help",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_known_actions() {
        assert_eq!(Action::select(Some("generate")), Action::Generate);
        assert_eq!(Action::select(Some("list")), Action::List);
        assert_eq!(Action::select(Some("help")), Action::Help);
    }

    #[test]
    fn test_select_falls_back_to_help() {
        assert_eq!(Action::select(Some("bogus")), Action::Help);
        assert_eq!(Action::select(None), Action::Help);
        assert_eq!(Action::select(Some("reomve")), Action::Help);
        assert_eq!(Action::select(Some("remove")), Action::Help);
        assert_eq!(Action::select(Some("")), Action::Help);
    }

    #[test]
    fn test_select_is_case_sensitive() {
        assert_eq!(Action::select(Some("Generate")), Action::Help);
        assert_eq!(Action::select(Some("LIST")), Action::Help);
    }

    #[test]
    fn test_only_generate_requires_name() {
        assert!(Action::Generate.requires_name());
        assert!(!Action::List.requires_name());
        assert!(!Action::Help.requires_name());
    }
}
