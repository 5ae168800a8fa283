use crate::table::CommandTable;

#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    Unchanged,
    Replaced(String),
    Ambiguous(Vec<String>),
}

impl CompletionOutcome {
    fn from_candidates(mut candidates: Vec<String>, rebuild: impl FnOnce(String) -> String) -> Self {
        match candidates.len() {
            0 => CompletionOutcome::Unchanged,
            1 => CompletionOutcome::Replaced(rebuild(candidates.remove(0))),
            _ => CompletionOutcome::Ambiguous(candidates),
        }
    }

    /// Informational line shown for ambiguous prefixes.
    pub fn hint(&self) -> Option<String> {
        match self {
            CompletionOutcome::Ambiguous(candidates) => {
                Some(format!("You mean: {} ?", candidates.join(", ")))
            }
            _ => None,
        }
    }
}

/// Tab completion over command names, then subcommand names.
///
/// Only one- and two-token lines are completed. A trailing space after the
/// command counts as an empty second token.
pub fn complete(table: &CommandTable, partial: &str) -> CompletionOutcome {
    let mut tokens: Vec<&str> = partial.split_whitespace().collect();
    if tokens.len() == 1 && partial.ends_with(char::is_whitespace) {
        tokens.push("");
    }
    match tokens.as_slice() {
        [] => CompletionOutcome::from_candidates(table.names_with_prefix(""), |c| c),
        [prefix] => CompletionOutcome::from_candidates(table.names_with_prefix(prefix), |c| c),
        [command, prefix] => match table.subcommands_with_prefix(command, prefix) {
            Some(subs) => {
                CompletionOutcome::from_candidates(subs, |sub| format!("{} {}", command, sub))
            }
            None => CompletionOutcome::Unchanged,
        },
        _ => CompletionOutcome::Unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommandEntry;

    fn table() -> CommandTable {
        let scan = CommandEntry::new("scan", "scan ports", Some("Scanning..."))
            .with_subcommand(CommandEntry::new("quick", "fast", None))
            .with_subcommand(CommandEntry::new("quiet", "stealth", None))
            .with_subcommand(CommandEntry::new("full", "all ports", None));
        let entries = [
            scan,
            CommandEntry::new("sudo", "escalate", None),
            CommandEntry::new("help", "help", None),
            CommandEntry::new("hack", "hack", None),
        ];
        CommandTable::from_commands(entries.into_iter().map(|e| (e.name.clone(), e)).collect())
    }

    #[test]
    fn unique_prefix_replaces() {
        assert_eq!(
            complete(&table(), "sc"),
            CompletionOutcome::Replaced("scan".into())
        );
    }

    #[test]
    fn exact_match_is_idempotent() {
        assert_eq!(
            complete(&table(), "sudo"),
            CompletionOutcome::Replaced("sudo".into())
        );
    }

    #[test]
    fn ambiguous_prefix_lists_sorted_candidates() {
        let outcome = complete(&table(), "h");
        assert_eq!(
            outcome,
            CompletionOutcome::Ambiguous(vec!["hack".into(), "help".into()])
        );
        assert_eq!(outcome.hint().as_deref(), Some("You mean: hack, help ?"));
    }

    #[test]
    fn empty_input_offers_everything() {
        match complete(&table(), "") {
            CompletionOutcome::Ambiguous(all) => assert_eq!(all.len(), 4),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn no_match_is_unchanged() {
        assert_eq!(complete(&table(), "xyz"), CompletionOutcome::Unchanged);
        assert_eq!(CompletionOutcome::Unchanged.hint(), None);
    }

    #[test]
    fn subcommand_completion() {
        assert_eq!(
            complete(&table(), "scan f"),
            CompletionOutcome::Replaced("scan full".into())
        );
        assert_eq!(
            complete(&table(), "scan qui"),
            CompletionOutcome::Ambiguous(vec!["quick".into(), "quiet".into()])
        );
    }

    #[test]
    fn trailing_space_lists_subcommands() {
        assert_eq!(
            complete(&table(), "scan "),
            CompletionOutcome::Ambiguous(vec!["full".into(), "quick".into(), "quiet".into()])
        );
    }

    #[test]
    fn command_without_subcommands_is_unchanged() {
        assert_eq!(complete(&table(), "sudo x"), CompletionOutcome::Unchanged);
        assert_eq!(complete(&table(), "nope x"), CompletionOutcome::Unchanged);
    }

    #[test]
    fn three_tokens_not_completed() {
        assert_eq!(complete(&table(), "scan quick now"), CompletionOutcome::Unchanged);
    }

    #[test]
    fn not_ready_table_completes_nothing() {
        assert_eq!(complete(&CommandTable::new(), "sc"), CompletionOutcome::Unchanged);
    }
}
