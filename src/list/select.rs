use crate::rule::{Rule, RuleKind};

/// Pick the prevailing rule among matching candidates.
///
/// Any exception beats every non-exception rule. Otherwise the rule with
/// the greatest [`Rule::length`] wins; on equal length the first candidate
/// wins, so candidates must arrive in load order for stable results.
/// Returns `None` for no candidates; the caller applies its default rule.
pub fn select<'a>(candidates: impl IntoIterator<Item = &'a Rule>) -> Option<&'a Rule> {
    let mut best: Option<&Rule> = None;
    let mut best_exception: Option<&Rule> = None;

    for rule in candidates {
        let slot = if rule.kind() == RuleKind::Exception {
            &mut best_exception
        } else {
            &mut best
        };
        if slot.map_or(true, |current| rule.length() > current.length()) {
            *slot = Some(rule);
        }
    }

    best_exception.or(best)
}
