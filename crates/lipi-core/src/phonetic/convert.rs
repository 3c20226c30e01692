use super::trie::{PhoneticTable, RuleLookupResult};
use super::PhoneticRule;

/// One resolved slice of the lookahead window.
#[derive(Debug, PartialEq)]
pub struct RuleMatch<'a> {
    /// `None` when the leading character matches no rule and is skipped.
    pub rule: Option<&'a PhoneticRule>,
    /// Number of Latin characters consumed.
    pub len: usize,
}

/// Resolve as much of `pending` as the table allows.
///
/// Sequences that may still grow into a longer rule are left in place unless
/// `force` is set. Returns the matches in input order and the number of
/// leading characters they consumed; the rest stays pending.
pub fn drain<'a>(
    table: &'a PhoneticTable,
    pending: &str,
    force: bool,
) -> (Vec<RuleMatch<'a>>, usize) {
    let mut matches = Vec::new();
    let mut start = 0;

    while start < pending.len() {
        let rest = &pending[start..];
        match table.lookup(rest) {
            RuleLookupResult::Exact(rule) => {
                matches.push(RuleMatch {
                    rule: Some(rule),
                    len: rest.len(),
                });
                start = pending.len();
            }
            RuleLookupResult::ExactAndPrefix(rule) if force => {
                matches.push(RuleMatch {
                    rule: Some(rule),
                    len: rest.len(),
                });
                start = pending.len();
            }
            RuleLookupResult::ExactAndPrefix(_) => break,
            RuleLookupResult::Prefix if !force => break,
            RuleLookupResult::Prefix | RuleLookupResult::None => {
                let m = longest_prefix(table, rest);
                start += m.len;
                matches.push(m);
            }
        }
    }

    (matches, start)
}

/// Only reached once the whole of `rest` has failed, so a rule that is also
/// a prefix is taken: no longer sequence can start here.
fn longest_prefix<'a>(table: &'a PhoneticTable, rest: &str) -> RuleMatch<'a> {
    for len in (1..rest.len()).rev() {
        match table.lookup(&rest[..len]) {
            RuleLookupResult::Exact(rule) | RuleLookupResult::ExactAndPrefix(rule) => {
                return RuleMatch {
                    rule: Some(rule),
                    len,
                };
            }
            _ => {}
        }
    }
    RuleMatch { rule: None, len: 1 }
}
