//! Scope matching: pick the theme rule that best covers a target scope,
//! using TextMate selector specificity restricted to prefix matching.

use crate::theme::ThemeRule;

/// A scored partial match while scanning the rule list.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    /// Length of the matched selector element (longer prefix = more specific).
    weight: usize,
    /// Length of the descendant chain the element came from.
    chain: usize,
    /// Index into the rule list.
    rule: usize,
}

/// Find the rule that best matches `target`.
///
/// `target == None` fetches the theme's global default rule (the one with no
/// scope selector). Otherwise selectors are split into comma alternatives and
/// each alternative into a descendant chain; only the deepest chain element
/// is compared against the target:
///
/// - an exact match on a simple selector (chain of one) wins immediately;
/// - prefix matches are scored by matched length, an exact match on a
///   compound selector being the longest possible prefix;
/// - among equally long compound matches, the shortest chain (least context)
///   wins;
/// - any simple match beats any compound match.
pub fn find_by_scope<'a>(rules: &'a [ThemeRule], target: Option<&str>) -> Option<&'a ThemeRule> {
    let Some(target) = target else {
        return rules.iter().find(|rule| rule.scope.is_none());
    };

    let mut best_simple: Option<Candidate> = None;
    let mut best_compound: Option<Candidate> = None;

    for (index, rule) in rules.iter().enumerate() {
        let Some(selector) = rule.scope.as_deref() else {
            continue;
        };
        for alternative in selector.split(',') {
            let alternative = strip_exclusion(alternative.trim());
            let chain: Vec<&str> = alternative.split_whitespace().collect();
            let Some(&candidate) = chain.last() else {
                continue;
            };
            let simple = chain.len() == 1;

            if simple && candidate == target {
                return Some(rule);
            }
            if !target.starts_with(candidate) {
                continue;
            }
            let scored = Candidate {
                weight: candidate.len(),
                chain: chain.len(),
                rule: index,
            };
            let slot = if simple { &mut best_simple } else { &mut best_compound };
            let better = match slot {
                None => true,
                Some(best) => {
                    scored.weight > best.weight
                        || (scored.weight == best.weight && scored.chain < best.chain)
                }
            };
            if better {
                *slot = Some(scored);
            }
        }
    }

    best_simple
        .or(best_compound)
        .map(|candidate| &rules[candidate.rule])
}

/// Drop a trailing exclusion clause (everything from `" -"` on).
fn strip_exclusion(selector: &str) -> &str {
    match selector.find(" -") {
        Some(pos) => &selector[..pos],
        None => selector,
    }
}
