use super::signals::Signal;
use super::synthesis::{Step, join_conditions};
use crate::scenario::Connection;
use ahash::AHashMap;
use itertools::Itertools;
use tracing::{debug, trace};

/// Assigns every condition clause to the module-producing signal it guards.
///
/// A clause guards the first module-producing signal after the clause in the
/// same sentence ("si X, publie dans Slack"), or failing that the closest one
/// before the keyword ("publie dans Slack si X"). Clauses with no such signal
/// are dropped. Returns `signal index -> condition text`.
pub(crate) fn resolve_conditions(signals: &[Signal]) -> AHashMap<usize, String> {
    let mut conditions: AHashMap<usize, String> = AHashMap::new();

    for (index, signal) in signals.iter().enumerate() {
        let Some(clause) = &signal.clause else {
            continue;
        };
        let same_sentence = |s: &&Signal| {
            s.sentence == signal.sentence && s.category.produces_module()
        };

        let after = signals
            .iter()
            .enumerate()
            .skip(index + 1)
            .filter(|(_, s)| same_sentence(s))
            .find(|(_, s)| s.span.start >= clause.end)
            .map(|(i, _)| i);
        let before = || {
            signals[..index]
                .iter()
                .enumerate()
                .rev()
                .find(|(_, s)| same_sentence(s))
                .map(|(i, _)| i)
        };

        match after.or_else(before) {
            Some(target) => {
                trace!(condition = %clause.text, target, "condition attached");
                conditions
                    .entry(target)
                    .and_modify(|existing| {
                        existing.push_str(" et ");
                        existing.push_str(&clause.text);
                    })
                    .or_insert_with(|| clause.text.clone());
            }
            None => debug!(condition = %clause.text, "condition has no module to guard"),
        }
    }

    conditions
}

/// Chains the steps linearly: one connection per adjacent pair. The edge into
/// a step carries that step's condition; a condition attached to the trigger
/// guards the edge leaving it.
pub(crate) fn infer(steps: &[Step]) -> Vec<Connection> {
    steps
        .iter()
        .enumerate()
        .tuple_windows()
        .map(|((from, source), (to, target))| {
            let inherited = (from == 0).then(|| source.condition.clone()).flatten();
            Connection {
                from: from.to_string(),
                to: to.to_string(),
                condition: join_conditions(inherited, target.condition.clone()),
            }
        })
        .collect()
}
