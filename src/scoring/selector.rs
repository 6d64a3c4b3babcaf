use crate::scoring::outcome::Outcome;

/// Whether `candidate` should replace the current best
///
/// Anything beats no result; a double pair beats any non-double regardless of
/// score; otherwise only a strictly higher score wins, so the first-found
/// outcome is kept on ties.
pub fn is_better(candidate: &Outcome, incumbent: Option<&Outcome>) -> bool {
    let Some(incumbent) = incumbent else {
        return true;
    };

    match (candidate.is_double, incumbent.is_double) {
        (true, false) => true,
        (false, true) => false,
        _ => candidate.score > incumbent.score,
    }
}

/// Left-to-right fold keeping the best item under [`is_better`]
///
/// Used both across the splits of one hand and across the variants of a hand,
/// so both levels share the same tie-break.
pub fn select_best<T, I, F>(items: I, outcome_of: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Option<&Outcome>,
{
    let mut best: Option<T> = None;
    for item in items {
        let Some(candidate) = outcome_of(&item) else {
            continue;
        };
        let incumbent = best.as_ref().and_then(|b| outcome_of(b));
        if is_better(candidate, incumbent) {
            best = Some(item);
        }
    }
    best
}
