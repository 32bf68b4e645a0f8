//! Restricted candidate list selection for randomized construction.

use crate::random::DiscreteGenerator;

/// Picks one candidate from the restricted candidate list (RCL).
///
/// `greedy_costs[i]` is the greedy cost of candidate `i` (lower is more
/// attractive). The RCL holds every candidate whose cost is at most
/// `min + alpha * (max - min)`, and one of them is chosen uniformly at
/// random. With `alpha = 0` only the cheapest candidates qualify; with
/// `alpha = 1` every candidate does.
///
/// Candidates with a non-finite cost (NaN or infinite) are never
/// eligible. A list with a single member is returned without drawing from
/// `rng`. Returns `None` if no candidate has a finite cost.
///
/// # Examples
///
/// ```
/// use rk_metaheur::grasp::select_candidate;
/// use rk_metaheur::random::DiscreteGenerator;
///
/// let mut rng = DiscreteGenerator::new();
/// assert_eq!(select_candidate(&[4.0, 1.0, 3.0], 0.0, &mut rng), Some(1));
/// ```
pub fn select_candidate(
    greedy_costs: &[f64],
    alpha: f64,
    rng: &mut DiscreteGenerator,
) -> Option<usize> {
    let (min, max) = greedy_costs
        .iter()
        .filter(|c| c.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &c| {
            (lo.min(c), hi.max(c))
        });

    let threshold = if alpha >= 1.0 {
        max
    } else {
        min + alpha.max(0.0) * (max - min)
    };

    let rcl: Vec<usize> = greedy_costs
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c.is_finite() && c <= threshold)
        .map(|(i, _)| i)
        .collect();

    match rcl.len() {
        0 => None,
        1 => Some(rcl[0]),
        n => {
            rng.init_uniform(0, n - 1).ok()?;
            Some(rcl[rng.get_uniform()])
        }
    }
}
