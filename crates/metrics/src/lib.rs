//! Completion metrics over a game library.
//!
//! Average Game Completion Rate (AGCR) is the mean completion fraction
//! across games with at least one unlocked achievement. The rankings single
//! out partially completed games: a game with few total achievements moves
//! the average further per unlock, and a game with a low completion fraction
//! drags the average down the most.
//!
//! All functions are pure; each metric is computed independently, so a
//! [`MetricsError::NoData`] from one does not affect the others.

use agcr_library::Game;

/// Errors from metric computation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// No game in the collection qualifies for the requested metric.
    #[error("no games with unlocked achievements")]
    NoData,
}

/// Completion fraction of one game. Caller guarantees a nonzero total.
fn completion(game: &Game) -> f64 {
    f64::from(game.achievements_unlocked) / f64::from(game.achievements_total)
}

/// Partially completed games: started but not finished.
///
/// Games without an achievement system have zero unlocked achievements and
/// fall out here along with the untouched and the fully completed ones.
fn in_progress(games: &[Game]) -> Vec<&Game> {
    games
        .iter()
        .filter(|g| g.achievements_unlocked > 0 && g.achievements_unlocked != g.achievements_total)
        .collect()
}

/// Average Game Completion Rate: the mean completion fraction across games
/// with at least one unlocked achievement.
///
/// Untouched games are excluded, not treated as 0%. Errs with
/// [`MetricsError::NoData`] when nothing qualifies — an undefined average is
/// reported, never rendered as 0.
pub fn average_completion(games: &[Game]) -> Result<f64, MetricsError> {
    let rates: Vec<f64> = games
        .iter()
        .filter(|g| g.achievements_unlocked > 0 && g.achievements_total > 0)
        .map(completion)
        .collect();
    if rates.is_empty() {
        return Err(MetricsError::NoData);
    }
    Ok(rates.iter().sum::<f64>() / rates.len() as f64)
}

/// Games whose completion is cheapest to raise: partially completed, sorted
/// ascending by total achievement count (fewer remaining achievements means
/// a larger AGCR swing per achievement earned). Returns at most `top`.
pub fn top_opportunities(games: &[Game], top: usize) -> Vec<&Game> {
    let mut candidates = in_progress(games);
    candidates.sort_by_key(|g| g.achievements_total);
    candidates.truncate(top);
    candidates
}

/// Games dragging the average down the most: partially completed, sorted
/// ascending by completion fraction. Returns at most `top`.
pub fn top_detractors(games: &[Game], top: usize) -> Vec<&Game> {
    let mut candidates = in_progress(games);
    candidates.sort_by(|a, b| completion(a).total_cmp(&completion(b)));
    candidates.truncate(top);
    candidates
}

/// The single game offering the steepest AGCR improvement per unlock.
///
/// Ties on total achievement count resolve to the earliest game in the
/// input collection.
pub fn highest_gain(games: &[Game]) -> Result<&Game, MetricsError> {
    top_opportunities(games, 1)
        .into_iter()
        .next()
        .ok_or(MetricsError::NoData)
}
