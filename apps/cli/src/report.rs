//! Textual AGCR report.
//!
//! All presentation lives here; the library and metrics crates return
//! structured values only.

use agcr_library::Game;
use agcr_metrics::MetricsError;

const RULE: &str = "----------";

/// Prints the full report for a fetched library.
///
/// Each metric is computed independently: an undefined average does not
/// suppress the rankings, and vice versa.
pub fn print(games: &[Game], top: usize) {
    println!("{RULE}");
    match agcr_metrics::average_completion(games) {
        Ok(agcr) => println!("AGCR is {agcr:.4}."),
        Err(MetricsError::NoData) => {
            println!("AGCR is undefined: no games with unlocked achievements.");
        }
    }

    println!("{RULE}");
    println!("Top AGCR opportunities:");
    print_ranking(&agcr_metrics::top_opportunities(games, top));

    println!("{RULE}");
    println!("Top AGCR detractors:");
    print_ranking(&agcr_metrics::top_detractors(games, top));

    println!("{RULE}");
    match agcr_metrics::highest_gain(games) {
        Ok(game) => println!("Highest-gain game is {}", progress_line(game)),
        Err(MetricsError::NoData) => println!("Highest-gain game: no game in progress."),
    }
}

fn print_ranking(games: &[&Game]) {
    if games.is_empty() {
        println!("(none)");
    }
    for game in games {
        println!("{}", progress_line(game));
    }
}

fn progress_line(game: &Game) -> String {
    format!(
        "{}: {} out of {}",
        game.name, game.achievements_unlocked, game.achievements_total
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_line_format() {
        let game = Game {
            app_id: 620,
            name: "Portal 2".into(),
            achievements_unlocked: 34,
            achievements_total: 51,
        };
        assert_eq!(progress_line(&game), "Portal 2: 34 out of 51");
    }
}
