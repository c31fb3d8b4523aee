//! Recommendation engine: candidate pool construction and the transient
//! draw/confirm session.
//!
//! Pool rules: restaurants the person has never visited come first; only
//! when that set is empty does the pool fall back to every restaurant
//! except the person's most recent visits.

use crate::errors::{AppError, AppResult};
use std::collections::HashSet;

/// How many trailing visits the fallback pool excludes.
pub const DEFAULT_RECENT_WINDOW: usize = 5;

/// The person's last `window` non-empty visits, oldest first.
pub fn recent_visits(history: &[String], window: usize) -> Vec<String> {
    let visited: Vec<&String> = history.iter().filter(|v| !v.trim().is_empty()).collect();
    let start = visited.len().saturating_sub(window);
    visited[start..].iter().map(|v| v.trim().to_string()).collect()
}

/// Build the candidate pool for one person, preserving restaurant-list order.
pub fn candidate_pool(
    restaurants: &[String],
    history: &[String],
    window: usize,
) -> Vec<String> {
    let ever: HashSet<&str> = history
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();

    let never: Vec<String> = restaurants
        .iter()
        .filter(|r| !ever.contains(r.trim()))
        .cloned()
        .collect();
    if !never.is_empty() {
        return never;
    }

    let recent: HashSet<String> = recent_visits(history, window).into_iter().collect();
    restaurants
        .iter()
        .filter(|r| !recent.contains(r.trim()))
        .cloned()
        .collect()
}

/// Transient per-interaction state: the working pool and the pending choice.
/// Never persisted; discarded when the person changes or a choice commits.
#[derive(Debug, Clone)]
pub struct RecommendSession {
    person: String,
    pool: Vec<String>,
    current: Option<String>,
}

impl RecommendSession {
    pub fn start(person: &str, restaurants: &[String], history: &[String], window: usize) -> Self {
        Self {
            person: person.to_string(),
            pool: candidate_pool(restaurants, history, window),
            current: None,
        }
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Draw one restaurant uniformly at random. The drawn entry leaves the
    /// pool, so repeated draws within one unresolved session never repeat.
    pub fn draw(&mut self) -> AppResult<String> {
        let len = self.pool.len();
        if len == 0 {
            return Err(AppError::NoCandidates);
        }
        let idx = random_index(len)?;
        Ok(self.take(idx))
    }

    /// Draw with an injected chooser. `pick` receives the pool size and
    /// must return an index below it.
    pub fn draw_with<F>(&mut self, pick: F) -> AppResult<String>
    where
        F: FnOnce(usize) -> usize,
    {
        let len = self.pool.len();
        if len == 0 {
            return Err(AppError::NoCandidates);
        }
        let idx = pick(len) % len;
        Ok(self.take(idx))
    }

    fn take(&mut self, idx: usize) -> String {
        let choice = self.pool.remove(idx);
        self.current = Some(choice.clone());
        choice
    }

    /// Commit the pending choice. Pool and choice are cleared so the next
    /// cycle recomputes candidates from updated history.
    pub fn confirm(&mut self) -> AppResult<String> {
        let choice = self.current.take().ok_or(AppError::NoPendingChoice)?;
        self.pool.clear();
        Ok(choice)
    }

    /// Switching the person discards any pending choice and pool, no matter
    /// where the cycle stood.
    pub fn switch_person(
        &mut self,
        person: &str,
        restaurants: &[String],
        history: &[String],
        window: usize,
    ) {
        *self = Self::start(person, restaurants, history, window);
    }
}

/// Uniform index below `len` from OS entropy (Lemire's multiply-shift).
fn random_index(len: usize) -> AppResult<usize> {
    let mut buf = [0u8; 8];
    getrandom::fill(&mut buf).map_err(|e| AppError::Entropy(e.to_string()))?;
    let sample = u64::from_le_bytes(buf);
    Ok(((sample as u128 * len as u128) >> 64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn never_visited_restaurants_are_strictly_prioritized() {
        let restaurants = names(&["A", "B", "C", "D"]);
        let history = names(&["A", "", "C"]);
        let pool = candidate_pool(&restaurants, &history, DEFAULT_RECENT_WINDOW);
        assert_eq!(pool, names(&["B", "D"]));
    }

    #[test]
    fn fallback_excludes_exactly_the_recent_window() {
        // everything visited at least once: only the last five drop out
        let restaurants = names(&["A", "B", "C", "D", "E", "F", "G"]);
        let history = names(&["A", "B", "C", "D", "E", "F", "G"]);
        let pool = candidate_pool(&restaurants, &history, 5);
        assert_eq!(pool, names(&["A", "B"]));
    }

    #[test]
    fn fallback_window_is_capped_by_history_length() {
        let restaurants = names(&["A", "B"]);
        let history = names(&["A", "B"]);
        let pool = candidate_pool(&restaurants, &history, 5);
        assert!(pool.is_empty());
    }

    #[test]
    fn empty_cells_do_not_count_as_visits() {
        let restaurants = names(&["A", "B", "C", "D", "E", "F"]);
        let history = names(&["A", "", "B", "", "C", "D", "E", "F"]);
        let pool = candidate_pool(&restaurants, &history, 5);
        // all visited; recent five are B..F, leaving only A
        assert_eq!(pool, names(&["A"]));
    }

    #[test]
    fn draws_never_repeat_and_shrink_the_pool() {
        let restaurants = names(&["A", "B", "C"]);
        let mut session = RecommendSession::start("Kim", &restaurants, &[], 5);

        let mut seen = Vec::new();
        for remaining in (0..3).rev() {
            let choice = session.draw_with(|_| 0).unwrap();
            assert!(!seen.contains(&choice));
            seen.push(choice);
            assert_eq!(session.pool().len(), remaining);
        }
        assert!(matches!(
            session.draw_with(|_| 0),
            Err(AppError::NoCandidates)
        ));
    }

    #[test]
    fn confirm_clears_pool_and_pending_choice() {
        let restaurants = names(&["A", "B", "C"]);
        let mut session = RecommendSession::start("Kim", &restaurants, &[], 5);
        let drawn = session.draw_with(|_| 1).unwrap();
        assert_eq!(session.current(), Some(drawn.as_str()));

        let confirmed = session.confirm().unwrap();
        assert_eq!(confirmed, drawn);
        assert!(session.pool().is_empty());
        assert!(session.current().is_none());
        assert!(matches!(session.confirm(), Err(AppError::NoPendingChoice)));
    }

    #[test]
    fn switching_person_resets_mid_cycle() {
        let restaurants = names(&["A", "B", "C"]);
        let mut session = RecommendSession::start("Kim", &restaurants, &[], 5);
        session.draw_with(|_| 0).unwrap();
        assert!(session.current().is_some());

        session.switch_person("Lee", &restaurants, &[], 5);
        assert_eq!(session.person(), "Lee");
        assert!(session.current().is_none());
        assert_eq!(session.pool().len(), 3);
    }

    #[test]
    fn random_draw_comes_from_the_pool() {
        let restaurants = names(&["A", "B", "C"]);
        let mut session = RecommendSession::start("Kim", &restaurants, &[], 5);
        let choice = session.draw().unwrap();
        assert!(restaurants.contains(&choice));
        assert_eq!(session.pool().len(), 2);
        assert!(!session.pool().contains(&choice));
    }

    #[test]
    fn recent_visits_keeps_order_and_trims() {
        let history = names(&["A", "", " B ", "C"]);
        assert_eq!(recent_visits(&history, 2), names(&["B", "C"]));
        assert_eq!(recent_visits(&history, 10), names(&["A", "B", "C"]));
    }
}
