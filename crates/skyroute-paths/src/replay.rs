use skyroute_core::Coord;

use crate::result::SearchResult;

/// Expansions revealed per tick when no speed is given.
pub const DEFAULT_REPLAY_SPEED: usize = 35;

/// Step-by-step playback cursor over a finished search's visitation order.
///
/// Each [`tick`](Replay::tick) reveals the next `speed` expansions. The
/// cursor borrows the result and never changes it.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    visited: &'a [Coord],
    revealed: usize,
    speed: usize,
}

impl<'a> Replay<'a> {
    pub fn new(result: &'a SearchResult) -> Self {
        Self {
            visited: result.visited(),
            revealed: 0,
            speed: DEFAULT_REPLAY_SPEED,
        }
    }

    /// Set the number of expansions revealed per tick (at least one).
    pub fn with_speed(mut self, speed: usize) -> Self {
        self.speed = speed.max(1);
        self
    }

    #[inline]
    pub fn speed(&self) -> usize {
        self.speed
    }

    /// Reveal the next batch and return it. Empty once finished.
    pub fn tick(&mut self) -> &'a [Coord] {
        let start = self.revealed;
        self.revealed = start.saturating_add(self.speed).min(self.visited.len());
        &self.visited[start..self.revealed]
    }

    /// Everything revealed so far, in expansion order.
    #[inline]
    pub fn revealed(&self) -> &'a [Coord] {
        &self.visited[..self.revealed]
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.revealed >= self.visited.len()
    }

    /// Start over from the first expansion.
    pub fn rewind(&mut self) {
        self.revealed = 0;
    }
}

impl<'a> Iterator for Replay<'a> {
    type Item = &'a [Coord];

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }
        Some(self.tick())
    }
}
