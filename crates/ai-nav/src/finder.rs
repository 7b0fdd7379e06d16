use tracing::debug;

/// A shortest-path algorithm over node keys.
pub trait PathFinding<K> {
    /// Nodes to visit after `start` to reach `end`; empty when there is no route.
    fn path(&self, start: &K, end: &K) -> Vec<K>;

    /// First hop of [`PathFinding::path`].
    fn next_position(&self, start: &K, end: &K) -> Option<K> {
        self.path(start, end).into_iter().next()
    }
}

/// Host-facing facade over a pluggable [`PathFinding`] algorithm.
pub struct PathFinder<K> {
    algorithm: Box<dyn PathFinding<K>>,
}

impl<K> PathFinder<K>
where
    K: core::fmt::Debug,
{
    pub fn new(algorithm: impl PathFinding<K> + 'static) -> Self {
        Self {
            algorithm: Box::new(algorithm),
        }
    }

    pub fn algorithm(&self) -> &dyn PathFinding<K> {
        self.algorithm.as_ref()
    }

    pub fn path(&self, start: &K, end: &K) -> Vec<K> {
        let path = self.algorithm.path(start, end);
        if path.is_empty() {
            debug!(?start, ?end, "no path");
        }
        path
    }

    pub fn next_position(&self, start: &K, end: &K) -> Option<K> {
        self.algorithm.next_position(start, end)
    }
}
