use crate::hash;
use crate::registry::Registry;

// digest rounds per server at equal weight; 4 points per digest,
// so 160 points per server on average.
const FACTOR: f64 = 40.0;

/// One point on the circle. Owns a copy of the server address so the
/// continuum stays valid independent of the registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    hash: u32,
    addr: String,
}

impl Point {
    #[inline]
    pub fn hash(&self) -> u32 {
        self.hash
    }
    #[inline]
    pub fn addr(&self) -> &str {
        &self.addr
    }
}

/// The sorted circle. Immutable once built.
#[derive(Debug, Clone)]
pub struct Continuum {
    points: Vec<Point>,
}

impl Continuum {
    /// Allots each server `floor(weight/total * 40 * n)` digest rounds and
    /// 4 points per round, then sorts ascending. The sort is what makes
    /// `locate` correct.
    pub(crate) fn build(registry: &Registry) -> Self {
        let n = registry.len();
        let total = registry.total_weight();
        let mut points = Vec::new();
        for server in registry.servers() {
            let pct = server.weight() as f64 / total as f64;
            let rounds = (pct * FACTOR * n as f64).floor() as usize;
            if rounds == 0 {
                // accepted ketama behavior for very skewed weights: the
                // server ends up with no points and is unreachable
                log::warn!(
                    "server {} weight {}/{} allots no points",
                    server.addr(),
                    server.weight(),
                    total
                );
                continue;
            }
            log::debug!(
                "server {} weight {}/{}: {} of {} rounds",
                server.addr(),
                server.weight(),
                total,
                rounds,
                n * FACTOR as usize
            );
            points.reserve(rounds * 4);
            for k in 0..rounds {
                let d = hash::digest(format!("{}-{}", server.addr(), k).as_bytes());
                for h in 0..4 {
                    points.push(Point {
                        hash: hash::point_hash32(&d, h * 4),
                        addr: server.addr().to_string(),
                    });
                }
            }
        }
        // (hash, addr) order: total, and stable across registration order
        // even when two servers collide on a point hash
        points.sort();
        // the heaviest server alone floors to >= 40 rounds
        debug_assert!(!points.is_empty());
        Self { points }
    }

    /// Smallest point with `hash >= target`, wrapping to the first point
    /// when the target exceeds them all. O(log P).
    #[inline]
    pub fn locate(&self, target: u32) -> &Point {
        let idx = self.points.partition_point(|p| p.hash < target);
        let idx = if idx == self.points.len() { 0 } else { idx };
        &self.points[idx]
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
