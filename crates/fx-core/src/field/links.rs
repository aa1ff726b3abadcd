use super::particle::Particle;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

/// A visible connection between two particles, `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    /// `1 - d / L`, in `(0, 1]`.
    pub opacity: f32,
}

type Cell = (i32, i32);

#[inline]
fn cell_of(pos: Vec2, size: f32) -> Cell {
    ((pos.x / size).floor() as i32, (pos.y / size).floor() as i32)
}

/// Every unordered pair of distinct particles closer than `max_distance`.
///
/// Particles are bucketed into square cells of side `max_distance`, so only
/// the 3x3 neighborhood of each cell is compared. Output is sorted by `(a, b)`.
pub fn links(particles: &[Particle], max_distance: f32) -> Vec<Link> {
    let mut out = Vec::new();
    if max_distance <= 0.0 || particles.len() < 2 {
        return out;
    }

    let mut grid: FnvHashMap<Cell, SmallVec<[usize; 8]>> = FnvHashMap::default();
    for (i, p) in particles.iter().enumerate() {
        grid.entry(cell_of(p.pos, max_distance)).or_default().push(i);
    }

    for (i, p) in particles.iter().enumerate() {
        let (cx, cy) = cell_of(p.pos, max_distance);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let Some(bucket) = grid.get(&(cx.saturating_add(dx), cy.saturating_add(dy))) else {
                    continue;
                };
                for &j in bucket.iter().filter(|&&j| j > i) {
                    let d = p.pos.distance(particles[j].pos);
                    if d < max_distance {
                        out.push(Link {
                            a: i,
                            b: j,
                            opacity: 1.0 - d / max_distance,
                        });
                    }
                }
            }
        }
    }
    out.sort_unstable_by_key(|l| (l.a, l.b));
    // saturated cells at extreme coordinates can alias a neighbor
    out.dedup_by_key(|l| (l.a, l.b));
    out
}
