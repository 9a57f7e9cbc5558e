//! World driver: owns segments and the spatial index, runs the per-step
//! pipeline (spec.md §4.3, §9).

use crate::error::WorldError;
use crate::events::canonical_order;
use crate::quadtree::{self, SubdivisionPolicy, Tree};
use crate::rect::Rect;
use crate::resolver::resolve;
use crate::segment::{Segment, SegmentId};
use crate::vec2::Vec2;

/// Per-run constants that would otherwise be file-scope `#define`s.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    pub bounds: Rect,
    pub dt: f64,
    pub leaf_capacity: usize,
    pub subdivision: SubdivisionPolicy,
    pub worker_threads: Option<usize>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            bounds: Rect::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)),
            dt: 0.5,
            leaf_capacity: 128,
            subdivision: SubdivisionPolicy::Overflow { max_per_leaf: 128 },
            worker_threads: None,
        }
    }
}

/// Owns the segments, the configuration, and the quadtree index; drives the
/// six-phase step pipeline.
pub struct World {
    config: WorldConfig,
    capacity: usize,
    segments: Vec<Segment>,
    index: Tree,
    num_line_wall_collisions: u64,
    num_line_line_collisions: u64,
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl World {
    /// `world_new`: reserve capacity for `capacity` segments.
    pub fn new(config: WorldConfig, capacity: usize) -> Result<Self, WorldError> {
        #[cfg(feature = "parallel")]
        let pool = match config.worker_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|_| WorldError::AllocationFailure { requested: capacity })?,
            ),
            None => None,
        };
        Ok(Self {
            segments: Vec::with_capacity(capacity),
            index: Tree::default(),
            num_line_wall_collisions: 0,
            num_line_line_collisions: 0,
            capacity,
            config,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// `world_add_segment`: append a segment, assigning it the next id.
    /// Must only be called before stepping begins.
    pub fn add_segment(&mut self, p1: Vec2, p2: Vec2, velocity: Vec2, color: impl Into<String>) -> Result<SegmentId, WorldError> {
        if self.segments.len() >= self.capacity {
            return Err(WorldError::CapacityExceeded { capacity: self.capacity, attempted: self.segments.len() });
        }
        let id = SegmentId(self.segments.len() as u32);
        let mut segment = Segment::new(id, p1, p2, velocity, color);
        segment.refresh_swept(self.config.dt);
        self.segments.push(segment);
        self.rebuild_index();
        Ok(id)
    }

    /// `world_num_segments`.
    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    /// `world_get_segment`.
    pub fn get_segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn num_line_wall_collisions(&self) -> u64 {
        self.num_line_wall_collisions
    }

    pub fn num_line_line_collisions(&self) -> u64 {
        self.num_line_line_collisions
    }

    fn rebuild_index(&mut self) {
        quadtree::build_into(&mut self.index, self.config.bounds, self.config.subdivision, &self.segments);
    }

    /// `world_step`: run the six-phase pipeline once.
    pub fn step(&mut self) {
        let span = tracing::debug_span!("world_step");
        let _enter = span.enter();

        // 1. Refresh index: swept parallelograms were refreshed at the end of
        // the previous step (or at add_segment, for the first step), so this
        // is just a rebuild against current state.
        self.rebuild_index();

        // 2. Detect.
        let dt = self.config.dt;
        #[cfg(feature = "parallel")]
        let pool = self.pool.as_ref();
        #[cfg(not(feature = "parallel"))]
        let pool = ();
        let index = &self.index;
        let segments = &self.segments;
        let (events, _raw_pairs) =
            tracing::debug_span!("detect").in_scope(|| run_in_pool(pool, || quadtree::detect(index, segments, dt)));

        // 3. Sort + dedup.
        let (canonical, _duplicates_removed) =
            tracing::debug_span!("sort_dedup").in_scope(|| canonical_order(events.into_vec()));
        self.num_line_line_collisions += canonical.len() as u64;

        // 4. Resolve, strictly in canonical order.
        tracing::debug_span!("resolve").in_scope(|| {
            for event in &canonical {
                let (a, b) = (event.a.0 as usize, event.b.0 as usize);
                let (left, right) = self.segments.split_at_mut(b);
                resolve(&mut left[a], &mut right[0], event.verdict);
            }
        });

        // 5. Advance positions.
        #[cfg(feature = "parallel")]
        let pool = self.pool.as_ref();
        #[cfg(not(feature = "parallel"))]
        let pool = ();
        let segments = &mut self.segments;
        tracing::debug_span!("advance").in_scope(|| {
            run_in_pool(pool, || {
                #[cfg(feature = "parallel")]
                {
                    use rayon::prelude::*;
                    segments.par_iter_mut().for_each(|s| advance(s, dt));
                }
                #[cfg(not(feature = "parallel"))]
                {
                    for s in segments.iter_mut() {
                        advance(s, dt);
                    }
                }
            });
        });

        // 6. Wall reflection, then recompute swept parallelograms.
        let bounds = self.config.bounds;
        #[cfg(feature = "parallel")]
        let pool = self.pool.as_ref();
        #[cfg(not(feature = "parallel"))]
        let pool = ();
        let segments = &mut self.segments;
        let wall_hits: u64 = tracing::debug_span!("wall_bounce").in_scope(|| {
            run_in_pool(pool, || {
                #[cfg(feature = "parallel")]
                {
                    use rayon::prelude::*;
                    segments
                        .par_iter_mut()
                        .map(|s| {
                            let hit = wall_bounce(s, bounds);
                            s.refresh_swept(dt);
                            hit as u64
                        })
                        .sum()
                }
                #[cfg(not(feature = "parallel"))]
                {
                    segments
                        .iter_mut()
                        .map(|s| {
                            let hit = wall_bounce(s, bounds);
                            s.refresh_swept(dt);
                            hit as u64
                        })
                        .sum()
                }
            })
        });
        self.num_line_wall_collisions += wall_hits;
    }
}

/// Run `f` on the world's configured pool if the `parallel` feature is on and
/// a pool was configured; otherwise run it on the calling thread.
#[cfg(feature = "parallel")]
fn run_in_pool<R: Send>(pool: Option<&rayon::ThreadPool>, f: impl FnOnce() -> R + Send) -> R {
    match pool {
        Some(pool) => pool.install(f),
        None => f(),
    }
}

#[cfg(not(feature = "parallel"))]
fn run_in_pool<R>(_pool: (), f: impl FnOnce() -> R) -> R {
    f()
}

fn advance(s: &mut Segment, dt: f64) {
    s.p1 += s.velocity * dt;
    s.p2 += s.velocity * dt;
    s.refresh_length();
}

/// Flip the velocity component pointing further outside the box for every
/// wall an endpoint has crossed; returns whether any wall was hit this step.
fn wall_bounce(s: &mut Segment, bounds: Rect) -> bool {
    let lo = bounds.min();
    let hi = bounds.max();
    let mut hit = false;

    if (s.p1.x < lo.x || s.p2.x < lo.x) && s.velocity.x < 0.0 {
        s.velocity.x = -s.velocity.x;
        hit = true;
    }
    if (s.p1.x > hi.x || s.p2.x > hi.x) && s.velocity.x > 0.0 {
        s.velocity.x = -s.velocity.x;
        hit = true;
    }
    if (s.p1.y < lo.y || s.p2.y < lo.y) && s.velocity.y < 0.0 {
        s.velocity.y = -s.velocity.y;
        hit = true;
    }
    if (s.p1.y > hi.y || s.p2.y > hi.y) && s.velocity.y > 0.0 {
        s.velocity.y = -s.velocity.y;
        hit = true;
    }
    hit
}
