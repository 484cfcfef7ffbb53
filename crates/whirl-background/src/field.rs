//! The field of rotating objects and its placement policy.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;
use whirl_core::{Dimensions, Rect};

use crate::object::AnimatedObject;

/// Random draws tried before an object is pushed out of the safe area.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// Where a placement ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// A random draw landed outside the safe area.
    Sampled(f64, f64),
    /// Every draw landed inside; the last one was moved to the nearest edge.
    Clipped(f64, f64),
}

impl Placement {
    pub fn position(self) -> (f64, f64) {
        match self {
            Placement::Sampled(x, y) | Placement::Clipped(x, y) => (x, y),
        }
    }
}

/// Pick a uniformly random point on the canvas outside `safe_area`.
///
/// Gives up after [`MAX_PLACEMENT_ATTEMPTS`] draws, so it terminates even
/// when the safe area covers the whole canvas.
pub fn place<R: Rng>(rng: &mut R, dimensions: Dimensions, safe_area: Rect) -> Placement {
    let mut last = (0.0, 0.0);
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let x = sample_axis(rng, dimensions.width);
        let y = sample_axis(rng, dimensions.height);
        if !safe_area.contains(x, y) {
            return Placement::Sampled(x, y);
        }
        last = (x, y);
    }
    let (x, y) = safe_area.nearest_outside(last.0, last.1);
    Placement::Clipped(x, y)
}

fn sample_axis<R: Rng>(rng: &mut R, extent: f64) -> f64 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

/// Ordered collection of animated objects plus what is needed to place new ones.
#[derive(Debug, Clone)]
pub struct Field {
    objects: Vec<AnimatedObject>,
    dimensions: Dimensions,
    safe_area: Rect,
    rng: StdRng,
}

impl Field {
    /// An empty field drawing randomness from `rng`.
    pub fn new(rng: StdRng) -> Self {
        Self {
            objects: Vec::new(),
            dimensions: Dimensions::default(),
            safe_area: Rect::default(),
            rng,
        }
    }

    /// An empty field with a reproducible placement sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Replace every object with `count` freshly placed ones.
    pub fn populate(&mut self, count: usize, size: f64, dimensions: Dimensions, safe_area: Rect) {
        self.dimensions = dimensions;
        self.safe_area = safe_area;
        self.objects.clear();
        self.spawn(count, size);
    }

    /// Grow by appending new objects or shrink by dropping the newest.
    pub fn resize(&mut self, new_count: usize, size: f64) {
        if new_count > self.objects.len() {
            self.spawn(new_count - self.objects.len(), size);
        } else {
            self.objects.truncate(new_count);
        }
    }

    /// Give every existing object the same size.
    pub fn set_size(&mut self, size: f64) {
        for object in &mut self.objects {
            object.size = size;
        }
    }

    pub fn objects(&self) -> &[AnimatedObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [AnimatedObject] {
        &mut self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn safe_area(&self) -> Rect {
        self.safe_area
    }

    fn spawn(&mut self, count: usize, size: f64) {
        self.objects.reserve(count);
        let mut clipped = 0usize;
        for _ in 0..count {
            let placement = place(&mut self.rng, self.dimensions, self.safe_area);
            if matches!(placement, Placement::Clipped(..)) {
                clipped += 1;
            }
            let (x, y) = placement.position();
            let angle = self.rng.random_range(0.0..TAU);
            self.objects.push(AnimatedObject::new(x, y, size, angle));
        }
        if clipped > 0 {
            debug!(clipped, count, "placement fell back to safe area edge");
        }
    }
}
