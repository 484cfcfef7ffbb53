//! Background animation state management.

use rand::{Rng, SeedableRng, rngs::StdRng};
use ratatui::{Frame, layout::Rect as Area};
use tracing::{debug, info};
use whirl_core::{Cursor, Dimensions, FieldSettings, HUE_STEP, Rect, ShapeKind};

use crate::color::background_color;
use crate::field::Field;
use crate::sketch::Sketch;
use crate::surface::Surface;

/// Whether the animation loop has been started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoopPhase {
    #[default]
    Idle,
    Running,
}

/// Background animation state.
#[derive(Debug, Clone)]
pub struct BackgroundState {
    /// Loop phase; only a running loop draws.
    phase: LoopPhase,
    /// Background hue in degrees, [0, 360).
    hue: f64,
    /// Shape every object is drawn as.
    shape: ShapeKind,
    /// Last known pointer state.
    cursor: Cursor,
    /// Canvas size in pixels.
    dimensions: Dimensions,
    /// Size of the reserved area before clipping to the canvas.
    safe_area_size: (f64, f64),
    /// Reserved area for the current canvas.
    safe_area: Rect,
    /// Configured object count.
    count: usize,
    /// Configured object size.
    size: f64,
    /// The objects themselves.
    field: Field,
    /// Frames drawn since start.
    frames: u64,
}

impl BackgroundState {
    /// Create a populated, idle background.
    ///
    /// With a seed both the starting hue and every placement are reproducible.
    pub fn new(settings: FieldSettings, dimensions: Dimensions, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let hue = rng.random_range(0.0..360.0);

        let settings = settings.clamped();
        let safe_area_size = (settings.safe_area_width, settings.safe_area_height);
        let safe_area = Rect::centered(dimensions, safe_area_size.0, safe_area_size.1);
        let mut field = Field::new(rng);
        field.populate(settings.count, settings.size, dimensions, safe_area);

        Self {
            phase: LoopPhase::Idle,
            hue,
            shape: settings.shape,
            cursor: Cursor::centered(dimensions),
            dimensions,
            safe_area_size,
            safe_area,
            count: settings.count,
            size: settings.size,
            field,
            frames: 0,
        }
    }

    /// Move from idle to running. Starting twice is a no-op.
    pub fn start(&mut self) {
        if self.phase == LoopPhase::Idle {
            info!(
                count = self.count,
                shape = %self.shape,
                hue = self.hue,
                "animation started"
            );
            self.phase = LoopPhase::Running;
        }
    }

    /// Draw one frame onto `surface`.
    ///
    /// Returns `false` without touching the surface while idle.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> bool {
        if self.phase != LoopPhase::Running {
            return false;
        }

        self.hue = (self.hue + HUE_STEP).rem_euclid(360.0);
        surface.set_background(background_color(self.hue));
        surface.clear();

        let cursor = self.cursor;
        let shape = self.shape;
        let hue = self.hue;
        for object in self.field.objects_mut() {
            object.update(cursor, surface, hue, shape);
        }

        self.frames += 1;
        true
    }

    /// Draw one frame into the ratatui frame, covering `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Area) {
        let mut sketch = Sketch::new(self.dimensions);
        if self.tick(&mut sketch) {
            frame.render_widget(&sketch, area);
        }
    }

    /// Pointer moved over the canvas.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor = Cursor {
            x,
            y,
            hovering: true,
        };
    }

    /// Pointer left the canvas; its last position is kept.
    pub fn on_pointer_leave(&mut self) {
        self.cursor.hovering = false;
    }

    /// Canvas changed size: recompute the safe area and repopulate.
    pub fn on_resize(&mut self, dimensions: Dimensions) {
        info!(
            width = dimensions.width,
            height = dimensions.height,
            "canvas resized"
        );
        self.dimensions = dimensions;
        self.repopulate();
    }

    /// Change the object count, keeping existing objects where possible.
    pub fn set_count(&mut self, count: usize) {
        let count = FieldSettings::clamp_count(count);
        debug!(from = self.count, to = count, "object count changed");
        self.count = count;
        self.field.resize(count, self.size);
    }

    /// Resize every object in place.
    pub fn set_size(&mut self, size: f64) {
        let size = FieldSettings::clamp_size(size);
        debug!(size, "object size changed");
        self.size = size;
        self.field.set_size(size);
    }

    /// Switch shape kind and rebuild the field from scratch.
    pub fn set_shape(&mut self, shape: ShapeKind) {
        let dimensions = self.dimensions;
        self.reset(shape, dimensions);
    }

    /// Switch shape kind for a canvas of `dimensions` and rebuild the field.
    pub fn reset(&mut self, shape: ShapeKind, dimensions: Dimensions) {
        info!(shape = %shape, "field reset");
        self.shape = shape;
        self.dimensions = dimensions;
        self.repopulate();
    }

    fn repopulate(&mut self) {
        self.safe_area = Rect::centered(self.dimensions, self.safe_area_size.0, self.safe_area_size.1);
        self.field
            .populate(self.count, self.size, self.dimensions, self.safe_area);
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn safe_area(&self) -> Rect {
        self.safe_area
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::shape_color;
    use crate::testing::{Op, RecordingSurface};
    use whirl_core::HOVER_SPEED;

    fn dims() -> Dimensions {
        Dimensions::new(800.0, 480.0)
    }

    fn state(count: usize) -> BackgroundState {
        let settings = FieldSettings {
            count,
            ..Default::default()
        };
        BackgroundState::new(settings, dims(), Some(42))
    }

    fn running(count: usize) -> BackgroundState {
        let mut state = state(count);
        state.start();
        state
    }

    #[test]
    fn test_idle_tick_draws_nothing() {
        let mut state = state(10);
        let hue = state.hue();
        let mut surface = RecordingSurface::default();
        assert!(!state.tick(&mut surface));
        assert!(surface.ops.is_empty());
        assert_eq!(state.hue(), hue);
        assert_eq!(state.frames(), 0);
    }

    #[test]
    fn test_start_is_one_way() {
        let mut state = state(1);
        assert_eq!(state.phase(), LoopPhase::Idle);
        state.start();
        state.start();
        assert_eq!(state.phase(), LoopPhase::Running);
    }

    #[test]
    fn test_frame_order() {
        let mut state = running(3);
        let mut surface = RecordingSurface::default();
        assert!(state.tick(&mut surface));

        let hue = state.hue();
        assert_eq!(surface.ops[0], Op::SetBackground(background_color(hue)));
        assert_eq!(surface.ops[1], Op::Clear);
        assert_eq!(surface.count(&Op::Save), 3);
        assert_eq!(surface.count(&Op::Restore), 3);
        assert_eq!(surface.count(&Op::SetColor(shape_color(hue))), 3);

        // Objects are drawn in field order.
        let translations: Vec<Op> = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Translate(..)))
            .cloned()
            .collect();
        let expected: Vec<Op> = state
            .field()
            .objects()
            .iter()
            .map(|o| Op::Translate(o.x, o.y))
            .collect();
        assert_eq!(translations, expected);
    }

    #[test]
    fn test_hue_advances_and_wraps() {
        let mut state = running(1);
        let mut surface = RecordingSurface::default();
        let start = state.hue();
        state.tick(&mut surface);
        assert!(((state.hue() - start).rem_euclid(360.0) - HUE_STEP).abs() < 1e-9);

        for _ in 0..4000 {
            state.tick(&mut surface);
            surface.ops.clear();
            assert!((0.0..360.0).contains(&state.hue()));
        }
        assert_eq!(state.frames(), 4001);
    }

    #[test]
    fn test_hover_speeds_up_nearby_objects() {
        let mut state = running(50);
        let target = state.field().objects()[0].clone();
        state.on_pointer_move(target.x, target.y);
        state.tick(&mut RecordingSurface::default());

        let object = &state.field().objects()[0];
        assert_eq!(object.target_speed, HOVER_SPEED);

        state.on_pointer_leave();
        assert!(!state.cursor().hovering);
        assert_eq!(state.cursor().x, target.x);
        state.tick(&mut RecordingSurface::default());
        assert!(
            state
                .field()
                .objects()
                .iter()
                .all(|o| o.target_speed == o.default_speed)
        );
    }

    #[test]
    fn test_set_count_grows_and_shrinks() {
        let mut state = running(100);
        let before = state.field().objects().to_vec();
        state.set_count(120);
        assert_eq!(state.field().len(), 120);
        assert_eq!(&state.field().objects()[..100], &before[..]);

        state.set_count(30);
        assert_eq!(state.count(), 30);
        assert_eq!(state.field().objects(), &before[..30]);
    }

    #[test]
    fn test_set_count_clamps() {
        let mut state = running(10);
        state.set_count(0);
        assert_eq!(state.field().len(), 1);
        state.set_count(10_000);
        assert_eq!(state.field().len(), whirl_core::MAX_COUNT);
    }

    #[test]
    fn test_set_size_keeps_positions() {
        let mut state = running(20);
        let before = state.field().objects().to_vec();
        state.set_size(40.0);
        assert_eq!(state.size(), 40.0);
        for (after, before) in state.field().objects().iter().zip(&before) {
            assert_eq!(after.size, 40.0);
            assert_eq!((after.x, after.y, after.angle), (before.x, before.y, before.angle));
        }
    }

    #[test]
    fn test_set_shape_repopulates() {
        let mut state = running(100);
        assert_eq!(state.shape(), ShapeKind::Line);
        let before = state.field().objects().to_vec();

        state.set_shape(ShapeKind::Triangle);
        assert_eq!(state.shape(), ShapeKind::Triangle);
        assert_eq!(state.field().len(), 100);
        assert_ne!(state.field().objects(), &before[..]);
        let safe_area = state.safe_area();
        for object in state.field().objects() {
            assert_eq!(object.size, 25.0);
            assert!(!safe_area.contains(object.x, object.y));
        }

        let mut surface = RecordingSurface::default();
        state.tick(&mut surface);
        assert_eq!(surface.count(&Op::Fill), 100);
        assert_eq!(surface.count(&Op::Stroke), 0);
    }

    #[test]
    fn test_resize_recomputes_safe_area() {
        let mut state = running(40);
        let smaller = Dimensions::new(400.0, 240.0);
        state.on_resize(smaller);
        assert_eq!(state.dimensions(), smaller);
        assert_eq!(state.safe_area(), Rect::new(40.0, 54.0, 320.0, 132.0));
        assert_eq!(state.field().len(), 40);
        for object in state.field().objects() {
            assert!(object.x < 400.0 && object.y < 240.0);
            assert!(!state.safe_area().contains(object.x, object.y));
        }
    }

    #[test]
    fn test_resize_to_tiny_canvas_terminates() {
        let mut state = running(100);
        state.on_resize(Dimensions::new(16.0, 16.0));
        assert_eq!(state.field().len(), 100);
        assert_eq!(state.safe_area(), Rect::new(0.0, 0.0, 16.0, 16.0));
    }

    #[test]
    fn test_seeded_states_match() {
        let a = state(25);
        let b = state(25);
        assert_eq!(a.hue(), b.hue());
        assert_eq!(a.field().objects(), b.field().objects());
        assert!((0.0..360.0).contains(&a.hue()));
    }
}
