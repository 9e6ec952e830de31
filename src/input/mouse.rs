use glam::Vec2;

/// Turns absolute cursor positions into look deltas.
///
/// The first sample after construction or [`reset`](Self::reset) anchors
/// the cursor and reports a zero delta, so the jump from wherever the
/// cursor happened to be does not slew the camera. Vertical deltas are
/// flipped from screen space (y grows downward) into look space
/// (positive = pitch up).
#[derive(Debug, Default)]
pub struct MouseLook {
    last_pos: Option<Vec2>,
}

impl MouseLook {
    /// Create a tracker with no anchor.
    #[must_use]
    pub fn new() -> Self {
        Self { last_pos: None }
    }

    /// Feed an absolute cursor position, returning the look delta since
    /// the previous sample (zero for the anchoring sample).
    pub fn sample(&mut self, x: f32, y: f32) -> Vec2 {
        let current = Vec2::new(x, y);
        let delta = self.last_pos.map_or(Vec2::ZERO, |last| {
            Vec2::new(current.x - last.x, last.y - current.y)
        });
        self.last_pos = Some(current);
        delta
    }

    /// Forget the anchor.
    ///
    /// Call when the cursor teleports out from under the tracker:
    /// focus loss, capture toggle, or cursor re-grab.
    pub fn reset(&mut self) {
        self.last_pos = None;
    }
}
