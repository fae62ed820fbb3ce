// Per-frame rotation for the demos that turn on their own

/// Rotation angle that advances by a fixed `step` every rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub angle: f32,
    pub step: f32,
}

impl Spin {
    pub fn new(step: f32) -> Self {
        Self { angle: 0.0, step }
    }

    /// Advances one frame and returns the angle to draw with.
    pub fn tick(&mut self) -> f32 {
        self.angle += self.step;
        self.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_before_drawing() {
        let mut s = Spin::new(0.01);
        assert!((s.tick() - 0.01).abs() < 1e-6);
        assert!((s.tick() - 0.02).abs() < 1e-6);
        assert!((s.angle - 0.02).abs() < 1e-6);
    }

    #[test]
    fn zero_step_holds_still() {
        let mut s = Spin::new(0.0);
        for _ in 0..10 {
            s.tick();
        }
        assert_eq!(s.angle, 0.0);
    }
}
