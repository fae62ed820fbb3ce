// Drag-to-rotation tracker fed by canvas pointer events

/// Rotation change applied per move event, independent of pointer distance.
pub const DEFAULT_STEP: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Session {
    Idle,
    Dragging { last_x: f64, last_y: f64 },
}

/// Accumulates a `(rx, ry)` rotation offset while the pointer is held down.
///
/// Only the direction of each move matters: every move event nudges each axis
/// by `step` towards the sign of the pointer delta. Releasing the pointer
/// snaps the rotation back to zero.
#[derive(Debug, Clone)]
pub struct DragRotation {
    step: f32,
    rx: f32,
    ry: f32,
    session: Session,
}

impl Default for DragRotation {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl DragRotation {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            rx: 0.0,
            ry: 0.0,
            session: Session::Idle,
        }
    }

    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.session = Session::Dragging { last_x: x, last_y: y };
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let Session::Dragging { last_x, last_y } = self.session else {
            return;
        };
        let offset_x = x - last_x;
        let offset_y = y - last_y;
        self.session = Session::Dragging { last_x: x, last_y: y };
        self.rx += signed_step(offset_x, self.step);
        self.ry += signed_step(offset_y, self.step);
    }

    pub fn on_pointer_up(&mut self) {
        self.session = Session::Idle;
        self.rx = 0.0;
        self.ry = 0.0;
    }

    pub fn current_rotation(&self) -> (f32, f32) {
        (self.rx, self.ry)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.session, Session::Dragging { .. })
    }
}

// NaN compares false both ways, so it falls through to zero.
fn signed_step(offset: f64, step: f32) -> f32 {
    if offset > 0.0 {
        step
    } else if offset < 0.0 {
        -step
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-6 && (a.1 - b.1).abs() < 1e-6
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut d = DragRotation::default();
        for (x, y) in [(1.0, 2.0), (50.0, -3.0), (-100.0, 7.5)] {
            d.on_pointer_move(x, y);
        }
        assert_eq!(d.current_rotation(), (0.0, 0.0));
        assert!(!d.is_dragging());
    }

    #[test]
    fn step_ignores_distance() {
        let mut d = DragRotation::default();
        d.on_pointer_down(5.0, 5.0);
        d.on_pointer_move(10.0, 5.0);
        assert_eq!(d.current_rotation(), (DEFAULT_STEP, 0.0));

        let mut d = DragRotation::default();
        d.on_pointer_down(5.0, 5.0);
        d.on_pointer_move(3.0, 5.0);
        assert_eq!(d.current_rotation(), (-DEFAULT_STEP, 0.0));
    }

    #[test]
    fn zero_delta_leaves_rotation() {
        let mut d = DragRotation::default();
        d.on_pointer_down(5.0, 5.0);
        d.on_pointer_move(5.0, 5.0);
        assert_eq!(d.current_rotation(), (0.0, 0.0));
        assert!(d.is_dragging());
    }

    #[test]
    fn release_resets_rotation() {
        let mut d = DragRotation::default();
        d.on_pointer_down(0.0, 0.0);
        for i in 1..=20 {
            d.on_pointer_move(i as f64, -(i as f64));
        }
        assert!(close(d.current_rotation(), (0.2, -0.2)));
        d.on_pointer_up();
        assert_eq!(d.current_rotation(), (0.0, 0.0));
        assert!(!d.is_dragging());

        // idle release is harmless
        d.on_pointer_up();
        assert_eq!(d.current_rotation(), (0.0, 0.0));
    }

    #[test]
    fn drag_scenario() {
        let mut d = DragRotation::default();
        d.on_pointer_down(0.0, 0.0);
        d.on_pointer_move(1.0, 0.0);
        assert!(close(d.current_rotation(), (0.01, 0.0)));
        d.on_pointer_move(2.0, 0.0);
        assert!(close(d.current_rotation(), (0.02, 0.0)));
        d.on_pointer_move(2.0, 5.0);
        assert!(close(d.current_rotation(), (0.02, 0.01)));
        d.on_pointer_up();
        assert_eq!(d.current_rotation(), (0.0, 0.0));
    }

    #[test]
    fn repeated_down_overwrites_last_position() {
        let mut d = DragRotation::default();
        d.on_pointer_down(0.0, 0.0);
        d.on_pointer_down(10.0, 10.0);
        d.on_pointer_move(5.0, 10.0);
        assert_eq!(d.current_rotation(), (-DEFAULT_STEP, 0.0));
    }

    #[test]
    fn nan_coordinates_do_not_step() {
        let mut d = DragRotation::default();
        d.on_pointer_down(0.0, 0.0);
        d.on_pointer_move(f64::NAN, 1.0);
        assert_eq!(d.current_rotation(), (0.0, DEFAULT_STEP));
    }

    #[test]
    fn custom_step() {
        let mut d = DragRotation::new(0.5);
        d.on_pointer_down(0.0, 0.0);
        d.on_pointer_move(-1.0, 300.0);
        assert_eq!(d.current_rotation(), (-0.5, 0.5));
    }
}
