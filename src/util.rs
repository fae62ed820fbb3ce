// Small helpers shared by the view and the demos

/// Fraction of the current second, used to scroll textures.
pub fn scroll_phase(now_ms: f64) -> f32 {
    (now_ms.rem_euclid(1000.0) / 1000.0) as f32
}

/// Canvas size that fills the window below the top bar.
pub fn fit_below(window_w: f64, window_h: f64, bar_h: f64) -> (u32, u32) {
    (window_w.max(0.0) as u32, (window_h - bar_h).max(0.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_wraps_every_second() {
        assert_eq!(scroll_phase(0.0), 0.0);
        assert_eq!(scroll_phase(250.0), 0.25);
        assert_eq!(scroll_phase(1_700_000_000_500.0), 0.5);
        assert!(scroll_phase(999.0) < 1.0);
    }

    #[test]
    fn canvas_never_goes_negative() {
        assert_eq!(fit_below(800.0, 600.0, 40.0), (800, 560));
        assert_eq!(fit_below(800.0, 20.0, 40.0), (800, 0));
    }
}
