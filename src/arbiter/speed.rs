//! Speed based rescan hints

/// True if moving from `previous` to `current` m/s crosses any threshold upward.
///
/// A threshold at or below zero means "started moving" and fires only when the
/// speed leaves it; higher thresholds fire when the speed reaches them.
pub fn crossed_upward(previous: f64, current: f64, thresholds: &[f64]) -> bool {
    thresholds.iter().any(|&threshold| {
        if threshold <= 0.0 {
            previous <= threshold && current > threshold
        } else {
            previous < threshold && current >= threshold
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: [f64; 2] = [0.0, 5.0];

    #[test]
    fn test_start_moving() {
        assert!(crossed_upward(0.0, 3.0, &THRESHOLDS));
        assert!(!crossed_upward(0.0, 0.0, &THRESHOLDS));
    }

    #[test]
    fn test_steady_speed() {
        assert!(!crossed_upward(3.0, 4.0, &THRESHOLDS));
        assert!(!crossed_upward(6.0, 7.0, &THRESHOLDS));
    }

    #[test]
    fn test_reaching_fast_threshold() {
        assert!(crossed_upward(4.0, 6.0, &THRESHOLDS));
        assert!(crossed_upward(4.0, 5.0, &THRESHOLDS));
    }

    #[test]
    fn test_slowing_down_is_silent() {
        assert!(!crossed_upward(6.0, 2.0, &THRESHOLDS));
        assert!(!crossed_upward(2.0, 0.0, &THRESHOLDS));
    }

    #[test]
    fn test_no_thresholds() {
        assert!(!crossed_upward(0.0, 10.0, &[]));
    }
}
