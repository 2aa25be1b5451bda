// Cell transitions - eased fill/elevation changes after a toggle

use crate::display::cell::CellAppearance;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EasingType {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl EasingType {
    /// Map linear progress `t` in 0..=1 onto the easing curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseIn => t * t * t,
            EasingType::EaseOut => {
                let u = 1.0 - t;
                1.0 - (u * u * u)
            }
            EasingType::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 1.0 - t;
                    1.0 - 4.0 * u * u * u
                }
            }
        }
    }
}

/// One running appearance change for a single cell
#[derive(Debug, Clone)]
pub struct CellTransition {
    pub from: CellAppearance,
    pub to: CellAppearance,
    pub start_time: Instant,
    pub duration: Duration,
    pub easing: EasingType,
}

impl CellTransition {
    pub fn new(
        from: CellAppearance,
        to: CellAppearance,
        start_time: Instant,
        duration: Duration,
        easing: EasingType,
    ) -> Self {
        Self {
            from,
            to,
            start_time,
            duration,
            easing,
        }
    }

    /// Linear progress (0.0 to 1.0) at `now`
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        if elapsed >= self.duration {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        }
    }

    pub fn appearance(&self, now: Instant) -> CellAppearance {
        let eased = self.easing.apply(self.progress(now));
        self.from.lerp(self.to, eased)
    }

    pub fn is_completed(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 4] = [
        EasingType::Linear,
        EasingType::EaseIn,
        EasingType::EaseOut,
        EasingType::EaseInOut,
    ];

    #[test]
    fn test_easing_endpoints() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?}", easing);
        }
        assert!((EasingType::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_easing_monotone() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 1..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(value >= previous, "{:?} dipped at step {}", easing, step);
                previous = value;
            }
        }
    }

    #[test]
    fn test_ease_in_out_is_slow_at_the_edges() {
        let easing = EasingType::EaseInOut;
        assert!(easing.apply(0.1) < 0.1);
        assert!(easing.apply(0.9) > 0.9);
    }

    #[test]
    fn test_transition_progress() {
        let start = Instant::now();
        let transition = CellTransition::new(
            CellAppearance::for_state(false),
            CellAppearance::for_state(true),
            start,
            Duration::from_millis(200),
            EasingType::EaseInOut,
        );

        assert_eq!(transition.appearance(start), CellAppearance::for_state(false));
        assert!(!transition.is_completed(start + Duration::from_millis(100)));
        assert!((transition.progress(start + Duration::from_millis(100)) - 0.5).abs() < 1e-3);
        assert!(transition.is_completed(start + Duration::from_millis(200)));
        assert_eq!(
            transition.appearance(start + Duration::from_secs(1)),
            CellAppearance::for_state(true)
        );
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let start = Instant::now();
        let transition = CellTransition::new(
            CellAppearance::for_state(true),
            CellAppearance::for_state(false),
            start,
            Duration::ZERO,
            EasingType::Linear,
        );
        assert!(transition.is_completed(start));
        assert_eq!(transition.appearance(start), CellAppearance::for_state(false));
    }
}
