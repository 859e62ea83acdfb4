//! Reduced-motion policy shared by every animated element

/// Media query for the OS-level reduced motion preference
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

const STANDARD_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

/// Process-wide motion state.
///
/// Starts out as `false/false` so the server render and the first client
/// render agree; [`MotionPolicy::mount`] then fills in the real preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPolicy {
    reduced_motion_requested: bool,
    mounted: bool,
}

impl MotionPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the preference read at mount time. `mounted` never reverts.
    pub fn mount(&mut self, reduced_motion_requested: bool) {
        self.mounted = true;
        self.reduced_motion_requested = reduced_motion_requested;
    }

    /// Apply a preference change event.
    pub fn set_reduced_motion(&mut self, reduced_motion_requested: bool) {
        self.reduced_motion_requested = reduced_motion_requested;
    }

    pub fn reduced_motion_requested(&self) -> bool {
        self.reduced_motion_requested
    }

    pub fn mounted(&self) -> bool {
        self.mounted
    }

    pub fn transition(&self) -> MotionTransition {
        if self.reduced_motion_requested {
            MotionTransition {
                duration_secs: 0.01,
                easing: "linear",
            }
        } else {
            MotionTransition {
                duration_secs: 0.6,
                easing: STANDARD_EASING,
            }
        }
    }
}

/// Default transition timing derived from the policy
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionTransition {
    pub duration_secs: f64,
    pub easing: &'static str,
}

impl MotionTransition {
    /// CSS custom properties consumed by the stylesheet.
    pub fn css_variables(&self) -> String {
        format!(
            "--motion-duration: {}s; --motion-easing: {};",
            self.duration_secs, self.easing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let policy = MotionPolicy::new();
        assert!(!policy.mounted());
        assert!(!policy.reduced_motion_requested());
    }

    #[test]
    fn test_mount_records_preference() {
        let mut policy = MotionPolicy::new();
        policy.mount(true);
        assert!(policy.mounted());
        assert!(policy.reduced_motion_requested());
    }

    #[test]
    fn test_mounted_never_reverts() {
        let mut policy = MotionPolicy::new();
        policy.mount(false);
        policy.set_reduced_motion(true);
        policy.set_reduced_motion(false);
        assert!(policy.mounted());
        assert!(!policy.reduced_motion_requested());
    }

    #[test]
    fn test_transition_timing() {
        let mut policy = MotionPolicy::new();
        assert_eq!(policy.transition().duration_secs, 0.6);

        policy.mount(true);
        let transition = policy.transition();
        assert_eq!(transition.duration_secs, 0.01);
        assert_eq!(transition.easing, "linear");
        assert_eq!(
            transition.css_variables(),
            "--motion-duration: 0.01s; --motion-easing: linear;"
        );
    }
}
