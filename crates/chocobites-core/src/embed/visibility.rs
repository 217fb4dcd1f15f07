/// What the host should do after a visibility observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityAction {
    None,
    /// Start the debounce timer; report back with this epoch when it fires.
    ArmDebounce { epoch: u64 },
    /// The post left view before the debounce elapsed.
    CancelDebounce,
}

/// Per-post visibility state.
///
/// Each entry into view starts a new epoch. A load request may be issued at
/// most once per epoch, only after the debounce, and only while unloaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityTracker {
    visible: bool,
    epoch: u64,
    armed: bool,
    requested: bool,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Feed one intersection callback. Repeated reports in the same direction
    /// (threshold crossings while already visible) are ignored.
    pub fn observe(&mut self, intersecting: bool, is_loaded: bool) -> VisibilityAction {
        match (self.visible, intersecting) {
            (false, true) => {
                self.visible = true;
                self.epoch += 1;
                self.requested = false;
                if is_loaded {
                    VisibilityAction::None
                } else {
                    self.armed = true;
                    VisibilityAction::ArmDebounce { epoch: self.epoch }
                }
            }
            (true, false) => {
                self.visible = false;
                if std::mem::take(&mut self.armed) {
                    VisibilityAction::CancelDebounce
                } else {
                    VisibilityAction::None
                }
            }
            _ => VisibilityAction::None,
        }
    }

    /// The debounce for `epoch` elapsed. Returns whether to request a load now.
    pub fn debounce_elapsed(&mut self, epoch: u64, is_loaded: bool) -> bool {
        if epoch != self.epoch || !self.armed {
            return false;
        }
        self.armed = false;
        if !self.visible || is_loaded || self.requested {
            return false;
        }
        self.requested = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_then_debounce_requests_once() {
        let mut t = VisibilityTracker::new();
        let VisibilityAction::ArmDebounce { epoch } = t.observe(true, false) else {
            panic!("expected debounce");
        };
        // More threshold crossings while visible.
        assert_eq!(t.observe(true, false), VisibilityAction::None);
        assert!(t.debounce_elapsed(epoch, false));
        assert!(!t.debounce_elapsed(epoch, false));
    }

    #[test]
    fn test_loaded_post_never_arms() {
        let mut t = VisibilityTracker::new();
        assert_eq!(t.observe(true, true), VisibilityAction::None);
        assert!(!t.debounce_elapsed(t.epoch(), true));
    }

    #[test]
    fn test_loaded_during_debounce() {
        let mut t = VisibilityTracker::new();
        let VisibilityAction::ArmDebounce { epoch } = t.observe(true, false) else {
            panic!("expected debounce");
        };
        assert!(!t.debounce_elapsed(epoch, true));
    }

    #[test]
    fn test_fast_scroll_cancels() {
        let mut t = VisibilityTracker::new();
        let VisibilityAction::ArmDebounce { epoch } = t.observe(true, false) else {
            panic!("expected debounce");
        };
        assert_eq!(t.observe(false, false), VisibilityAction::CancelDebounce);
        assert!(!t.debounce_elapsed(epoch, false));
    }

    #[test]
    fn test_reentry_retriggers_if_still_unloaded() {
        let mut t = VisibilityTracker::new();
        let VisibilityAction::ArmDebounce { epoch: first } = t.observe(true, false) else {
            panic!("expected debounce");
        };
        assert!(t.debounce_elapsed(first, false));
        assert_eq!(t.observe(false, false), VisibilityAction::None);

        let VisibilityAction::ArmDebounce { epoch: second } = t.observe(true, false) else {
            panic!("expected debounce");
        };
        assert_ne!(first, second);
        // A late timer from the first interval does nothing.
        assert!(!t.debounce_elapsed(first, false));
        assert!(t.debounce_elapsed(second, false));
    }
}
