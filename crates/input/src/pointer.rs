/// Whether mouse motion is captured for looking around.
///
/// A click requests the lock; Escape or losing focus releases it. Mouse
/// deltas are only forwarded to the camera while locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerLock {
    #[default]
    Unlocked,
    Locked,
}

impl PointerLock {
    pub fn is_locked(&self) -> bool {
        *self == PointerLock::Locked
    }

    /// Enter the locked state. Returns true if this changed anything.
    pub fn request(&mut self) -> bool {
        let changed = !self.is_locked();
        if changed {
            tracing::debug!("pointer locked");
        }
        *self = PointerLock::Locked;
        changed
    }

    /// Leave the locked state. Returns true if this changed anything.
    pub fn release(&mut self) -> bool {
        let changed = self.is_locked();
        if changed {
            tracing::debug!("pointer unlocked");
        }
        *self = PointerLock::Unlocked;
        changed
    }

    /// Pass a raw mouse delta through while locked.
    pub fn look_delta(&self, dx: f64, dy: f64) -> Option<(f32, f32)> {
        self.is_locked().then_some((dx as f32, dy as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unlocked_and_ignores_motion() {
        let lock = PointerLock::default();
        assert!(!lock.is_locked());
        assert_eq!(lock.look_delta(4.0, -2.0), None);
    }

    #[test]
    fn request_then_release() {
        let mut lock = PointerLock::default();
        assert!(lock.request());
        assert!(!lock.request());
        assert_eq!(lock.look_delta(4.0, -2.0), Some((4.0, -2.0)));
        assert!(lock.release());
        assert!(!lock.release());
        assert_eq!(lock.look_delta(1.0, 1.0), None);
    }
}
