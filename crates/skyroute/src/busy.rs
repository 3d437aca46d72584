use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Observable "search in progress" state of a session.
///
/// Clones observe the same flag. The flag is raised while at least one
/// [`BusyGuard`] is alive, so a solve and a front end holding the session
/// (during replay, say) can overlap without one clearing the other.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicUsize>);

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire) > 0
    }

    pub(crate) fn enter(&self) -> BusyGuard {
        self.0.fetch_add(1, Ordering::AcqRel);
        BusyGuard(self.clone())
    }
}

/// Keeps its [`BusyFlag`] raised until dropped.
#[derive(Debug)]
#[must_use = "the flag drops back as soon as the guard is dropped"]
pub struct BusyGuard(BusyFlag);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        (self.0).0.fetch_sub(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_clears_on_drop() {
        let flag = BusyFlag::new();
        let observer = flag.clone();
        {
            let _guard = flag.enter();
            assert!(observer.is_busy());
        }
        assert!(!observer.is_busy());
    }

    #[test]
    fn overlapping_guards() {
        let flag = BusyFlag::new();
        let outer = flag.enter();
        {
            let _inner = flag.enter();
        }
        assert!(flag.is_busy());
        drop(outer);
        assert!(!flag.is_busy());
    }

    #[test]
    fn guard_clears_on_unwind() {
        let flag = BusyFlag::new();
        let inner = flag.clone();
        let res = std::panic::catch_unwind(move || {
            let _guard = inner.enter();
            panic!("search blew up");
        });
        assert!(res.is_err());
        assert!(!flag.is_busy());
    }
}
