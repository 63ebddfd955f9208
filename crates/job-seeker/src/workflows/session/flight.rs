use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Admits at most one operation at a time; a second caller is turned away
/// instead of queued.
#[derive(Debug, Clone, Default)]
pub struct SingleFlight {
    busy: Arc<AtomicBool>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot, or `None` while another holder is in flight.
    pub fn try_begin(&self) -> Option<FlightGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FlightGuard {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases its [`SingleFlight`] slot when dropped.
#[derive(Debug)]
pub struct FlightGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::SingleFlight;

    #[test]
    fn second_caller_is_rejected_until_release() {
        let flight = SingleFlight::new();
        let guard = flight.try_begin().expect("first caller admitted");
        assert!(flight.is_busy());
        assert!(flight.try_begin().is_none());

        drop(guard);
        assert!(!flight.is_busy());
        assert!(flight.try_begin().is_some());
    }

    #[test]
    fn clones_share_the_same_slot() {
        let flight = SingleFlight::new();
        let other = flight.clone();
        let _guard = flight.try_begin().expect("admitted");
        assert!(other.try_begin().is_none());
    }
}
