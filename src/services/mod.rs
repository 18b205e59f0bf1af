use std::sync::atomic::{AtomicBool, Ordering};

pub mod indexer_service;
pub mod metadata_cache;
pub mod network_config;
pub mod rpc_client;
pub mod token_api;
pub mod wallet_service;

/// RAII guard around an in-flight flag. Acquisition fails while another
/// holder is alive; the flag clears when the guard drops.
pub struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> FlightGuard<'a> {
    pub fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self { flag })
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_is_exclusive_and_clears_on_drop() {
        let flag = AtomicBool::new(false);

        let guard = FlightGuard::try_acquire(&flag).unwrap();
        assert!(FlightGuard::try_acquire(&flag).is_none());

        drop(guard);
        assert!(FlightGuard::try_acquire(&flag).is_some());
    }
}
