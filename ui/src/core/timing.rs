//! Timer utilities for section coroutines.

/// Suspend the current task for `ms` milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let clamped = ms.min(u64::from(u32::MAX)) as u32;
    gloo_timers::future::TimeoutFuture::new(clamped).await;
}

/// Suspend the current task for `ms` milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
