//! Timer seam for the celebration delay.

use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

#[async_trait(?Send)]
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}

/// `setTimeout`-backed clock
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

#[async_trait(?Send)]
impl Clock for BrowserClock {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
