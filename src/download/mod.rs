// SPDX-License-Identifier: MPL-2.0
//! Hand-off to the external download-execution service.
//!
//! Only the enqueue step lives here; the actual file transfer happens in a
//! separate service that reports progress through its own surface.

use crate::catalog::PhotoId;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Abstract download-execution service.
///
/// Implementations receive the selected photo identifiers and resolve once
/// the queue has been created (or rejected). The controller never calls
/// this directly; the shell executes it on behalf of an
/// [`Effect::Enqueue`](crate::picker::Effect::Enqueue).
#[async_trait]
pub trait DownloadQueue: Send + Sync {
    async fn enqueue(&self, photos: Vec<PhotoId>) -> Result<()>;
}

/// Placeholder queue used by the standalone shell.
///
/// Accepts every request after a short artificial delay, which keeps the
/// `Requesting` state visible long enough to exercise the duplicate-submit
/// guard interactively.
#[derive(Debug, Clone)]
pub struct SimulatedQueue {
    delay: Duration,
}

impl SimulatedQueue {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedQueue {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl DownloadQueue for SimulatedQueue {
    async fn enqueue(&self, photos: Vec<PhotoId>) -> Result<()> {
        if photos.is_empty() {
            return Err(Error::Enqueue("empty photo set".to_string()));
        }
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
