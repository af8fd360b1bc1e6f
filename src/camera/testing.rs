//! Scriptable in-memory capture backend used by the test suites.
//!
//! `MockBackend` replays a queue of open outcomes and counts acquisitions
//! and releases through a shared [`MockCounters`] handle, which lets tests
//! assert the single-stream invariant (`max_active() <= 1`) across any
//! action sequence.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicIsize, AtomicUsize, Ordering};

use crate::camera::backend::{CameraStream, CaptureBackend};
use crate::camera::types::{CaptureError, ImageBlob, OpenError, Permission, StreamConstraints};

/// Shared counters observing backend activity.
#[derive(Debug, Default)]
struct CounterInner {
    /// Total `open` calls, successful or not.
    open_calls: AtomicUsize,
    /// `open` calls made with relaxed (facing-less) constraints.
    relaxed_calls: AtomicUsize,
    /// Streams currently acquired and not yet stopped.
    active: AtomicIsize,
    /// High-water mark of `active`.
    max_active: AtomicIsize,
}

/// Cloneable handle over the backend's counters.
#[derive(Debug, Clone, Default)]
pub struct MockCounters(Arc<CounterInner>);

impl MockCounters {
    /// Total `open` calls observed.
    #[must_use]
    pub fn open_calls(&self) -> usize {
        self.0.open_calls.load(Ordering::SeqCst)
    }

    /// `open` calls made with relaxed constraints.
    #[must_use]
    pub fn relaxed_calls(&self) -> usize {
        self.0.relaxed_calls.load(Ordering::SeqCst)
    }

    /// Streams currently live.
    #[must_use]
    pub fn active(&self) -> isize {
        self.0.active.load(Ordering::SeqCst)
    }

    /// Most streams ever live at the same time.
    #[must_use]
    pub fn max_active(&self) -> isize {
        self.0.max_active.load(Ordering::SeqCst)
    }

    fn stream_acquired(&self) {
        let now = self.0.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.0.max_active.fetch_max(now, Ordering::SeqCst);
    }

    fn stream_released(&self) {
        self.0.active.fetch_sub(1, Ordering::SeqCst);
    }
}

/// One scripted answer for a backend `open` call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Produce a live stream with the given dimensions.
    Live {
        /// Stream width.
        width: u32,
        /// Stream height.
        height: u32,
        /// Whether `capture_frame` should fail.
        failing_capture: bool,
    },
    /// Fail the open with the given error.
    Fail(OpenError),
}

impl MockOutcome {
    /// A live stream whose capture succeeds.
    #[must_use]
    pub const fn live(width: u32, height: u32) -> Self {
        Self::Live {
            width,
            height,
            failing_capture: false,
        }
    }

    /// A live stream whose capture always fails.
    #[must_use]
    pub const fn live_failing_capture(width: u32, height: u32) -> Self {
        Self::Live {
            width,
            height,
            failing_capture: true,
        }
    }

    /// A failed open.
    #[must_use]
    pub const fn fail(error: OpenError) -> Self {
        Self::Fail(error)
    }
}

/// Scriptable capture backend.
#[derive(Debug)]
pub struct MockBackend {
    /// Probe answer.
    permission: Permission,
    /// Scripted `open` outcomes, consumed front to back.
    outcomes: VecDeque<MockOutcome>,
    /// Shared activity counters.
    counters: MockCounters,
}

impl MockBackend {
    /// New backend with granted permission and an empty script
    /// (an unscripted `open` answers [`OpenError::NotFound`]).
    #[must_use]
    pub fn new() -> Self {
        Self {
            permission: Permission::Granted,
            outcomes: VecDeque::new(),
            counters: MockCounters::default(),
        }
    }

    /// Set the permission probe answer.
    #[must_use]
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permission = permission;
        self
    }

    /// Append an outcome for the next `open` call.
    #[must_use]
    pub fn push_open(mut self, outcome: MockOutcome) -> Self {
        self.outcomes.push_back(outcome);
        self
    }

    /// Handle onto the shared counters.
    #[must_use]
    pub fn counters(&self) -> MockCounters {
        self.counters.clone()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureBackend for MockBackend {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn open(
        &mut self,
        constraints: &StreamConstraints,
    ) -> Result<Box<dyn CameraStream>, OpenError> {
        self.counters.0.open_calls.fetch_add(1, Ordering::SeqCst);
        if constraints.facing.is_none() {
            self.counters.0.relaxed_calls.fetch_add(1, Ordering::SeqCst);
        }
        match self.outcomes.pop_front() {
            Some(MockOutcome::Live {
                width,
                height,
                failing_capture,
            }) => {
                self.counters.stream_acquired();
                Ok(Box::new(MockStream {
                    width,
                    height,
                    failing_capture,
                    released: false,
                    counters: self.counters.clone(),
                }))
            }
            Some(MockOutcome::Fail(error)) => Err(error),
            None => Err(OpenError::NotFound),
        }
    }
}

/// Stream produced by [`MockBackend`].
#[derive(Debug)]
struct MockStream {
    /// Reported width.
    width: u32,
    /// Reported height.
    height: u32,
    /// Whether `capture_frame` fails.
    failing_capture: bool,
    /// Guards against double release accounting.
    released: bool,
    /// Shared activity counters.
    counters: MockCounters,
}

impl CameraStream for MockStream {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn capture_frame(&mut self) -> Result<ImageBlob, CaptureError> {
        if self.failing_capture {
            return Err(CaptureError::Other("scripted capture failure".to_string()));
        }
        Ok(ImageBlob {
            bytes: vec![0xFF, 0xD8, 0xFF, 0xD9],
            mime: "image/jpeg".to_string(),
            file_name: "camera-photo.jpg".to_string(),
        })
    }

    fn stop(&mut self) {
        if !self.released {
            self.released = true;
            self.counters.stream_released();
        }
    }
}

impl Drop for MockStream {
    fn drop(&mut self) {
        self.stop();
    }
}
