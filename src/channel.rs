//! Bounded request queue for `no_std` environments.
//!
//! Built on `critical-section` and `heapless::Deque`, so requests may be
//! pushed from an interrupt handler or another task while the runner drains
//! them between frames.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::animation::AnimationId;

/// Error returned when trying to send to a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, interrupt-safe FIFO.
///
/// Backed by a fixed-size `heapless::Deque`; every access happens inside a
/// critical section, so the queue can live in a `static`.
pub struct Channel<T, const SIZE: usize> {
    queue: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue.
    ///
    /// Any number of senders may coexist; they push into the same queue.
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Get a receiver handle for this queue.
    ///
    /// Normally only the runner drains the queue.
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Try to push a value to the back of the queue.
    ///
    /// Returns `Err(TrySendError(value))` if the queue is full.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .push_back(value)
                .map_err(TrySendError)
        })
    }

    /// Try to pop the oldest value.
    ///
    /// Returns `Err(TryReceiveError)` if the queue is empty.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .pop_front()
                .ok_or(TryReceiveError)
        })
    }

    /// Drain the queue and keep only the newest value
    ///
    /// Older values are dropped. Returns `None` if the queue was empty.
    pub fn take_latest(&self) -> Option<T> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            let latest = queue.pop_back();
            queue.clear();
            latest
        })
    }

    /// Check if nothing is waiting in the queue.
    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().is_empty())
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`Channel`]
///
/// A lightweight reference that can be copied into interrupt handlers or
/// other tasks.
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    /// Try to push a value, see [`Channel::try_send`].
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }
}

/// Receiving half of a [`Channel`]
///
/// A lightweight reference; the runner keeps one for its whole lifetime.
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    /// Try to pop the oldest value, see [`Channel::try_receive`].
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }

    /// Keep only the newest value, see [`Channel::take_latest`].
    pub fn take_latest(&self) -> Option<T> {
        self.channel.take_latest()
    }
}

/// Queue of requested animation switches
pub type SwitchChannel<const SIZE: usize> = Channel<AnimationId, SIZE>;

/// Handle used by input code to request an animation
pub type SwitchSender<'a, const SIZE: usize> = Sender<'a, AnimationId, SIZE>;

/// Handle drained by [`crate::AnimationRunner`] between frames
pub type SwitchReceiver<'a, const SIZE: usize> = Receiver<'a, AnimationId, SIZE>;
