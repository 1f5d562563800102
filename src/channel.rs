//! Portable bounded channel for `no_std` environments.
//!
//! Control messages can arrive from another thread or an interrupt
//! while the render loop runs, so the queue is guarded by critical
//! sections and backed by a fixed-size `heapless::Deque`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when sending to a full channel; carries the
/// rejected value back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelFull<T>(pub T);

/// A bounded, thread-safe channel.
pub struct Channel<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    ///
    /// Multiple senders can coexist; they share the same queue.
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Get a receiver handle for this channel.
    ///
    /// Typically one receiver drains the queue; multiple receivers
    /// compete for messages.
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Try to send a value, returning it if the channel is full.
    pub fn try_send(&self, value: T) -> Result<(), ChannelFull<T>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(value).map_err(ChannelFull)
        })
    }

    /// Take the oldest queued value, if any.
    pub fn try_receive(&self) -> Option<T> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`Channel`].
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    /// Try to send a value, returning it if the channel is full.
    pub fn try_send(&self, value: T) -> Result<(), ChannelFull<T>> {
        self.channel.try_send(value)
    }
}

/// A receiver handle for a [`Channel`].
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    /// Take the oldest queued value, if any.
    pub fn try_receive(&self) -> Option<T> {
        self.channel.try_receive()
    }
}
