//! UI commands and the queue that carries them to the controller
//!
//! The queue is a fixed-size `heapless::Deque` guarded by a critical
//! section, so button handling may push from an interrupt while the main
//! loop drains it.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::pattern::PatternId;

/// Request from the user interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the next pattern
    NextPattern,
    /// Select the previous pattern
    PreviousPattern,
    /// Select a pattern directly
    SetPattern(PatternId),
    /// Raise brightness by the given step
    IncreaseBrightness(u8),
    /// Lower brightness by the given step
    DecreaseBrightness(u8),
    /// Set brightness
    SetBrightness(u8),
    /// Rotate the base hue faster
    IncreaseHueSpeed,
    /// Rotate the base hue slower
    DecreaseHueSpeed,
    /// Tap tempo button pressed
    Tap,
    /// Enable or disable tap tempo input
    ToggleTapMode,
}

/// Returned when the queue has no room; carries the rejected command back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub Command);

/// Bounded queue of UI commands.
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the UI side.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Handle for the controller side.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    fn push(&self, command: Command) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(QueueFull)
        })
    }

    fn pop(&self) -> Option<Command> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of commands waiting
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes commands into a [`CommandQueue`].
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Queue a command.
    ///
    /// Returns `Err(QueueFull(command))` if the queue is full.
    pub fn try_send(&self, command: Command) -> Result<(), QueueFull> {
        self.queue.push(command)
    }
}

/// Takes commands out of a [`CommandQueue`].
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Take the oldest queued command, if any.
    pub fn try_receive(&self) -> Option<Command> {
        self.queue.pop()
    }
}
