//! Single-threaded dispatcher for panel messages.
//!
//! Collaborators post notifications on the loop's channel. The loop hands
//! them to the controller one at a time and runs any [`Followup`] a handler
//! returned once that handler has finished, before the next message is
//! taken. A deletion's selection fix-up therefore always lands before any
//! later user action.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::debug;

use super::controller::PanelController;
use super::messages::{Followup, PanelMsg};

/// Event loop feeding a [`PanelController`].
#[derive(Debug)]
pub struct EventLoop {
    sender: Sender<PanelMsg>,
    receiver: Receiver<PanelMsg>,
    deferred: VecDeque<Followup>,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates an idle loop.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            deferred: VecDeque::new(),
        }
    }

    /// Sender used by collaborators and the rendering layer to post
    /// messages.
    #[must_use]
    pub const fn sender(&self) -> &Sender<PanelMsg> {
        &self.sender
    }

    /// Queues a message behind those already posted.
    pub fn post(&self, msg: PanelMsg) {
        // The loop owns the receiver, so sending cannot fail.
        let _sent = self.sender.send(msg);
    }

    /// Number of follow-ups waiting to run.
    #[must_use]
    pub fn pending_followups(&self) -> usize {
        self.deferred.len()
    }

    /// Handles `msg` immediately, then lets it settle.
    pub fn dispatch(&mut self, controller: &mut PanelController, msg: &PanelMsg) {
        if let Some(followup) = controller.handle_message(msg) {
            self.deferred.push_back(followup);
        }
        self.settle(controller);
    }

    /// Handles `msg` without running its follow-ups.
    ///
    /// Follow-ups stay queued until [`Self::settle`] or
    /// [`Self::run_until_idle`] runs them.
    pub fn handle_only(&mut self, controller: &mut PanelController, msg: &PanelMsg) {
        if let Some(followup) = controller.handle_message(msg) {
            self.deferred.push_back(followup);
        }
    }

    /// Runs every queued follow-up.
    pub fn settle(&mut self, controller: &mut PanelController) {
        while let Some(followup) = self.deferred.pop_front() {
            controller.run_followup(followup);
        }
    }

    /// Processes posted messages until the channel is empty.
    ///
    /// Returns the number of messages handled.
    pub fn run_until_idle(&mut self, controller: &mut PanelController) -> usize {
        let mut handled = 0_usize;
        loop {
            self.settle(controller);
            match self.receiver.try_recv() {
                Ok(msg) => {
                    self.handle_only(controller, &msg);
                    handled = handled.saturating_add(1);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("panel event channel disconnected");
                    break;
                }
            }
        }
        handled
    }
}
