//! User-facing confirmation/notice collaborator.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Host-shell modal facilities: a blocking yes/no confirmation and a
/// fire-and-forget notice.
pub trait UserPrompt {
    fn confirm(&self, message: &str) -> bool;
    fn notify(&self, message: &str);
}

impl<P: UserPrompt + ?Sized> UserPrompt for Rc<P> {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

/// Scripted prompt for tests/dev: answers confirmations from a queue
/// (default no) and records every message shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<bool>>,
    messages: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next confirmation.
    pub fn push_answer(&self, answer: bool) {
        self.answers.borrow_mut().push_back(answer);
    }

    /// Every confirm/notify message, in display order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.messages.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
