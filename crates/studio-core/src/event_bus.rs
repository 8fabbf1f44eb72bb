//! Event queue between the studio context and the view layer.
//!
//! Single-threaded (WASM constraint). The view drains the queue on its next
//! refresh, so only the latest balance of a burst of debits matters: a
//! `CreditsChanged` that directly follows another for the same identity
//! replaces it instead of queueing.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use studio_types::event::StudioEvent;

#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<StudioEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: StudioEvent) {
        let mut queue = self.inner.borrow_mut();
        if let StudioEvent::CreditsChanged { name, balance } = &event {
            if let Some(StudioEvent::CreditsChanged {
                name: last_name,
                balance: last_balance,
            }) = queue.back_mut()
            {
                if last_name == name {
                    *last_balance = *balance;
                    return;
                }
            }
        }
        queue.push_back(event);
    }

    /// Pending events, oldest first.
    pub fn drain(&self) -> Vec<StudioEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.inner.borrow().len()
    }
}
