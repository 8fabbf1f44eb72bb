//! Studio context: the one owner of the ledger and the archive.
//!
//! Created by the application root and handed to every surface that needs
//! credits or history. Clones share state. Single-threaded (WASM), so the
//! state sits behind `Rc<RefCell<..>>`; no borrow outlives a method call,
//! which keeps every operation free of suspension points.

use std::cell::RefCell;
use std::rc::Rc;

use studio_types::{
    account::Account,
    asset::{Asset, AssetKind},
    config::StudioConfig,
    event::StudioEvent,
    DebitRefusal, Result,
};

use crate::archive::AssetArchive;
use crate::event_bus::EventBus;
use crate::ledger::SessionLedger;
use crate::ports::KvStore;
use crate::Recovery;

struct Inner {
    ledger: SessionLedger,
    archive: AssetArchive,
}

#[derive(Clone)]
pub struct StudioContext {
    inner: Rc<RefCell<Inner>>,
    events: EventBus,
}

impl StudioContext {
    /// Restore session and archive from `store`.
    pub fn open(store: Rc<dyn KvStore>, config: &StudioConfig) -> Self {
        let ledger = SessionLedger::restore(store.clone(), &config.ledger);
        let archive = AssetArchive::load(store, config.archive.capacity);
        let ctx = Self {
            inner: Rc::new(RefCell::new(Inner { ledger, archive })),
            events: EventBus::new(),
        };
        ctx.flush_recoveries();
        if let Some(account) = ctx.current_session() {
            ctx.events.emit(StudioEvent::SessionStarted {
                name: account.name,
                credits: account.credits,
            });
        }
        ctx
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    // ─── Session ─────────────────────────────────────────────

    pub fn establish_session(&self, name: &str) -> Result<Account> {
        let previous = self.active_name();
        let result = self.inner.borrow_mut().ledger.establish_session(name);
        self.after_session_start(previous, result)
    }

    pub fn sign_in(&self, name: &str, password: &str) -> Result<Account> {
        let previous = self.active_name();
        let result = self.inner.borrow_mut().ledger.sign_in(name, password);
        self.after_session_start(previous, result)
    }

    fn active_name(&self) -> Option<String> {
        self.inner
            .borrow()
            .ledger
            .current_session()
            .map(|a| a.name.clone())
    }

    fn after_session_start(
        &self,
        previous: Option<String>,
        result: Result<Account>,
    ) -> Result<Account> {
        self.flush_recoveries();
        let account = result?;
        // Switching identity closes the previous session.
        if let Some(previous) = previous.filter(|p| *p != account.name) {
            self.events.emit(StudioEvent::SessionEnded { name: previous });
        }
        self.events.emit(StudioEvent::SessionStarted {
            name: account.name.clone(),
            credits: account.credits,
        });
        Ok(account)
    }

    pub fn current_session(&self) -> Option<Account> {
        self.inner.borrow().ledger.current_session().cloned()
    }

    pub fn credits(&self) -> Option<u32> {
        self.inner.borrow().ledger.current_session().map(|a| a.credits)
    }

    pub fn end_session(&self) {
        let ended = self.inner.borrow_mut().ledger.end_session();
        if let Some(account) = ended {
            self.events.emit(StudioEvent::SessionEnded { name: account.name });
        }
    }

    pub fn known_identities(&self) -> Vec<String> {
        self.inner.borrow().ledger.known_identities()
    }

    // ─── Credits ─────────────────────────────────────────────

    /// Atomic check-then-decrement; see [`SessionLedger::charge`].
    pub fn charge(&self, amount: u32) -> std::result::Result<u32, DebitRefusal> {
        let (result, name) = {
            let mut inner = self.inner.borrow_mut();
            let result = inner.ledger.charge(amount);
            let name = inner.ledger.current_session().map(|a| a.name.clone());
            (result, name)
        };
        match (&result, name) {
            (Ok(balance), Some(name)) => {
                self.events.emit(StudioEvent::CreditsChanged {
                    name,
                    balance: *balance,
                });
            }
            (Err(refusal), _) => {
                log::info!("Debit of {} declined: {}", amount, refusal.reason());
                self.events.emit(StudioEvent::DebitDeclined {
                    amount,
                    reason: refusal.reason().to_string(),
                });
            }
            _ => {}
        }
        result
    }

    pub fn debit(&self, amount: u32) -> bool {
        self.charge(amount).is_ok()
    }

    // ─── Archive ─────────────────────────────────────────────

    pub fn record(&self, asset: Asset) {
        let (id, kind) = (asset.id().to_string(), asset.kind());
        self.inner.borrow_mut().archive.record(asset);
        self.events.emit(StudioEvent::AssetRecorded { id, kind });
    }

    pub fn assets(&self) -> Vec<Asset> {
        self.inner.borrow().archive.all()
    }

    pub fn assets_of_kind(&self, kind: AssetKind) -> Vec<Asset> {
        self.inner.borrow().archive.filter_kind(kind)
    }

    pub fn clear_archive(&self) {
        self.inner.borrow_mut().archive.clear();
    }

    fn flush_recoveries(&self) {
        let recoveries: Vec<Recovery> = {
            let mut inner = self.inner.borrow_mut();
            let mut all = inner.ledger.take_recoveries();
            all.extend(inner.archive.take_recoveries());
            all
        };
        for r in recoveries {
            self.events.emit(StudioEvent::StorageRecovered {
                key: r.key,
                detail: r.detail,
            });
        }
    }
}
