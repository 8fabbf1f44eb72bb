//! Session ledger: identity lifecycle and credit accounting.
//!
//! Durable layout:
//!   "session"        → JSON `Account` mirror of the active session
//!   "credits:<name>" → JSON integer balance, authoritative per identity
//!
//! The in-memory session is the single writer of both keys. Every
//! operation here is synchronous, so a debit's sufficiency check and its
//! decrement can never interleave with another debit.

use std::rc::Rc;

use studio_types::{
    account::Account,
    config::LedgerConfig,
    DebitRefusal, Result, StudioError,
};

use crate::ports::KvStore;
use crate::Recovery;

pub const SESSION_KEY: &str = "session";
pub const CREDITS_PREFIX: &str = "credits:";

pub fn credits_key(name: &str) -> String {
    format!("{}{}", CREDITS_PREFIX, name)
}

/// Outcome of reading one identity's balance record.
enum BalanceRead {
    Found(u32),
    Absent,
    /// Present but not a balance; safe to overwrite
    Corrupt,
    /// Storage refused the read; the record may be intact
    Unreadable(StudioError),
}

pub struct SessionLedger {
    store: Rc<dyn KvStore>,
    starting_credits: u32,
    active: Option<Account>,
    recoveries: Vec<Recovery>,
}

impl SessionLedger {
    /// A ledger with no active session. Stored balances are left untouched.
    pub fn new(store: Rc<dyn KvStore>, config: &LedgerConfig) -> Self {
        Self {
            store,
            starting_credits: config.starting_credits,
            active: None,
            recoveries: Vec::new(),
        }
    }

    /// Process-start constructor: resumes a persisted session if one exists.
    ///
    /// The balance comes from `credits:<name>`, not from the session mirror,
    /// so changes made to the identity record while the app was closed win.
    pub fn restore(store: Rc<dyn KvStore>, config: &LedgerConfig) -> Self {
        let mut ledger = Self::new(store, config);
        ledger.active = ledger.restore_session();
        if let Some(account) = &ledger.active {
            log::info!(
                "Session restored for {} ({} credits, {})",
                account.name,
                account.credits,
                ledger.store.backend_name()
            );
        }
        ledger
    }

    fn restore_session(&mut self) -> Option<Account> {
        let raw = match self.store.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                self.recover(SESSION_KEY, e.to_string());
                return None;
            }
        };

        let mirror = match serde_json::from_str::<Account>(&raw) {
            Ok(account) if !account.name.trim().is_empty() => account,
            Ok(_) => {
                self.recover(SESSION_KEY, "session mirror has a blank name".to_string());
                self.remove_quietly(SESSION_KEY);
                return None;
            }
            Err(e) => {
                self.recover(SESSION_KEY, e.to_string());
                self.remove_quietly(SESSION_KEY);
                return None;
            }
        };

        let credits = match self.read_balance(&mirror.name) {
            BalanceRead::Found(credits) => credits,
            BalanceRead::Absent | BalanceRead::Corrupt => {
                // Identity record lost; the mirror is the best remaining copy.
                self.write_balance(&mirror.name, mirror.credits);
                mirror.credits
            }
            // The record may still be intact; leave it alone.
            BalanceRead::Unreadable(_) => mirror.credits,
        };

        let account = Account::new(mirror.name, credits);
        self.write_session(&account);
        Some(account)
    }

    /// Load or create the account for `name` and make it the active session.
    ///
    /// The starting balance applies once per identity, ever: a stored balance
    /// is always reused. Switching identity overwrites the active session.
    pub fn establish_session(&mut self, name: &str) -> Result<Account> {
        if name.trim().is_empty() {
            return Err(StudioError::InvalidIdentity);
        }

        let credits = match self.read_balance(name) {
            BalanceRead::Found(credits) => credits,
            BalanceRead::Absent => {
                log::info!("New identity {}: granting {} credits", name, self.starting_credits);
                self.write_balance(name, self.starting_credits);
                self.starting_credits
            }
            BalanceRead::Corrupt => {
                self.write_balance(name, self.starting_credits);
                self.starting_credits
            }
            // Never grant the default over a record that could not be read.
            BalanceRead::Unreadable(e) => return Err(e),
        };

        let account = Account::new(name, credits);
        self.write_session(&account);
        self.active = Some(account.clone());
        Ok(account)
    }

    /// Name/password sign-in. Any non-blank pair succeeds; the password is
    /// neither verified nor stored.
    pub fn sign_in(&mut self, name: &str, password: &str) -> Result<Account> {
        if password.trim().is_empty() {
            return Err(StudioError::MissingPassword);
        }
        self.establish_session(name)
    }

    pub fn current_session(&self) -> Option<&Account> {
        self.active.as_ref()
    }

    /// Clear the active session and its mirror. The identity's balance
    /// record survives, so signing back in restores it.
    pub fn end_session(&mut self) -> Option<Account> {
        let ended = self.active.take();
        self.remove_quietly(SESSION_KEY);
        if let Some(account) = &ended {
            log::info!("Session ended for {}", account.name);
        }
        ended
    }

    /// Check-then-decrement the active balance. Returns the new balance.
    ///
    /// Zero amounts are refused. A refused debit changes nothing.
    pub fn charge(&mut self, amount: u32) -> std::result::Result<u32, DebitRefusal> {
        if amount == 0 {
            return Err(DebitRefusal::InvalidAmount(amount));
        }
        let account = self.active.as_mut().ok_or(DebitRefusal::NoActiveSession)?;
        if !account.can_afford(amount) {
            return Err(DebitRefusal::InsufficientCredits {
                needed: amount,
                available: account.credits,
            });
        }
        account.credits -= amount;

        let snapshot = account.clone();
        self.write_balance(&snapshot.name, snapshot.credits);
        self.write_session(&snapshot);
        Ok(snapshot.credits)
    }

    pub fn debit(&mut self, amount: u32) -> bool {
        self.charge(amount).is_ok()
    }

    /// Stored balance for any identity, active or not.
    pub fn balance_of(&mut self, name: &str) -> Option<u32> {
        match self.read_balance(name) {
            BalanceRead::Found(credits) => Some(credits),
            _ => None,
        }
    }

    /// Every identity that has a balance record on this device.
    pub fn known_identities(&self) -> Vec<String> {
        match self.store.keys_with_prefix(CREDITS_PREFIX) {
            Ok(keys) => {
                let mut names: Vec<String> = keys
                    .iter()
                    .filter_map(|k| k.strip_prefix(CREDITS_PREFIX))
                    .map(str::to_string)
                    .collect();
                names.sort();
                names
            }
            Err(e) => {
                log::warn!("Could not list identities: {}", e);
                Vec::new()
            }
        }
    }

    pub fn take_recoveries(&mut self) -> Vec<Recovery> {
        std::mem::take(&mut self.recoveries)
    }

    // ─── Storage helpers ─────────────────────────────────────

    fn read_balance(&mut self, name: &str) -> BalanceRead {
        let key = credits_key(name);
        match self.store.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<u32>(raw.trim()) {
                Ok(credits) => BalanceRead::Found(credits),
                Err(e) => {
                    self.recover(&key, e.to_string());
                    BalanceRead::Corrupt
                }
            },
            Ok(None) => BalanceRead::Absent,
            Err(e) => {
                log::warn!("Could not read {}: {}", key, e);
                BalanceRead::Unreadable(e)
            }
        }
    }

    fn write_balance(&self, name: &str, credits: u32) {
        let key = credits_key(name);
        if let Err(e) = self.store.set(&key, &credits.to_string()) {
            log::warn!("Failed to persist {}: {}", key, e);
        }
    }

    fn write_session(&self, account: &Account) {
        let result = serde_json::to_string(account)
            .map_err(StudioError::from)
            .and_then(|json| self.store.set(SESSION_KEY, &json));
        if let Err(e) = result {
            log::warn!("Failed to persist session mirror: {}", e);
        }
    }

    fn remove_quietly(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            log::warn!("Failed to remove {}: {}", key, e);
        }
    }

    fn recover(&mut self, key: &str, detail: String) {
        log::warn!("Unreadable {} ({}); using default", key, detail);
        self.recoveries.push(Recovery {
            key: key.to_string(),
            detail,
        });
    }
}
