//! Diary Client
//!
//! Controller behind the page: owns the entry list, the edit session, and
//! the form, and runs each user action against the server.

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::DiaryBackend;
use crate::browser::Browser;
use crate::error::ClientError;
use crate::form::EntryForm;
use crate::messages;
use crate::models::{Entry, Item};
use crate::session::{EditMode, EditSession, RequestSequencer};

/// DOM id of the title input (focused when editing starts)
pub const TITLE_INPUT_ID: &str = "diaryTitle";

/// Which part of the page needs to re-render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Entries,
    Form,
}

#[derive(Default)]
struct ClientState {
    entries: Vec<Entry>,
    session: EditSession,
    form: EntryForm,
    requests: RequestSequencer,
}

/// Cheap to clone; clones share state. No `RefCell` borrow is held across an `.await`.
pub struct DiaryClient<B, W> {
    backend: Rc<B>,
    browser: Rc<W>,
    login_path: Rc<str>,
    state: Rc<RefCell<ClientState>>,
    on_change: Rc<dyn Fn(Change)>,
}

impl<B, W> Clone for DiaryClient<B, W> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            browser: self.browser.clone(),
            login_path: self.login_path.clone(),
            state: self.state.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<B: DiaryBackend, W: Browser> DiaryClient<B, W> {
    pub fn new(backend: B, browser: W, login_path: &str) -> Self {
        Self {
            backend: Rc::new(backend),
            browser: Rc::new(browser),
            login_path: Rc::from(login_path),
            state: Rc::new(RefCell::new(ClientState::default())),
            on_change: Rc::new(|_: Change| {}),
        }
    }

    /// Called after every state change the page should render
    pub fn with_change_listener(mut self, listener: impl Fn(Change) + 'static) -> Self {
        self.on_change = Rc::new(listener);
        self
    }

    fn notify(&self, change: Change) {
        (self.on_change)(change);
    }

    // ========================
    // Read access
    // ========================

    pub fn entries(&self) -> Vec<Entry> {
        self.state.borrow().entries.clone()
    }

    pub fn mode(&self) -> EditMode {
        self.state.borrow().session.mode()
    }

    pub fn form(&self) -> EntryForm {
        self.state.borrow().form.clone()
    }

    /// Keystroke-level form edits; the input already shows the value, so no re-render
    pub fn edit_form(&self, edit: impl FnOnce(&mut EntryForm)) {
        edit(&mut self.state.borrow_mut().form);
    }

    pub fn add_item_row(&self) {
        self.state.borrow_mut().form.add_row();
        self.notify(Change::Form);
    }

    pub fn remove_item_row(&self, key: u32) {
        self.state.borrow_mut().form.remove_row(key);
        self.notify(Change::Form);
    }

    pub fn collect_items(&self) -> Vec<Item> {
        self.state.borrow().form.collect_items()
    }

    // ========================
    // Edit session
    // ========================

    /// Fill the form with an entry and switch to update/cancel controls
    pub fn start_edit(&self, id: u32, title: &str, content: &str, notes: Option<&str>, items: &[Item]) {
        {
            let mut state = self.state.borrow_mut();
            state.session.start(id);
            state.form.fill(title, content, notes, items);
        }
        log::debug!("editing entry {}", id);
        self.notify(Change::Form);
        self.browser.focus(TITLE_INPUT_ID);
    }

    pub fn cancel_edit(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.session.cancel();
            state.form.clear();
        }
        self.notify(Change::Form);
    }

    // ========================
    // Server actions
    // ========================

    /// Replace the entry list; a response is dropped if a newer load was issued
    pub async fn load_entries(&self) {
        let token = self.state.borrow_mut().requests.begin();
        let result = self.backend.list_entries().await;

        if !self.state.borrow().requests.is_latest(token) {
            log::debug!("discarding superseded entry list response");
            return;
        }
        match result {
            Ok(entries) => {
                log::info!("loaded {} entries", entries.len());
                self.state.borrow_mut().entries = entries;
                self.notify(Change::Entries);
            }
            Err(e) => {
                log::error!("loading entries failed: {}", e);
                self.browser.alert(messages::LOAD_FAILED);
                self.redirect_if_unauthorized(&e);
            }
        }
    }

    pub async fn post_entry(&self) {
        let (payload, generation) = {
            let state = self.state.borrow();
            (state.form.to_payload(), state.session.generation())
        };
        let payload = match payload {
            Ok(payload) => payload,
            Err(invalid) => {
                self.browser.alert(&invalid.to_string());
                return;
            }
        };

        match self.backend.create_entry(&payload).await {
            Ok(()) => {
                log::info!("posted entry {:?}", payload.title);
                // An edit started while the post was in flight keeps its form
                let cleared = {
                    let mut state = self.state.borrow_mut();
                    let unchanged = state.session.generation() == generation;
                    if unchanged {
                        state.form.clear();
                    }
                    unchanged
                };
                if cleared {
                    self.notify(Change::Form);
                }
                self.load_entries().await;
            }
            Err(e) => self.report_failure("posting entry", &e, messages::POST_FAILED),
        }
    }

    /// No-op outside an edit session
    pub async fn update_entry(&self) {
        let (ticket, payload) = {
            let state = self.state.borrow();
            let Some(ticket) = state.session.ticket() else {
                return;
            };
            (ticket, state.form.to_payload())
        };
        let payload = match payload {
            Ok(payload) => payload,
            Err(invalid) => {
                self.browser.alert(&invalid.to_string());
                return;
            }
        };

        match self.backend.update_entry(ticket.id, &payload).await {
            Ok(()) => {
                log::info!("updated entry {}", ticket.id);
                let ended = {
                    let mut state = self.state.borrow_mut();
                    let ended = state.session.end_if_current(ticket);
                    if ended {
                        state.form.clear();
                    }
                    ended
                };
                if ended {
                    self.notify(Change::Form);
                } else {
                    log::debug!("edit session changed during update of {}; keeping it", ticket.id);
                }
                self.load_entries().await;
            }
            Err(e) => self.report_failure("updating entry", &e, messages::UPDATE_FAILED),
        }
    }

    /// Asks for confirmation first; declining sends nothing
    pub async fn delete_entry(&self, id: u32) {
        if !self.browser.confirm(messages::CONFIRM_DELETE) {
            return;
        }
        match self.backend.delete_entry(id).await {
            Ok(()) => {
                log::info!("deleted entry {}", id);
                self.load_entries().await;
            }
            Err(e) => self.report_failure("deleting entry", &e, messages::DELETE_FAILED),
        }
    }

    pub async fn logout(&self) {
        match self.backend.logout().await {
            Ok(()) => {
                log::info!("logged out");
                self.browser.navigate(&self.login_path);
            }
            Err(e) => {
                log::error!("logout failed: {}", e);
                let text = match &e {
                    ClientError::Server { .. } => messages::LOGOUT_FAILED,
                    _ => messages::GENERIC_ERROR,
                };
                self.browser.alert(text);
                self.redirect_if_unauthorized(&e);
            }
        }
    }

    fn report_failure(&self, action: &str, error: &ClientError, fallback: &str) {
        log::error!("{} failed: {}", action, error);
        self.browser.alert(&error.alert_message(fallback));
        self.redirect_if_unauthorized(error);
    }

    fn redirect_if_unauthorized(&self, error: &ClientError) {
        if error.is_unauthorized() {
            self.browser.navigate(&self.login_path);
        }
    }
}
