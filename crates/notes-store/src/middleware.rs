//! Middleware system
//!
//! A middleware is applied once, when the store is built. It receives a
//! read-only [`MiddlewareApi`] and the store's base dispatch, and returns the
//! dispatch that callers will actually use:
//!
//! ```text
//! caller → wrapped dispatch → (maybe) base dispatch → validate → reduce → notify
//! ```
//!
//! The wrapped dispatch is free to rewrite or swallow actions. The
//! store wraps exactly one layer; [`compose`] folds several middlewares into
//! one when more are needed.
//!
//! ## Example
//!
//! ```rust
//! use notes_store::middleware::{self, Dispatch};
//! use notes_store::Store;
//! use serde_json::Value;
//! use std::rc::Rc;
//!
//! let store = Store::with_middleware(middleware::from_fn(|api, next| {
//!     let wrapped: Dispatch = Rc::new(move |action: Value| {
//!         let before = api.get_state().next_note_id();
//!         let result = next(action);
//!         log::debug!("next id moved from {} to {}", before, api.get_state().next_note_id());
//!         result
//!     });
//!     wrapped
//! }));
//! # let _ = store;
//! ```

use crate::actions::InvalidAction;
use crate::state::NoteState;
use serde_json::Value;
use std::rc::Rc;

/// A dispatch function, base or wrapped
pub type Dispatch = Rc<dyn Fn(Value) -> Result<(), InvalidAction>>;

/// Capabilities handed to middleware: state reads only
#[derive(Clone)]
pub struct MiddlewareApi {
    get_state: Rc<dyn Fn() -> Rc<NoteState>>,
}

impl MiddlewareApi {
    pub(crate) fn new(get_state: Rc<dyn Fn() -> Rc<NoteState>>) -> Self {
        Self { get_state }
    }

    /// Current state of the store this middleware belongs to
    pub fn get_state(&self) -> Rc<NoteState> {
        (self.get_state)()
    }
}

/// Middleware trait - wraps the store's dispatch at construction time
pub trait Middleware {
    /// Build the dispatch exposed to callers
    ///
    /// - `api`: read access to the store's state
    /// - `next`: the dispatch being wrapped (the base dispatch, or the next
    ///   middleware when composed)
    fn wrap(self: Box<Self>, api: MiddlewareApi, next: Dispatch) -> Dispatch;
}

/// Middleware backed by a closure, see [`from_fn`]
pub struct FnMiddleware<F> {
    f: F,
}

/// Use a closure `(api, next) -> dispatch` as middleware
pub fn from_fn<F>(f: F) -> FnMiddleware<F>
where
    F: FnOnce(MiddlewareApi, Dispatch) -> Dispatch,
{
    FnMiddleware { f }
}

impl<F> Middleware for FnMiddleware<F>
where
    F: FnOnce(MiddlewareApi, Dispatch) -> Dispatch,
{
    fn wrap(self: Box<Self>, api: MiddlewareApi, next: Dispatch) -> Dispatch {
        (self.f)(api, next)
    }
}

/// Several middlewares acting as one, see [`compose`]
pub struct Compose {
    layers: Vec<Box<dyn Middleware>>,
}

/// Chain middlewares; the first one sees each action first
pub fn compose(layers: Vec<Box<dyn Middleware>>) -> Compose {
    Compose { layers }
}

impl Middleware for Compose {
    fn wrap(self: Box<Self>, api: MiddlewareApi, next: Dispatch) -> Dispatch {
        // Wrap innermost first so the head of the list ends up outermost
        self.layers
            .into_iter()
            .rev()
            .fold(next, |inner, layer| layer.wrap(api.clone(), inner))
    }
}

/// LoggingMiddleware - logs every action and the state it produced
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn wrap(self: Box<Self>, api: MiddlewareApi, next: Dispatch) -> Dispatch {
        Rc::new(move |raw: Value| {
            log::debug!("Action: {}", raw);
            let before = api.get_state();
            match next(raw) {
                Ok(()) => {
                    let after = api.get_state();
                    if Rc::ptr_eq(&before, &after) {
                        log::debug!("State unchanged");
                    } else {
                        log::debug!(
                            "State: {} notes, next id {}",
                            after.len(),
                            after.next_note_id()
                        );
                    }
                    Ok(())
                }
                Err(e) => {
                    log::warn!("Action rejected: {}", e);
                    Err(e)
                }
            }
        })
    }
}
