//! Notes Store
//!
//! A unidirectional state container for a small notes model. State lives in
//! a single cell owned by a [`Store`] and only changes by dispatching
//! actions, which a pure reducer turns into a new state. Subscribers are
//! notified after every dispatch, and an optional middleware can wrap the
//! dispatch once at construction.
//!
//! ```text
//! dispatch(action) → validate → reduce → replace state → notify subscribers
//! ```
//!
//! # Example
//!
//! ```rust
//! use notes_store::{Action, Store};
//! use std::rc::Rc;
//!
//! let store = Store::new();
//! let before = store.get_state();
//!
//! store.dispatch(Action::create_note("Test note"))?;
//! store.dispatch(Action::update_note(0, "Updated"))?;
//!
//! let after = store.get_state();
//! assert!(!Rc::ptr_eq(&before, &after));
//! assert_eq!(after.note(0).unwrap().content.as_deref(), Some("Updated"));
//! # Ok::<(), notes_store::InvalidAction>(())
//! ```

pub mod actions;
pub mod middleware;
mod reducer;
pub mod state;
mod store;

pub use actions::{Action, InvalidAction, CREATE_NOTE, DELETE_NOTE, UPDATE_NOTE};
pub use middleware::{Dispatch, LoggingMiddleware, Middleware, MiddlewareApi};
pub use reducer::reduce;
pub use state::{Note, NoteId, NoteState};
pub use store::{Handler, Store, Subscription};
