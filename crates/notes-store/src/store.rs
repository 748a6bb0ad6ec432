use crate::actions::{Action, InvalidAction};
use crate::middleware::{Dispatch, Middleware, MiddlewareApi};
use crate::reducer::reduce;
use crate::state::NoteState;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A subscriber callback, compared by identity on unsubscribe
pub type Handler = Rc<dyn Fn()>;

/// The single state cell and the subscriber list of one store
struct StoreCore {
    state: RefCell<Rc<NoteState>>,
    subscribers: RefCell<Vec<Handler>>,
}

impl StoreCore {
    fn get_state(&self) -> Rc<NoteState> {
        Rc::clone(&self.state.borrow())
    }

    /// Base dispatch: validate, reduce, replace, notify
    fn dispatch(&self, raw: Value) -> Result<(), InvalidAction> {
        let action = Action::try_from(&raw).inspect_err(|e| {
            log::warn!("Rejected action {}: {}", raw, e);
        })?;

        let current = self.get_state();
        if matches!(action, Action::CreateNote { .. }) && current.allocate_id().is_none() {
            log::warn!("Rejected {}: note ids exhausted", action.type_tag());
            return Err(InvalidAction::IdsExhausted);
        }

        let next = reduce(&current, &action);
        *self.state.borrow_mut() = next;

        // No borrow is held while handlers run; this round uses the list as it
        // was before the first handler
        let handlers: Vec<Handler> = self.subscribers.borrow().clone();
        log::debug!(
            "Dispatched {}, notifying {} subscribers",
            action.type_tag(),
            handlers.len()
        );
        for handler in handlers {
            handler();
        }
        Ok(())
    }
}

/// Store - holds the note state and runs the dispatch/reduce/notify loop
///
/// `Store` is a handle: clones share the same state and subscribers, while
/// every `Store::new()` creates an independent instance.
///
/// # Example
///
/// ```rust
/// use notes_store::{Action, Store};
///
/// let store = Store::new();
/// let subscription = store.subscribe(|| println!("state changed"));
///
/// store.dispatch(Action::create_note("Test note"))?;
/// assert_eq!(store.get_state().next_note_id(), 1);
///
/// subscription.unsubscribe();
/// # Ok::<(), notes_store::InvalidAction>(())
/// ```
#[derive(Clone)]
pub struct Store {
    core: Rc<StoreCore>,
    dispatch: Dispatch,
}

impl Store {
    /// Empty store without middleware
    pub fn new() -> Self {
        Self::with_state(NoteState::default(), None)
    }

    /// Empty store whose dispatch is wrapped by `middleware`
    pub fn with_middleware<M: Middleware + 'static>(middleware: M) -> Self {
        let middleware: Box<dyn Middleware> = Box::new(middleware);
        Self::with_state(NoteState::default(), Some(middleware))
    }

    /// Store starting from `initial_state`, optionally wrapped by `middleware`
    ///
    /// The middleware is applied exactly once, here.
    pub fn with_state(initial_state: NoteState, middleware: Option<Box<dyn Middleware>>) -> Self {
        let core = Rc::new(StoreCore {
            state: RefCell::new(Rc::new(initial_state)),
            subscribers: RefCell::new(Vec::new()),
        });

        let base = {
            let core = Rc::clone(&core);
            Rc::new(move |raw: Value| core.dispatch(raw)) as Dispatch
        };

        let dispatch = match middleware {
            Some(middleware) => {
                let core = Rc::clone(&core);
                let api = MiddlewareApi::new(Rc::new(move || core.get_state()));
                middleware.wrap(api, base)
            }
            None => base,
        };

        Self { core, dispatch }
    }

    /// Current state; compare with `Rc::ptr_eq` to detect changes
    pub fn get_state(&self) -> Rc<NoteState> {
        self.core.get_state()
    }

    /// Dispatch an action through the (possibly wrapped) dispatch
    ///
    /// Accepts typed [`Action`]s as well as raw JSON records. A record that
    /// fails validation leaves the state untouched and notifies nobody.
    pub fn dispatch(&self, action: impl Into<Value>) -> Result<(), InvalidAction> {
        (self.dispatch)(action.into())
    }

    /// Register a callback run after every successful base dispatch
    pub fn subscribe<F: Fn() + 'static>(&self, handler: F) -> Subscription {
        self.subscribe_handler(Rc::new(handler))
    }

    /// Register an already shared handler
    ///
    /// The same `Rc` may be subscribed more than once; it is then called once
    /// per registration.
    pub fn subscribe_handler(&self, handler: Handler) -> Subscription {
        let mut subscribers = self.core.subscribers.borrow_mut();
        subscribers.push(Rc::clone(&handler));
        log::debug!("Subscribed handler, {} total", subscribers.len());
        Subscription {
            core: Rc::downgrade(&self.core),
            handler,
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Returned by [`Store::subscribe`]; dropping it does not unsubscribe
pub struct Subscription {
    core: Weak<StoreCore>,
    handler: Handler,
}

impl Subscription {
    /// Remove the first registration of this handler
    ///
    /// Each call removes at most one registration, so calling it again is a
    /// no-op unless the same handler was subscribed twice.
    pub fn unsubscribe(&self) {
        let Some(core) = self.core.upgrade() else {
            return;
        };
        let mut subscribers = core.subscribers.borrow_mut();
        let target = Rc::as_ptr(&self.handler) as *const ();
        let position = subscribers
            .iter()
            .position(|h| Rc::as_ptr(h) as *const () == target);
        match position {
            Some(index) => {
                subscribers.remove(index);
                log::debug!("Unsubscribed handler, {} left", subscribers.len());
            }
            None => log::debug!("Handler already unsubscribed"),
        }
    }
}
