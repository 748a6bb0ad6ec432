//! Note State
//!
//! The state is never mutated in place. Every change goes through one of the
//! copy-on-write helpers below, which build a fresh `NoteState` and reuse the
//! `Rc` of every note they did not touch.

use serde::Serialize;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Identifier handed out by `CREATE_NOTE`
///
/// Signed so that any integer id in an action is accepted; negative ids are
/// simply never allocated.
pub type NoteId = i64;

/// Notes keyed by id, shared between successive states
pub type Notes = BTreeMap<NoteId, Rc<Note>>;

/// A single note
///
/// `id` is `None` only for notes synthesized by updating an id that was never
/// created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Note {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<NoteId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Note {
    pub fn new(id: NoteId, content: Option<String>) -> Self {
        Self {
            id: Some(id),
            content,
        }
    }

    /// Copy of this note with `content` replaced, every other field kept
    pub fn with_content(&self, content: Option<String>) -> Self {
        Self {
            content,
            ..self.clone()
        }
    }
}

/// Whole store state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteState {
    next_note_id: NoteId,
    notes: Rc<Notes>,
}

impl Default for NoteState {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl NoteState {
    /// Empty state whose id counter starts at `next_note_id`
    pub fn starting_at(next_note_id: NoteId) -> Self {
        Self {
            next_note_id,
            notes: Rc::new(Notes::new()),
        }
    }

    pub fn next_note_id(&self) -> NoteId {
        self.next_note_id
    }

    /// Id the next `CREATE_NOTE` would take, `None` once the counter is spent
    pub fn allocate_id(&self) -> Option<(NoteId, NoteId)> {
        let id = self.next_note_id;
        id.checked_add(1).map(|next| (id, next))
    }

    pub fn notes(&self) -> &Rc<Notes> {
        &self.notes
    }

    pub fn note(&self, id: NoteId) -> Option<&Rc<Note>> {
        self.notes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// New state with `note` stored under `id` and the counter set to `next_note_id`
    pub(crate) fn with_note(&self, id: NoteId, note: Note, next_note_id: NoteId) -> Self {
        let mut notes = (*self.notes).clone();
        notes.insert(id, Rc::new(note));
        Self {
            next_note_id,
            notes: Rc::new(notes),
        }
    }

    /// New state without the note at `id`
    ///
    /// Always allocates a new mapping, even when `id` was absent.
    pub(crate) fn without_note(&self, id: NoteId) -> Self {
        let mut notes = (*self.notes).clone();
        notes.remove(&id);
        Self {
            next_note_id: self.next_note_id,
            notes: Rc::new(notes),
        }
    }
}
