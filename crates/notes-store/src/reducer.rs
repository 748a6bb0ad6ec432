use crate::actions::Action;
use crate::state::{Note, NoteState};
use std::rc::Rc;

/// Reducer - pure function that produces new state from current state + action
///
/// Unknown actions hand back the very same `Rc`, so callers can detect "no
/// change" with `Rc::ptr_eq`. Every known action yields a freshly allocated
/// state, even when the visible content ends up equal.
pub fn reduce(state: &Rc<NoteState>, action: &Action) -> Rc<NoteState> {
    match action {
        Action::CreateNote { content } => match state.allocate_id() {
            Some((id, next_note_id)) => {
                log::trace!("Creating note {}", id);
                Rc::new(state.with_note(id, Note::new(id, content.clone()), next_note_id))
            }
            None => {
                // The store refuses this before reducing; stay total when called directly
                log::warn!("Note ids exhausted, not creating note");
                Rc::clone(state)
            }
        },
        Action::UpdateNote { id, content } => {
            // Updating an id that was never created still stores a note, one
            // without an id of its own
            let edited = match state.note(*id) {
                Some(note) => note.with_content(content.clone()),
                None => {
                    log::trace!("Updating unknown note {}, synthesizing it", id);
                    Note::default().with_content(content.clone())
                }
            };
            Rc::new(state.with_note(*id, edited, state.next_note_id()))
        }
        Action::DeleteNote { id } => {
            log::trace!("Deleting note {}", id);
            Rc::new(state.without_note(*id))
        }
        Action::Other(tag) => {
            log::trace!("Ignoring unknown action type {}", tag);
            Rc::clone(state)
        }
    }
}
