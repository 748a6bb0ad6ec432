//! Actions
//!
//! Actions arrive as untyped JSON records (`{ "type": ..., ...payload }`) and
//! are validated into the closed [`Action`] enum before the reducer sees them.
//! Type tags the reducer does not know are kept verbatim in [`Action::Other`].

use crate::state::NoteId;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub const CREATE_NOTE: &str = "CREATE_NOTE";
pub const UPDATE_NOTE: &str = "UPDATE_NOTE";
pub const DELETE_NOTE: &str = "DELETE_NOTE";

const TYPE_FIELD: &str = "type";

/// Errors raised by `dispatch` before any state change
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("Action must be an object")]
    NotAnObject,

    #[error("Action must have a type")]
    MissingType,

    #[error("No note ids left to create a note")]
    IdsExhausted,

    #[error("Malformed {action_type} action: {reason}")]
    MalformedPayload {
        action_type: &'static str,
        reason: String,
    },
}

/// Every action the store accepts
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CreateNote {
        content: Option<String>,
    },
    UpdateNote {
        id: NoteId,
        content: Option<String>,
    },
    DeleteNote {
        id: NoteId,
    },
    /// Any other type tag, carried as given (may be `false`, `0`, `""`, ...)
    Other(Value),
}

#[derive(Deserialize)]
struct CreatePayload {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct UpdatePayload {
    id: NoteId,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct DeletePayload {
    id: NoteId,
}

impl Action {
    pub fn create_note(content: impl Into<String>) -> Self {
        Action::CreateNote {
            content: Some(content.into()),
        }
    }

    pub fn update_note(id: NoteId, content: impl Into<String>) -> Self {
        Action::UpdateNote {
            id,
            content: Some(content.into()),
        }
    }

    pub fn delete_note(id: NoteId) -> Self {
        Action::DeleteNote { id }
    }

    /// The `type` tag of this action
    pub fn type_tag(&self) -> Value {
        match self {
            Action::CreateNote { .. } => Value::from(CREATE_NOTE),
            Action::UpdateNote { .. } => Value::from(UPDATE_NOTE),
            Action::DeleteNote { .. } => Value::from(DELETE_NOTE),
            Action::Other(tag) => tag.clone(),
        }
    }
}

fn payload<'de, T: Deserialize<'de>>(
    action_type: &'static str,
    raw: &'de Value,
) -> Result<T, InvalidAction> {
    T::deserialize(raw).map_err(|e| InvalidAction::MalformedPayload {
        action_type,
        reason: e.to_string(),
    })
}

impl TryFrom<&Value> for Action {
    type Error = InvalidAction;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        let record = raw.as_object().ok_or(InvalidAction::NotAnObject)?;

        // `null` is the only absent marker; `false`, `0` and `""` are real tags
        let tag = match record.get(TYPE_FIELD) {
            None | Some(Value::Null) => return Err(InvalidAction::MissingType),
            Some(tag) => tag,
        };

        let action = match tag.as_str() {
            Some(CREATE_NOTE) => {
                let CreatePayload { content } = payload(CREATE_NOTE, raw)?;
                Action::CreateNote { content }
            }
            Some(UPDATE_NOTE) => {
                let UpdatePayload { id, content } = payload(UPDATE_NOTE, raw)?;
                Action::UpdateNote { id, content }
            }
            Some(DELETE_NOTE) => {
                let DeletePayload { id } = payload(DELETE_NOTE, raw)?;
                Action::DeleteNote { id }
            }
            _ => Action::Other(tag.clone()),
        };
        Ok(action)
    }
}

impl TryFrom<Value> for Action {
    type Error = InvalidAction;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        Action::try_from(&raw)
    }
}

impl From<Action> for Value {
    fn from(action: Action) -> Self {
        let mut record = Map::new();
        record.insert(TYPE_FIELD.to_string(), action.type_tag());
        match action {
            Action::CreateNote { content } => {
                if let Some(content) = content {
                    record.insert("content".to_string(), Value::String(content));
                }
            }
            Action::UpdateNote { id, content } => {
                record.insert("id".to_string(), Value::from(id));
                if let Some(content) = content {
                    record.insert("content".to_string(), Value::String(content));
                }
            }
            Action::DeleteNote { id } => {
                record.insert("id".to_string(), Value::from(id));
            }
            Action::Other(_) => {}
        }
        Value::Object(record)
    }
}
