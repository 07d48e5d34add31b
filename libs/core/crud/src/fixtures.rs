//! Minimal resource used by this crate's unit tests.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone};
use sea_orm::{FromQueryResult, Value};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::patch::Patch;
use crate::policy::{Policy, PolicyError};
use crate::resource::{Resource, TraceCodes};

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: i32,
    pub title: String,
    pub body: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNote {
    #[serde(default)]
    pub title: String,
    pub body: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateNote {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub body: Patch<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub title: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub body: Option<Option<String>>,
}

pub struct Notes;

impl Resource for Notes {
    type Id = i32;
    type Record = Note;
    type Create = CreateNote;
    type Update = UpdateNote;
    type New = NewNote;
    type Changes = NoteChanges;

    const TABLE: &'static str = "notes";
    const ID_COLUMN: &'static str = "note_id";
    const COLUMNS: &'static [&'static str] =
        &["note_id", "title", "body", "created_at", "updated_at"];
    const NAME: &'static str = "note";
    const PLURAL: &'static str = "notes";
    const TAG: &'static str = "notes";
    const TRACE: TraceCodes = TraceCodes {
        create: "note-001",
        get_one: "note-002",
        get_all: "note-003",
        update: "note-004",
        delete: "note-005",
    };

    fn id(record: &Note) -> i32 {
        record.note_id
    }

    fn insert_values(new: &NewNote) -> Vec<(&'static str, Value)> {
        vec![
            ("title", new.title.clone().into()),
            ("body", new.body.clone().into()),
        ]
    }

    fn patch_values(changes: &NoteChanges) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(title) = &changes.title {
            values.push(("title", title.clone().into()));
        }
        if let Some(body) = &changes.body {
            values.push(("body", body.clone().into()));
        }
        values
    }

    fn hydrate(id: i32, new: NewNote, at: DateTime<FixedOffset>) -> Note {
        Note {
            note_id: id,
            title: new.title,
            body: new.body,
            created_at: at,
            updated_at: at,
        }
    }

    fn apply(record: &mut Note, changes: NoteChanges, at: DateTime<FixedOffset>) {
        if let Some(title) = changes.title {
            record.title = title;
        }
        if let Some(body) = changes.body {
            record.body = body;
        }
        record.updated_at = at;
    }
}

pub struct NotePolicy;

#[async_trait]
impl Policy<Notes> for NotePolicy {
    async fn prepare_create(&self, input: CreateNote) -> Result<NewNote, PolicyError> {
        if input.title.trim().is_empty() {
            return Err(PolicyError::Invalid("title is required".to_string()));
        }

        Ok(NewNote {
            title: input.title,
            body: input.body,
        })
    }

    async fn prepare_update(&self, input: UpdateNote) -> Result<NoteChanges, PolicyError> {
        Ok(NoteChanges {
            title: input.title.required_text("title")?,
            body: input.body.into_change(),
        })
    }
}

pub fn at() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(7 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
        .unwrap()
}
