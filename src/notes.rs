//! Note records and their keyed store
//!
//! The store is the persistence collaborator: an opaque keyed map with
//! find-by-id, find-by-owner, insert, update, and delete. It enforces
//! nothing about ownership; that is the guard's job. Concurrent writes to
//! the same note are last-write-wins.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use utoipa::ToSchema;
use uuid::Uuid;

/// A note owned by exactly one account
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    /// Owning account id, set once at creation and never reassigned
    pub owner_id: String,
    pub title: String,
    pub content: String,
    pub is_favorite: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Partial update applied to an existing note
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_favorite: Option<bool>,
}

/// In-memory keyed note store
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Arc<RwLock<HashMap<String, Note>>>,
}

impl NoteStore {
    /// Insert a new note for the given owner
    pub fn insert(
        &self,
        owner_id: &str,
        title: String,
        content: String,
        is_favorite: bool,
    ) -> Note {
        let now = chrono::Utc::now();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            title,
            content,
            is_favorite,
            created_at: now,
            updated_at: now,
        };

        self.notes
            .write()
            .unwrap()
            .insert(note.id.clone(), note.clone());
        note
    }

    /// Look up a note by id
    pub fn find_by_id(&self, id: &str) -> Option<Note> {
        self.notes.read().unwrap().get(id).cloned()
    }

    /// All notes for one owner, newest first
    pub fn find_by_owner(&self, owner_id: &str) -> Vec<Note> {
        let notes = self.notes.read().unwrap();
        let mut owned: Vec<Note> = notes
            .values()
            .filter(|note| note.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        owned
    }

    /// Apply a partial update and bump `updated_at`
    pub fn update(&self, id: &str, patch: NotePatch) -> Option<Note> {
        let mut notes = self.notes.write().unwrap();
        let note = notes.get_mut(id)?;

        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        if let Some(is_favorite) = patch.is_favorite {
            note.is_favorite = is_favorite;
        }
        note.updated_at = chrono::Utc::now();

        Some(note.clone())
    }

    /// Remove a note, returning whether it existed
    pub fn delete(&self, id: &str) -> bool {
        self.notes.write().unwrap().remove(id).is_some()
    }
}
