// src/infrastructure/repositories/postgres_note.rs
use super::error::{map_sqlx, map_sqlx_with_slug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::note::{
    ExistingSlugs, NewNote, Note, NoteId, NoteReadRepository, NoteSlug, NoteText, NoteTitle,
    NoteUpdate, NoteWriteRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const NOTE_COLUMNS: &str = "id, title, text, slug, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresNoteWriteRepository {
    pool: PgPool,
}

impl PostgresNoteWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresNoteReadRepository {
    pool: PgPool,
}

impl PostgresNoteReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NoteRow {
    id: i64,
    title: String,
    text: String,
    slug: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NoteRow> for Note {
    type Error = DomainError;

    fn try_from(row: NoteRow) -> Result<Self, Self::Error> {
        Ok(Note {
            id: NoteId::new(row.id)?,
            title: NoteTitle::new(row.title)?,
            text: NoteText::new(row.text)?,
            slug: NoteSlug::new(row.slug)?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl NoteWriteRepository for PostgresNoteWriteRepository {
    async fn insert(&self, note: NewNote) -> DomainResult<Note> {
        let NewNote {
            title,
            text,
            slug,
            author_id,
            created_at,
            updated_at,
        } = note;

        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "INSERT INTO notes (title, text, slug, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(text.as_str())
        .bind(slug.as_str())
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx_with_slug(err, Some(slug.as_str())))?;

        Note::try_from(row)
    }

    async fn update(&self, update: NoteUpdate) -> DomainResult<Note> {
        let NoteUpdate {
            id,
            title,
            text,
            slug,
            original_updated_at,
            updated_at,
        } = update;

        let maybe_row = sqlx::query_as::<_, NoteRow>(&format!(
            "UPDATE notes SET title = $1, text = $2, slug = $3, updated_at = $4
             WHERE id = $5 AND updated_at = $6
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(text.as_str())
        .bind(slug.as_str())
        .bind(updated_at)
        .bind(i64::from(id))
        .bind(original_updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| map_sqlx_with_slug(err, Some(slug.as_str())))?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("note update conflict, please retry".into()))?;

        Note::try_from(row)
    }

    async fn delete(&self, id: NoteId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("note not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl NoteReadRepository for PostgresNoteReadRepository {
    async fn find_by_slug(&self, slug: &NoteSlug) -> DomainResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Note::try_from).transpose()
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteRow>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE author_id = $1 ORDER BY id"
        ))
        .bind(i64::from(author_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Note::try_from).collect()
    }

    async fn existing_slugs(
        &self,
        candidate: &NoteSlug,
        excluding: Option<NoteId>,
    ) -> DomainResult<ExistingSlugs> {
        let slugs = sqlx::query_scalar::<_, String>(
            "SELECT slug FROM notes WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)",
        )
        .bind(candidate.as_str())
        .bind(excluding.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(slugs.into_iter().collect())
    }
}
