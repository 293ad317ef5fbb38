use crate::domain::errors::DomainError;

const CNT_NOTE_SLUG: &str = "notes_slug_key";
const CNT_NOTE_SLUG_NOT_EMPTY: &str = "notes_slug_not_empty_chk";
const CNT_NOTE_AUTHOR: &str = "notes_author_id_fkey";
const CNT_USER_USERNAME: &str = "users_username_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    map_sqlx_with_slug(err, None)
}

/// Like [`map_sqlx`], but reports a violated slug constraint as a duplicate
/// of the slug that was being written.
pub(super) fn map_sqlx_with_slug(err: sqlx::Error, slug: Option<&str>) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match (constraint, slug) {
                    (CNT_NOTE_SLUG, Some(slug)) => DomainError::DuplicateSlug {
                        slug: slug.to_string(),
                    },
                    (CNT_NOTE_SLUG, None) => DomainError::Conflict("slug already exists".into()),
                    (CNT_NOTE_SLUG_NOT_EMPTY, _) => {
                        DomainError::Validation("slug cannot be empty".into())
                    }
                    (CNT_USER_USERNAME, _) => {
                        DomainError::Conflict("username already exists".into())
                    }
                    (CNT_NOTE_AUTHOR, _) => DomainError::NotFound("author not found".into()),
                    (other, _) => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_become_persistence_errors() {
        let mapped = map_sqlx_with_slug(sqlx::Error::RowNotFound, Some("no_slug"));
        assert!(matches!(mapped, DomainError::Persistence(_)));
    }

    #[test]
    fn pool_timeout_is_a_persistence_error() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Persistence(_)
        ));
    }
}
