use crate::domain::errors::DomainError;

/// Maps a named Postgres constraint from `migrations/` to the domain error
/// the services expect.
fn constraint_error(constraint: &str) -> Option<DomainError> {
    let err = match constraint {
        "articles_slug_key" => DomainError::Conflict("slug already exists".into()),
        "users_email_key" => DomainError::Conflict("email already registered".into()),
        "subscribers_email_key" => DomainError::Conflict("already subscribed".into()),
        "articles_created_by_fkey" => DomainError::NotFound("creator not found".into()),
        "comments_article_id_fkey" => DomainError::NotFound("article not found".into()),
        "comments_user_id_fkey" => DomainError::NotFound("user not found".into()),
        _ => return None,
    };
    Some(err)
}

/// Falls back to the SQLSTATE class when the constraint is unnamed or not
/// one of ours.
fn sqlstate_error(code: &str) -> Option<DomainError> {
    match code {
        "23505" => Some(DomainError::Conflict("unique constraint violated".into())),
        "23503" => Some(DomainError::NotFound("referenced record not found".into())),
        "23514" => Some(DomainError::Validation("check constraint violated".into())),
        _ => None,
    }
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    let sqlx::Error::Database(db_err) = &err else {
        return DomainError::Persistence(err.to_string());
    };

    db_err
        .constraint()
        .and_then(constraint_error)
        .or_else(|| db_err.code().and_then(|code| sqlstate_error(&code)))
        .unwrap_or_else(|| DomainError::Persistence(db_err.message().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_constraints_map_to_domain_errors() {
        assert!(matches!(
            constraint_error("articles_slug_key"),
            Some(DomainError::Conflict(_))
        ));
        assert!(matches!(
            constraint_error("comments_article_id_fkey"),
            Some(DomainError::NotFound(_))
        ));
        assert!(constraint_error("some_other_key").is_none());
    }

    #[test]
    fn sqlstate_classes_are_a_fallback() {
        assert!(matches!(sqlstate_error("23505"), Some(DomainError::Conflict(_))));
        assert!(matches!(sqlstate_error("23514"), Some(DomainError::Validation(_))));
        assert!(sqlstate_error("42P01").is_none());
    }

    #[test]
    fn non_database_errors_are_persistence_failures() {
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::Persistence(_)
        ));
    }
}
