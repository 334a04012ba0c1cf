use sea_orm::{DbErr, SqlErr};

#[derive(Debug, thiserror::Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: i32 },
    #[error("{entity} rejected: {message}")]
    Conflict {
        entity: &'static str,
        message: String,
    },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl DaoLayerError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn conflict(entity: &'static str, message: impl Into<String>) -> Self {
        Self::Conflict {
            entity,
            message: message.into(),
        }
    }

    /// Lifts constraint violations reported by the driver into `Conflict` so
    /// callers never see them as generic database failures.
    pub fn from_db(entity: &'static str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                Self::conflict(entity, format!("duplicate value ({detail})"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                Self::conflict(entity, format!("invalid reference ({detail})"))
            }
            _ => Self::Db(err),
        }
    }
}
