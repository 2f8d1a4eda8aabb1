//! Shared application state and request-scoped sessions.

use std::sync::Arc;

use clinic_core::{DbError, DbPool, DbResult, Session};

use crate::error::WebError;
use crate::views::Views;

/// State handed to every handler. Cheap to clone.
///
/// The pool is the only thing requests share; each request checks out its
/// own connection and runs exactly one session on it.
#[derive(Clone)]
pub struct AppState {
    pool: DbPool,
    views: Arc<Views>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Result<Self, WebError> {
        Ok(Self {
            pool,
            views: Arc::new(Views::new()?),
        })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    /// Run `work` in a read session.
    pub async fn read<T, F>(&self, work: F) -> Result<T, WebError>
    where
        F: FnOnce(&Session<'_>) -> DbResult<T> + Send + 'static,
        T: Send + 'static,
    {
        self.run(false, work).await
    }

    /// Run `work` in a write session, committing if it succeeds.
    pub async fn write<T, F>(&self, work: F) -> Result<T, WebError>
    where
        F: FnOnce(&Session<'_>) -> DbResult<T> + Send + 'static,
        T: Send + 'static,
    {
        self.run(true, work).await
    }

    async fn run<T, F>(&self, write: bool, work: F) -> Result<T, WebError>
    where
        F: FnOnce(&Session<'_>) -> DbResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        let task = tokio::task::spawn_blocking(move || -> DbResult<T> {
            let mut conn = pool.get().map_err(DbError::from)?;
            let session = if write {
                Session::begin_write(&mut conn)?
            } else {
                Session::begin(&mut conn)?
            };
            // An error returns before commit; dropping the session rolls back.
            let value = work(&session)?;
            session.commit()?;
            Ok(value)
        });

        match task.await {
            Ok(result) => result.map_err(WebError::from),
            Err(err) => Err(WebError::Internal(format!("database task failed: {}", err))),
        }
    }
}
