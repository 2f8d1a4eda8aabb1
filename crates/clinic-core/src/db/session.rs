//! Request-scoped transactions.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use super::DbResult;

/// One unit of work against the store.
///
/// Reads use a deferred transaction. Writes take the write lock up front
/// (`BEGIN IMMEDIATE`), so two writers never interleave between reading
/// the case counter and inserting the patient.
pub struct Session<'conn> {
    tx: Transaction<'conn>,
}

impl<'conn> Session<'conn> {
    /// Begin a read session.
    pub fn begin(conn: &'conn mut Connection) -> DbResult<Self> {
        Ok(Self {
            tx: conn.transaction()?,
        })
    }

    /// Begin a write session.
    pub fn begin_write(conn: &'conn mut Connection) -> DbResult<Self> {
        Ok(Self {
            tx: conn.transaction_with_behavior(TransactionBehavior::Immediate)?,
        })
    }

    /// Commit everything done in this session.
    pub fn commit(self) -> DbResult<()> {
        self.tx.commit()?;
        Ok(())
    }

    /// Explicitly roll back. Dropping the session has the same effect.
    pub fn rollback(self) -> DbResult<()> {
        self.tx.rollback()?;
        Ok(())
    }

    /// Underlying connection, inside the transaction.
    pub fn conn(&self) -> &Connection {
        &self.tx
    }
}
