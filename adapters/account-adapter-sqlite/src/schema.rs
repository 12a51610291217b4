//! Database schema initialization
//!
//! Creates the document table on first start. There is no migration
//! history to carry: the document layout is owned by the callers, the
//! table only keys it.

use sqlx::SqlitePool;

pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Accounts
	//**********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS accounts (
			account_id text NOT NULL,
			doc json NOT NULL,
			updated_at datetime DEFAULT (unixepoch()),
			PRIMARY KEY(account_id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
