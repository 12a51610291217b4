//! SQLite-backed account store.
//!
//! Profiles are stored the way the relay thinks about them: one JSON
//! document per account, keyed by the verified account id. SQLite is
//! only the durable keyed bag underneath, so the table stays a
//! two-column key/document pair.

use async_trait::async_trait;
use sqlx::{
	sqlite::{self, SqlitePool},
	Row,
};
use std::{fmt::Debug, path::Path};

use octopush::prelude::*;

mod schema;
use schema::init_db;

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

#[derive(Debug)]
pub struct AccountAdapterSqlite {
	db: SqlitePool,
}

impl AccountAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> OpResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.or(Err(Error::StoreUnavailable))?;

		init_db(&db).await.inspect_err(inspect).or(Err(Error::StoreUnavailable))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl AccountStore for AccountAdapterSqlite {
	async fn read_account(&self, account_id: &AccountId) -> OpResult<AccountRecord> {
		let res = sqlx::query("SELECT doc FROM accounts WHERE account_id = ?1")
			.bind(account_id.as_str())
			.fetch_one(&self.db)
			.await;

		match res {
			Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
			Err(err) => {
				inspect(&err);
				Err(Error::StoreUnavailable)
			}
			Ok(row) => {
				let doc: &str = row.try_get("doc").or(Err(Error::StoreUnavailable))?;
				serde_json::from_str(doc)
					.map_err(|err| Error::Internal(format!("corrupt account document: {}", err)))
			}
		}
	}

	async fn write_account(&self, record: &AccountRecord) -> OpResult<()> {
		let doc = serde_json::to_string(record)
			.map_err(|err| Error::Internal(format!("unserializable account document: {}", err)))?;

		sqlx::query("INSERT OR REPLACE INTO accounts (account_id, doc) VALUES (?1, ?2)")
			.bind(record.id.as_str())
			.bind(&doc)
			.execute(&self.db)
			.await
			.inspect_err(inspect)
			.or(Err(Error::StoreUnavailable))?;

		Ok(())
	}
}

// vim: ts=4
