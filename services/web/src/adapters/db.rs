//! services/web/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the `InvitationStore` port from the `core` crate. It handles all interactions
//! with the PostgreSQL database using `sqlx`.

use async_trait::async_trait;
use chrono::NaiveDate;
use invitation_core::domain::{NewInvitation, WeddingInvitation};
use invitation_core::ports::{InvitationStore, PortError, PortResult};
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::{FromRow, Postgres};

use crate::config::DbConfig;

//=========================================================================================
// Storage Accessor
//=========================================================================================

/// Hands out one database connection per operation.
///
/// A connection is returned to the pool when the handle is dropped, so it is
/// released on every exit path of the operation that opened it.
#[derive(Clone)]
pub struct StorageAccessor {
    pool: PgPool,
}

impl StorageAccessor {
    /// Builds the connection options from explicit settings. TLS follows
    /// `ssl_mode`, which defaults to `require`.
    pub fn connect_options(config: &DbConfig) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.name)
            .username(&config.user)
            .password(&config.password)
            .ssl_mode(config.ssl_mode)
    }

    /// Connects to the database, failing fast if it is unreachable.
    pub async fn connect(config: &DbConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(Self::connect_options(config))
            .await?;
        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Acquires a connection for a single operation.
    pub async fn open(&self) -> PortResult<PoolConnection<Postgres>> {
        self.pool
            .acquire()
            .await
            .map_err(|e| PortError::Connection(e.to_string()))
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `InvitationStore` port.
#[derive(Clone)]
pub struct PgInvitationStore {
    accessor: StorageAccessor,
}

impl PgInvitationStore {
    /// Creates a new `PgInvitationStore`.
    pub fn new(accessor: StorageAccessor) -> Self {
        Self { accessor }
    }
}

//=========================================================================================
// "Impure" Database Record Struct
//=========================================================================================

#[derive(FromRow)]
struct InvitationRecord {
    id: i64,
    groom_name: String,
    bride_name: String,
    wedding_date: NaiveDate,
    city: String,
    story: Option<String>,
    cover_image_path: Option<String>,
    haldi_date: Option<NaiveDate>,
    mehendi_date: Option<NaiveDate>,
}

impl InvitationRecord {
    fn to_domain(self) -> WeddingInvitation {
        WeddingInvitation {
            id: self.id,
            groom_name: self.groom_name,
            bride_name: self.bride_name,
            wedding_date: self.wedding_date,
            city: self.city,
            story: self.story.unwrap_or_default(),
            cover_image_path: self.cover_image_path,
            haldi_date: self.haldi_date,
            mehendi_date: self.mehendi_date,
        }
    }
}

fn query_error(e: sqlx::Error) -> PortError {
    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => PortError::Connection(e.to_string()),
        _ => PortError::Unexpected(e.to_string()),
    }
}

//=========================================================================================
// `InvitationStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl InvitationStore for PgInvitationStore {
    async fn insert_invitation(&self, invitation: &NewInvitation) -> PortResult<i64> {
        let mut conn = self.accessor.open().await?;
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO wedding_details \
             (groom_name, bride_name, wedding_date, city, story, cover_image_path, haldi_date, mehendi_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING id",
        )
        .bind(&invitation.groom_name)
        .bind(&invitation.bride_name)
        .bind(invitation.wedding_date)
        .bind(&invitation.city)
        .bind(&invitation.story)
        .bind(&invitation.cover_image_path)
        .bind(invitation.haldi_date)
        .bind(invitation.mehendi_date)
        .fetch_one(&mut *conn)
        .await
        .map_err(query_error)?;
        Ok(id)
    }

    async fn get_invitation_by_id(&self, id: i64) -> PortResult<Option<WeddingInvitation>> {
        let mut conn = self.accessor.open().await?;
        let record = sqlx::query_as::<_, InvitationRecord>(
            "SELECT id, groom_name, bride_name, wedding_date, city, story, cover_image_path, haldi_date, mehendi_date \
             FROM wedding_details WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(query_error)?;
        Ok(record.map(InvitationRecord::to_domain))
    }
}
