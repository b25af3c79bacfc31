//! Estado reference rows.
//!
//! The table is seeded once by the migrations; see
//! `pcg_core::estado::Estado` for the enum mirror.

use pcg_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An estado row from the `estados` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Estado {
    pub id: DbId,
    pub nombre: String,
    pub created_at: Timestamp,
}
