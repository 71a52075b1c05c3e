//! Cafe Repository

use super::{RepoError, RepoResult};
use shared::models::{Cafe, CafeCreate};
use sqlx::SqlitePool;

fn select_from(clause: &str) -> String {
    format!("SELECT {} FROM {} {clause}", Cafe::select_list(), Cafe::TABLE)
}

/// Every cafe, ordered by name
pub async fn list_all(pool: &SqlitePool) -> RepoResult<Vec<Cafe>> {
    let sql = select_from("ORDER BY name ASC");
    let rows = sqlx::query_as::<_, Cafe>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn get_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Cafe>> {
    let sql = select_from("WHERE id = ?");
    let row = sqlx::query_as::<_, Cafe>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Cafes whose location matches `location` exactly, ordered by name
pub async fn find_by_location(pool: &SqlitePool, location: &str) -> RepoResult<Vec<Cafe>> {
    let sql = select_from("WHERE location = ? ORDER BY name ASC");
    let rows = sqlx::query_as::<_, Cafe>(&sql)
        .bind(location)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// One cafe chosen uniformly at random, `None` when the table is empty
pub async fn pick_random(pool: &SqlitePool) -> RepoResult<Option<Cafe>> {
    let sql = select_from("ORDER BY RANDOM() LIMIT 1");
    let row = sqlx::query_as::<_, Cafe>(&sql).fetch_optional(pool).await?;
    Ok(row)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cafe")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

/// Insert a cafe and return its id
///
/// A `None` id lets SQLite assign the next rowid. Primary key and name
/// collisions, as well as missing required columns, come back as
/// [`RepoError::Database`].
pub async fn insert(pool: &SqlitePool, data: &CafeCreate) -> RepoResult<i64> {
    let result = sqlx::query(
        "INSERT INTO cafe (id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(data.id)
    .bind(&data.name)
    .bind(&data.map_url)
    .bind(&data.img_url)
    .bind(&data.location)
    .bind(&data.seats)
    .bind(data.has_toilet)
    .bind(data.has_wifi)
    .bind(data.has_sockets)
    .bind(data.can_take_calls)
    .bind(&data.coffee_price)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Replace the coffee price; `None` clears it
pub async fn update_price(pool: &SqlitePool, id: i64, new_price: Option<&str>) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE cafe SET coffee_price = ? WHERE id = ?")
        .bind(new_price)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("cafe {id}")));
    }
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM cafe WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("cafe {id}")));
    }
    Ok(())
}
