use anyhow::Result;

use crate::utils::commons::{DbPool, PooledConn};

pub fn get_conn(pool: &DbPool) -> Result<PooledConn> {
    let conn = pool.get()?;

    Ok(conn)
}
