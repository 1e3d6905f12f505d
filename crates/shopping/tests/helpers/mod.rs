use std::{path::PathBuf, str::FromStr};

use larder_shopping::{RawIngredient, Store};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

#[allow(dead_code)]
pub async fn setup_test_store(path: PathBuf) -> anyhow::Result<Store> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    larder_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(Store(pool))
}

#[allow(dead_code)]
pub fn recipe(lines: &[(&str, &str)]) -> Vec<RawIngredient> {
    lines
        .iter()
        .map(|(amount, item)| RawIngredient::new(*amount, *item))
        .collect()
}
