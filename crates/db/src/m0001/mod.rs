mod shopping_list;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "larder",
    "m0001",
    vec_box![],
    vec_box![shopping_list::CreateTable]
);
