use larder_db::table::ShoppingList;
use larder_shared::shopping::ListKey;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

use crate::{AggregationReport, RawIngredient, ShoppingItem, aggregate_ingredients_with_report};

#[derive(FromRow)]
struct ListRow {
    items: String,
}

/// Shopping lists persisted as JSON arrays, one row per [`ListKey`].
#[derive(Clone)]
pub struct Store(pub SqlitePool);

impl Store {
    /// Current entries of a list. A list that was never saved is empty.
    pub async fn load(&self, key: ListKey) -> larder_shared::Result<Vec<ShoppingItem>> {
        let statement = Query::select()
            .column(ShoppingList::Items)
            .from(ShoppingList::Table)
            .and_where(Expr::col(ShoppingList::Key).eq(key.as_ref()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some(row) = sqlx::query_as_with::<_, ListRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
        else {
            return Ok(vec![]);
        };

        let mut items: Vec<ShoppingItem> = serde_json::from_str(&row.items)?;

        // entries written before baseItem existed merge on their display name
        for item in items.iter_mut().filter(|item| item.base_item.is_empty()) {
            item.base_item = item.name.to_owned();
        }

        Ok(items)
    }

    pub async fn save(&self, key: ListKey, items: &[ShoppingItem]) -> larder_shared::Result<()> {
        let items = serde_json::to_string(items)?;
        let updated_at = OffsetDateTime::now_utc().unix_timestamp();

        let statement = Query::insert()
            .into_table(ShoppingList::Table)
            .columns([
                ShoppingList::Key,
                ShoppingList::Items,
                ShoppingList::UpdatedAt,
            ])
            .values_panic([key.as_ref().into(), items.into(), updated_at.into()])
            .on_conflict(
                OnConflict::column(ShoppingList::Key)
                    .update_columns([ShoppingList::Items, ShoppingList::UpdatedAt])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }

    /// Forget a list entirely. Returns whether it existed.
    pub async fn delete(&self, key: ListKey) -> larder_shared::Result<bool> {
        let statement = Query::delete()
            .from_table(ShoppingList::Table)
            .and_where(Expr::col(ShoppingList::Key).eq(key.as_ref()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn add_recipe(
        &self,
        key: ListKey,
        ingredients: &[RawIngredient],
    ) -> larder_shared::Result<AggregationReport> {
        let current = self.load(key).await?;
        let (items, report) = aggregate_ingredients_with_report(current, ingredients);
        self.save(key, &items).await?;

        tracing::info!(
            list = key.as_ref(),
            added = report.added,
            merged = report.merged,
            discarded = report.discarded,
            "recipe added to list"
        );

        Ok(report)
    }

    pub async fn add_custom(
        &self,
        key: ListKey,
        text: &str,
    ) -> larder_shared::Result<Option<ShoppingItem>> {
        let mut items = self.load(key).await?;
        let Some(item) = crate::add_custom_item(&mut items, text).cloned() else {
            return Ok(None);
        };

        self.save(key, &items).await?;
        tracing::info!(list = key.as_ref(), id = item.id, name = item.name, "custom item added");

        Ok(Some(item))
    }

    /// Flip an entry's checked flag, returning the new state.
    pub async fn toggle(&self, key: ListKey, id: &str) -> larder_shared::Result<bool> {
        if id.trim().is_empty() {
            larder_shared::user!("item id is required");
        }

        let mut items = self.load(key).await?;
        if !crate::toggle_item(&mut items, id) {
            larder_shared::not_found!("shopping item {id} in {key} list");
        }

        let checked = items
            .iter()
            .find(|item| item.id == id)
            .is_some_and(|item| item.checked);

        self.save(key, &items).await?;
        tracing::info!(list = key.as_ref(), id, checked, "item toggled");

        Ok(checked)
    }

    pub async fn remove(&self, key: ListKey, id: &str) -> larder_shared::Result<()> {
        if id.trim().is_empty() {
            larder_shared::user!("item id is required");
        }

        let mut items = self.load(key).await?;
        if !crate::remove_item(&mut items, id) {
            larder_shared::not_found!("shopping item {id} in {key} list");
        }

        self.save(key, &items).await?;
        tracing::info!(list = key.as_ref(), id, "item removed");

        Ok(())
    }

    pub async fn clear_checked(&self, key: ListKey) -> larder_shared::Result<usize> {
        let mut items = self.load(key).await?;
        let removed = crate::clear_checked(&mut items);
        if removed > 0 {
            self.save(key, &items).await?;
        }

        tracing::info!(list = key.as_ref(), removed, "checked items cleared");

        Ok(removed)
    }

    /// Uncheck everything, ready for the next trip.
    pub async fn reset(&self, key: ListKey) -> larder_shared::Result<()> {
        let mut items = self.load(key).await?;
        crate::uncheck_all(&mut items);
        self.save(key, &items).await?;

        tracing::info!(list = key.as_ref(), "list reset");

        Ok(())
    }

    pub async fn clear(&self, key: ListKey) -> larder_shared::Result<()> {
        let existed = self.delete(key).await?;
        tracing::info!(list = key.as_ref(), existed, "list cleared");

        Ok(())
    }
}
