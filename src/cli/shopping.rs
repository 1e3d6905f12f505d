use larder_shared::shopping::ListKey;
use larder_shopping::{AggregationReport, ShoppingItem, Store, group_by_category};

pub async fn add(store: &Store, key: ListKey, path: String) -> anyhow::Result<()> {
    let ingredients = larder::recipe::read_ingredients(&path)?;
    let report = store.add_recipe(key, &ingredients).await?;
    println!("{}", added_message(&report, key));

    Ok(())
}

fn added_message(report: &AggregationReport, key: ListKey) -> String {
    if report.is_all_present() {
        return format!("All ingredients already in {key} list!");
    }

    match report.added {
        0 => "Nothing to add, the recipe has no shoppable ingredients".to_owned(),
        1 => format!("1 item added to {key} list!"),
        added => format!("{added} items added to {key} list!"),
    }
}

pub async fn item(store: &Store, key: ListKey, text: String) -> anyhow::Result<()> {
    match store.add_custom(key, &text).await? {
        Some(item) => println!("Added {} ({})", item.name, item.id),
        None => tracing::warn!("nothing to add, item text is blank"),
    }

    Ok(())
}

pub async fn show(store: &Store, key: ListKey, json: bool) -> anyhow::Result<()> {
    let items = store.load(key).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("Your {key} list is empty");
        return Ok(());
    }

    for (category, items) in group_by_category(&items) {
        println!("{category}");
        for item in items {
            println!("  {}", render(item));
        }
    }

    Ok(())
}

fn render(item: &ShoppingItem) -> String {
    let mark = if item.checked { "x" } else { " " };

    format!("[{mark}] {}  {}", item.name, item.id)
}

pub async fn toggle(store: &Store, key: ListKey, id: String) -> anyhow::Result<()> {
    let checked = store.toggle(key, &id).await?;
    println!("{id} {}", if checked { "checked" } else { "unchecked" });

    Ok(())
}

pub async fn remove(store: &Store, key: ListKey, id: String) -> anyhow::Result<()> {
    store.remove(key, &id).await?;
    println!("{id} removed");

    Ok(())
}

pub async fn clear_checked(store: &Store, key: ListKey) -> anyhow::Result<()> {
    let removed = store.clear_checked(key).await?;
    println!("{removed} checked items removed");

    Ok(())
}

pub async fn reset(store: &Store, key: ListKey) -> anyhow::Result<()> {
    store.reset(key).await?;
    println!("All items unchecked");

    Ok(())
}

pub async fn clear(store: &Store, key: ListKey) -> anyhow::Result<()> {
    store.clear(key).await?;
    println!("{key} list cleared");

    Ok(())
}
