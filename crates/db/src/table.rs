use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum ShoppingList {
    Table,
    Key,
    Items,
    UpdatedAt,
}
