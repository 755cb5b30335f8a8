use serde::Deserialize;
use shop_application::{command, query};
use shop_domain::entity::{Category, EntityId};

#[command(response = bool)]
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

#[command(response = bool)]
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub id: EntityId,
    pub name: String,
}

#[command(response = bool)]
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteCategory {
    pub id: EntityId,
}

#[query(response = Category)]
#[derive(Debug, Clone, Deserialize)]
pub struct GetCategoryById {
    pub id: EntityId,
}

#[query(response = Vec<Category>)]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetAllCategories;
