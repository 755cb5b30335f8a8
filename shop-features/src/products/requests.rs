use serde::Deserialize;
use shop_application::{command, query};
use shop_domain::entity::{EntityId, Product};
use shop_domain::persist::ProductDraft;
use shop_domain::value_object::Money;

#[command(response = bool)]
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url_image: Option<String>,
    pub price: Money,
    pub user_id: EntityId,
    pub category_id: EntityId,
}

#[command(response = bool)]
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub id: EntityId,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url_image: Option<String>,
    pub price: Money,
    pub user_id: EntityId,
    pub category_id: EntityId,
}

#[command(response = bool)]
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteProduct {
    pub id: EntityId,
}

#[query(response = Product)]
#[derive(Debug, Clone, Deserialize)]
pub struct GetProductById {
    pub id: EntityId,
}

#[query(response = Vec<Product>)]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetAllProducts;

impl CreateProduct {
    pub(crate) fn draft(&self) -> ProductDraft {
        ProductDraft::builder()
            .name(self.name.as_str())
            .code(self.code.as_str())
            .maybe_description(self.description.clone())
            .maybe_url_image(self.url_image.clone())
            .price(self.price)
            .user_id(self.user_id)
            .category_id(self.category_id)
            .build()
    }
}

impl UpdateProduct {
    pub(crate) fn draft(&self) -> ProductDraft {
        ProductDraft::builder()
            .name(self.name.as_str())
            .code(self.code.as_str())
            .maybe_description(self.description.clone())
            .maybe_url_image(self.url_image.clone())
            .price(self.price)
            .user_id(self.user_id)
            .category_id(self.category_id)
            .build()
    }
}
