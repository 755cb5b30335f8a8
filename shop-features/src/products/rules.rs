use super::requests::{CreateProduct, DeleteProduct, GetProductById, UpdateProduct};
use shop_application::validation::RuleSet;
use shop_domain::specification::{GreaterThan, MaxChars, NotBlank};
use shop_domain::value_object::Money;

/// 新建与更新共用的字段规则
macro_rules! product_fields {
    ($rules:expr) => {
        $rules
            .rule("Name", |p| p.name.as_str(), NotBlank, "Name is required.")
            .rule("Name", |p| p.name.as_str(), MaxChars(150), "Name cannot exceed 150 characters.")
            .rule("Code", |p| p.code.as_str(), NotBlank, "Code is required.")
            .rule("Code", |p| p.code.as_str(), MaxChars(50), "Code cannot exceed 50 characters.")
            .rule("Price", |p| &p.price, GreaterThan(Money::ZERO), "Price must be greater than 0.")
            .rule("UserId", |p| &p.user_id, GreaterThan(0), "UserId must be greater than 0.")
            .rule(
                "CategoryId",
                |p| &p.category_id,
                GreaterThan(0),
                "CategoryId must be greater than 0.",
            )
    };
}

pub fn create_product() -> RuleSet<CreateProduct> {
    product_fields!(RuleSet::<CreateProduct>::new("create-product"))
}

pub fn update_product() -> RuleSet<UpdateProduct> {
    product_fields!(RuleSet::<UpdateProduct>::new("update-product").rule(
        "Id",
        |p| &p.id,
        GreaterThan(0),
        "Id must be greater than 0."
    ))
}

pub fn delete_product() -> RuleSet<DeleteProduct> {
    RuleSet::<DeleteProduct>::new("delete-product").rule(
        "Id",
        |p| &p.id,
        GreaterThan(0),
        "Id must be greater than 0.",
    )
}

pub fn get_product_by_id() -> RuleSet<GetProductById> {
    RuleSet::<GetProductById>::new("get-product-by-id").rule(
        "Id",
        |q| &q.id,
        GreaterThan(0),
        "Id must be greater than 0.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> CreateProduct {
        CreateProduct {
            name: "Widget".into(),
            code: "W-1".into(),
            description: None,
            url_image: None,
            price: Money::from_minor(999),
            user_id: 1,
            category_id: 1,
        }
    }

    #[test]
    fn valid_product_passes() {
        assert!(create_product().check(&widget()).is_empty());
    }

    #[test]
    fn zero_price_and_ids_are_rejected() {
        let product = CreateProduct {
            price: Money::ZERO,
            user_id: 0,
            category_id: -1,
            ..widget()
        };
        let fields: Vec<_> = create_product()
            .check(&product)
            .iter()
            .filter_map(|e| e.field().map(str::to_owned))
            .collect();
        assert_eq!(fields, vec!["Price", "UserId", "CategoryId"]);
    }

    #[test]
    fn code_is_limited_to_fifty_characters() {
        let product = CreateProduct {
            code: "C".repeat(51),
            ..widget()
        };
        let errors = create_product().check(&product);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), "Code cannot exceed 50 characters.");
    }
}
