use super::requests::{CreateOrder, DeleteOrder, GetOrderById, UpdateOrder, UpdateOrderState};
use shop_application::validation::RuleSet;
use shop_domain::specification::GreaterThan;

const DETAILS_REQUIRED: &str = "OrderDetails must contain at least one item.";

pub fn create_order() -> RuleSet<CreateOrder> {
    RuleSet::<CreateOrder>::new("create-order")
        .rule("UserId", |c| &c.user_id, GreaterThan(0), "UserId must be greater than 0.")
        .must("OrderDetails", |c| !c.details.is_empty(), DETAILS_REQUIRED)
        .must(
            "ProductId",
            |c| c.details.iter().all(|d| d.product_id > 0),
            "ProductId must be greater than 0.",
        )
        .must(
            "Quantity",
            |c| c.details.iter().all(|d| d.quantity > 0),
            "Quantity must be greater than 0.",
        )
        .must(
            "Price",
            |c| c.details.iter().all(|d| d.price.is_positive()),
            "Price must be greater than 0.",
        )
}

pub fn update_order() -> RuleSet<UpdateOrder> {
    RuleSet::<UpdateOrder>::new("update-order")
        .rule("OrderId", |c| &c.order_id, GreaterThan(0), "OrderId must be greater than 0.")
        .must("OrderDetails", |c| !c.details.is_empty(), DETAILS_REQUIRED)
        .must(
            "OrderDetailId",
            |c| c.details.iter().all(|d| d.detail_id > 0),
            "OrderDetailId must be greater than 0.",
        )
        .must(
            "ProductId",
            |c| c.details.iter().all(|d| d.product_id > 0),
            "ProductId must be greater than 0.",
        )
        .must(
            "Quantity",
            |c| c.details.iter().all(|d| d.quantity > 0),
            "Quantity must be greater than 0.",
        )
        .must(
            "Price",
            |c| c.details.iter().all(|d| d.price.is_positive()),
            "Price must be greater than 0.",
        )
}

pub fn update_order_state() -> RuleSet<UpdateOrderState> {
    RuleSet::<UpdateOrderState>::new("update-order-state").rule(
        "OrderId",
        |c| &c.order_id,
        GreaterThan(0),
        "OrderId must be greater than 0.",
    )
}

pub fn delete_order() -> RuleSet<DeleteOrder> {
    RuleSet::<DeleteOrder>::new("delete-order").rule(
        "OrderId",
        |c| &c.order_id,
        GreaterThan(0),
        "OrderId must be greater than 0.",
    )
}

pub fn get_order_by_id() -> RuleSet<GetOrderById> {
    RuleSet::<GetOrderById>::new("get-order-by-id").rule(
        "OrderId",
        |q| &q.order_id,
        GreaterThan(0),
        "OrderId must be greater than 0.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::requests::NewOrderDetail;
    use shop_domain::value_object::Money;

    #[test]
    fn order_without_details_is_rejected() {
        let errors = create_order().check(&CreateOrder {
            user_id: 1,
            details: vec![],
        });
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), DETAILS_REQUIRED);
    }

    #[test]
    fn every_detail_is_checked() {
        let errors = create_order().check(&CreateOrder {
            user_id: 1,
            details: vec![
                NewOrderDetail {
                    product_id: 1,
                    quantity: 1,
                    price: Money::from_minor(100),
                },
                NewOrderDetail {
                    product_id: 2,
                    quantity: 0,
                    price: Money::from_minor(-5),
                },
            ],
        });
        let fields: Vec<_> = errors.iter().filter_map(|e| e.field()).collect();
        assert_eq!(fields, vec!["Quantity", "Price"]);
    }
}
