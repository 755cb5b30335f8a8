use shop_application::{AppContext, Dispatcher, InProcessDispatcher};
use shop_domain::entity::OrderState;
use shop_domain::value_object::Money;
use shop_features::in_memory;
use shop_features::orders::{
    CreateOrder, DeleteOrder, GetAllOrders, GetOrderById, NewOrderDetail, OrderDetailUpdate,
    UpdateOrder, UpdateOrderState,
};

fn detail(product_id: i32, quantity: u32, cents: i64) -> NewOrderDetail {
    NewOrderDetail {
        product_id,
        quantity,
        price: Money::from_minor(cents),
    }
}

async fn place(d: &InProcessDispatcher, ctx: &AppContext) {
    let env = d
        .dispatch(
            ctx,
            CreateOrder {
                user_id: 7,
                details: vec![detail(1, 2, 1050), detail(2, 3, 200)],
            },
        )
        .await;
    assert!(env.is_success(), "{:?}", env.errors());
}

#[tokio::test]
async fn create_computes_total_and_confirms() {
    let (d, _) = in_memory().unwrap();
    let ctx = AppContext::default();
    place(&d, &ctx).await;

    let env = d.dispatch(&ctx, GetOrderById { order_id: 1 }).await;
    let order = env.data().unwrap();
    assert_eq!(order.total, Money::from_minor(2700));
    assert_eq!(order.state, OrderState::Confirmed);
    assert_eq!(order.user_id, 7);

    let prices: Vec<_> = order.details.iter().map(|d| d.price).collect();
    assert_eq!(prices, vec![Money::from_minor(2100), Money::from_minor(600)]);
}

#[tokio::test]
async fn empty_order_is_rejected() {
    let (d, _) = in_memory().unwrap();
    let env = d
        .dispatch(
            &AppContext::default(),
            CreateOrder {
                user_id: 7,
                details: vec![],
            },
        )
        .await;
    assert!(!env.is_success());
    assert_eq!(env.errors()[0].field(), Some("OrderDetails"));

    let all = d.dispatch(&AppContext::default(), GetAllOrders).await;
    assert!(all.data().unwrap().is_empty());
}

#[tokio::test]
async fn overflowing_total_is_an_unexpected_error() {
    let (d, _) = in_memory().unwrap();
    let env = d
        .dispatch(
            &AppContext::default(),
            CreateOrder {
                user_id: 7,
                details: vec![detail(1, 2, i64::MAX)],
            },
        )
        .await;
    assert!(!env.is_success());
    assert_eq!(env.errors()[0].field(), Some("Exception"));
    assert!(env.errors()[0].message().contains("amount overflow"));
}

#[tokio::test]
async fn update_state_and_details() {
    let (d, _) = in_memory().unwrap();
    let ctx = AppContext::default();
    place(&d, &ctx).await;

    let shipped = d
        .dispatch(
            &ctx,
            UpdateOrderState {
                order_id: 1,
                state: OrderState::Shipped,
            },
        )
        .await;
    assert_eq!(shipped.data(), Some(&true));

    let first_detail = d.dispatch(&ctx, GetOrderById { order_id: 1 }).await.into_data().unwrap().details[0].id;
    let updated = d
        .dispatch(
            &ctx,
            UpdateOrder {
                order_id: 1,
                details: vec![OrderDetailUpdate {
                    detail_id: first_detail,
                    product_id: 1,
                    quantity: 1,
                    price: Money::from_minor(1050),
                }],
            },
        )
        .await;
    assert_eq!(updated.data(), Some(&true));

    let order = d.dispatch(&ctx, GetOrderById { order_id: 1 }).await.into_data().unwrap();
    assert_eq!(order.state, OrderState::Shipped);
    assert_eq!(order.total, Money::from_minor(1650));
}

#[tokio::test]
async fn missing_order_reports_not_found() {
    let (d, _) = in_memory().unwrap();
    let ctx = AppContext::default();

    let deleted = d.dispatch(&ctx, DeleteOrder { order_id: 3 }).await;
    assert!(deleted.is_success());
    assert_eq!(deleted.data(), Some(&false));
    assert_eq!(deleted.message(), Some("Order not found."));

    let read = d.dispatch(&ctx, GetOrderById { order_id: 3 }).await;
    assert!(read.is_success());
    assert!(read.data().is_none());
}
