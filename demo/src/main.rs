use serde::Serialize;
use shop_application::{AppContext, Dispatcher, Envelope};
use shop_domain::entity::{OrderState, UserType};
use shop_features::categories::{CreateCategory, GetAllCategories, GetCategoryById, UpdateCategory};
use shop_features::orders::{CreateOrder, GetAllOrders, GetOrderById, NewOrderDetail, UpdateOrderState};
use shop_features::products::{CreateProduct, GetAllProducts};
use shop_features::users::{CreateUser, GetUserByEmail};
use tracing::info;

fn show<T: Serialize>(step: &str, envelope: &Envelope<T>) -> anyhow::Result<()> {
    println!("== {step}\n{}", serde_json::to_string_pretty(envelope)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let (dispatcher, _store) = shop_features::in_memory()?;
    info!(handlers = dispatcher.registry().len(), "shop ready");
    let ctx = AppContext::default();

    // 分类：一次成功、一次校验失败、一次查不到
    let created = dispatcher
        .dispatch(&ctx, CreateCategory { name: "Lighting".into() })
        .await;
    show("create category", &created)?;

    let rejected = dispatcher
        .dispatch(&ctx, CreateCategory { name: "  ".into() })
        .await;
    show("create category with a blank name", &rejected)?;

    let missing = dispatcher.dispatch(&ctx, GetCategoryById { id: 42 }).await;
    show("read a category that does not exist", &missing)?;

    let renamed = dispatcher
        .dispatch(&ctx, UpdateCategory { id: 1, name: "Lamps".into() })
        .await;
    show("rename category", &renamed)?;
    show("all categories", &dispatcher.dispatch(&ctx, GetAllCategories).await)?;

    // 用户
    let registered = dispatcher
        .dispatch(
            &ctx,
            CreateUser {
                username: "ada".into(),
                password: "s3cret".into(),
                firstname: Some("Ada".into()),
                lastname: Some("Lovelace".into()),
                email: "ada@example.com".into(),
                address: None,
                cellphone: None,
                user_type: UserType::Customer,
            },
        )
        .await;
    show("register user", &registered)?;

    let user = dispatcher
        .dispatch(&ctx, GetUserByEmail { email: "ada@example.com".into() })
        .await;
    show("find user by email", &user)?;
    let Some(user_id) = user.data().map(|u| u.user_id) else {
        anyhow::bail!("user was not registered");
    };

    // 商品
    let product = dispatcher
        .dispatch(
            &ctx,
            CreateProduct {
                name: "Desk lamp".into(),
                code: "LMP-001".into(),
                description: Some("Adjustable arm".into()),
                url_image: None,
                price: "25.99".parse()?,
                user_id,
                category_id: 1,
            },
        )
        .await;
    show("create product", &product)?;

    let products = dispatcher.dispatch(&ctx, GetAllProducts).await;
    let Some(lamp) = products.data().and_then(|all| all.first()).cloned() else {
        anyhow::bail!("product was not stored");
    };

    // 订单
    let ordered = dispatcher
        .dispatch(
            &ctx,
            CreateOrder {
                user_id,
                details: vec![NewOrderDetail {
                    product_id: lamp.id,
                    quantity: 2,
                    price: lamp.price,
                }],
            },
        )
        .await;
    show("place order", &ordered)?;

    let orders = dispatcher.dispatch(&ctx, GetAllOrders).await;
    let Some(order_id) = orders.data().and_then(|all| all.first()).map(|o| o.id) else {
        anyhow::bail!("order was not stored");
    };

    let shipped = dispatcher
        .dispatch(&ctx, UpdateOrderState { order_id, state: OrderState::Shipped })
        .await;
    show("ship order", &shipped)?;
    show("read order", &dispatcher.dispatch(&ctx, GetOrderById { order_id }).await)?;

    Ok(())
}
