use serde::Deserialize;
use shop_application::command::Command;
use shop_application::request::{Request, RequestKind};
use shop_macros::command;

#[command(response = bool)]
#[derive(Debug, Deserialize)]
struct DeleteCategory {
    id: i32,
}

#[command(response = i64, name = "orders.create")]
#[derive(Debug)]
struct CreateOrder;

fn assert_command<C: Command>() {}

fn main() {
    assert_command::<DeleteCategory>();
    assert_eq!(DeleteCategory::NAME, "DeleteCategory");
    assert_eq!(DeleteCategory::KINDS, &[RequestKind::Command]);
    let _: <DeleteCategory as Request>::Response = true;

    assert_eq!(CreateOrder::NAME, "orders.create");
    let _ = DeleteCategory { id: 1 }.id;
}
