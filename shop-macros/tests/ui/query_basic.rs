use shop_application::query::Query;
use shop_application::request::{Request, RequestKind};
use shop_macros::query;

#[derive(Debug, serde::Serialize)]
struct CategoryDto {
    id: i32,
    name: String,
}

#[query(response = Vec<CategoryDto>)]
#[derive(Debug)]
struct GetAllCategories;

#[query(response = Option<String>)]
#[derive(Debug)]
enum Lookup {
    ById(i32),
    ByEmail(String),
}

fn assert_query<Q: Query>() {}

fn main() {
    assert_query::<GetAllCategories>();
    assert_query::<Lookup>();
    assert_eq!(GetAllCategories::KINDS, &[RequestKind::Query]);
    assert_eq!(Lookup::NAME, "Lookup");

    let _: <GetAllCategories as Request>::Response = vec![CategoryDto {
        id: 1,
        name: "Electronics".into(),
    }];
    let _ = (Lookup::ById(1), Lookup::ByEmail(String::new()));
}
