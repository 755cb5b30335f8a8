use super::requests::{CreateCategory, DeleteCategory, GetCategoryById, UpdateCategory};
use shop_application::validation::RuleSet;
use shop_domain::specification::{GreaterThan, MaxChars, NotBlank};

pub(crate) const NAME_MAX: usize = 100;

pub fn create_category() -> RuleSet<CreateCategory> {
    RuleSet::<CreateCategory>::new("create-category")
        .rule("Name", |c| c.name.as_str(), NotBlank, "Name is required.")
        .rule("Name", |c| c.name.as_str(), MaxChars(NAME_MAX), "Name cannot exceed 100 characters.")
}

pub fn update_category() -> RuleSet<UpdateCategory> {
    RuleSet::<UpdateCategory>::new("update-category")
        .rule("Id", |c| &c.id, GreaterThan(0), "Id must be greater than 0.")
        .rule("Name", |c| c.name.as_str(), NotBlank, "Name is required.")
        .rule("Name", |c| c.name.as_str(), MaxChars(NAME_MAX), "Name cannot exceed 100 characters.")
}

pub fn delete_category() -> RuleSet<DeleteCategory> {
    RuleSet::<DeleteCategory>::new("delete-category").rule(
        "Id",
        |c| &c.id,
        GreaterThan(0),
        "Id must be greater than 0.",
    )
}

pub fn get_category_by_id() -> RuleSet<GetCategoryById> {
    RuleSet::<GetCategoryById>::new("get-category-by-id").rule(
        "Id",
        |q| &q.id,
        GreaterThan(0),
        "Id must be greater than 0.",
    )
}
