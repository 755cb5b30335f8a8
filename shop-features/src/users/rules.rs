use super::requests::{CreateUser, GetUserByEmail, GetUserById};
use shop_application::validation::RuleSet;
use shop_domain::specification::{EmailAddress, GreaterThan, MaxChars, NotBlank, Present};

const EMAIL_REQUIRED: &str = "Email is required.";
const EMAIL_INVALID: &str = "Email must be a valid email address.";

pub fn create_user() -> RuleSet<CreateUser> {
    RuleSet::<CreateUser>::new("create-user")
        .rule("Firstname", |u| &u.firstname, NotBlank, "Firstname is required.")
        .rule("Firstname", |u| &u.firstname, Present, "Firstname cannot be null.")
        .rule("Firstname", |u| &u.firstname, MaxChars(50), "Firstname cannot exceed 50 characters.")
        .rule("Lastname", |u| &u.lastname, NotBlank, "Lastname is required.")
        .rule("Lastname", |u| &u.lastname, Present, "Lastname cannot be null.")
        .rule("Lastname", |u| &u.lastname, MaxChars(50), "Lastname cannot exceed 50 characters.")
        .rule("Email", |u| u.email.as_str(), NotBlank, EMAIL_REQUIRED)
        .rule("Email", |u| u.email.as_str(), EmailAddress, EMAIL_INVALID)
}

pub fn get_user_by_id() -> RuleSet<GetUserById> {
    RuleSet::<GetUserById>::new("get-user-by-id").rule(
        "UserId",
        |q| &q.user_id,
        GreaterThan(0),
        "UserId must be greater than zero.",
    )
}

pub fn get_user_by_email() -> RuleSet<GetUserByEmail> {
    RuleSet::<GetUserByEmail>::new("get-user-by-email")
        .rule("Email", |q| q.email.as_str(), NotBlank, EMAIL_REQUIRED)
        .rule("Email", |q| q.email.as_str(), EmailAddress, EMAIL_INVALID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_domain::entity::UserType;

    fn ana() -> CreateUser {
        CreateUser {
            username: "ana".into(),
            password: "s3cret".into(),
            firstname: Some("Ana".into()),
            lastname: Some("Lopez".into()),
            email: "ana@example.com".into(),
            address: None,
            cellphone: None,
            user_type: UserType::Customer,
        }
    }

    #[test]
    fn missing_lastname_reports_both_messages() {
        let user = CreateUser {
            lastname: None,
            ..ana()
        };
        let messages: Vec<_> = create_user()
            .check(&user)
            .into_iter()
            .map(|e| e.message().to_string())
            .collect();
        assert_eq!(messages, vec!["Lastname is required.", "Lastname cannot be null."]);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let user = CreateUser {
            email: "ana.example.com".into(),
            ..ana()
        };
        let errors = create_user().check(&user);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), EMAIL_INVALID);
    }

    #[test]
    fn user_id_must_be_positive() {
        let errors = get_user_by_id().check(&GetUserById { user_id: 0 });
        assert_eq!(errors[0].message(), "UserId must be greater than zero.");
    }
}
