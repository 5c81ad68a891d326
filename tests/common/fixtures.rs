use checkout_service::User;

/// Canonical users for checkout scenarios
pub struct UserMother;

impl UserMother {
    pub fn premium() -> User {
        User::premium("premium@email.com")
    }

    pub fn standard() -> User {
        User::standard("standard@email.com")
    }
}
