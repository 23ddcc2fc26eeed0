use uuid::Uuid;

/// A stored user. The password field never leaves the crate; API responses
/// are shaped through `api::models::UserResponse`, which omits it.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Fields supplied by a client when creating a user. The identifier is
/// assigned by the store gateway, not the caller.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
