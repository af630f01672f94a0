//! User actions. There is exactly one (synthetic) admin user; writes are
//! acknowledged and discarded.

use chrono::Utc;
use folio_core::site::{User, NEXT_USER_ID};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::dispatch::ActionRequest;
use crate::handlers::projects::CreatedId;
use crate::response::Envelope;

#[derive(Debug, Serialize)]
pub struct UserList {
    pub users: Vec<User>,
}

/// `get_users`
pub fn list() -> Envelope<UserList> {
    Envelope::data(UserList {
        users: vec![User::admin(Utc::now())],
    })
}

/// `get_user` -- any well-formed id yields the admin record.
pub fn get(req: &ActionRequest) -> AppResult<Envelope<User>> {
    req.id()?;
    Ok(Envelope::data(User::admin(Utc::now())))
}

/// `add_user`
pub fn add() -> Envelope<CreatedId> {
    Envelope::data_with_message(CreatedId { id: NEXT_USER_ID }, "User added")
}

/// `update_user`
pub fn update(req: &ActionRequest) -> AppResult<Envelope<()>> {
    let id = req.id()?;
    tracing::debug!(user_id = id, "User update acknowledged, not persisted");
    Ok(Envelope::message("User updated"))
}

/// `delete_user`
pub fn delete(req: &ActionRequest) -> AppResult<Envelope<()>> {
    let id = req.id()?;
    tracing::debug!(user_id = id, "User delete acknowledged, not persisted");
    Ok(Envelope::message("User deleted"))
}
