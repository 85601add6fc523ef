use serde::{Deserialize, Serialize};
use crate::users::db_types::UserRecord;

/// Identity hand-off: the caller has already verified the Firebase token.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RegisterUserInputArgs {
    pub firebase_uid: String,
    pub email: String,
    pub name: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub enum GetUserInputArgs {
    ById(i32),
    ByFirebaseUid(String),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum UsersProcessorInput {
    Register(RegisterUserInputArgs),
    GetUser(GetUserInputArgs),
}

#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterOutputArgs {
    pub user: UserRecord,
    /// false when the firebase uid was already registered
    pub created: bool,
}

#[derive(Deserialize, Serialize, Debug)]
pub enum UsersProcessorOutput {
    Register(RegisterOutputArgs),
    GetUser(UserRecord),
}
