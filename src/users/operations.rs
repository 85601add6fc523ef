use anyhow::Result;
use diesel::prelude::*;

use crate::users::db_types::{CreateUser, UserRecord};
use crate::users::processor_enums::{GetUserInputArgs, RegisterOutputArgs, RegisterUserInputArgs};
use crate::utils::commons::DbConn;
use crate::utils::errors::TrackerError;

pub fn find_user(conn: DbConn, args: &GetUserInputArgs) -> Result<Option<UserRecord>> {
    use crate::schema::users::dsl::*;

    let mut query = users.into_boxed();
    match args {
        GetUserInputArgs::ById(user_id) => {
            query = query.filter(id.eq(*user_id));
        }
        GetUserInputArgs::ByFirebaseUid(uid) => {
            query = query.filter(firebase_uid.eq(uid.clone()));
        }
    }

    let res = query.first::<UserRecord>(conn).optional()?;

    Ok(res)
}

pub fn get_user(conn: DbConn, args: &GetUserInputArgs) -> Result<UserRecord> {
    find_user(conn, args)?.ok_or_else(|| TrackerError::not_found("User").into())
}

/// Folds the insert result into the register response. A skipped insert means the uid
/// was already known, so the stored user is returned untouched.
pub fn registration_outcome<F>(inserted: Option<UserRecord>, load_existing: F) -> Result<RegisterOutputArgs>
where
    F: FnOnce() -> Result<UserRecord>,
{
    match inserted {
        Some(user) => Ok(RegisterOutputArgs {
            user,
            created: true,
        }),
        None => Ok(RegisterOutputArgs {
            user: load_existing()?,
            created: false,
        }),
    }
}

pub fn register_user(conn: DbConn, args: &RegisterUserInputArgs) -> Result<RegisterOutputArgs> {
    use crate::schema::users::dsl::*;

    let inserted = diesel::insert_into(users)
        .values(&CreateUser {
            firebase_uid: args.firebase_uid.clone(),
            email: args.email.clone(),
            name: args.name.clone().unwrap_or_default(),
        })
        .on_conflict(firebase_uid)
        .do_nothing()
        .get_result::<UserRecord>(conn)
        .optional()?;

    if let Some(user) = &inserted {
        tracing::info!(user_id = user.id, "registered new user");
    }

    let lookup = GetUserInputArgs::ByFirebaseUid(args.firebase_uid.clone());
    registration_outcome(inserted, || get_user(conn, &lookup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::NaiveDate;

    fn user(id: i32) -> UserRecord {
        UserRecord {
            id,
            firebase_uid: "uid-abc".to_string(),
            email: "ana@example.com".to_string(),
            name: "Ana".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_first_registration_creates_user() {
        let out = registration_outcome(Some(user(4)), || Err(anyhow!("should not load"))).unwrap();
        assert!(out.created);
        assert_eq!(out.user.id, 4);
    }

    #[test]
    fn test_repeat_registration_returns_existing_user() {
        let out = registration_outcome(None, || Ok(user(4))).unwrap();
        assert!(!out.created);
        assert_eq!(out.user, user(4));
    }

    #[test]
    fn test_repeat_registration_surfaces_lookup_fault() {
        assert!(registration_outcome(None, || Err(anyhow!("connection reset"))).is_err());
    }
}
