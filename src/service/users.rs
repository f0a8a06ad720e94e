use crate::config::Config;
use crate::db::{Document, StoreHandle, generate_id};
use crate::error::CmsError;
use crate::service::auth::{hash_password, verify_password};
use crate::types::user::{Role, User};

use chrono::Utc;
use tracing::info;

const MIN_PASSWORD_LEN: usize = 8;

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub async fn list(store: &StoreHandle) -> Result<Vec<User>, CmsError> {
    store.read(Document::Users).await
}

pub async fn find_by_id(store: &StoreHandle, id: &str) -> Result<Option<User>, CmsError> {
    Ok(list(store).await?.into_iter().find(|u| u.id == id))
}

pub async fn find_by_email(store: &StoreHandle, email: &str) -> Result<Option<User>, CmsError> {
    let email = normalize_email(email);
    Ok(list(store).await?.into_iter().find(|u| normalize_email(&u.email) == email))
}

/// Create an account. The email check and the insert happen in one store
/// step, so two concurrent registrations cannot both succeed.
pub async fn create_user(
    store: &StoreHandle,
    email: &str,
    password: &str,
    role: Role,
    cost: u32,
) -> Result<User, CmsError> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(CmsError::Validation("\"email\" is not allowed to be empty".into()));
    }
    let password_hash = hash_password(password.to_string(), cost).await?;

    store
        .mutate(Document::Users, move |users: &mut Vec<User>| {
            if users.iter().any(|u| normalize_email(&u.email) == email) {
                return Err(CmsError::Duplicate(
                    "User with this email already exists".into(),
                ));
            }
            let now = Utc::now();
            let user = User {
                id: generate_id(),
                email,
                password_hash,
                role,
                is_active: true,
                last_login: None,
                created_at: Some(now),
                updated_at: Some(now),
            };
            users.push(user.clone());
            Ok(user)
        })
        .await
}

/// Ensure the configured admin account exists.
///
/// Returns the created user, or `None` when no admin is configured or the
/// email is already taken.
pub async fn bootstrap_admin(store: &StoreHandle, cfg: &Config) -> Result<Option<User>, CmsError> {
    let (Some(email), Some(password)) = (cfg.admin_email.as_deref(), cfg.admin_password.as_deref())
    else {
        return Ok(None);
    };
    if find_by_email(store, email).await?.is_some() {
        info!(email = %email, "admin user already exists");
        return Ok(None);
    }
    match create_user(store, email, password, Role::Admin, cfg.bcrypt_cost).await {
        Ok(user) => {
            info!(email = %user.email, "admin user created");
            Ok(Some(user))
        }
        Err(CmsError::Duplicate(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Check credentials and stamp `lastLogin`.
///
/// Every credential failure, inactive accounts included, is the same
/// `Invalid credentials` error.
pub async fn authenticate(
    store: &StoreHandle,
    email: &str,
    password: &str,
) -> Result<User, CmsError> {
    let invalid = || CmsError::Validation("Invalid credentials".into());

    let user = find_by_email(store, email).await?.ok_or_else(invalid)?;
    if !user.is_active {
        return Err(invalid());
    }
    if !verify_password(password.to_string(), user.password_hash.clone()).await? {
        return Err(invalid());
    }

    let id = user.id;
    store
        .mutate(Document::Users, move |users: &mut Vec<User>| {
            let user = users
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or_else(|| CmsError::Unauthorized("User not found".into()))?;
            user.last_login = Some(Utc::now());
            Ok(user.clone())
        })
        .await
}

pub async fn change_password(
    store: &StoreHandle,
    user_id: &str,
    current: &str,
    new: &str,
    cost: u32,
) -> Result<(), CmsError> {
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(CmsError::Validation(format!(
            "\"newPassword\" length must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    let user = find_by_id(store, user_id)
        .await?
        .ok_or_else(|| CmsError::NotFound("User not found".into()))?;
    if !verify_password(current.to_string(), user.password_hash).await? {
        return Err(CmsError::Validation("Current password is incorrect".into()));
    }
    let password_hash = hash_password(new.to_string(), cost).await?;

    let id = user.id;
    store
        .mutate(Document::Users, move |users: &mut Vec<User>| {
            let user = users
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or_else(|| CmsError::NotFound("User not found".into()))?;
            user.password_hash = password_hash;
            user.updated_at = Some(Utc::now());
            Ok(())
        })
        .await
}
