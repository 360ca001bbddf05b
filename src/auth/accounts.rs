//! Account records and credential verification
//!
//! The credential store owns registration and password verification. Email
//! comparison is case-insensitive, the plaintext password never leaves this
//! module, and login failures for unknown emails and wrong passwords are
//! indistinguishable to the caller.

use super::{
    password::{CredentialHasher, PasswordError},
    AuthConfig,
};
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};
use utoipa::ToSchema;
use uuid::Uuid;

/// Account registration request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration/login response: account fields plus a fresh bearer token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// Public account information, safe to serialize outward
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct AccountInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Internal account record with password hash; never serialized
#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Account {
    /// Convert to public account info
    pub fn to_info(&self) -> AccountInfo {
        AccountInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// In-memory account store with a case-insensitive email index
///
/// Accounts are the persistence collaborator's data; this store exposes the
/// keyed operations the core needs (find-by-id, find-by-email, insert).
#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    by_email: Arc<RwLock<HashMap<String, String>>>, // lowercased email -> account id
}

impl AccountStore {
    /// Insert a new account, failing if the email is already registered
    pub fn insert(&self, account: Account) -> Result<Account, ApiError> {
        let mut accounts = self.accounts.write().unwrap();
        let mut by_email = self.by_email.write().unwrap();

        let email_key = account.email.to_lowercase();
        if by_email.contains_key(&email_key) {
            debug!("Registration rejected: email already exists");
            return Err(ApiError::DuplicateAccount);
        }

        by_email.insert(email_key, account.id.clone());
        accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }

    /// Look up an account by id
    pub fn find_by_id(&self, id: &str) -> Option<Account> {
        self.accounts.read().unwrap().get(id).cloned()
    }

    /// Look up an account by email, case-insensitively
    pub fn find_by_email(&self, email: &str) -> Option<Account> {
        // Release the index lock before taking the accounts lock; insert
        // acquires them in the opposite order.
        let id = {
            let by_email = self.by_email.read().unwrap();
            by_email.get(&email.to_lowercase()).cloned()
        }?;
        self.accounts.read().unwrap().get(&id).cloned()
    }
}

/// Credential store: registration, password verification, account lookup
#[derive(Clone)]
pub struct AccountService {
    store: AccountStore,
    hasher: CredentialHasher,
    // Verified against when the email is unknown, so both login failure
    // paths spend comparable time hashing.
    dummy_hash: String,
}

impl AccountService {
    /// Create the service from explicit auth configuration
    pub fn new(config: &AuthConfig) -> Result<Self, PasswordError> {
        let hasher = CredentialHasher::new(config.hash_cost)?;
        let dummy_hash = hasher.hash(&Uuid::new_v4().to_string())?;

        Ok(Self {
            store: AccountStore::default(),
            hasher,
            dummy_hash,
        })
    }

    /// Register a new account
    ///
    /// The password is hashed before the store lock is taken, so slow
    /// hashing never blocks unrelated requests.
    pub fn register(&self, request: RegisterRequest) -> Result<Account, ApiError> {
        if request.name.trim().is_empty()
            || request.email.trim().is_empty()
            || request.password.is_empty()
        {
            return Err(ApiError::Validation(
                "Name, email, and password are required".to_string(),
            ));
        }

        if request.password.len() < 6 {
            return Err(ApiError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        let password_hash = self
            .hasher
            .hash(&request.password)
            .map_err(|e| ApiError::Internal(format!("password hashing failed: {}", e)))?;

        let account = self.store.insert(Account {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            password_hash,
            created_at: chrono::Utc::now(),
        })?;

        info!("Registered new account: {}", account.id);
        Ok(account)
    }

    /// Verify credentials and return the matching account
    ///
    /// Unknown email and wrong password both return `InvalidCredentials`.
    pub fn verify(&self, email: &str, password: &str) -> Result<Account, ApiError> {
        match self.store.find_by_email(email) {
            Some(account) => {
                if self.hasher.verify(password, &account.password_hash).is_err() {
                    debug!("Login rejected: password mismatch for {}", account.id);
                    return Err(ApiError::InvalidCredentials);
                }
                debug!("Account authenticated: {}", account.id);
                Ok(account)
            }
            None => {
                // Burn the same hashing work for unknown emails
                let _ = self.hasher.verify(password, &self.dummy_hash);
                debug!("Login rejected: unknown email");
                Err(ApiError::InvalidCredentials)
            }
        }
    }

    /// Look up an account by id
    pub fn find_by_id(&self, id: &str) -> Option<Account> {
        self.store.find_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn service() -> AccountService {
        AccountService::new(&AuthConfig {
            secret: "test-secret".to_string(),
            token_ttl: Duration::days(30),
            hash_cost: 2,
        })
        .unwrap()
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Ann".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_register_then_verify() {
        let service = service();
        let account = service.register(register_request("ann@x.com")).unwrap();

        let verified = service.verify("ann@x.com", "secret1").unwrap();
        assert_eq!(verified.id, account.id);

        assert!(matches!(
            service.verify("ann@x.com", "wrong"),
            Err(ApiError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_duplicate_email_case_insensitive() {
        let service = service();
        service.register(register_request("ann@x.com")).unwrap();

        let result = service.register(register_request("ANN@X.COM"));
        assert!(matches!(result, Err(ApiError::DuplicateAccount)));

        // First account's credentials remain valid
        assert!(service.verify("Ann@X.com", "secret1").is_ok());
    }

    #[test]
    fn test_unknown_email_indistinguishable_from_wrong_password() {
        let service = service();
        service.register(register_request("ann@x.com")).unwrap();

        let unknown = service.verify("nobody@x.com", "secret1").unwrap_err();
        let mismatch = service.verify("ann@x.com", "wrong").unwrap_err();
        assert_eq!(unknown.to_string(), mismatch.to_string());
    }

    #[test]
    fn test_register_validation() {
        let service = service();

        let mut request = register_request("ann@x.com");
        request.password = "short".to_string();
        assert!(matches!(
            service.register(request),
            Err(ApiError::Validation(_))
        ));

        let mut request = register_request("ann@x.com");
        request.name = "".to_string();
        assert!(matches!(
            service.register(request),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_find_by_id() {
        let service = service();
        let account = service.register(register_request("ann@x.com")).unwrap();

        assert!(service.find_by_id(&account.id).is_some());
        assert!(service.find_by_id("missing").is_none());
    }
}
