// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use notes_core::domain::errors::{DomainError, DomainResult};
use notes_core::domain::user::{NewUser, User, UserId, UserRepository, Username};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// Store a user directly, bypassing signup.
    pub fn seed(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }

        let id = users.iter().map(|u| i64::from(u.id)).max().unwrap_or(0) + 1;
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            password_hash: new_user.password_hash,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }
}
