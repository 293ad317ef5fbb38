use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
        forms::{FormErrors, REQUIRED_FIELD, field_message},
    },
    domain::{
        errors::DomainError,
        user::{NewUser, PasswordHash, User, Username},
    },
};

pub(super) const USERNAME_TAKEN: &str = "A user with that username already exists.";

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Self::clean_signup(&command)?;
        self.ensure_username_available(&username).await?;

        let user = self
            .create_and_insert_user(username, &command.password)
            .await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user registered");

        Ok(user.into())
    }

    fn clean_signup(command: &RegisterUserCommand) -> ApplicationResult<Username> {
        let mut errors = FormErrors::new();
        let username = command.username.trim();

        let parsed = if username.is_empty() {
            errors.add("username", REQUIRED_FIELD);
            None
        } else {
            Username::new(username)
                .map_err(|err| errors.add("username", field_message(err)))
                .ok()
        };

        if command.password.is_empty() {
            errors.add("password", REQUIRED_FIELD);
        } else {
            validate_password(&command.password, username, &mut errors);
        }

        match parsed {
            Some(username) => errors.into_result(username).map_err(ApplicationError::Form),
            None => Err(ApplicationError::Form(errors)),
        }
    }

    async fn ensure_username_available(&self, username: &Username) -> ApplicationResult<()> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::field("username", USERNAME_TAKEN));
        }

        Ok(())
    }

    async fn create_and_insert_user(
        &self,
        username: Username,
        password: &str,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(username, password_hash, self.clock.now());
        self.user_repo.insert(new_user).await.map_err(|err| match err {
            DomainError::Conflict(_) => ApplicationError::field("username", USERNAME_TAKEN),
            other => other.into(),
        })
    }
}
