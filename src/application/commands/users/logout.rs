use super::UserCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

impl UserCommandService {
    /// Revokes the caller's session. Logging out without a session is a no-op.
    pub async fn logout(&self, actor: Option<&AuthenticatedUser>) -> ApplicationResult<()> {
        let Some(user) = actor else {
            return Ok(());
        };

        if let Some(session_id) = &user.session_id {
            self.session_revocation_store.revoke(session_id).await?;
            tracing::info!(user_id = %user.id, "session revoked");
        }

        Ok(())
    }
}
