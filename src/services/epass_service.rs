use crate::models::epass::EPass;
use crate::repositories::epass_repository::EPassRepository;
use crate::repositories::event_repository::EventRepository;
use crate::repositories::user_repository::{RepositoryError, UserRepository};
use crate::services::payment::PaymentVerifier;
use rand::Rng;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum EPassServiceError {
    #[error("Event not found")]
    EventNotFound,
    #[error("User not found")]
    UserNotFound,
    #[error("Passes may only be issued for the caller's own account")]
    NotPassOwner,
    #[error("Payment confirmation required for paid events")]
    PaymentRequired,
    #[error("A pass was already issued for this event")]
    AlreadyIssued,
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct IssueEPassRequest {
    pub event_id: i64,
    pub user_id: i64,
    pub payment_reference: Option<String>,
}

pub struct EPassService {
    epass_repository: Arc<dyn EPassRepository>,
    event_repository: Arc<dyn EventRepository>,
    user_repository: Arc<dyn UserRepository>,
    payment_verifier: Box<dyn PaymentVerifier>,
}

impl EPassService {
    pub fn new(
        epass_repository: Arc<dyn EPassRepository>,
        event_repository: Arc<dyn EventRepository>,
        user_repository: Arc<dyn UserRepository>,
        payment_verifier: Box<dyn PaymentVerifier>,
    ) -> Self {
        Self {
            epass_repository,
            event_repository,
            user_repository,
            payment_verifier,
        }
    }

    /// Issues a pass for a (event, user) pair. Both references must
    /// exist, paid events need a verified payment reference, and the
    /// pair may hold at most one pass.
    pub async fn issue(
        &self,
        actor_id: i64,
        request: IssueEPassRequest,
    ) -> Result<EPass, EPassServiceError> {
        if request.user_id != actor_id {
            return Err(EPassServiceError::NotPassOwner);
        }

        let event = self
            .event_repository
            .find_by_id(request.event_id)
            .await?
            .ok_or(EPassServiceError::EventNotFound)?;

        let user = self
            .user_repository
            .find_by_id(request.user_id)
            .await?
            .ok_or(EPassServiceError::UserNotFound)?;

        if event.fee > 0 {
            let confirmed = match request.payment_reference.as_deref() {
                Some(reference) => self.payment_verifier.verify(&event, user.id, reference).await,
                None => false,
            };
            if !confirmed {
                return Err(EPassServiceError::PaymentRequired);
            }
        }

        let qr_code = generate_pass_code();

        match self.epass_repository.create(event.id, user.id, &qr_code).await {
            Ok(epass) => Ok(epass),
            Err(RepositoryError::AlreadyExists) => Err(EPassServiceError::AlreadyIssued),
            Err(e) => Err(EPassServiceError::RepositoryError(e)),
        }
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<EPass>, EPassServiceError> {
        Ok(self.epass_repository.list_for_user(user_id).await?)
    }
}

fn generate_pass_code() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::epass_repository::MockEPassRepository;
    use crate::repositories::event_repository::MockEventRepository;
    use crate::repositories::user_repository::MockUserRepository;

    #[tokio::test]
    async fn test_issue_rejects_foreign_user_id() {
        let service = EPassService::new(
            Arc::new(MockEPassRepository::new()),
            Arc::new(MockEventRepository::new()),
            Arc::new(MockUserRepository::new()),
            Box::new(crate::services::payment::DenyAllPaymentVerifier),
        );

        let request = IssueEPassRequest {
            event_id: 1,
            user_id: 2,
            payment_reference: None,
        };

        let result = service.issue(99, request).await;
        assert!(matches!(result, Err(EPassServiceError::NotPassOwner)));
    }

    #[tokio::test]
    async fn test_issue_missing_event_is_not_found() {
        let mut event_repo = MockEventRepository::new();
        event_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = EPassService::new(
            Arc::new(MockEPassRepository::new()),
            Arc::new(event_repo),
            Arc::new(MockUserRepository::new()),
            Box::new(crate::services::payment::DenyAllPaymentVerifier),
        );

        let request = IssueEPassRequest {
            event_id: 404,
            user_id: 5,
            payment_reference: None,
        };

        let result = service.issue(5, request).await;
        assert!(matches!(result, Err(EPassServiceError::EventNotFound)));
    }

    #[test]
    fn test_pass_codes_are_unique_and_opaque() {
        let a = generate_pass_code();
        let b = generate_pass_code();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
