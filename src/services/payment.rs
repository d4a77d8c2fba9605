use crate::models::event::Event;
use async_trait::async_trait;

/// Server-side confirmation of a payment for a paid event. The real
/// gateway integration lives outside this service; implementations
/// decide whether a reference supplied by the client is acceptable.
#[async_trait]
pub trait PaymentVerifier: Send + Sync {
    async fn verify(&self, event: &Event, user_id: i64, reference: &str) -> bool;
}

/// Stand-in verifier used until a gateway client is wired in: accepts
/// any non-empty reference and logs what it saw.
pub struct LoggingPaymentVerifier;

#[async_trait]
impl PaymentVerifier for LoggingPaymentVerifier {
    async fn verify(&self, event: &Event, user_id: i64, reference: &str) -> bool {
        if reference.trim().is_empty() {
            return false;
        }
        tracing::info!(
            "Accepting payment reference {} for event {} (fee {}) from user {}",
            reference,
            event.id,
            event.fee,
            user_id
        );
        true
    }
}

/// Verifier that declines everything. Useful in tests and as a safe
/// default when payments are disabled.
pub struct DenyAllPaymentVerifier;

#[async_trait]
impl PaymentVerifier for DenyAllPaymentVerifier {
    async fn verify(&self, _event: &Event, _user_id: i64, _reference: &str) -> bool {
        false
    }
}

pub fn create_payment_verifier() -> Box<dyn PaymentVerifier> {
    tracing::info!(
        "No payment gateway configured. Using logging verifier (references are accepted as-is)"
    );
    Box::new(LoggingPaymentVerifier)
}
