use std::collections::HashMap;
use std::sync::Arc;

use crate::models::notification::kinds;
use crate::strategy::catalog;
use crate::strategy::fallback::FallbackStrategy;
use crate::strategy::NotificationStrategy;

/// Write-once map from kind token to a shared strategy instance.
///
/// The registry is populated during startup (`with_defaults`), wrapped in an
/// `Arc` and injected into the dispatch service; after that it is only read,
/// so concurrent lookups need no locking. Strategies are stateless and
/// shared across calls.
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn NotificationStrategy>>,
    fallback: Arc<dyn NotificationStrategy>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
            fallback: Arc::new(FallbackStrategy),
        }
    }

    /// Registry pre-populated with every built-in strategy. Adding a kind
    /// means adding a strategy module and one line here.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(kinds::INSCRIPTION_CREATED, Arc::new(catalog::InscriptionCreatedStrategy));
        registry.register(kinds::INSCRIPTION_ACCEPTED, Arc::new(catalog::InscriptionAcceptedStrategy));
        registry.register(kinds::INSCRIPTION_REJECTED, Arc::new(catalog::InscriptionRejectedStrategy));
        registry.register(kinds::INSCRIPTION_CANCELED, Arc::new(catalog::InscriptionCanceledStrategy));
        registry.register(kinds::INSCRIPTION_COMPLETED, Arc::new(catalog::InscriptionCompletedStrategy));
        registry.register(kinds::OFFER_PROPOSED, Arc::new(catalog::OfferProposedStrategy));
        registry.register(kinds::NEW_COMMENT, Arc::new(catalog::NewCommentStrategy));
        registry.register(kinds::COMMENT_REPLY, Arc::new(catalog::CommentReplyStrategy));
        registry.register(kinds::OFFER_ON_REQUEST, Arc::new(catalog::OfferOnRequestStrategy));
        registry.register(kinds::RATING_RECEIVED, Arc::new(catalog::RatingReceivedStrategy));
        registry.register(kinds::SLOTS_FULL, Arc::new(catalog::SlotsFullStrategy));
        registry.register(kinds::OFFER_DELETED, Arc::new(catalog::OfferDeletedStrategy));
        registry.register(kinds::REMINDER_CLASS_SOON, Arc::new(catalog::ReminderClassSoonStrategy));

        registry
    }

    /// Associates a kind with a strategy. The last registration for a given
    /// kind wins, which lets tests override built-ins.
    pub fn register(&mut self, kind: &str, strategy: Arc<dyn NotificationStrategy>) {
        self.strategies.insert(kind.to_string(), strategy);
    }

    /// Resolves the strategy for a kind; unknown kinds get the fallback,
    /// so this never fails.
    pub fn get_strategy(&self, kind: &str) -> Arc<dyn NotificationStrategy> {
        self.strategies
            .get(kind)
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.fallback))
    }

    pub fn registered_kinds(&self) -> Vec<&str> {
        self.strategies.keys().map(String::as_str).collect()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
