//! Concrete notification strategies, one module per kind.
//!
//! Every strategy here is registered in `StrategyRegistry::with_defaults`.

mod comment_reply;
mod inscription_accepted;
mod inscription_canceled;
mod inscription_completed;
mod inscription_created;
mod inscription_rejected;
mod new_comment;
mod offer_deleted;
mod offer_on_request;
mod offer_proposed;
mod rating_received;
mod reminder_class_soon;
mod slots_full;

pub use comment_reply::CommentReplyStrategy;
pub use inscription_accepted::InscriptionAcceptedStrategy;
pub use inscription_canceled::InscriptionCanceledStrategy;
pub use inscription_completed::InscriptionCompletedStrategy;
pub use inscription_created::InscriptionCreatedStrategy;
pub use inscription_rejected::InscriptionRejectedStrategy;
pub use new_comment::NewCommentStrategy;
pub use offer_deleted::OfferDeletedStrategy;
pub use offer_on_request::OfferOnRequestStrategy;
pub use offer_proposed::OfferProposedStrategy;
pub use rating_received::RatingReceivedStrategy;
pub use reminder_class_soon::ReminderClassSoonStrategy;
pub use slots_full::SlotsFullStrategy;
