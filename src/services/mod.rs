pub mod blend;
pub mod catalog;
pub mod enrich;
pub mod history;
pub mod online;
pub mod recommender;

pub use catalog::CatalogStore;
pub use history::EventHistoryStore;
pub use recommender::{RecommendationSet, Recommender};
