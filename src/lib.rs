pub use catalog::{Catalog, Source};
pub use client::MatchboardClient;
pub use coordinator::{eligibility, Eligibility, JoinCoordinator, JoinOutcome, JoinTicket};
pub use detail::DetailProjection;
pub use error::{MatchboardError, Result};
pub use filter::filter;
pub use identity::Identity;

pub(crate) mod api;
pub mod catalog;
pub mod client;
pub mod coordinator;
pub mod detail;
pub mod error;
pub mod filter;
pub mod identity;
pub mod model;
