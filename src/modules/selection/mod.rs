pub mod context;

pub use context::{SelectionContext, SubscriptionId};
