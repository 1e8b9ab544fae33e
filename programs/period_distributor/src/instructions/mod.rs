pub mod claim;
pub mod claim_batch;
pub mod create_distributor;
pub mod query;
pub mod seed_period;
pub mod transfer_ownership;

pub use claim::*;
pub use claim_batch::*;
pub use create_distributor::*;
pub use query::*;
pub use seed_period::*;
pub use transfer_ownership::*;
