pub mod claim_word_state;
pub mod distributor_state;
pub mod nonce_state;
pub mod period_state;

pub use claim_word_state::*;
pub use distributor_state::*;
pub use nonce_state::*;
pub use period_state::*;
