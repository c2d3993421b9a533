pub mod error;
pub mod feature_flags;
pub mod record_id;
pub mod search;

pub use error::*;
pub use feature_flags::*;
pub use record_id::*;
pub use search::*;
