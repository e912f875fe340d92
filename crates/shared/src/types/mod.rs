//! Common types used across the application.

pub mod id;
pub mod label;
pub mod money;
pub mod partition;

pub use id::*;
pub use label::{PaymentCategory, Phone};
pub use money::Money;
pub use partition::{chunk_len, partitions};
