pub mod bytes;
pub mod int_kind;
pub mod parsed;
pub mod value;

// Re-export commonly used codec functionality
pub use bytes::*;
pub use int_kind::*;
pub use parsed::Parsed;
pub use value::*;
