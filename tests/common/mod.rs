pub mod builders;
pub mod harness;

// Re-export commonly used test utilities
pub use builders::{spec, SenderBuilder};
pub use harness::{DispatchHarness, RecordingSender};
