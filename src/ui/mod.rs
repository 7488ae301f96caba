//! UI abstraction layer
//!
//! Commands depend on two small traits instead of the terminal directly:
//!
//! - **`UserInput`** - prompts (text input, multi-select)
//! - **`OutputWriter`** - result lines and status messages with severity levels
//!
//! `DialoguerInput` and `StdoutWriter` back them in the CLI; `MockInput` and
//! `BufferWriter` back them in tests.

pub mod input;
pub mod mock;
pub mod output;

pub use input::{DialoguerInput, InputError, UserInput};
pub use mock::MockInput;
pub use output::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};
