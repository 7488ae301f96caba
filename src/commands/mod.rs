//! Command implementations
//!
//! Each command is a module with an execute function that takes a `Context`
//! plus its own arguments. The context carries everything resolved once at
//! startup (schema, configuration, reference date, output sink) so commands
//! never reach for globals.

pub mod copy;
pub mod decode;
pub mod encode;
pub mod interactive;
pub mod patterns;
pub mod today;

pub use copy::execute as copy;
pub use decode::execute as decode;
pub use encode::execute as encode;
pub use interactive::execute as interactive;
pub use patterns::execute as patterns;
pub use today::execute as today;

use chrono::NaiveDate;

use crate::config::JtagConfig;
use crate::schema::TagSchema;
use crate::ui::OutputWriter;

/// State shared by every command for one invocation
pub struct Context<'a> {
    pub schema: &'a TagSchema,
    pub config: &'a JtagConfig,
    /// `--date` if given, otherwise today
    pub date: NaiveDate,
    pub quiet: bool,
    pub output: &'a dyn OutputWriter,
}
