//! encfix - charset-labelled text fixtures
//!
//! Writes two small files for encoding-detection tests:
//! - `test_gbk.txt`: a Chinese greeting, encoded as GBK
//! - `test_utf8.txt`: the same text labelled `UTF-8`, encoded as UTF-8
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use encfix::prelude::*;
//!
//! let report = generate(".")?;
//! assert!(report.stage.is_done());
//! # Ok::<(), encfix::FixtureError>(())
//! ```

pub mod codec;
pub mod config;
pub mod digest;
pub mod error;
pub mod generator;
pub mod logging;
pub mod sink;
pub mod stage;
pub mod text;

// Re-exports
pub use error::*;

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::codec::TextEncoding;
    pub use crate::config::GeneratorConfig;
    pub use crate::digest::FixtureDigest;
    pub use crate::error::{DecodeError, DigestError, EncodeError, FixtureError, StageError};
    pub use crate::generator::{
        generate, Fixture, FixturePlan, GenerationReport, Generator, WrittenFixture,
        GBK_FILE_NAME, UTF8_FILE_NAME,
    };
    pub use crate::stage::Stage;
    pub use crate::text::{FixtureText, LABEL_TOKEN, TEMPLATE, VARIANT_LABEL};
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
