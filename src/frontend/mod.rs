//! # Frontend
//!
//! Turns source buffers into registered compilation units.
//!
//! ## Architecture
//!
//! ```text
//! build_unit(output_name, buffers, options)
//!        │
//!        ├── request checks ........ no buffers, batch kind, unknown buffer
//!        ├── factory ............... component + unit + identifier + registry
//!        ├── auto_import ........... implicit imports (not IR, not parse-only)
//!        │
//!        ├── 1 buffer  ──► pump ........ parse ▸ check suffix ▸ repeat
//!        └── N buffers ──► assembler ... parse all ▸ check once
//! ```
//!
//! Every build runs against an explicit [`Session`]. Independent units can
//! be built concurrently with [`Frontend::build_units_parallel`].

mod assembler;
mod auto_import;
mod build;
mod error;
mod factory;
mod identifier;
mod options;
mod pump;
mod session;


pub use auto_import::{AutoImporter, ConfiguredAutoImporter};
pub use build::{BuildRequest, Frontend};
pub use error::FrontendError;
pub use identifier::resolve_module_identifier;
pub use options::{BuildOptions, RegistrationPolicy, SessionConfig};
pub use session::{Session, UnitHandle};
