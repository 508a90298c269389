//! Sesame - resolve AWS SSM parameters into the environment, then exec.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── logging       # tracing subscriber setup
//! │   ├── output        # Terminal hints
//! │   └── run           # Load, resolve, build, exec
//! └── core/             # Core library components
//!     ├── config        # sesame.toml / sesame.yaml loading
//!     ├── naming        # Parameter path -> variable name
//!     ├── batch         # API-sized batches
//!     ├── store/        # Parameter store backends
//!     │   ├── mod       # ParameterStore trait
//!     │   └── ssm       # AWS SSM implementation
//!     ├── resolver      # Prefix listing + secret batches
//!     ├── env           # Environment snapshot
//!     └── exec          # Process replacement
//! ```
//!
//! # Example
//!
//! ```toml
//! prefix = ["/svc/$STAGE/"]
//! secrets = ["/svc/$STAGE/DB_PASSWORD"]
//!
//! [[rename]]
//! from = "DB_HOST"
//! to = "DATABASE_HOST"
//! ```
//!
//! ```text
//! sesame -c sesame.toml -- ./server --port 8080
//! ```

pub mod cli;
pub mod core;
pub mod error;
