mod account_check;
pub mod base64;
mod error;
mod metadata;
pub mod mock;
mod pda;
mod process;
mod seed;

pub use account_check::*;
pub use error::*;
pub use metadata::*;
pub use mock::*;
pub use pda::*;
pub use process::*;
pub use seed::*;
