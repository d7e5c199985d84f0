mod config_v1;
mod minted_item_v1;

pub use config_v1::*;
pub use minted_item_v1::*;
