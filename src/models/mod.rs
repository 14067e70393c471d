// Re-export all model types
pub use self::enums::*;
pub use self::errors::*;
pub use self::menu::*;

mod enums;
mod errors;
mod menu;
