pub mod admin;
pub mod authorities;
pub mod register;
pub mod manage;

pub use admin::*;
pub use authorities::*;
pub use register::*;
pub use manage::*;
