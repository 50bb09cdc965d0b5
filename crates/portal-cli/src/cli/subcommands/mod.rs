mod clients;
mod kv;
mod permissions;
mod users;

pub use clients::ClientCommands;
pub use kv::KvCommands;
pub use permissions::PermissionCommands;
pub use users::UserCommands;
