pub use super::backup::Entity as Backup;
pub use super::location::Entity as Location;
pub use super::node::Entity as Node;
pub use super::server::Entity as Server;
pub use super::user::Entity as User;
