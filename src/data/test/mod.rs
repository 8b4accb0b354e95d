mod backup;
mod location;
mod node;
mod server;
