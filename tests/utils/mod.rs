pub mod factories;
pub mod local_server;
pub mod transports;
