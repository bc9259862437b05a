pub mod client;
pub mod rpc;
