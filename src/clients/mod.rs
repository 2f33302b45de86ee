pub mod iupred_client;

pub use iupred_client::IupredClient;
