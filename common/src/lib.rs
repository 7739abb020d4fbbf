pub mod faucet;
pub mod transaction;
pub mod wallet_backend;
