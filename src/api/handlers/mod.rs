// API handlers - thin HTTP orchestration layer
// Handlers only deal with HTTP concerns:
// 1. Extract parameters from request
// 2. Call domain logic
// 3. Transform domain result (or error) to HTTP response

pub mod balance;
pub mod health;
pub mod retrieve;
pub mod store;

pub use balance::balance_handler;
pub use health::health_handler;
pub use retrieve::retrieve_handler;
pub use store::store_handler;
