pub mod errors;
pub mod db;
pub mod bakery;
pub mod client;
pub mod client_bakery;
pub mod product;
pub mod product_bakery;

#[cfg(test)]
mod tests;
