pub mod errors;
pub mod db;
pub mod contact;
pub mod phone;

#[cfg(test)]
mod tests;
