pub mod invoice;
pub mod user;
