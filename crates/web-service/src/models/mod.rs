pub mod common;

pub mod err;

pub mod products;
