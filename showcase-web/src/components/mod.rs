pub mod gallery;
pub mod replica;
