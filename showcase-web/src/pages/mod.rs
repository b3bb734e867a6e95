pub mod gallery;
pub mod not_found;
pub mod replica;

pub use gallery::GalleryPage;
pub use not_found::NotFoundPage;
pub use replica::ReplicaPage;
