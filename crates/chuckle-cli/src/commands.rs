pub mod categories;
pub mod invoke;
pub mod joke;
pub mod version;
