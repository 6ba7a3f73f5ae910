pub mod codec;
pub mod db;
pub mod basket {
    pub mod entity;
    pub mod repository;
}
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
