pub mod car_repository;
pub mod part_repository;
pub mod service_repository;

pub use car_repository::CarRepository;
pub use part_repository::PartRepository;
pub use service_repository::ServiceRepository;
