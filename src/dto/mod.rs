pub mod car_dto;
pub mod part_dto;
pub mod service_dto;
