pub mod car_controller;
pub mod part_controller;
pub mod service_controller;
