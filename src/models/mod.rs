pub mod car;
pub mod part;
pub mod service;

pub use car::Car;
pub use part::Part;
pub use service::Service;
