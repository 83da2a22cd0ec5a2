pub mod attendance;
pub mod audit;
pub mod error;
pub mod geofence;
pub mod id_generator;
pub mod password;
pub mod qr;
pub mod token;
