pub mod controller;
pub mod events;
pub mod model;
pub mod router;
pub mod service;
