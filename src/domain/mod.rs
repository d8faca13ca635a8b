//! Domain types: departments and their encoding, model input, money and
//! its display, and the trained model itself.

pub mod amount;
pub mod department;
pub mod encoder;
pub mod features;
pub mod formatter;
pub mod model;
pub mod ports;
