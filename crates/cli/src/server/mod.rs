pub mod web;

pub use web::{bind, start_web_server};
