pub mod dispatch;
pub mod shared;

mod component;
mod dashboard;
mod developer;
mod matrix;
mod module;
mod named;
mod release;
mod status;
mod ticket;
