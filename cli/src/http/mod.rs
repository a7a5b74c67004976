//! HTTP服务器模块 - 暴露解析服务API

pub mod index;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use models::*;
pub use server::*;
pub use state::*;
