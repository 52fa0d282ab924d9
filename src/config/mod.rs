//! 配置管理
//!
//! 配置来源按优先级从低到高：`config.toml`、`config.{APP_ENV}.toml`、
//! `MYSTERY_SHOPPER_*` 环境变量，以及少量常用环境变量（`DATABASE_URL` 等）。

mod r#impl;
mod structs;

pub use structs::*;
