pub mod health;
pub mod saved_screen;
pub mod screener;
pub mod stock;
pub mod template;
