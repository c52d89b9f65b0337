pub mod universe_refresh;
