pub mod history;
pub mod live;
