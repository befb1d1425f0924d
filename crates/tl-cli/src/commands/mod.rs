pub mod charts;
pub mod dispatch;
pub mod insight;
pub mod render;
pub mod theme;
