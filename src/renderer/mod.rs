pub mod colours;
pub mod format;
pub mod widgets;
