//! Reusable view components

pub mod loading;
pub mod pie_chart;
pub mod shell;
pub mod toast;

pub use loading::Loading;
pub use pie_chart::UserPieChart;
pub use shell::Shell;
pub use toast::{ToastHost, ToastNotifier};
