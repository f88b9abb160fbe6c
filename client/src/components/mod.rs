pub mod scroll_to_top;
pub mod success_toast;
