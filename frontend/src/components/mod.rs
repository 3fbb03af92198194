pub mod blog_view_tracker;
pub mod download_button;
pub mod tracked_home;
