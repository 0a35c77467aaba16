mod page_frame;
pub use page_frame::PageFrame;

mod login;
pub use login::Login;

mod pages;
pub use pages::{Dashboard, Debts, Goals, Groups, Insights, Personal, Profile, Reports, Settings};
