//! Widget library for the homedeck TUI

pub mod error_view;
pub mod header;
pub mod loading;
pub mod search_input;
pub mod search_results;
pub mod service_list;
pub mod sidebar;
pub mod status_bar;
pub mod tab_bar;
pub mod toast;

pub use error_view::ErrorView;
pub use header::MainHeader;
pub use loading::LoadingView;
pub use search_input::SearchPrompt;
pub use search_results::SearchResults;
pub use service_list::ServiceList;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use toast::ToastStack;
