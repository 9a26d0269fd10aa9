mod dashboard;
pub use dashboard::DashboardView;

mod chat;
pub use chat::ChatView;

mod documents;
pub use documents::DocumentsView;

mod get_started;
pub use get_started::GetStartedView;

mod login;
pub use login::LoginView;

mod profile;
pub use profile::ProfileView;
