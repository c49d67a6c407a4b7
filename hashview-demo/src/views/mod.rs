pub mod chat;
pub mod friends;
pub mod home;
pub mod profile;

pub use chat::ChatView;
pub use friends::FriendsView;
pub use home::HomeView;
pub use profile::ProfileView;
