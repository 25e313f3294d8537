mod analytics;
mod chat;
mod home;
mod modules;
mod topics;

pub use analytics::Analytics;
pub use chat::Chat;
pub use home::Home;
pub use modules::Modules;
pub use topics::Topics;
