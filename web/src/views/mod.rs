mod components;

mod buildings;
pub use buildings::Buildings;

mod coming_soon;
pub use coming_soon::ComingSoon;

mod dashboard;
pub use dashboard::Dashboard;

mod login;
pub use login::Login;

mod monitoring;
pub use monitoring::Monitoring;

mod settings;
pub use settings::Settings;

mod users;
pub use users::Users;

mod visitors;
pub use visitors::Visitors;
