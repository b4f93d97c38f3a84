pub mod error;
pub mod route;
pub mod theme;

pub use error::AppError;
pub use route::RouteContext;
pub use theme::Theme;
