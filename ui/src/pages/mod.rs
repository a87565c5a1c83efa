pub mod about;
pub mod blog;
pub mod blog_post;
pub mod home;
pub mod not_found;
pub mod portfolio;
pub mod portfolio_section;

pub use about::AboutPage;
pub use blog::BlogPage;
pub use blog_post::BlogPostPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use portfolio::PortfolioPage;
pub use portfolio_section::PortfolioSectionPage;
