//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod actor_repo;
pub mod award_repo;
pub mod country_repo;
pub mod dashboard_repo;
pub mod drama_repo;
pub mod genre_repo;
pub mod lookup_repo;
pub mod movie_repo;
pub mod review_repo;
pub mod user_repo;

pub use actor_repo::ActorRepo;
pub use award_repo::AwardRepo;
pub use country_repo::CountryRepo;
pub use dashboard_repo::DashboardRepo;
pub use drama_repo::DramaRepo;
pub use genre_repo::GenreRepo;
pub use lookup_repo::LookupRepo;
pub use movie_repo::MovieRepo;
pub use review_repo::ReviewRepo;
pub use user_repo::UserRepo;
