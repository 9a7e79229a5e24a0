pub mod decide_logout;

pub use decide_logout::DecideLogoutUseCase;
