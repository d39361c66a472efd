mod not_found;
mod process;

pub use not_found::NotFoundPage;
pub use process::ProcessPage;
