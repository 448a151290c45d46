pub mod vec;
pub mod mat;
pub use vec::FixedVector;
pub use mat::Matrix;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
