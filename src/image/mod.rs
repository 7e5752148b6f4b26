pub mod io;
pub mod mem2d;
pub mod traits;

pub use self::mem2d::Mem2D;
pub use self::traits::{ImageView, Rows};
