pub mod card;
pub mod preview;

pub use card::{CardLayout, CardSection, CardSize, ResultCard};
pub use preview::{ShowPreview, VideoPreview};
