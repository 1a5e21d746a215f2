pub mod banner;
pub mod input;
pub mod render;
pub mod scene;
pub mod terminal;

pub use banner::Banner;
pub use input::{parse_key, InputFrame, KeyMap};
pub use render::{render, Theme};
pub use scene::Scene;
pub use terminal::TerminalPort;
