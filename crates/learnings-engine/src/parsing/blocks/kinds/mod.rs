pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;

pub use block_quote::{BlockQuote, Note};
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::ListItem;
