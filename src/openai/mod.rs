mod core;
pub use self::core::{Message, OpenAiClient, Role, completion};
