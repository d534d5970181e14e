pub mod embeds;
pub mod events;
pub mod helper;
pub mod outbound;

pub use embeds::build_embed;
pub use events::{message_event, EventProxy};
pub use helper::{default_intents, CommandHelper};
pub use outbound::DiscordOutbound;
