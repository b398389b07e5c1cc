mod client;

pub use client::DiscordClient;
