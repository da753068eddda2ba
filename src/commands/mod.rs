pub mod assume;

pub use assume::AssumeCommand;
