/// Shared helpers for external commands, platform detection and credentials
pub mod command;
pub mod password;
pub mod platform;

#[cfg(test)]
pub mod testing;
