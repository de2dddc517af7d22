mod csrf;
mod flash;
mod method_override;
mod server;
