pub mod frame;
pub mod powerloom;
