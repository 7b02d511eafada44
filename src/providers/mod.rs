pub mod powerloom;

pub use powerloom::StatsFetcher;
