mod form;

pub use form::FormCommands;
