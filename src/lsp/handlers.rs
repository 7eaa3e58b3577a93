pub(crate) mod commands;
pub(crate) mod on_type;
