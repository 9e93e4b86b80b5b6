mod help;
mod normal;

pub(super) use help::handle_help_key;
pub(super) use normal::handle_normal_key;
