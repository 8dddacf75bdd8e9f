pub(crate) mod slash_command;
