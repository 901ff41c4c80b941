mod backlight;

pub use backlight::{
    BacklightController, BacklightError, COMMAND_CHANNEL_SIZE, CommandChannel, CommandReceiver,
    CommandSender, send_command,
};
