use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Debug, Clone, Copy, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Mostra il menu principale")]
    Start,
}
