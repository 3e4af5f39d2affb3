use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change settings",
        "config <show|set <key> <value...>>",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.split_first() {
        None => show_config(context),
        Some((sub, rest)) => match sub.to_lowercase().as_str() {
            "show" => show_config(context),
            "set" => set_config(context, rest),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown config subcommand `{}`; use `show` or `set`",
                other
            ))),
        },
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    output_section("Configuration");
    let config = &context.config;
    io::print_info(format!("  File               : {}", context.config_manager.path().display()));
    io::print_info(format!("  currency_symbol    : {}", config.currency_symbol));
    io::print_info(format!(
        "  default_categories : {}",
        config.default_categories.join(", ")
    ));
    let data = context
        .store
        .storage_location()
        .unwrap_or_else(|| "in memory (not saved)".into());
    io::print_info(format!("  data               : {}", data));
    Ok(())
}

fn set_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [key, value @ ..] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: config set <key> <value...>".into(),
        ));
    };
    if value.is_empty() {
        return Err(CommandError::InvalidArguments(format!(
            "missing value for `{}`",
            key
        )));
    }

    let mut updated = context.config.clone();
    updated.set(key, &value.join(" "))?;
    context.config_manager.save(&updated)?;
    context.config = updated;
    io::print_success(format!("Saved `{}`.", key));
    if key.starts_with("default") {
        io::print_info(
            "Default categories apply only when no category record has been saved yet.",
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::{test_context, CliMode};
    use crate::config::ConfigManager;

    #[test]
    fn set_saves_and_updates_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut context = test_context(CliMode::Script);
        context.config_manager = ConfigManager::with_home_dir(dir.path());

        cmd_config(&mut context, &["set", "currency_symbol", "€"]).unwrap();
        assert_eq!(context.currency_symbol(), "€");

        let reloaded = context.config_manager.load().unwrap();
        assert_eq!(reloaded.currency_symbol, "€");
    }

    #[test]
    fn unknown_key_leaves_config_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut context = test_context(CliMode::Script);
        context.config_manager = ConfigManager::with_home_dir(dir.path());

        assert!(cmd_config(&mut context, &["set", "colour", "blue"]).is_err());
        assert!(cmd_config(&mut context, &["set", "currency_symbol"]).is_err());
        assert_eq!(context.currency_symbol(), "$");
        assert!(!context.config_manager.path().exists());
    }
}
