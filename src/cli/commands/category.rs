use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;

use super::transaction::{commit_pending_category, stage_new_category};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "category",
        "Add or list categories",
        "category <add <name...>|list>",
        cmd_category,
    )
    .with_aliases(&["cat"])]
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.split_first() {
        Some((sub, rest)) => match sub.to_lowercase().as_str() {
            "add" => add_category(context, rest),
            "list" | "ls" => {
                list_categories(context);
                Ok(())
            }
            other => Err(CommandError::InvalidArguments(format!(
                "unknown category subcommand `{}`; use `add` or `list`",
                other
            ))),
        },
        None => {
            list_categories(context);
            Ok(())
        }
    }
}

fn add_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() && context.is_interactive() {
        match stage_new_category(context)? {
            Some(name) => {
                if !commit_pending_category(context, &name) {
                    io::print_info(format!("Category `{}` already exists.", name));
                }
            }
            None => io::print_info("No category added."),
        }
        return Ok(());
    }

    let name = args.join(" ");
    let name = name.trim();
    if name.is_empty() {
        return Err(CommandError::InvalidArguments(
            "category name must not be blank".into(),
        ));
    }
    if context.store.add_category(name) {
        io::print_success(format!("Category `{}` added.", name));
    } else {
        io::print_info(format!("Category `{}` already exists.", name));
    }
    Ok(())
}

fn list_categories(context: &ShellContext) {
    let categories = context.store.categories();
    output_section(format!("Categories ({})", categories.len()));
    for name in categories {
        let count = context
            .store
            .entries()
            .iter()
            .filter(|entry| entry.category == name.as_str())
            .count();
        io::print_info(format!("  {:<16} {} transaction(s)", name, count));
    }
}
