use crate::cli::core::{closest, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::render;
use crate::domain::ALL_SENTINEL;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "list",
            "List transactions matching the current filter",
            "list",
            cmd_list,
        )
        .with_aliases(&["ls"]),
        CommandEntry::new(
            "filter",
            "Show or change the category filter",
            "filter [All|<category>]",
            cmd_filter,
        ),
        CommandEntry::new(
            "summary",
            "Show balance, income and expense totals",
            "summary",
            cmd_summary,
        )
        .with_aliases(&["totals"]),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let filter = context.view.filter();
    let visible = context.store.filtered(filter);
    let total = context.store.entries().len();
    output_section(render::list_title(filter, visible.len(), total));

    if visible.is_empty() {
        io::print_info(render::EMPTY_LIST_MESSAGE);
        io::print_info(render::EMPTY_LIST_HINT);
        return Ok(());
    }
    for entry in visible {
        io::print_info(render::entry_line(entry, context.currency_symbol()));
    }
    Ok(())
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let input = if args.is_empty() {
        if !context.is_interactive() {
            io::print_info(format!("Current filter: {}", context.view.filter()));
            return Ok(());
        }
        match choose_filter(context)? {
            Some(label) => label,
            None => return Ok(()),
        }
    } else {
        args.join(" ")
    };

    let ShellContext { store, view, .. } = context;
    match view.select_filter(&input, store.categories()) {
        Ok(filter) => {
            io::print_success(format!("Filter set to {}.", filter));
            Ok(())
        }
        Err(err) => {
            let mut message = err.to_string();
            if let Some(best) = closest(&input, store.categories().iter()) {
                message.push_str(&format!(" (did you mean `{}`?)", best));
            }
            Err(CommandError::InvalidArguments(message))
        }
    }
}

fn choose_filter(context: &ShellContext) -> Result<Option<String>, CommandError> {
    let mut options = vec![ALL_SENTINEL.to_string()];
    options.extend(context.store.categories().iter().map(str::to_string));
    let current = options
        .iter()
        .position(|label| label == context.view.filter().label())
        .unwrap_or(0);
    let choice = io::select_item(&context.theme, "Filter by category", &options, current)?;
    Ok(choice.map(|index| options[index].clone()))
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Summary");
    for line in render::summary_lines(&context.store.totals(), context.currency_symbol()) {
        io::print_info(line);
    }
    Ok(())
}
