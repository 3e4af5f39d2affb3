use crate::cli::core::{closest, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::currency::{format_date, format_signed};
use crate::domain::{parse_amount, parse_optional_date, EntryDraft, EntryId, EntryKind};

const ADD_USAGE: &str = "add <amount> <income|expense> <category> [date|-] [description...]";
const NEW_CATEGORY_OPTION: &str = "+ New category";
const TODAY_PLACEHOLDER: &str = "-";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record an income or expense", ADD_USAGE, cmd_add),
        CommandEntry::new("delete", "Delete a transaction by id", "delete [id]", cmd_delete)
            .with_aliases(&["rm"]),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = if args.is_empty() && context.is_interactive() {
        match run_add_wizard(context)? {
            Some(draft) => draft,
            None => return Ok(()),
        }
    } else {
        draft_from_args(args)?
    };
    record_draft(context, draft)
}

/// Registers a staged category the draft refers to, then records the entry.
fn record_draft(context: &mut ShellContext, draft: EntryDraft) -> CommandResult {
    commit_pending_category(context, &draft.category);
    ensure_known_category(context, &draft.category)?;

    let symbol = context.currency_symbol().to_string();
    let entry = context.store.add_entry(draft)?;
    io::print_success(format!(
        "Added {} {} ({}) on {} [id {}]",
        entry.kind,
        format_signed(entry.amount, entry.kind, &symbol),
        entry.category,
        format_date(entry.date),
        entry.id
    ));
    Ok(())
}

fn draft_from_args(args: &[&str]) -> Result<EntryDraft, CommandError> {
    let [amount, kind, category, rest @ ..] = args else {
        return Err(CommandError::InvalidArguments(format!("usage: {}", ADD_USAGE)));
    };
    let kind: EntryKind = kind.parse()?;
    let mut draft = EntryDraft::new(*amount, kind, *category);
    if let Some((date, description)) = rest.split_first() {
        if *date != TODAY_PLACEHOLDER {
            draft = draft.with_date(*date);
        }
        draft = draft.with_description(description.join(" "));
    }
    Ok(draft)
}

fn ensure_known_category(context: &ShellContext, category: &str) -> CommandResult {
    let categories = context.store.categories();
    if categories.contains(category) {
        return Ok(());
    }
    let mut message = format!("unknown category `{}`", category);
    if let Some(best) = closest(category, categories.iter()) {
        message.push_str(&format!(" (did you mean `{}`?)", best));
    } else {
        message.push_str("; add it first with `category add <name>`");
    }
    Err(CommandError::InvalidArguments(message))
}

/// Collects a draft field by field. A name typed after "+ New category" is only staged;
/// it is registered together with the entry.
fn run_add_wizard(context: &mut ShellContext) -> Result<Option<EntryDraft>, CommandError> {
    let amount = io::prompt_validated(&context.theme, "Amount", None, |value| {
        parse_amount(value).map(|_| ()).map_err(|err| err.to_string())
    })?;

    let kinds = [EntryKind::Income, EntryKind::Expense];
    let Some(kind_index) = io::select_item(&context.theme, "Type", &kinds, 0)? else {
        return Ok(None);
    };

    let mut options: Vec<String> = context.store.categories().as_slice().to_vec();
    options.push(NEW_CATEGORY_OPTION.to_string());
    let Some(category_index) = io::select_item(&context.theme, "Category", &options, 0)? else {
        return Ok(None);
    };
    let category = if category_index == options.len() - 1 {
        match stage_new_category(context)? {
            Some(name) => name,
            None => return Ok(None),
        }
    } else {
        options[category_index].clone()
    };

    let today = context.store.today().format("%Y-%m-%d").to_string();
    let date = io::prompt_validated(&context.theme, "Date", Some(&today), |value| {
        parse_optional_date(value)
            .map(|_| ())
            .map_err(|err| err.to_string())
    })?;
    let description = io::prompt_text(&context.theme, "Description (optional)", None, true)?;

    Ok(Some(
        EntryDraft::new(amount, kinds[kind_index], category)
            .with_date(date)
            .with_description(description),
    ))
}

/// Asks for a new category name, pre-filled with text staged by an earlier, unfinished
/// attempt. The trimmed name stays staged in the view until it is committed.
pub(crate) fn stage_new_category(
    context: &mut ShellContext,
) -> Result<Option<String>, CommandError> {
    let initial = context.view.pending_category().map(str::to_string);
    let name = io::prompt_text(
        &context.theme,
        "New category name",
        initial.as_deref(),
        true,
    )?;
    let trimmed = name.trim();
    if trimmed.is_empty() {
        context.view.take_pending_category();
        return Ok(None);
    }
    context.view.set_pending_category(trimmed);
    Ok(Some(trimmed.to_string()))
}

/// Adds the staged category when `category` names it. Other categories leave it staged.
pub(crate) fn commit_pending_category(context: &mut ShellContext, category: &str) -> bool {
    if context.view.pending_category() != Some(category) {
        return false;
    }
    let Some(name) = context.view.take_pending_category() else {
        return false;
    };
    let added = context.store.add_category(&name);
    if added {
        io::print_success(format!("Category `{}` added.", name));
    }
    added
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = match args.first() {
        Some(raw) => raw.parse::<EntryId>().map_err(|_| {
            CommandError::InvalidArguments(format!("transaction id `{}` must be numeric", raw))
        })?,
        None if context.is_interactive() => match select_entry(context)? {
            Some(id) => id,
            None => return Ok(()),
        },
        None => {
            return Err(CommandError::InvalidArguments("usage: delete <id>".into()));
        }
    };

    match context.store.delete_entry(id) {
        Some(entry) => io::print_success(format!(
            "Deleted {} {} ({}) [id {}]",
            entry.kind,
            format_signed(entry.amount, entry.kind, context.currency_symbol()),
            entry.category,
            entry.id
        )),
        None => io::print_info(format!("No transaction with id {}.", id)),
    }
    Ok(())
}

fn select_entry(context: &ShellContext) -> Result<Option<EntryId>, CommandError> {
    let visible = context.store.filtered(context.view.filter());
    if visible.is_empty() {
        io::print_info("No transactions to delete.");
        return Ok(None);
    }
    let labels: Vec<String> = visible
        .iter()
        .map(|entry| {
            format!(
                "{} {} {} {}",
                format_date(entry.date),
                entry.category,
                format_signed(entry.amount, entry.kind, context.currency_symbol()),
                entry.description
            )
        })
        .collect();
    let choice = io::select_item(&context.theme, "Select a transaction to delete", &labels, 0)?;
    Ok(choice.map(|index| visible[index].id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::{test_context, CliMode};
    use crate::domain::DraftError;

    #[test]
    fn args_build_a_draft() {
        let draft = draft_from_args(&["12.50", "expense", "Food", "2024-02-03", "Lunch", "out"])
            .unwrap();
        assert_eq!(draft.amount, "12.50");
        assert_eq!(draft.kind, EntryKind::Expense);
        assert_eq!(draft.date, "2024-02-03");
        assert_eq!(draft.description, "Lunch out");
    }

    #[test]
    fn dash_keeps_default_date() {
        let draft = draft_from_args(&["1", "income", "Food", "-"]).unwrap();
        assert_eq!(draft.date, "");
    }

    #[test]
    fn missing_fields_report_usage() {
        let err = draft_from_args(&["1", "income"]).unwrap_err();
        assert!(err.to_string().contains("usage: add"));
        let err = draft_from_args(&["1", "gift", "Food"]).unwrap_err();
        assert!(matches!(err, CommandError::Draft(DraftError::UnknownKind(_))));
    }

    #[test]
    fn unknown_category_is_rejected_with_suggestion() {
        let mut context = test_context(CliMode::Script);
        let err = cmd_add(&mut context, &["5", "expense", "Fod"]).unwrap_err();
        assert!(err.to_string().contains("did you mean `Food`"));
        assert!(context.store.entries().is_empty());
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let mut context = test_context(CliMode::Script);
        let err = cmd_add(&mut context, &["lots", "expense", "Food"]).unwrap_err();
        assert!(matches!(err, CommandError::Ledger(_)));
        assert!(context.store.entries().is_empty());
    }

    #[test]
    fn delete_by_id_is_idempotent() {
        let mut context = test_context(CliMode::Script);
        cmd_add(&mut context, &["5", "expense", "Food"]).unwrap();
        let id = context.store.entries()[0].id.to_string();
        cmd_delete(&mut context, &[id.as_str()]).unwrap();
        cmd_delete(&mut context, &[id.as_str()]).unwrap();
        assert!(context.store.entries().is_empty());
        assert!(cmd_delete(&mut context, &["abc"]).is_err());
        assert!(cmd_delete(&mut context, &[]).is_err());
    }

    #[test]
    fn staged_category_is_registered_with_the_entry() {
        let mut context = test_context(CliMode::Script);
        context.view.set_pending_category("Gifts");
        record_draft(&mut context, EntryDraft::new("25", EntryKind::Income, "Gifts")).unwrap();

        assert!(context.store.categories().contains("Gifts"));
        assert_eq!(context.store.entries()[0].category, "Gifts");
        assert!(context.view.pending_category().is_none());
    }

    #[test]
    fn staged_category_survives_an_unrelated_entry() {
        let mut context = test_context(CliMode::Script);
        context.view.set_pending_category("Gifts");
        record_draft(&mut context, EntryDraft::new("5", EntryKind::Expense, "Food")).unwrap();

        assert_eq!(context.view.pending_category(), Some("Gifts"));
        assert!(!context.store.categories().contains("Gifts"));
        assert!(!commit_pending_category(&mut context, "Food"));
        assert!(commit_pending_category(&mut context, "Gifts"));
        assert!(context.store.categories().contains("Gifts"));
    }
}
