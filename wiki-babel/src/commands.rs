//! Slash command catalog
//!
//! The commands offered by the editor's `/` menu. Each command carries the
//! text shown in the menu and an action; [`CommandAction::template`] yields the
//! node the action inserts, so front ends can stay thin.

use crate::grammar::normalize::CalloutType;
use crate::ir::nodes::{Callout, Node};
use serde::Serialize;

/// What a slash command does when chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum CommandAction {
    Heading { level: u8 },
    BulletList,
    OrderedList,
    TaskList,
    CodeBlock,
    Blockquote,
    HorizontalRule,
    Table { rows: u8, cols: u8 },
    /// Handled by the host's upload flow.
    ImageUpload,
    Callout {
        #[serde(rename = "type")]
        callout_type: CalloutType,
        placeholder: &'static str,
    },
}

impl CommandAction {
    /// The node inserted by this action, or `None` when the host handles it.
    pub fn template(&self) -> Option<Node> {
        let source = match *self {
            CommandAction::Heading { level } => {
                format!("{} Heading\n\n", "#".repeat(usize::from(level.clamp(1, 6))))
            }
            CommandAction::BulletList => "- \n\n".to_string(),
            CommandAction::OrderedList => "1. \n\n".to_string(),
            CommandAction::TaskList => "- [ ] \n\n".to_string(),
            CommandAction::CodeBlock => "```\n\n```\n\n".to_string(),
            CommandAction::Blockquote => "> \n\n".to_string(),
            CommandAction::HorizontalRule => "---\n\n".to_string(),
            CommandAction::Table { rows, cols } => table_scaffold(rows, cols),
            CommandAction::ImageUpload => return None,
            CommandAction::Callout {
                callout_type,
                placeholder,
            } => return Some(Node::Callout(Callout::new(callout_type, "", placeholder))),
        };
        Some(Node::markdown(source))
    }
}

/// Header row plus `rows - 1` body rows.
fn table_scaffold(rows: u8, cols: u8) -> String {
    let cols = usize::from(cols.max(1));
    let row = format!("|{}\n", "   |".repeat(cols));
    let mut table = row.clone();
    table.push_str(&format!("|{}\n", "---|".repeat(cols)));
    for _ in 1..rows.max(1) {
        table.push_str(&row);
    }
    table.push('\n');
    table
}

/// An entry in the `/` menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlashCommand {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub action: CommandAction,
}

const fn command(
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    action: CommandAction,
) -> SlashCommand {
    SlashCommand {
        title,
        description,
        icon,
        action,
    }
}

/// Every command, in menu order.
pub const SLASH_COMMANDS: &[SlashCommand] = &[
    command(
        "Heading 1",
        "Large section heading",
        "heading-1",
        CommandAction::Heading { level: 1 },
    ),
    command(
        "Heading 2",
        "Medium section heading",
        "heading-2",
        CommandAction::Heading { level: 2 },
    ),
    command(
        "Heading 3",
        "Small section heading",
        "heading-3",
        CommandAction::Heading { level: 3 },
    ),
    command(
        "Bullet List",
        "Create a bullet list",
        "list",
        CommandAction::BulletList,
    ),
    command(
        "Numbered List",
        "Create a numbered list",
        "list-ordered",
        CommandAction::OrderedList,
    ),
    command(
        "Task List",
        "Create a task list with checkboxes",
        "list-checks",
        CommandAction::TaskList,
    ),
    command(
        "Code Block",
        "Add a code block with syntax highlighting",
        "code",
        CommandAction::CodeBlock,
    ),
    command(
        "Blockquote",
        "Add a blockquote",
        "quote",
        CommandAction::Blockquote,
    ),
    command(
        "Horizontal Rule",
        "Add a horizontal divider",
        "minus",
        CommandAction::HorizontalRule,
    ),
    command(
        "Table",
        "Insert a table",
        "table",
        CommandAction::Table { rows: 3, cols: 3 },
    ),
    command(
        "Image",
        "Upload an image",
        "image",
        CommandAction::ImageUpload,
    ),
    command(
        "Note Callout",
        "Add a note callout block",
        "info",
        CommandAction::Callout {
            callout_type: CalloutType::Note,
            placeholder: "Your note here...",
        },
    ),
    command(
        "Tip Callout",
        "Add a tip callout block",
        "lightbulb",
        CommandAction::Callout {
            callout_type: CalloutType::Tip,
            placeholder: "Your tip here...",
        },
    ),
    command(
        "Warning Callout",
        "Add a warning callout block",
        "alert-triangle",
        CommandAction::Callout {
            callout_type: CalloutType::Caution,
            placeholder: "Your warning here...",
        },
    ),
    command(
        "Danger Callout",
        "Add a danger callout block",
        "alert-octagon",
        CommandAction::Callout {
            callout_type: CalloutType::Danger,
            placeholder: "Important warning here...",
        },
    ),
];

/// Commands whose title or description contains `query`, ignoring case.
///
/// An empty query returns the whole catalog.
pub fn filter_commands(query: &str) -> Vec<&'static SlashCommand> {
    if query.is_empty() {
        return SLASH_COMMANDS.iter().collect();
    }
    let query = query.to_lowercase();
    SLASH_COMMANDS
        .iter()
        .filter(|cmd| {
            cmd.title.to_lowercase().contains(&query)
                || cmd.description.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::markdown::serializer::render_node;

    fn titles(commands: &[&SlashCommand]) -> Vec<&'static str> {
        commands.iter().map(|c| c.title).collect()
    }

    #[test]
    fn test_empty_query_returns_all() {
        assert_eq!(filter_commands("").len(), SLASH_COMMANDS.len());
        assert_eq!(SLASH_COMMANDS.len(), 15);
    }

    #[test]
    fn test_filter_matches_title_and_description() {
        assert_eq!(
            titles(&filter_commands("CALLOUT")),
            vec!["Note Callout", "Tip Callout", "Warning Callout", "Danger Callout"]
        );
        assert_eq!(titles(&filter_commands("divider")), vec!["Horizontal Rule"]);
        assert!(filter_commands("nothing-matches").is_empty());
    }

    #[test]
    fn test_warning_command_inserts_caution() {
        let warning = filter_commands("warning callout")[0];
        let node = warning.action.template().unwrap();
        assert_eq!(render_node(&node), ":::caution\nYour warning here...\n:::\n\n");
    }

    #[test]
    fn test_image_command_has_no_template() {
        assert_eq!(CommandAction::ImageUpload.template(), None);
    }

    #[test]
    fn test_scaffolds() {
        assert_eq!(
            CommandAction::Heading { level: 2 }.template(),
            Some(Node::markdown("## Heading\n\n"))
        );
        assert_eq!(
            CommandAction::Table { rows: 3, cols: 3 }.template(),
            Some(Node::markdown(
                "|   |   |   |\n|---|---|---|\n|   |   |   |\n|   |   |   |\n\n"
            ))
        );
    }
}
