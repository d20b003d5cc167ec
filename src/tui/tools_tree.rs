//! Foldable tool list: tui-tree-widget integration.
//!
//! ```text
//!  [v] Model Checkers (3)
//!      SPIN            Pour systèmes concurrents, langage Promela
//!        $ spin -a model.pml && gcc -o pan pan.c && ./pan
//!  [>] Exécution Symbolique (3)   ← collapsed
//! ```

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use tui_tree_widget::TreeItem;

use crate::content::catalog::{ToolCategory, ToolEntry, TOOL_CATEGORIES};

/// Identifier of a category node.
pub fn category_id(category: &ToolCategory) -> String {
    category.id.to_string()
}

/// Identifier of a tool node (unique within its category).
pub fn tool_id(tool: &ToolEntry) -> String {
    tool.name.to_string()
}

fn tool_item<'a>(tool: &ToolEntry) -> TreeItem<'a, String> {
    let label = Line::from(vec![
        Span::styled(
            tool.name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", tool.description),
            Style::default().fg(Color::Gray),
        ),
    ]);
    match tool.command {
        Some(cmd) => {
            let command = TreeItem::new_leaf(
                format!("{}$", tool.name),
                Span::styled(format!("$ {cmd}"), Style::default().fg(Color::Cyan)),
            );
            TreeItem::new(tool_id(tool), label, vec![command])
                .expect("single child has a unique id")
        }
        None => TreeItem::new_leaf(tool_id(tool), label),
    }
}

/// Build the tree: one node per category, one child per tool, commands
/// as grandchildren.
pub fn build_tools_tree<'a>() -> Vec<TreeItem<'a, String>> {
    TOOL_CATEGORIES
        .iter()
        .map(|category| {
            let children: Vec<TreeItem<'a, String>> =
                category.tools.iter().map(tool_item).collect();
            let label = format!("{} ({})", category.title, category.tools.len());
            TreeItem::new(category_id(category), label, children)
                .expect("tool names are unique within a category")
        })
        .collect()
}

/// Ids of every category node, for open-all on first render.
pub fn category_ids() -> impl Iterator<Item = String> {
    TOOL_CATEGORIES.iter().map(category_id)
}
